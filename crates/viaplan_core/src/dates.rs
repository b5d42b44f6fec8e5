//! Check-in/check-out validation
//!
//! Rules run in a fixed order and the first failure wins:
//! 1. check-out strictly after check-in
//! 2. nights within the configured package duration
//! 3. check-in on or after the earliest feasible date
//!
//! Rule 3 honors an explicit [`DateRejectionMode`]: the product shipped both a
//! variant that rejects an early check-in and one that accepts it while
//! reporting the earliest feasible date as the guaranteed alternative. The
//! caller must pick; there is no hidden default.

use jiff::civil::Date;

use crate::date_math;
use crate::model::{DateCheck, DateRejectionMode};

pub const MSG_CHECKOUT_NOT_AFTER_CHECKIN: &str = "dates.checkout_not_after_checkin";
pub const MSG_STAY_TOO_SHORT: &str = "dates.stay_too_short";
pub const MSG_STAY_TOO_LONG: &str = "dates.stay_too_long";
pub const MSG_BEFORE_EARLIEST: &str = "dates.before_earliest";
pub const MSG_GUARANTEED_ALTERNATE: &str = "dates.guaranteed_alternate";

/// Validate a user-selected check-in/check-out pair.
pub fn validate_dates(
    check_in: Date,
    check_out: Date,
    earliest_check_in: Date,
    min_nights: i32,
    max_nights: i32,
    mode: DateRejectionMode,
) -> DateCheck {
    let nights = date_math::nights_between(check_in, check_out);

    if nights <= 0 {
        return DateCheck {
            valid: false,
            nights,
            message_key: Some(MSG_CHECKOUT_NOT_AFTER_CHECKIN),
            guaranteed_check_in: None,
        };
    }
    if nights < min_nights {
        return DateCheck {
            valid: false,
            nights,
            message_key: Some(MSG_STAY_TOO_SHORT),
            guaranteed_check_in: None,
        };
    }
    if nights > max_nights {
        return DateCheck {
            valid: false,
            nights,
            message_key: Some(MSG_STAY_TOO_LONG),
            guaranteed_check_in: None,
        };
    }

    if check_in < earliest_check_in {
        return match mode {
            DateRejectionMode::Reject => DateCheck {
                valid: false,
                nights,
                message_key: Some(MSG_BEFORE_EARLIEST),
                guaranteed_check_in: None,
            },
            // The user's preference stands; the guaranteed date rides along.
            DateRejectionMode::SuggestAlternate => DateCheck {
                valid: true,
                nights,
                message_key: Some(MSG_GUARANTEED_ALTERNATE),
                guaranteed_check_in: Some(earliest_check_in),
            },
        };
    }

    DateCheck {
        valid: true,
        nights,
        message_key: None,
        guaranteed_check_in: None,
    }
}
