//! Bilingual message table
//!
//! The engine emits stable localization keys; this table resolves them to
//! es-MX or en-US strings for the terminal. Amounts and dates are formatted
//! separately and appended by the report, so these strings carry no
//! placeholders.

/// Output language for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Lang {
    /// Spanish (Mexico)
    Es,
    /// English (US)
    En,
}

/// Resolve a message key. Unknown keys fall back to the key itself so a
/// missing table entry is visible instead of a crash.
pub fn message(key: &str, lang: Lang) -> &str {
    let resolved = match (key, lang) {
        ("error.destination.unknown", Lang::Es) => "Destino no disponible",
        ("error.destination.unknown", Lang::En) => "Destination not available",
        ("error.adults.minimum", Lang::Es) => "Se requiere al menos un adulto",
        ("error.adults.minimum", Lang::En) => "At least one adult is required",
        ("error.deposit.positive", Lang::Es) => "El ahorro semanal debe ser mayor a cero",
        ("error.deposit.positive", Lang::En) => "The weekly deposit must be greater than zero",
        ("error.salary.positive", Lang::Es) => "El salario mensual debe ser mayor a cero",
        ("error.salary.positive", Lang::En) => "The monthly salary must be greater than zero",

        ("dates.checkout_not_after_checkin", Lang::Es) => {
            "La fecha de check-out debe ser posterior a la de check-in"
        }
        ("dates.checkout_not_after_checkin", Lang::En) => {
            "The check-out date must be after the check-in date"
        }
        ("dates.stay_too_short", Lang::Es) => "La estadía es más corta que el mínimo permitido",
        ("dates.stay_too_short", Lang::En) => "The stay is shorter than the allowed minimum",
        ("dates.stay_too_long", Lang::Es) => "La estadía es más larga que el máximo permitido",
        ("dates.stay_too_long", Lang::En) => "The stay is longer than the allowed maximum",
        ("dates.before_earliest", Lang::Es) => {
            "La fecha de check-in es anterior a la primera fecha disponible"
        }
        ("dates.before_earliest", Lang::En) => {
            "The check-in date is before the earliest available date"
        }
        ("dates.guaranteed_alternate", Lang::Es) => {
            "Guardamos tu preferencia; tu fecha de salida garantizada es"
        }
        ("dates.guaranteed_alternate", Lang::En) => {
            "We kept your preference; your guaranteed departure date is"
        }

        _ => "",
    };

    if resolved.is_empty() { key } else { resolved }
}
