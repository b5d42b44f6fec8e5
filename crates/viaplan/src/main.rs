use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;
use jiff::civil::Date;
use jiff::tz::TimeZone;

use viaplan::messages::{Lang, message};
use viaplan::provider::{ConfigProvider, FileStore};
use viaplan::record::{JsonlSink, PlanSink, SimulationRecord};
use viaplan::report::{render_date_check, render_plan};
use viaplan::init_logging;
use viaplan_core::dates::validate_dates;
use viaplan_core::model::{DateRejectionMode, DestinationId, PlanInput};
use viaplan_core::compute_vacation_plan;

/// Policy for a check-in earlier than the earliest feasible date.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum DatePolicy {
    /// Reject the selection outright
    Reject,
    /// Accept it and report the guaranteed alternative date
    SuggestAlternate,
}

impl From<DatePolicy> for DateRejectionMode {
    fn from(policy: DatePolicy) -> Self {
        match policy {
            DatePolicy::Reject => DateRejectionMode::Reject,
            DatePolicy::SuggestAlternate => DateRejectionMode::SuggestAlternate,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "viaplan")]
#[command(about = "Vacation savings credit simulator")]
struct Args {
    /// Destination slug, e.g. "cancun"
    #[arg(long)]
    destination: String,

    /// Intended travel date (YYYY-MM-DD); its month drives seasonal pricing
    #[arg(long)]
    travel_date: Date,

    #[arg(long, default_value_t = 2)]
    adults: u32,

    #[arg(long, default_value_t = 0)]
    children: u32,

    /// Monthly salary in pesos
    #[arg(long)]
    salary: f64,

    /// Weekly deposit in pesos
    #[arg(long)]
    weekly_deposit: f64,

    /// Chosen check-in date; requires --check-out
    #[arg(long, requires = "check_out")]
    check_in: Option<Date>,

    /// Chosen check-out date; requires --check-in
    #[arg(long, requires = "check_in")]
    check_out: Option<Date>,

    #[arg(long, value_enum, default_value_t = DatePolicy::SuggestAlternate)]
    date_policy: DatePolicy,

    /// Path to the pricing config JSON (default: {data_dir}/pricing-config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append a simulation record (JSON lines) to this file
    #[arg(long)]
    record: Option<PathBuf>,

    /// Attribution tag for the record, repeatable (key=value)
    #[arg(long = "tag", value_parser = parse_tag)]
    tags: Vec<(String, String)>,

    /// Report language
    #[arg(long, value_enum, default_value_t = Lang::Es)]
    lang: Lang,

    /// Path to the data directory (default: ~/.viaplan/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn parse_tag(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got {raw:?}"))
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".viaplan")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level);

    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| data_dir.join("pricing-config.json"));

    let mut provider = ConfigProvider::new(FileStore::new(config_path));
    let config = provider.snapshot();

    // All engine date arithmetic is on civil dates; "today" is the current
    // UTC calendar day.
    let today = jiff::Timestamp::now().to_zoned(TimeZone::UTC).date();

    let input = PlanInput {
        destination_id: DestinationId::from(args.destination.as_str()),
        travel_date: args.travel_date,
        adults: args.adults,
        children: args.children,
        monthly_salary: args.salary,
        weekly_deposit: args.weekly_deposit,
    };

    let plan = compute_vacation_plan(&input, &config, today)
        .map_err(|err| eyre!("{} [{}]", message(err.message_key(), args.lang), err.reason_code()))?;

    print!("{}", render_plan(&plan, args.lang));

    if let (Some(check_in), Some(check_out)) = (args.check_in, args.check_out) {
        let check = validate_dates(
            check_in,
            check_out,
            plan.savings.earliest_check_in,
            config.package_duration.min_nights,
            config.package_duration.max_nights,
            args.date_policy.into(),
        );
        print!("{}", render_date_check(&check, args.lang));
    }

    if let Some(record_path) = args.record {
        let record = SimulationRecord::new(
            input,
            plan,
            jiff::Timestamp::now(),
            args.tags.into_iter().collect::<BTreeMap<_, _>>(),
        );
        JsonlSink::new(record_path).record(&record)?;
    }

    Ok(())
}
