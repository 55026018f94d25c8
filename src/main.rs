use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Datelike, Local};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use danishholidays::configuration::Configuration;
use danishholidays::holiday::holidayrecord::HolidayRecord;
use danishholidays::time::calendar::danishcalendar::DanishCalendar;
use danishholidays::time::calendar::holidaycalendar::HolidayCalendar;

/// Danish holidays and special days for one year.
#[derive(Parser)]
#[command(name = "danishholidays", version)]
struct Cli {
    /// Year to list; defaults to the current year
    year: Option<i32>,

    /// JSON configuration file
    #[arg(long, env = "DANISH_HOLIDAYS_CONFIG")]
    config: Option<PathBuf>,

    /// Print the records as JSON
    #[arg(long)]
    json: bool,

    /// Also print the number of business days per month
    #[arg(long)]
    business_days: bool
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_table(records: &[HolidayRecord]) {
    println!("  {:<12} {:<12} {}", "Dato", "Type", "Navn");
    for record in records {
        println!("  {:<12} {:<12} {}", record.date(), record.category().label(), record.title());
    }
    println!("I alt: {} dage", records.len());
}

fn print_business_days(calendar: &DanishCalendar, year: i32) -> Result<(), Box<dyn std::error::Error>> {
    let holiday_set = calendar.get_holiday_set(year)?;
    println!("  {:<8} {}", "Måned", "Arbejdsdage");
    for month in 1..=12u32 {
        let first = calendar.first_business_day_of_month(year, month)?;
        let last = calendar.last_business_day_of_month(year, month)?;
        let count = first
            .iter_days()
            .take_while(|d| *d <= last)
            .filter(|d| !holiday_set.contains(d))
            .count();
        println!("  {:<8} {}", month, count);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let configuration = match &cli.config {
        Some(path) => Configuration::from_reader(path)?,
        None => Configuration::new()
    };
    let engine = configuration.holiday_engine()?;
    let year = cli.year.unwrap_or_else(|| Local::now().year());
    let records = engine.compute_holidays(year)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        print_table(&records);
    }

    if cli.business_days {
        let calendar = DanishCalendar::new(engine);
        print_business_days(&calendar, year)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
