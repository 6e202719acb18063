//! Command-line sunrise, solar noon and sunset report.

use anyhow::{Context, Result};
use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone};
use clap::Parser;
use log::debug;
use solar_transit::error::{check_coordinates, check_elevation};
use solar_transit::{ChronoClock, CivilDate, SolarCalculator};

/// Hannover, Germany: 52° 23' 12" N
const DEFAULT_LATITUDE: f64 = 52.386667;
/// Hannover, Germany: 9° 41' 52" E
const DEFAULT_LONGITUDE: f64 = 9.697778;

#[derive(Debug, Parser)]
#[command(
    name = "solar-transit",
    version,
    about = "Print sunrise, solar noon and sunset for a date and location"
)]
struct Cli {
    /// Date in ISO-8601 format (YYYY-MM-DD); defaults to today
    date: Option<String>,

    /// Latitude in degrees, north positive
    #[arg(long, default_value_t = DEFAULT_LATITUDE, allow_hyphen_values = true)]
    latitude: f64,

    /// Longitude in degrees, east positive
    #[arg(long, default_value_t = DEFAULT_LONGITUDE, allow_hyphen_values = true)]
    longitude: f64,

    /// Observer elevation in metres above the surrounding ground
    #[arg(long, default_value_t = 0.0)]
    elevation: f64,

    /// Fixed UTC offset in hours instead of the system time zone
    #[arg(long, value_name = "HOURS", allow_hyphen_values = true)]
    utc_offset: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let date = match cli.date.as_deref() {
        Some(text) => parse_date(text)?,
        None => CivilDate::from(chrono::Local::now().date_naive()),
    };

    check_coordinates(cli.latitude, cli.longitude).context("Invalid location")?;
    check_elevation(cli.elevation).context("Invalid location")?;
    let calculator = SolarCalculator::new(cli.latitude, cli.longitude, cli.elevation);
    debug!("calculating {date} for {:?}", calculator.location());

    match cli.utc_offset {
        Some(hours) => {
            let clock = ChronoClock::new(fixed_offset(hours)?);
            print_report(&calculator, date, &clock)
        }
        None => print_report(&calculator, date, &ChronoClock::local()),
    }
}

fn parse_date(text: &str) -> Result<CivilDate> {
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{text}', expected YYYY-MM-DD"))?;
    Ok(CivilDate::from(date))
}

fn fixed_offset(hours: f64) -> Result<FixedOffset> {
    anyhow::ensure!(hours.is_finite(), "Invalid UTC offset: {hours} hours");
    let seconds = (hours * 3600.0).round();
    anyhow::ensure!(
        seconds.abs() < 86_400.0,
        "Invalid UTC offset: {hours} hours (must be within ±24 hours)"
    );
    FixedOffset::east_opt(seconds as i32)
        .with_context(|| format!("Invalid UTC offset: {hours} hours"))
}

fn print_report<Tz: TimeZone>(
    calculator: &SolarCalculator,
    date: CivilDate,
    clock: &ChronoClock<Tz>,
) -> Result<()> {
    let heading = NaiveDate::try_from(date).context("Date is outside the supported range")?;
    println!("{}", heading.format("%a %b %-d %Y"));
    println!("sunrise: {}", format_time(calculator.sunrise_on(date, clock)));
    println!("noon:    {}", format_time(calculator.noon_on(date, clock)));
    println!("sunset:  {}", format_time(calculator.sunset_on(date, clock)));
    Ok(())
}

fn format_time(time: Option<NaiveTime>) -> String {
    time.map_or_else(|| "--".to_string(), |t| t.format("%H:%M:%S").to_string())
}
