use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};
use miqat_config::Config;
use miqat_core::{
    AsrJuristicMethod, CalculationMethod, Event, EventRule, HighLatitudeMethod, depression_angle_at,
};
use miqat_service::{
    PrayerTimesRangeRequest, PrayerTimesRequest, PrayerTimesResponse, prayer_times_for_day,
    prayer_times_for_range,
};
use miqat_time::{DstRule, local_midnight, parse_clock, parse_date};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "miqat", about = "Islamic prayer times", version)]
struct Cli {
    /// TOML file with default location, method and zone (default: $MIQAT_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prayer times for one date
    Day {
        /// Date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
        #[command(flatten)]
        site: SiteArgs,
        #[command(flatten)]
        calc: CalcArgs,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Prayer times for every date in an inclusive range (at most 365 days)
    Range {
        /// First date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        from: NaiveDate,
        /// Last date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        to: NaiveDate,
        #[command(flatten)]
        site: SiteArgs,
        #[command(flatten)]
        calc: CalcArgs,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Depression of the sun below the horizon at a local clock time
    Angle {
        /// Date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
        /// Local clock time (HH:MM)
        #[arg(long, value_parser = parse_clock)]
        time: NaiveTime,
        #[command(flatten)]
        site: SiteArgs,
    },
    /// List calculation methods and their parameters
    Methods,
}

/// Location and zone. Unset values come from the config file.
#[derive(Args, Debug, Default)]
struct SiteArgs {
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: Option<f64>,
    /// UTC offset in hours; with --dst this is the daylight-time offset
    /// and one hour is backed out on standard-time dates
    #[arg(long, allow_negative_numbers = true)]
    tz: Option<f64>,
    /// Daylight-saving rule: none, us, eu
    #[arg(long)]
    dst: Option<DstRule>,
}

/// Calculation conventions. Unset values come from the config file.
#[derive(Args, Debug, Default)]
struct CalcArgs {
    /// Jafari, Karachi, ISNA, MWL, Makkah, Egypt, Custom (default MWL)
    #[arg(long)]
    method: Option<CalculationMethod>,
    /// Shafii (default) or Hanafi
    #[arg(long)]
    asr: Option<AsrJuristicMethod>,
    /// None (default), MidNight, OneSeventh, AngleBased
    #[arg(long)]
    high_lat: Option<HighLatitudeMethod>,
    /// Minutes added to Dhuhr after solar transit
    #[arg(long, allow_negative_numbers = true)]
    dhuhr_minutes: Option<f64>,
}

/// A required value was given neither on the command line nor in the config.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MissingValue {
    flag: &'static str,
    key: &'static str,
}

impl Display for MissingValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "missing {} (or `{}` in the config file)", self.flag, self.key)
    }
}

impl Error for MissingValue {}

fn require<T>(value: Option<T>, flag: &'static str, key: &'static str) -> Result<T, MissingValue> {
    value.ok_or(MissingValue { flag, key })
}

/// Merge command-line values over config values into a request.
fn build_request(
    site: &SiteArgs,
    calc: &CalcArgs,
    config: &Config,
) -> Result<PrayerTimesRequest, MissingValue> {
    let latitude = require(
        site.lat.or(config.location.latitude),
        "--lat",
        "location.latitude",
    )?;
    let longitude = require(
        site.lon.or(config.location.longitude),
        "--lon",
        "location.longitude",
    )?;
    let time_zone = require(site.tz.or(config.zone.timezone), "--tz", "zone.timezone")?;

    let method = calc
        .method
        .or(config.calculation.method)
        .unwrap_or(CalculationMethod::Mwl);
    let asr = calc.asr.or(config.calculation.asr).unwrap_or_default();

    Ok(PrayerTimesRequest {
        high_latitude_adjustment_method: calc
            .high_lat
            .or(config.calculation.high_latitude)
            .unwrap_or_default(),
        dhuhr_minutes: calc
            .dhuhr_minutes
            .or(config.calculation.dhuhr_minutes)
            .unwrap_or(0.0),
        dst: site.dst.or(config.zone.dst).unwrap_or_default(),
        ..PrayerTimesRequest::new(time_zone, latitude, longitude, method, asr)
    })
}

fn clock(t: Option<NaiveTime>) -> String {
    t.map_or_else(|| "--:--".to_string(), |t| t.format("%H:%M").to_string())
}

fn response_times(r: &PrayerTimesResponse) -> [Option<NaiveTime>; 7] {
    [r.fajr, r.sunrise, r.dhuhr, r.asr, r.sunset, r.maghrib, r.isha]
}

fn print_day(r: &PrayerTimesResponse) {
    println!("{}", r.date.date_naive());
    for (event, t) in Event::ALL.iter().zip(response_times(r)) {
        println!("  {:<8} {}", event.name(), clock(t));
    }
}

fn print_range_header() {
    let names: Vec<String> = Event::ALL.iter().map(|e| format!("{:<7}", e.name())).collect();
    println!("{:<10}  {}", "Date", names.join(" ").trim_end());
}

fn print_range_row(r: &PrayerTimesResponse) {
    let times: Vec<String> = response_times(r)
        .into_iter()
        .map(|t| format!("{:<7}", clock(t)))
        .collect();
    println!("{}  {}", r.date.date_naive(), times.join(" ").trim_end());
}

fn describe_rule(rule: EventRule, reference: &str) -> String {
    match rule {
        EventRule::Angle(a) => format!("{a:.1} deg"),
        EventRule::MinutesAfter(m) => format!("{reference} + {m:.0} min"),
    }
}

fn print_methods() {
    println!("{:<8}  {:<9}  {:<16}  {}", "Method", "Fajr", "Maghrib", "Isha");
    for m in CalculationMethod::ALL {
        let p = m.params();
        println!(
            "{:<8}  {:<9}  {:<16}  {}",
            m.name(),
            format!("{:.1} deg", p.fajr_angle),
            describe_rule(p.maghrib, "sunset"),
            describe_rule(p.isha, "maghrib"),
        );
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    // `methods` needs no config, so a broken file must not block it
    let load_config = || Config::resolve(cli.config.as_deref());

    match cli.command {
        Commands::Day {
            date,
            site,
            calc,
            json,
        } => {
            let request = build_request(&site, &calc, &load_config()?)?;
            debug!(?request, %date, "day");
            let r = prayer_times_for_day(date, &request)?;
            if json {
                print_json(&r)?;
            } else {
                print_day(&r);
            }
        }

        Commands::Range {
            from,
            to,
            site,
            calc,
            json,
        } => {
            let day = build_request(&site, &calc, &load_config()?)?;
            let request = PrayerTimesRangeRequest {
                from_date: from,
                to_date: to,
                day,
            };
            let r = prayer_times_for_range(&request)?;
            if json {
                print_json(&r)?;
            } else {
                print_range_header();
                for row in &r.prayer_times {
                    print_range_row(row);
                }
            }
        }

        Commands::Angle { date, time, site } => {
            let request = build_request(&site, &CalcArgs::default(), &load_config()?)?;
            let at = local_midnight(date, request.time_zone)?;
            let depression = depression_angle_at(
                &at,
                time,
                &request.calculator_params(),
                Some(request.time_zone),
                &request.dst,
            );
            println!("{depression:.2}");
        }

        Commands::Methods => print_methods(),
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
