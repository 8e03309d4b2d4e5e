use std::path::PathBuf;

use clap::{Parser, Subcommand};

use prashna_chart::{BirthInput, answer_question, chart_summary, compute_chart};
use prashna_core::{MeanMotionSource, SourceConfig};
use prashna_time::jd_now;

mod accuracy;

use accuracy::{parse_cases, run_harness};

#[derive(Parser)]
#[command(name = "prashna", about = "Vedic birth-chart calculator and question engine")]
struct Cli {
    /// Path to an ephemeris data directory (optional)
    #[arg(long, global = true)]
    ephemeris: Option<PathBuf>,

    /// Treat geographic longitudes as west-positive
    #[arg(long, global = true)]
    west_positive: bool,

    /// Evaluate dasha state at this Julian Day instead of now
    #[arg(long, global = true)]
    at_jd: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print a full birth chart
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM or HH:MM:SS, local)
        #[arg(long)]
        time: String,
        /// IANA timezone name (e.g. Asia/Kolkata)
        #[arg(long)]
        tz: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Emit the chart as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Answer a free-text question against a birth chart
    Ask {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM or HH:MM:SS, local)
        #[arg(long)]
        time: String,
        /// IANA timezone name (e.g. Asia/Kolkata)
        #[arg(long)]
        tz: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// The question, e.g. "Am I Manglik?"
        question: String,
    },
    /// Run the batch accuracy harness over a CSV of test cases
    Accuracy {
        /// CSV file: name,date,time,lat,lon,timezone,question,expected
        csv: PathBuf,
    },
}

fn parse_birth(date: &str, time: &str, tz: &str, lat: f64, lon: f64) -> BirthInput {
    BirthInput::parse(date, time, tz, lat, lon).unwrap_or_else(|e| {
        eprintln!("Invalid birth input: {e}");
        std::process::exit(1);
    })
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let source = MeanMotionSource::new(SourceConfig {
        ephemeris_path: cli.ephemeris,
        west_positive: cli.west_positive,
    });
    let evaluation_jd = cli.at_jd.unwrap_or_else(jd_now);

    match cli.command {
        Commands::Chart { date, time, tz, lat, lon, json } => {
            let birth = parse_birth(&date, &time, &tz, lat, lon);
            let chart = match compute_chart(&source, &birth, evaluation_jd) {
                Ok(chart) => chart,
                Err(e) => {
                    eprintln!("Could not compute chart: {e}");
                    std::process::exit(1);
                }
            };
            if json {
                match serde_json::to_string_pretty(&chart) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        eprintln!("Could not serialize chart: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                println!("Birth JD (UTC): {:.6}", chart.birth_jd);
                print!("{}", chart_summary(&chart));
                print!("{}", answer_question(&chart, "dasha"));
            }
        }
        Commands::Ask { date, time, tz, lat, lon, question } => {
            let birth = parse_birth(&date, &time, &tz, lat, lon);
            match compute_chart(&source, &birth, evaluation_jd) {
                Ok(chart) => print!("{}", answer_question(&chart, &question)),
                Err(e) => {
                    eprintln!("Could not compute chart: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Accuracy { csv } => {
            let text = std::fs::read_to_string(&csv).unwrap_or_else(|e| {
                eprintln!("Could not read {}: {e}", csv.display());
                std::process::exit(1);
            });
            let cases = parse_cases(&text).unwrap_or_else(|e| {
                eprintln!("Could not parse {}: {e}", csv.display());
                std::process::exit(1);
            });
            let report = run_harness(&source, &cases, evaluation_jd);
            println!("{}/{} passed", report.passed, report.total);
            println!("Accuracy: {:.2}%", report.percent());
        }
    }
}
