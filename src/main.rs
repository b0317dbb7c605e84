use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use powerpick::config::AppConfig;
use powerpick::fetch::{DateRange, DrawSource, PowerballFeed};
use powerpick::models::{DrawRecord, FrequencyMap, Pick, Prize, WHITE_PICKS};
use powerpick::rules::RuleTable;
use powerpick::{calculate, parse_date, payout, predict};

#[derive(Parser)]
#[command(name = "powerpick")]
#[command(about = "Powerball draw-history analyzer with frequency-weighted predictions")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Override the configured feed URL
    #[arg(long)]
    feed_url: Option<String>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate picks weighted by historical draw frequency
    Predict {
        /// Number of picks to generate
        #[arg(long, default_value = "10")]
        count: usize,

        /// Date whose rule era applies (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<String>,

        /// Only count draws on or after this date
        #[arg(long)]
        from: Option<String>,

        /// Only count draws on or before this date
        #[arg(long)]
        to: Option<String>,

        /// Seed for reproducible picks
        #[arg(long)]
        seed: Option<u64>,

        /// Output picks as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a played pick against an actual draw
    Check {
        /// Five white numbers followed by the red number
        #[arg(num_args = 6, required = true, value_name = "NUMBER")]
        numbers: Vec<u8>,

        /// Apply the draw's Power Play multiplier
        #[arg(long)]
        powerplay: bool,

        /// Draw date to check against (YYYY-MM-DD, default: latest draw)
        #[arg(long)]
        date: Option<String>,

        /// Output the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show frequency statistics over the draw history
    Stats {
        /// Only count draws on or after this date
        #[arg(long)]
        from: Option<String>,

        /// Only count draws on or before this date
        #[arg(long)]
        to: Option<String>,
    },

    /// Show the rule eras and their ball ranges
    Rules {
        /// Show the bounds in force on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&PathBuf::from(&cli.config))?;

    // Initialize tracing
    let level = cli.log_level.as_deref().unwrap_or(config.log_level.as_str());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting powerpick v{}", env!("CARGO_PKG_VERSION"));

    let rules = RuleTable::default();

    match cli.command {
        Commands::Predict {
            count,
            as_of,
            from,
            to,
            seed,
            json,
        } => {
            let as_of = match as_of {
                Some(s) => parse_date(&s)
                    .unwrap_or_else(|| panic!("Invalid --as-of date (expected YYYY-MM-DD): {}", s)),
                None => Utc::now().date_naive(),
            };

            let source = feed_source(&config, &cli.feed_url)?;
            let records = source.draws(&date_range(from, to)).await?;
            tracing::info!("Loaded {} draws from {}", records.len(), source.name());

            let freq = calculate::frequencies(&records);
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let picks = predict::predict(&rules, &freq.white, &freq.red, as_of, count, &mut rng)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&picks)?);
            } else {
                println!("\n=== Predicted Picks ===");
                println!("Rules as of:   {}", as_of);
                println!("Draws counted: {}", records.len());
                println!();
                for pick in &picks {
                    println!("  {}", pick);
                }
            }
        }
        Commands::Check {
            numbers,
            powerplay,
            date,
            json,
        } => {
            let white: [u8; WHITE_PICKS] = numbers[..WHITE_PICKS]
                .try_into()
                .expect("arg parser enforces six numbers");
            let pick = Pick::new(white, numbers[WHITE_PICKS])?;

            let source = feed_source(&config, &cli.feed_url)?;
            let records = source.draws(&DateRange::unbounded()).await?;
            tracing::info!("Loaded {} draws from {}", records.len(), source.name());

            let draw = match date {
                Some(s) => {
                    let wanted = parse_date(&s).unwrap_or_else(|| {
                        panic!("Invalid --date (expected YYYY-MM-DD): {}", s)
                    });
                    match records.iter().find(|r| r.date == wanted) {
                        Some(d) => d.clone(),
                        None => {
                            eprintln!("No draw on {} in the feed.", wanted);
                            return Ok(());
                        }
                    }
                }
                None => match records.last() {
                    Some(d) => d.clone(),
                    None => {
                        eprintln!("The feed returned no draws.");
                        return Ok(());
                    }
                },
            };

            if powerplay && draw.power_play.is_none() {
                tracing::warn!(
                    "Draw on {} has no recorded Power Play multiplier, using 1x",
                    draw.date
                );
            }

            let result = payout::evaluate(&pick, &draw, powerplay);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("\n=== Check Results ===");
                println!("Draw date:     {}", draw.date.format("%A, %b %-d, %Y"));
                println!("Draw numbers:  {}", format_draw(&draw));
                println!("Your pick:     {}", pick);
                println!("White matches: {}", format_matches(&result.white_matches));
                println!("Red match:     {}", if result.red_match { "yes" } else { "no" });
                if powerplay {
                    println!("Multiplier:    {}x", result.multiplier);
                }
                match result.prize {
                    Prize::Jackpot => println!("\nYou win the jackpot."),
                    Prize::Amount(0) => println!("\nNo prize this time."),
                    Prize::Amount(amount) => println!("\nYou win ${}.", amount),
                }
            }
        }
        Commands::Stats { from, to } => {
            let source = feed_source(&config, &cli.feed_url)?;
            let records = source.draws(&date_range(from, to)).await?;
            if records.is_empty() {
                eprintln!("The feed returned no draws for this range.");
                return Ok(());
            }

            let freq = calculate::frequencies(&records);

            println!("\n=== Draw History ===");
            println!("Draws counted: {}", records.len());
            if let (Some(first), Some(last)) = (records.first(), records.last()) {
                println!("First draw:    {}", first.date);
                println!("Last draw:     {}", last.date);
            }

            print_pool("White Balls", &freq.white);
            print_pool("Red Balls", &freq.red);
        }
        Commands::Rules { date } => match date {
            Some(s) => {
                let wanted = parse_date(&s)
                    .unwrap_or_else(|| panic!("Invalid --date (expected YYYY-MM-DD): {}", s));
                let bounds = rules.bounds_for(wanted)?;
                println!(
                    "On {}: white 1-{}, red 1-{}",
                    wanted, bounds.white_max, bounds.red_max
                );
            }
            None => {
                println!("\n=== Rule Eras ===");
                for era in rules.eras() {
                    println!(
                        "  from {}: white 1-{:2}, red 1-{:2}",
                        era.effective_from, era.bounds.white_max, era.bounds.red_max
                    );
                }
            }
        },
    }

    Ok(())
}

/// Build the live feed source from config, with an optional URL override.
fn feed_source(config: &AppConfig, override_url: &Option<String>) -> Result<PowerballFeed> {
    let mut feed_config = config.feed_config()?;
    if let Some(url) = override_url {
        feed_config.url = url::Url::parse(url).unwrap_or_else(|e| panic!("Invalid URL: {}", e));
    }
    Ok(PowerballFeed::new(feed_config)?)
}

fn date_range(from: Option<String>, to: Option<String>) -> DateRange {
    DateRange {
        from: from.map(|s| {
            parse_date(&s)
                .unwrap_or_else(|| panic!("Invalid --from date (expected YYYY-MM-DD): {}", s))
        }),
        to: to.map(|s| {
            parse_date(&s)
                .unwrap_or_else(|| panic!("Invalid --to date (expected YYYY-MM-DD): {}", s))
        }),
    }
}

fn print_pool(title: &str, freq: &FrequencyMap) {
    println!("\n=== {} ===", title);
    println!("Most drawn:");
    for (number, count) in freq.ranked().into_iter().take(10) {
        println!("  {:02} x{}", number, count);
    }

    let summary = calculate::summarize(freq);
    println!("Mean:     {:.2}", summary.mean);
    println!("Geo mean: {:.2}", summary.geometric_mean);
    println!("Median:   {:.1}", summary.median);
    println!("Range:    {}..{}", summary.min, summary.max);
    println!("Std dev:  {:.2}", summary.std_dev);
}

fn format_draw(draw: &DrawRecord) -> String {
    let whites: Vec<String> = draw.white.iter().map(|n| format!("{:02}", n)).collect();
    let mut out = format!("{}  {:02}", whites.join(" "), draw.red);
    if let Some(multiplier) = draw.power_play {
        out.push_str(&format!(" - {}x", multiplier));
    }
    out
}

fn format_matches(matches: &[u8]) -> String {
    if matches.is_empty() {
        return "none".to_string();
    }
    matches
        .iter()
        .map(|n| format!("{:02}", n))
        .collect::<Vec<String>>()
        .join(" ")
}
