//! F1 Pulse CLI - Command-line interface for race position predictions

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use f1pulse::client::{ClientConfig, PredictionClient, DEFAULT_BASE_URL};
use f1pulse::data::{DRIVERS, RACES, SEASONS};
use f1pulse::form::FormController;
use f1pulse::render;

#[derive(Parser)]
#[command(name = "f1pulse")]
#[command(author, version, about = "F1 race position prediction CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run in interactive mode
    #[arg(short, long)]
    interactive: bool,

    /// Prediction service base URL
    #[arg(long, env = "F1PULSE_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Request timeout in seconds (waits indefinitely when unset)
    #[arg(long, env = "F1PULSE_TIMEOUT")]
    timeout: Option<u64>,

    /// Bearer token for the prediction service
    #[arg(long, env = "F1PULSE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Connect directly, ignoring HTTP(S)_PROXY
    #[arg(long, env = "F1PULSE_NO_PROXY")]
    no_proxy: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict a driver's finishing position
    Predict {
        /// Season (2021-2025)
        #[arg(short, long)]
        season: u16,

        /// Driver full name, e.g. "Max Verstappen"
        #[arg(short, long)]
        driver: String,

        /// Race name, e.g. "Monaco Grand Prix"
        #[arg(short, long)]
        race: String,

        /// Override the driver's years of experience
        #[arg(short, long)]
        experience: Option<u32>,

        /// Print the one-line share summary after the result
        #[arg(long)]
        share: bool,
    },

    /// List teams known to the prediction service
    Teams,

    /// Show recorded results for a season
    Historical {
        /// Season (e.g. 2023)
        #[arg(short, long)]
        season: u16,
    },

    /// Check prediction service health
    Health,

    /// Show prediction statistics summary
    Stats,

    /// List drivers
    Drivers,

    /// List races
    Races,

    /// List supported seasons
    Seasons,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    println!("{}", render::banner());
    println!();

    let config = client_config(&cli);

    if cli.interactive {
        let (rt, client) = connect(config)?;
        run_interactive(&rt, &client)?;
    } else if let Some(command) = cli.command {
        match command {
            Commands::Predict {
                season,
                driver,
                race,
                experience,
                share,
            } => {
                let (rt, client) = connect(config)?;
                predict(&rt, &client, season, &driver, &race, experience, share)?;
            }
            Commands::Teams => {
                let (rt, client) = connect(config)?;
                list_teams(&rt, &client)?;
            }
            Commands::Historical { season } => {
                let (rt, client) = connect(config)?;
                show_historical(&rt, &client, season)?;
            }
            Commands::Health => {
                let (rt, client) = connect(config)?;
                show_health(&rt, &client)?;
            }
            Commands::Stats => {
                let (rt, client) = connect(config)?;
                show_stats(&rt, &client)?;
            }
            Commands::Drivers => println!("{}", render::driver_grid(None)),
            Commands::Races => println!("{}", render::circuit_grid(None)),
            Commands::Seasons => println!("{}", render::season_picker(None)),
        }
    } else {
        println!("Use --help for usage information or --interactive for interactive mode.");
    }

    Ok(())
}

fn client_config(cli: &Cli) -> ClientConfig {
    ClientConfig {
        base_url: cli.api_url.clone(),
        timeout_secs: cli.timeout,
        auth_token: cli.token.clone(),
        use_env_proxy: !cli.no_proxy,
        ..Default::default()
    }
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Build the runtime and HTTP client used for service calls
fn connect(config: ClientConfig) -> Result<(Runtime, PredictionClient)> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    tracing::info!("Using prediction service at {}", config.base_url);
    let client = PredictionClient::new(config).context("Failed to create HTTP client")?;

    Ok((rt, client))
}

fn spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

fn predict(
    rt: &Runtime,
    client: &PredictionClient,
    season: u16,
    driver: &str,
    race: &str,
    experience: Option<u32>,
    share: bool,
) -> Result<()> {
    let mut form = FormController::new();
    form.select_season(season)?;
    form.select_driver(driver)?;
    form.select_race(race)?;
    form.set_experience_override(experience);

    println!("{}", render::step_header(form.step()));
    println!();

    submit_and_print(rt, client, &mut form)?;

    if let Some(message) = form.error() {
        anyhow::bail!("{}", message);
    }
    if share {
        if let Some(text) = form.share_text() {
            println!();
            println!("{}", text);
        }
    }

    Ok(())
}

fn submit_and_print(
    rt: &Runtime,
    client: &PredictionClient,
    form: &mut FormController,
) -> Result<()> {
    let pb = spinner("Predicting Position...")?;
    rt.block_on(form.submit(client));
    pb.finish_and_clear();

    println!("{}", render::status_panel(form));
    Ok(())
}

fn list_teams(rt: &Runtime, client: &PredictionClient) -> Result<()> {
    let pb = spinner("Loading teams...")?;
    let teams = rt
        .block_on(client.get_teams())
        .context("Failed to fetch teams")?;
    pb.finish_and_clear();

    println!("{}", "Teams:".yellow().bold());
    println!("{}", render::teams_table(&teams));

    Ok(())
}

fn show_historical(rt: &Runtime, client: &PredictionClient, season: u16) -> Result<()> {
    let pb = spinner(&format!("Loading {} results...", season))?;
    let history = rt
        .block_on(client.get_historical_data(season))
        .with_context(|| format!("Failed to fetch historical data for {}", season))?;
    pb.finish_and_clear();

    println!(
        "{}",
        format!("Season {} results:", history.season).yellow().bold()
    );
    if history.results.is_empty() {
        println!("{}", "No results recorded for this season.".dimmed());
        return Ok(());
    }

    println!("{:>4} {:<22} {:<20} {:>8}", "Pos", "Driver", "Team", "Points");
    println!("{}", "-".repeat(57));
    for result in &history.results {
        println!(
            "{:>4} {:<22} {:<20} {:>8}",
            result
                .position
                .map(render::format_position)
                .unwrap_or_else(|| "-".to_string()),
            result.driver.as_deref().unwrap_or("N/A"),
            result.team.as_deref().unwrap_or("N/A"),
            result
                .points
                .map(|p| format!("{:.2}", p))
                .unwrap_or_else(|| "-".to_string())
        );
    }

    Ok(())
}

fn show_health(rt: &Runtime, client: &PredictionClient) -> Result<()> {
    let health = rt
        .block_on(client.get_health_status())
        .context("Health check failed")?;

    let flag = |ok: bool| if ok { "yes".green() } else { "no".red() };

    println!("{}", "Service Health:".yellow().bold());
    println!("URL: {}", client.config().base_url);
    println!("Version: {}", health.version.as_deref().unwrap_or("unknown"));
    println!("Model loaded: {}", flag(health.model_loaded));
    println!(
        "Historical data loaded: {}",
        flag(health.historical_data_loaded)
    );
    if let Some(ref ts) = health.timestamp {
        println!("Timestamp: {}", ts);
    }

    Ok(())
}

fn show_stats(rt: &Runtime, client: &PredictionClient) -> Result<()> {
    let stats = rt
        .block_on(client.get_stats_summary())
        .context("Failed to fetch statistics")?;

    println!("{}", "Prediction Statistics:".yellow().bold());
    println!("Predictions today: {}", stats.total_predictions_today);
    println!(
        "Most predicted team: {}",
        stats.most_predicted_team.as_deref().unwrap_or("-")
    );
    println!(
        "Average confidence: {}",
        stats
            .average_confidence
            .map(render::format_confidence)
            .unwrap_or_else(|| "-".to_string())
    );

    Ok(())
}

fn run_interactive(rt: &Runtime, client: &PredictionClient) -> Result<()> {
    println!("{}", "Interactive mode".green().bold());
    println!();

    let theme = ColorfulTheme::default();
    let mut form = FormController::new();

    loop {
        // Step 1: season
        println!("{}", render::step_header(form.step()));
        let season_items: Vec<String> = SEASONS
            .iter()
            .map(|&s| {
                let kind = f1pulse::data::season_kind(s)
                    .map(|k| k.label())
                    .unwrap_or_default();
                format!("{}  {}", s, kind)
            })
            .collect();
        let default = form
            .season()
            .and_then(|s| SEASONS.iter().position(|&x| x == s))
            .unwrap_or(SEASONS.len() - 2);
        let idx = Select::with_theme(&theme)
            .with_prompt("Select season")
            .items(&season_items)
            .default(default)
            .interact()?;
        form.select_season(SEASONS[idx])?;

        // Step 2: driver
        println!("{}", render::step_header(form.step()));
        let driver_items: Vec<String> = DRIVERS
            .iter()
            .filter_map(|d| render::driver_label(d.name))
            .collect();
        let default = form
            .driver()
            .and_then(|d| DRIVERS.iter().position(|x| x.name == d.name))
            .unwrap_or(0);
        let idx = Select::with_theme(&theme)
            .with_prompt("Choose your driver")
            .items(&driver_items)
            .default(default)
            .max_length(10)
            .interact()?;
        form.select_driver(DRIVERS[idx].name)?;

        // Step 3: circuit
        println!("{}", render::step_header(form.step()));
        let race_items: Vec<String> = RACES
            .iter()
            .filter_map(|r| render::race_label(r.name))
            .collect();
        let default = form
            .race()
            .and_then(|r| RACES.iter().position(|x| x.name == r.name))
            .unwrap_or(0);
        let idx = Select::with_theme(&theme)
            .with_prompt("Choose circuit")
            .items(&race_items)
            .default(default)
            .max_length(10)
            .interact()?;
        form.select_race(RACES[idx].name)?;

        // Step 4: optional experience override, then submit
        println!("{}", render::step_header(form.step()));
        let default_exp = form.driver().map(|d| d.experience).unwrap_or_default();
        let raw: String = Input::with_theme(&theme)
            .with_prompt(format!(
                "Override driver experience (default: {} years, leave empty to keep)",
                default_exp
            ))
            .allow_empty(true)
            .interact_text()?;
        form.set_experience_input(&raw);
        if !raw.trim().is_empty() && form.experience_override().is_none() {
            println!(
                "{}",
                format!("'{}' is not a positive number, using {} years", raw.trim(), default_exp)
                    .yellow()
            );
        }

        println!();
        submit_and_print(rt, client, &mut form)?;
        println!();

        let actions = ["New Prediction", "Share Result", "Edit Selections", "Quit"];
        let mut action = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&actions)
            .default(0)
            .interact()?;

        if action == 1 {
            match form.share_text() {
                Some(text) => println!("\n{}\n", text),
                None => println!("{}", "Nothing to share yet.".yellow()),
            }
            action = Select::with_theme(&theme)
                .with_prompt("What next?")
                .items(&[actions[0], actions[2], actions[3]])
                .default(0)
                .interact()?;
            // Map back onto the full action list
            action = [0, 2, 3][action];
        }

        match action {
            0 => form.reset(),
            2 => {}
            _ => {
                println!("Goodbye!");
                break;
            }
        }
        println!();
    }

    Ok(())
}
