use std::process::ExitCode;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use cookapp::{AppError, Config};

mod cli;

use cli::SortColumn;

/// cookapp - Weekly meal planning
#[derive(Parser)]
#[command(name = "cookapp")]
#[command(about = "Weekly meal plans and shopping lists from your recipe backend", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the Monday to Sunday range of a week
    Week {
        /// Weeks relative to the current one
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
    },
    /// Show the meal schedule of a week
    Grid {
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
    },
    /// Aggregate the ingredients of a week's dishes
    Shopping {
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,

        #[arg(long, value_enum, default_value = "name")]
        sort: SortColumn,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Subtract what is already in the fridge
        #[arg(long)]
        net: bool,
    },
    /// List fridge contents and flag expired items
    Fridge,
    /// Add bought stock to the fridge
    Stock {
        /// Ingredient name, as known to the backend
        name: String,
        quantity: f64,
        unit: String,

        #[arg(long)]
        expires: Option<NaiveDate>,
    },
    /// Put a recipe on the schedule
    Schedule {
        #[arg(long)]
        date: NaiveDate,

        #[arg(long)]
        meal_type: i64,

        #[arg(long)]
        recipe: i64,
    },
    /// Remove a schedule entry
    Unschedule { entry_id: i64 },
    /// Log in with the configured credentials
    Login,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(err),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.clone()).map_err(AppError::from)?;
    config.validate().map_err(AppError::ValidationError)?;

    cookapp::observability::init_observability(
        "cookapp",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    // Commands that never touch authenticated endpoints skip the automatic login
    let authenticate = !matches!(cli.command, Commands::Week { .. } | Commands::Login);
    let app = cli::connect(&config, authenticate).await?;

    match cli.command {
        Commands::Week { offset } => cli::week(&app, offset)?,
        Commands::Grid { offset } => cli::grid(&app, offset).await?,
        Commands::Shopping {
            offset,
            sort,
            desc,
            net,
        } => cli::shopping(&app, offset, sort, desc, net).await?,
        Commands::Fridge => cli::fridge(&app).await?,
        Commands::Stock {
            name,
            quantity,
            unit,
            expires,
        } => cli::stock(&app, name, quantity, unit, expires).await?,
        Commands::Schedule {
            date,
            meal_type,
            recipe,
        } => cli::schedule(&app, date, meal_type, recipe).await?,
        Commands::Unschedule { entry_id } => cli::unschedule(&app, entry_id).await?,
        Commands::Login => cli::login(&app, &config).await?,
    }

    Ok(())
}

fn report(err: anyhow::Error) -> ExitCode {
    tracing::error!(error = %err, "command failed");
    eprintln!("error: {err:#}");

    match err.downcast_ref::<AppError>() {
        Some(app_err) => {
            if let Some(hint) = app_err.hint() {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(app_err.exit_code())
        }
        None => ExitCode::FAILURE,
    }
}
