mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tablecheck")]
#[command(version, about = "Structural and quality checks for tabular data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check expected columns, type consistency and minimum row count
    Sanity {
        /// Path to the table file (JSON, YAML or TOML)
        table: String,

        /// Comma-separated list of expected columns
        #[arg(short, long, value_delimiter = ',')]
        columns: Option<Vec<String>>,

        /// Path to a check profile (YAML or TOML)
        #[arg(short, long)]
        profile: Option<String>,

        /// Minimum number of rows (overrides the profile)
        #[arg(long)]
        min_rows: Option<usize>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check that every column holds values of a single type
    Types {
        /// Path to the table file
        table: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check whether the table contains missing values
    Nan {
        /// Path to the table file
        table: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check that the table has at least one row
    Rows {
        /// Path to the table file
        table: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Run every check configured by a profile
    Report {
        /// Path to the table file
        table: String,

        /// Path to the check profile (YAML or TOML)
        #[arg(short, long)]
        profile: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Sanity {
            table,
            columns,
            profile,
            min_rows,
            format,
        } => commands::sanity::execute(&table, columns, profile.as_deref(), min_rows, &format),

        Commands::Types { table, format } => commands::checks::types(&table, &format),

        Commands::Nan { table, format } => commands::checks::nan(&table, &format),

        Commands::Rows { table, format } => commands::checks::rows(&table, &format),

        Commands::Report {
            table,
            profile,
            format,
        } => commands::report::execute(&table, &profile, &format),
    }
}
