use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "mindforge", version, about = "MindForge 15 - daily mind training")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Language preference
    Language {
        #[command(subcommand)]
        action: commands::language::LanguageAction,
    },
    /// Progress and streak
    Progress {
        #[command(subcommand)]
        action: commands::progress::ProgressAction,
    },
    /// Program days
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// Run one day's session, reading commands from stdin
    Session(commands::session::SessionArgs),
    /// Walk the whole app flow interactively
    Run,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("MINDFORGE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Language { action } => commands::language::run(action),
        Commands::Progress { action } => commands::progress::run(action),
        Commands::Day { action } => commands::day::run(action),
        Commands::Session(args) => commands::session::run(args),
        Commands::Run => commands::session::run_app(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
