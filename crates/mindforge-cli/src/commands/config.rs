//! `mindforge config`: theme and session timing stored in `config.toml`.

use clap::Subcommand;
use mindforge_core::Config;

use super::CmdResult;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one setting, e.g. `session.breath_phase_ms`
    Get { key: String },
    /// Change one setting; timings are in milliseconds, `none` unsets the drill seed
    Set { key: String, value: String },
    /// Print every setting as `key = value`
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print where config.toml lives
    Path,
    /// Restore default theme and timings
    Reset,
}

pub fn run(action: ConfigAction) -> CmdResult {
    match action {
        ConfigAction::Get { key } => {
            let value = Config::load()?
                .get(&key)
                .ok_or_else(|| format!("unknown key: {key} (see `mindforge config list`)"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            let stored = config.get(&key).unwrap_or(value);
            println!("{key} = {stored}");
        }
        ConfigAction::List { json: true } => {
            println!("{}", serde_json::to_string_pretty(&Config::load()?)?);
        }
        ConfigAction::List { json: false } => {
            for (key, value) in Config::load()?.entries() {
                println!("{key} = {value}");
            }
        }
        ConfigAction::Path => println!("{}", Config::file_path()?.display()),
        ConfigAction::Reset => {
            Config::default().save()?;
            tracing::info!("config reset");
            println!("theme and session timings restored to defaults");
        }
    }
    Ok(())
}
