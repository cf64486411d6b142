use clap::Subcommand;
use mindforge_core::program::day_label;
use mindforge_core::storage::Database;
use mindforge_core::ProgressStore;

use super::{terminal_translator, CmdResult};

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Show current day, completed days and streak
    Show {
        /// Print the stored record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Forget all progress
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: ProgressAction) -> CmdResult {
    let db = Database::open()?;
    let t = terminal_translator(&db);
    let mut store = ProgressStore::open(db);

    match action {
        ProgressAction::Show { json: true } => {
            println!("{}", serde_json::to_string_pretty(store.state())?);
        }
        ProgressAction::Show { json: false } => {
            let state = store.state();
            println!("{}: {}", t.t("day"), day_label(state.current_day));
            println!("{}: {}/30", t.t("daysCompleted"), state.completed_days.len());
            println!("{}: {}", t.t("currentStreak"), state.streak);
            if state.is_maintenance_mode() {
                println!("{}", t.t("maintenanceMode"));
            }
        }
        ProgressAction::Reset { yes: false } => {
            return Err(format!("{} (pass --yes)", t.t("resetConfirm")).into());
        }
        ProgressAction::Reset { yes: true } => {
            store.reset_progress();
            println!("progress reset");
        }
    }
    Ok(())
}
