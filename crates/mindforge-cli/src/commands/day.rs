use clap::Subcommand;
use mindforge_core::i18n::Translator;
use mindforge_core::program::{ProgramCatalog, ProgramDay, LAST_DAY};
use mindforge_core::session::format_clock;
use mindforge_core::storage::Database;
use mindforge_core::{DayPicker, ProgressStore};
use serde::Serialize;

use super::{terminal_translator, CmdResult};

#[derive(Subcommand)]
pub enum DayAction {
    /// List every program day
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show a day's focus and steps
    Show {
        /// Day number (1-37)
        day: u8,
        #[arg(long)]
        json: bool,
    },
    /// Set the day to resume at
    Select {
        /// Day number; 31-37 need maintenance mode
        day: u8,
    },
}

#[derive(Serialize)]
struct DayRow {
    label: String,
    #[serde(flatten)]
    program: ProgramDay,
    total_minutes: u32,
    completed: bool,
    selectable: bool,
}

pub fn run(action: DayAction) -> CmdResult {
    let db = Database::open()?;
    let t = terminal_translator(&db);
    let mut store = ProgressStore::open(db);
    let catalog = ProgramCatalog::builtin();

    match action {
        DayAction::List { json } => {
            let state = store.state();
            let max = state.max_selectable_day();
            let rows: Vec<DayRow> = (1..=LAST_DAY)
                .map(|day| {
                    let program = catalog.lookup(day);
                    DayRow {
                        label: program.label(),
                        program,
                        total_minutes: program.total_minutes(),
                        completed: state.is_completed(day),
                        selectable: day <= max,
                    }
                })
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in &rows {
                    let mark = match (row.completed, row.selectable) {
                        (true, _) => "x",
                        (false, true) => " ",
                        (false, false) => "-",
                    };
                    println!("[{mark}] {:>3}  {}", row.label, t.t(row.program.focus_key));
                }
            }
        }
        DayAction::Show { day, json } => {
            if !(1..=LAST_DAY).contains(&day) {
                return Err(format!("day must be between 1 and {LAST_DAY}").into());
            }
            let program = catalog.lookup(day);
            if json {
                println!("{}", serde_json::to_string_pretty(&program)?);
            } else {
                print_overview(&t, &program);
            }
        }
        DayAction::Select { day } => {
            let mut picker = DayPicker::for_progress(store.state());
            let day = picker.pick(day)?;
            store.set_current_day(day)?;
            println!("{} {}", t.t("day"), catalog.lookup(day).label());
        }
    }
    Ok(())
}

/// Print a day's focus and step list.
pub fn print_overview(t: &Translator, program: &ProgramDay) {
    println!("{} {}", t.t("day"), program.label());
    if program.is_maintenance() {
        println!("{}", t.t("maintenanceMode"));
    }
    println!("{}: {}", t.t("todaysFocus"), t.t(program.focus_key));
    for (i, step) in program.steps.iter().enumerate() {
        println!(
            "  {}. {} ({} {}) - {}",
            i + 1,
            t.t(step.step_type.label_key()),
            step.duration_minutes,
            t.t("minutes"),
            t.t(step.step_type.description_key()),
        );
    }
    println!(
        "{} ({})",
        t.t("totalTime"),
        format_clock(u64::from(program.total_minutes()) * 60)
    );
}
