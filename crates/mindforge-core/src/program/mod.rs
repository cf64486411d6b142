mod catalog;
mod step;

pub use catalog::{day_label, ProgramCatalog, ProgramDay, LAST_DAY, MAIN_PROGRAM_DAYS};
pub use step::{Step, StepType};
