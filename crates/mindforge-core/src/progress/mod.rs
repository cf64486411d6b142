mod clock;
mod state;
mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use state::{ProgressState, StreakChange, MAINTENANCE_THRESHOLD};
pub use store::{ProgressStore, PROGRESS_KEY};
