//! Screen flow and the application controller.

mod app;
mod machine;
mod picker;

pub use app::App;
pub use machine::{next_day_available, transition, Action, Effect, FlowContext, Screen, Transition};
pub use picker::DayPicker;
