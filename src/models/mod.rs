pub mod time_edit;
pub mod timer;

pub use time_edit::TimeEdit;
pub use timer::Timer;
