pub mod badge;
pub mod cards;
pub mod format;
pub mod layout;
pub mod stepper;

pub use badge::status_badge;
pub use layout::{Refresh, error_box, page};
pub use stepper::{Step, workflow_stepper};
