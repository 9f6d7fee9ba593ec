//! Tri-state operation status shared by every feature view-model.

mod intent;
mod reducer;
mod runner;
mod state;

pub use intent::ViewStateIntent;
pub use reducer::ViewStateReducer;
pub use runner::{OperationError, OperationRunner, RunError};
pub use state::{InvalidTransition, ViewState};
