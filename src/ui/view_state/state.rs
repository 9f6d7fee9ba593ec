use std::fmt;

use thiserror::Error;

use crate::ui::mvi::UiState;

use super::intent::ViewStateIntent;

/// Status of the operation a view-model is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<E> {
    /// No operation in flight and nothing to report.
    Idle,
    /// An operation is in flight; show a busy indicator.
    Processing,
    /// The last operation failed.
    Error(E),
}

impl<E> Default for ViewState<E> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<E> UiState for ViewState<E> where E: Clone + PartialEq + Send + 'static {}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot apply '{intent}' while {from}")]
pub struct InvalidTransition {
    pub from: &'static str,
    pub intent: &'static str,
}

impl<E: Clone> ViewState<E> {
    /// Compute the state that follows `intent`.
    ///
    /// Allowed edges: `Idle -> Processing`, `Error -> Processing` (retry),
    /// `Processing -> Idle` and `Processing -> Error`. Anything else,
    /// including a second start while processing, is rejected.
    pub fn transition(&self, intent: ViewStateIntent<E>) -> Result<Self, InvalidTransition> {
        match (self, intent) {
            (ViewState::Idle | ViewState::Error(_), ViewStateIntent::Start) => {
                Ok(ViewState::Processing)
            }
            (ViewState::Processing, ViewStateIntent::Succeed) => Ok(ViewState::Idle),
            (ViewState::Processing, ViewStateIntent::Fail(error)) => Ok(ViewState::Error(error)),
            (state, intent) => Err(InvalidTransition {
                from: state.label(),
                intent: intent.label(),
            }),
        }
    }
}

impl<E> ViewState<E> {
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Processing => "processing",
            ViewState::Error(_) => "error",
        }
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, ViewState::Processing)
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            ViewState::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for ViewState<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewState::Error(error) => write!(f, "error: {}", error),
            other => f.write_str(other.label()),
        }
    }
}
