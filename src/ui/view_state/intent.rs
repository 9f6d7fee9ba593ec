use crate::ui::mvi::Intent;

/// Operation lifecycle signals folded into a [`super::ViewState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStateIntent<E> {
    /// Start (or retry) an operation.
    Start,
    Succeed,
    Fail(E),
}

impl<E> ViewStateIntent<E> {
    pub fn label(&self) -> &'static str {
        match self {
            ViewStateIntent::Start => "start",
            ViewStateIntent::Succeed => "succeed",
            ViewStateIntent::Fail(_) => "fail",
        }
    }
}

impl<E: Send + 'static> Intent for ViewStateIntent<E> {}
