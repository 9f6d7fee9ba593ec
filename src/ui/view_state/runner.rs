//! Runs one operation at a time on behalf of a view-model.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;

use crate::lifecycle::ScopeHandle;

use super::intent::ViewStateIntent;
use super::state::ViewState;

/// Error types a runner can record in [`ViewState::Error`].
///
/// Timeouts and panics inside an operation are classified through these
/// constructors instead of escaping to the caller.
pub trait OperationError: Clone + PartialEq + fmt::Display + Send + Sync + 'static {
    fn timed_out() -> Self;
    fn unexpected(detail: String) -> Self;

    /// Stable identifier for logs and machine-readable output.
    fn error_type(&self) -> &'static str;

    /// User-facing message for display.
    fn description(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// Another operation is still in flight. The new one was not started.
    #[error("An operation is already in progress")]
    Busy,

    /// The owning surface went away; no state was updated.
    #[error("The owning surface was disposed")]
    Disposed,
}

/// Owns a view state and drives it through one operation at a time.
///
/// Start policy is reject: starting while `Processing` returns
/// [`RunError::Busy`] and leaves the in-flight operation alone.
pub struct OperationRunner<E: OperationError> {
    shared: Arc<RunnerShared<E>>,
}

struct RunnerShared<E: OperationError> {
    name: &'static str,
    state: watch::Sender<ViewState<E>>,
    scope: ScopeHandle,
    timeout: Option<Duration>,
}

impl<E: OperationError> OperationRunner<E> {
    pub fn new(name: &'static str, scope: ScopeHandle) -> Self {
        let (state, _) = watch::channel(ViewState::Idle);
        Self {
            shared: Arc::new(RunnerShared {
                name,
                state,
                scope,
                timeout: None,
            }),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        if let Some(shared) = Arc::get_mut(&mut self.shared) {
            shared.timeout = Some(timeout);
        }
        self
    }

    pub fn state(&self) -> ViewState<E> {
        self.shared.state.borrow().clone()
    }

    /// Observe state changes.
    pub fn watch(&self) -> watch::Receiver<ViewState<E>> {
        self.shared.state.subscribe()
    }

    /// Run `operation` to completion and record its outcome.
    ///
    /// The operation is spawned so that a panic inside it is classified as
    /// [`OperationError::unexpected`]. Disposal of the scope aborts it.
    /// The outcome is recorded by a driver task, so it lands even when the
    /// caller stops awaiting this future.
    pub async fn run<T, F>(&self, operation: F) -> Result<Result<T, E>, RunError>
    where
        T: Send + 'static,
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        self.shared.begin()?;
        let driver = tokio::spawn(Arc::clone(&self.shared).drive(operation));

        match driver.await {
            Ok(recorded) => recorded,
            Err(join_error) => {
                let detail = format!("{} driver failed: {}", self.shared.name, join_error);
                self.shared.finish::<T>(Err(E::unexpected(detail)))
            }
        }
    }

    /// Record a failure that was detected before any work could start,
    /// passing through `Processing` so only allowed edges are taken.
    pub fn reject(&self, error: E) -> Result<(), RunError> {
        self.shared.begin()?;
        self.shared.finish::<()>(Err(error)).map(|_| ())
    }
}

impl<E: OperationError> RunnerShared<E> {
    async fn drive<T, F>(self: Arc<Self>, operation: F) -> Result<Result<T, E>, RunError>
    where
        T: Send + 'static,
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let mut task = tokio::spawn(operation);

        let timeout = self.timeout;
        let deadline = async move {
            match timeout {
                Some(limit) => tokio::time::sleep(limit).await,
                None => std::future::pending::<()>().await,
            }
        };

        let outcome = tokio::select! {
            biased;
            _ = self.scope.disposed() => {
                task.abort();
                tracing::debug!(operation = self.name, "Operation cancelled by disposal");
                return Err(RunError::Disposed);
            }
            joined = &mut task => match joined {
                Ok(result) => result,
                Err(join_error) => {
                    let detail = if join_error.is_panic() {
                        format!("{} panicked", self.name)
                    } else {
                        format!("{} was cancelled", self.name)
                    };
                    Err(E::unexpected(detail))
                }
            },
            _ = deadline => {
                task.abort();
                tracing::warn!(operation = self.name, ?timeout, "Operation timed out");
                Err(E::timed_out())
            }
        };

        self.finish(outcome)
    }

    fn begin(&self) -> Result<(), RunError> {
        if self.scope.is_disposed() {
            return Err(RunError::Disposed);
        }

        let started = self.state.send_if_modified(|state| {
            match state.transition(ViewStateIntent::Start) {
                Ok(next) => {
                    *state = next;
                    true
                }
                Err(_) => false,
            }
        });

        if !started {
            tracing::debug!(operation = self.name, "Start rejected, operation in flight");
            return Err(RunError::Busy);
        }
        tracing::debug!(operation = self.name, "Operation started");
        Ok(())
    }

    fn finish<T>(&self, outcome: Result<T, E>) -> Result<Result<T, E>, RunError> {
        if self.scope.is_disposed() {
            return Err(RunError::Disposed);
        }

        let intent = match &outcome {
            Ok(_) => ViewStateIntent::Succeed,
            Err(error) => {
                tracing::info!(operation = self.name, %error, "Operation failed");
                ViewStateIntent::Fail(error.clone())
            }
        };

        self.state.send_modify(|state| {
            if let Ok(next) = state.transition(intent) {
                *state = next;
            }
        });
        Ok(outcome)
    }
}
