use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::ViewStateIntent;
use super::state::ViewState;

/// Reducer for [`ViewState`]. Rejected transitions leave the state as is.
pub struct ViewStateReducer<E>(PhantomData<E>);

impl<E> Reducer for ViewStateReducer<E>
where
    E: Clone + PartialEq + Send + 'static,
{
    type State = ViewState<E>;
    type Intent = ViewStateIntent<E>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match state.transition(intent) {
            Ok(next) => next,
            Err(rejected) => {
                tracing::debug!(%rejected, "View state transition ignored");
                state
            }
        }
    }
}
