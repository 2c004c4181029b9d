use super::intent::Intent;
use super::state::UiState;

/// Pure transition function: `(State, Intent) -> State`.
///
/// Reducers perform no I/O. Anything that talks to the outside world reads
/// the returned state and acts on it.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
