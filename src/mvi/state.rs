/// Marker for state values owned by a reducer.
///
/// `Default` is the freshly mounted state; `PartialEq` lets callers detect
/// no-op transitions.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
