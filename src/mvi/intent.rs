/// Marker for values that drive a state transition.
///
/// Intents come from two places: the person at the keyboard (edits, focus
/// changes, pressing Submit) and the submission worker reporting back.
pub trait Intent: Send + 'static {}
