/// Marker trait for intent objects.
///
/// Intents are either user input (typing, submitting, cancelling) or
/// system events such as a request settling or a UI tick.
pub trait Intent: Send + 'static {}
