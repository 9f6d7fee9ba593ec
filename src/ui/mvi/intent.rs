/// Marker trait for intents: user actions or operation outcomes that a
/// reducer folds into state.
pub trait Intent: Send + 'static {}
