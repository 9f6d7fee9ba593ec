/// Marker trait for view states.
///
/// States are replaced wholesale on every transition, never mutated in
/// place, and compare by value so observers can detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
