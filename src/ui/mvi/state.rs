/// Marker trait for UI state objects.
///
/// States are cloned into the reducer and compared in tests, so they carry
/// `Clone + PartialEq`, and `Default` is the freshly mounted state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
