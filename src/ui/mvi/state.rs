/// Marker trait for renderable state.
///
/// Cloned into snapshots for observers and compared to skip redundant
/// publications.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
