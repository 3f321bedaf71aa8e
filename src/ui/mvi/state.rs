//! Base trait for view state.

/// Marker trait for view state objects.
///
/// States are cloned to produce new states, compared to detect changes,
/// and carry everything the view needs to render.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
