//! Base trait for renderable state in the MVI loop.

/// Marker trait for state snapshots.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render a screen)
/// - Comparable (PartialEq for change detection)
///
/// `Send + Sync` because snapshots cross the watch channel between the
/// controller's fetch tasks and the renderer.
pub trait ViewState: Clone + PartialEq + Default + Send + Sync + 'static {}
