//! Displayer trait and related types

use crate::snapshot::EngineSnapshot;

/// Trait for all displayers
///
/// Displayers are the consumers of the engine. They render the views of a
/// published snapshot and never trigger a refresh themselves, so any number
/// of them can read the same snapshot within one tick.
pub trait Displayer: Send + Sync {
    /// Unique identifier for this displayer type
    fn id(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Render the snapshot as text
    fn render(&self, snapshot: &EngineSnapshot) -> String;
}

/// Type-erased displayer for dynamic dispatch
pub type BoxedDisplayer = Box<dyn Displayer>;
