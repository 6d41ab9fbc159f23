//! Application-Layer: Controller, Intents und Graph-Strategien.

/// Graph-Controller für zentrale Gesten-Verarbeitung
pub mod controller;
/// Trait-basierte Graph-Strategien (eine je Graph-Typ)
pub mod graphs;
/// Gesten-Intents aus UI/System
pub mod intent;

mod scene;

pub use controller::{GraphController, PointChangedCallback};
pub use graphs::{create_tool, GraphTool, PressOutcome};
pub use intent::{GraphIntent, NudgeDirection};
