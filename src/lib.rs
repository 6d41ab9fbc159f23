//! Grapher Library.
//! Interaktiver Kern für 2D-Funktionsgraphen mit greifbaren
//! Kontrollpunkten: Koordinaten-Transformation, Kurven-Fits und die
//! Drag/Keyboard-Interaktion als Library exportiert.

pub mod app;
pub mod core;
pub mod error;
pub mod shared;

pub use app::{
    create_tool, GraphController, GraphIntent, GraphTool, NudgeDirection, PointChangedCallback,
    PressOutcome,
};
pub use core::{
    GraphKind, GraphModel, GraphProperties, GraphSettings, GridMapper, Inequality, InequalitySide,
};
pub use error::GraphError;
pub use shared::{GraphScene, GrapherOptions};
