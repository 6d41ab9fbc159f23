//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen und den Szenen-Vertrag, die zwischen
//! `app` und einem Renderer geteilt werden, um direkte Abhängigkeiten
//! zu vermeiden.

/// Laufzeit-Optionen und Default-Konstanten
pub mod options;
/// Render-Szene als Datenvertrag
pub mod render_scene;

pub use options::GrapherOptions;
pub use render_scene::{
    Axis, GraphScene, LabelAnchor, SceneCurve, SceneLabel, SceneLine, ScenePoint, SceneRegion,
    SceneTick,
};
