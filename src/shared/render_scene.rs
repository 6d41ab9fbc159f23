//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Alle Geometrie liegt in Grid-Koordinaten; der Renderer mappt sie über
//! den [`GridMapper`](crate::core::GridMapper) in seinen Zielraum. Damit
//! bleiben Hit-Test und Zeichnung auf derselben Transformation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Achsen-Bezeichner für Ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontale Achse
    X,
    /// Vertikale Achse
    Y,
}

/// Ankerseiten einer Achsen-Beschriftung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelAnchor {
    /// Oberhalb des Ankerpunkts
    Top,
    /// Unterhalb des Ankerpunkts
    Bottom,
    /// Links vom Ankerpunkt
    Left,
    /// Rechts vom Ankerpunkt
    Right,
}

/// Gerades Liniensegment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLine {
    /// Startpunkt
    pub from: DVec2,
    /// Endpunkt
    pub to: DVec2,
    /// Linienfarbe (durchgereicht)
    pub color: String,
}

/// Darstellbarer Kontrollpunkt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    /// Position in Grid-Koordinaten
    pub position: DVec2,
    /// Radius in Surface-Einheiten
    pub radius: f64,
    /// Füllfarbe (durchgereicht)
    pub color: String,
}

/// Abgetastete Kurve.
///
/// NaN-Samples sind zulässig (degenerierter Fit während eines Drags);
/// der Renderer überspringt sie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneCurve {
    /// Stützpunkte von `min_grid_x` bis `max_grid_x` in `step_x`-Schritten
    pub samples: Vec<DVec2>,
    /// Linienfarbe
    pub color: String,
    /// Gestrichelt (strikte Ungleichung)?
    pub dashed: bool,
}

/// Gefülltes Polygon der erfüllenden Halbebene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRegion {
    /// Eckpunkte im Umlaufsinn
    pub polygon: Vec<DVec2>,
    /// Füllfarbe
    pub color: String,
}

/// Achsen-Beschriftung (Min/Max-Werte).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLabel {
    /// Ankerpunkt in Grid-Koordinaten
    pub position: DVec2,
    /// Anzeigetext
    pub text: String,
    /// Ankerseiten relativ zum Punkt
    pub anchors: Vec<LabelAnchor>,
}

/// Tick-Markierung an einer Achse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneTick {
    /// Position in Grid-Koordinaten
    pub position: DVec2,
    /// Achse, auf der der Tick liegt
    pub axis: Axis,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphScene {
    /// Gitterlinien (ohne die Achsen selbst)
    pub grid_lines: Vec<SceneLine>,
    /// Die beiden Achsen
    pub axis_lines: Vec<SceneLine>,
    /// Min/Max-Beschriftungen (nur wenn konfiguriert)
    pub labels: Vec<SceneLabel>,
    /// Tick-Markierungen zu den Beschriftungen
    pub ticks: Vec<SceneTick>,
    /// Kontrollpunkte in Zeichenreihenfolge
    pub points: Vec<ScenePoint>,
    /// Kurve (fehlt bei Punktwolken)
    pub curve: Option<SceneCurve>,
    /// Erfüllende Halbebene (nur linear-inequality)
    pub region: Option<SceneRegion>,
}
