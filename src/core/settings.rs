//! Host-seitige Graph-Einstellungen: Grid-Grenzen, Schrittweiten,
//! Startpunkte und Darstellungswerte.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::equations;
use crate::core::{GraphKind, Inequality};
use crate::error::GraphError;

/// Standard-Grid-Grenze (symmetrisch ±10).
pub const DEFAULT_MIN_GRID_X: f64 = -10.0;
/// Standard-Grid-Grenze.
pub const DEFAULT_MAX_GRID_X: f64 = 10.0;
/// Standard-Grid-Grenze.
pub const DEFAULT_MIN_GRID_Y: f64 = -10.0;
/// Standard-Grid-Grenze.
pub const DEFAULT_MAX_GRID_Y: f64 = 10.0;
/// Standard-Schrittweite beider Achsen.
pub const DEFAULT_STEP: f64 = 1.0;
/// Standard-Radius der Kontrollpunkte (Surface-Einheiten, nur Darstellung).
pub const DEFAULT_POINT_SIZE: f64 = 5.0;
/// Standard-Farbpalette der Kontrollpunkte (Hex, unverändert durchgereicht).
pub const DEFAULT_POINT_COLORS: [&str; 5] =
    ["#35605A", "#FF9F1C", "#4357AD", "#767522", "#643173"];

/// Vom Host gelieferte Einstellungen eines Graphen.
///
/// Darstellungswerte (`point_size`, `point_colors`) werden unverändert an
/// die Szene durchgereicht; der Kern interpretiert sie nicht.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSettings {
    /// Linke Grid-Grenze
    pub min_grid_x: f64,
    /// Rechte Grid-Grenze
    pub max_grid_x: f64,
    /// Untere Grid-Grenze
    pub min_grid_y: f64,
    /// Obere Grid-Grenze
    pub max_grid_y: f64,
    /// Schrittweite x (> 0)
    pub step_x: f64,
    /// Schrittweite y (> 0)
    pub step_y: f64,
    /// Startpositionen der Kontrollpunkte (Anzahl je Graph-Typ fix)
    pub starting_points: Vec<DVec2>,
    /// Punktfarben (zyklisch auf die Punkte verteilt)
    pub point_colors: Vec<String>,
    /// Punktradius in Surface-Einheiten
    pub point_size: f64,
    /// Anfangs-Ungleichung (nur bei linear-inequality vorhanden)
    #[serde(default)]
    pub inequality: Option<Inequality>,
    /// Min/Max-Beschriftungen an den Achsen zeichnen
    #[serde(default)]
    pub show_bounding_labels: bool,
    /// Gesten-Verarbeitung aktiv? `false` = reiner Anzeige-Graph
    pub can_interact: bool,
}

impl GraphSettings {
    /// Standard-Einstellungen mit den typischen Startpunkten je Graph-Typ.
    pub fn defaults_for(kind: GraphKind) -> Self {
        let starting_points = match kind {
            GraphKind::Linear | GraphKind::LinearInequality => {
                vec![DVec2::new(-1.0, -1.0), DVec2::new(1.0, 1.0)]
            }
            GraphKind::Quadratic => vec![DVec2::new(0.0, 0.0), DVec2::new(5.0, 5.0)],
            GraphKind::Exponential => vec![DVec2::new(0.0, 1.0), DVec2::new(2.0, 4.0)],
            GraphKind::ScatterPoints => vec![DVec2::new(0.0, 0.0); 5],
        };
        let inequality = match kind {
            GraphKind::LinearInequality => Some(Inequality::Lt),
            _ => None,
        };

        Self {
            min_grid_x: DEFAULT_MIN_GRID_X,
            max_grid_x: DEFAULT_MAX_GRID_X,
            min_grid_y: DEFAULT_MIN_GRID_Y,
            max_grid_y: DEFAULT_MAX_GRID_Y,
            step_x: DEFAULT_STEP,
            step_y: DEFAULT_STEP,
            starting_points,
            point_colors: DEFAULT_POINT_COLORS.iter().map(|c| c.to_string()).collect(),
            point_size: DEFAULT_POINT_SIZE,
            inequality,
            show_bounding_labels: false,
            can_interact: true,
        }
    }

    /// Prüft Grenzen, Schrittweiten, Punktanzahl und Ungleichungs-Präsenz
    /// für den gegebenen Graph-Typ.
    pub fn validate(&self, kind: GraphKind) -> Result<(), GraphError> {
        if self.min_grid_x >= self.max_grid_x {
            return Err(GraphError::InvalidSettings(format!(
                "min_grid_x ({}) muss kleiner als max_grid_x ({}) sein",
                self.min_grid_x, self.max_grid_x
            )));
        }
        if self.min_grid_y >= self.max_grid_y {
            return Err(GraphError::InvalidSettings(format!(
                "min_grid_y ({}) muss kleiner als max_grid_y ({}) sein",
                self.min_grid_y, self.max_grid_y
            )));
        }
        if self.step_x <= 0.0 || self.step_y <= 0.0 {
            return Err(GraphError::InvalidSettings(format!(
                "Schrittweiten müssen positiv sein (step_x = {}, step_y = {})",
                self.step_x, self.step_y
            )));
        }

        match kind {
            GraphKind::ScatterPoints => {}
            _ => {
                if self.starting_points.len() != 2 {
                    return Err(GraphError::InvalidSettings(format!(
                        "{} erwartet 2 Startpunkte, {} übergeben",
                        kind,
                        self.starting_points.len()
                    )));
                }
            }
        }

        match kind {
            GraphKind::LinearInequality => {
                if self.inequality.is_none() {
                    return Err(GraphError::MissingInequality);
                }
            }
            _ => {
                if self.inequality.is_some() {
                    return Err(GraphError::InvalidSettings(format!(
                        "{} akzeptiert keine Ungleichung",
                        kind
                    )));
                }
            }
        }

        // Funktions-Fits brauchen verschiedene Start-x; Scatter nicht.
        match kind {
            GraphKind::Linear | GraphKind::LinearInequality => {
                equations::try_linear_coefficients(
                    self.starting_points[0],
                    self.starting_points[1],
                )?;
            }
            GraphKind::Quadratic => {
                equations::try_quadratic_coefficients(
                    self.starting_points[0],
                    self.starting_points[1],
                )?;
            }
            GraphKind::Exponential => {
                equations::try_exponential_coefficients(
                    0.0,
                    self.starting_points[0],
                    self.starting_points[1],
                )?;
            }
            GraphKind::ScatterPoints => {}
        }

        Ok(())
    }
}
