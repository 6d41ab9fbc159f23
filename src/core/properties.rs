//! Ausgabe-Vertrag an den Host: Graph-Typ plus typ-spezifische Eigenschaft.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::{GraphKind, Inequality};

/// Mathematische Eigenschaften eines Graphen nach einer bestätigten Mutation.
///
/// Diskriminierte Union über den Graph-Typ; die gemeldeten Punkte sind auf
/// das Schritt-Raster gerundet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "graphType", content = "property", rename_all = "kebab-case")]
pub enum GraphProperties {
    /// Gerade: beide Kontrollpunkte
    Linear {
        /// Kontrollpunkte in Grid-Koordinaten
        points: Vec<DVec2>,
    },
    /// Parabel: Scheitel und Skalierungspunkt
    Quadratic {
        /// Scheitelpunkt
        vertex: DVec2,
        /// Punkt, der den Öffnungsfaktor bestimmt
        point: DVec2,
    },
    /// Exponentialfunktion: beide Kontrollpunkte
    Exponential {
        /// Kontrollpunkte in Grid-Koordinaten
        points: Vec<DVec2>,
    },
    /// Gerade mit Halbebene: Punkte plus Ungleichung
    LinearInequality {
        /// Kontrollpunkte in Grid-Koordinaten
        points: Vec<DVec2>,
        /// Aktuelle Ungleichung
        inequality: Inequality,
    },
    /// Punktwolke: alle Punkte
    ScatterPoints {
        /// Punkte in Grid-Koordinaten
        points: Vec<DVec2>,
    },
}

impl GraphProperties {
    /// Der Graph-Typ, zu dem diese Eigenschaften gehören.
    pub fn kind(&self) -> GraphKind {
        match self {
            GraphProperties::Linear { .. } => GraphKind::Linear,
            GraphProperties::Quadratic { .. } => GraphKind::Quadratic,
            GraphProperties::Exponential { .. } => GraphKind::Exponential,
            GraphProperties::LinearInequality { .. } => GraphKind::LinearInequality,
            GraphProperties::ScatterPoints { .. } => GraphKind::ScatterPoints,
        }
    }
}
