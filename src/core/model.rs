//! Autoritativer Punkt-Speicher eines Graphen.
//!
//! Das Modell besitzt alle Kontrollpunkte und den Ungleichungs-Wert;
//! die Interaktion hält nur den Index des aktiven Punkts und schreibt
//! Mutationen direkt hierher.

use glam::DVec2;

use crate::core::Inequality;

/// Kontrollpunkte plus optionaler Ungleichungs-Wert.
///
/// Die Punktanzahl steht bei Konstruktion fest und ändert sich während
/// der Interaktion nicht.
#[derive(Debug, Clone)]
pub struct GraphModel {
    points: Vec<DVec2>,
    inequality: Option<Inequality>,
}

impl GraphModel {
    /// Erstellt das Modell aus den Startpunkten.
    pub fn new(starting_points: Vec<DVec2>, inequality: Option<Inequality>) -> Self {
        Self {
            points: starting_points,
            inequality,
        }
    }

    /// Alle Kontrollpunkte in fester Reihenfolge.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn der Graph keine Punkte hat (Scatter mit N=0).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Einzelner Kontrollpunkt per Index.
    ///
    /// # Panics
    /// Bei Index außerhalb der festen Punktanzahl.
    pub fn point(&self, index: usize) -> DVec2 {
        self.points[index]
    }

    /// Setzt den Kontrollpunkt am Index auf eine neue Position.
    pub fn set_point_at(&mut self, index: usize, point: DVec2) {
        self.points[index] = point;
    }

    /// Aktueller Ungleichungs-Wert (nur linear-inequality).
    pub fn inequality(&self) -> Option<Inequality> {
        self.inequality
    }

    /// Setzt den Ungleichungs-Wert.
    pub fn set_inequality(&mut self, inequality: Inequality) {
        self.inequality = Some(inequality);
    }
}
