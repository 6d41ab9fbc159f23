//! Trait-basiertes Graph-Strategie-System: eine Implementierung je
//! Graph-Typ.
//!
//! Die Strategie wird einmal bei Konstruktion gewählt und danach nie
//! wieder über den Typ verzweigt. Jede Strategie hält ihre eigene
//! Drag-Session (Index des aktiven Punkts) und schreibt Mutationen
//! direkt ins [`GraphModel`](crate::core::GraphModel).

/// Gemeinsame Hilfsfunktionen für Graph-Strategien.
pub mod common;
/// Exponentialfunktion mit Vorzeichen-Invariante.
pub mod exponential;
/// Gerade durch zwei Punkte.
pub mod linear;
/// Gerade mit Halbebenen-Ungleichung.
pub mod linear_inequality;
/// Parabel in Scheitelpunktform.
pub mod quadratic;
/// Freie Punktwolke.
pub mod scatter_points;

mod graph_tool;

pub use graph_tool::GraphTool;

use crate::core::GraphKind;

/// Ergebnis eines Press — steuert, ob und was der Controller meldet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Punkt gegriffen, Drag-Session aktiv
    DragStarted,
    /// Ungleichung mutiert (Strenge oder Seite), keine Session
    InequalityChanged,
    /// Nichts in Reichweite
    Missed,
}

/// Erstellt die Strategie für den gegebenen Graph-Typ.
pub fn create_tool(kind: GraphKind) -> Box<dyn GraphTool> {
    match kind {
        GraphKind::Linear => Box::new(linear::LinearGraph::new()),
        GraphKind::LinearInequality => {
            Box::new(linear_inequality::LinearInequalityGraph::new())
        }
        GraphKind::Quadratic => Box::new(quadratic::QuadraticGraph::new()),
        GraphKind::Exponential => Box::new(exponential::ExponentialGraph::new()),
        GraphKind::ScatterPoints => Box::new(scatter_points::ScatterPointsGraph::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_returns_matching_kind() {
        for kind in [
            GraphKind::Linear,
            GraphKind::LinearInequality,
            GraphKind::Quadratic,
            GraphKind::Exponential,
            GraphKind::ScatterPoints,
        ] {
            assert_eq!(create_tool(kind).kind(), kind);
        }
    }
}
