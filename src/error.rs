//! Fehlertypen für das Setup eines Graphen.
//!
//! Alle Varianten sind Setup-Zeit-Fehler und gehen als `Result` an den
//! Host zurück. Während einer Geste treten keine Fehler auf — degenerierte
//! Fits liefern IEEE-Werte (±inf/NaN) und die Kurve bleibt best-effort.

use thiserror::Error;

/// Fehler bei Konstruktion/Validierung eines Graphen.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Graph-Typ-String konnte nicht erkannt werden.
    #[error("Unbekannter Graph-Typ: {0}")]
    UnknownGraphType(String),

    /// linear-inequality ohne Anfangs-Ungleichung konstruiert.
    #[error("Graph-Einstellungen enthalten keine Ungleichung")]
    MissingInequality,

    /// Zwei Kontrollpunkte teilen sich die x-Koordinate, wo der Fit
    /// verschiedene x verlangt.
    #[error("Degenerierte Kontrollpunkte: {0}")]
    DegenerateInput(String),

    /// Grid-Grenzen, Schrittweiten oder Startpunkte sind ungültig.
    #[error("Ungültige Graph-Einstellungen: {0}")]
    InvalidSettings(String),
}
