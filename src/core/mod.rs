//! Core-Domänentypen: Gleichungs-Fits, Koordinaten-Mapper, Punkt-Modell,
//! Graph-Typen und Einstellungen.

/// Geschlossene Kurven-Fits und Kurven-Prädikate
pub mod equations;
/// Ungleichungs-Wert (Seite × Strenge)
pub mod inequality;
/// Graph-Typ-Enum mit String-Parsing
pub mod kind;
/// Grid↔Surface-Transformation, Clamping, Snapping
pub mod mapper;
/// Autoritativer Punkt-Speicher
pub mod model;
/// Ausgabe-Vertrag an den Host
pub mod properties;
/// Host-Einstellungen inkl. Validierung
pub mod settings;

pub use equations::{ExponentialCoefficients, LinearCoefficients, QuadraticCoefficients};
pub use inequality::{Inequality, InequalitySide};
pub use kind::GraphKind;
pub use mapper::GridMapper;
pub use model::GraphModel;
pub use properties::GraphProperties;
pub use settings::GraphSettings;
