//! Zentrale Laufzeit-Konfiguration des Graph-Kerns.
//!
//! `GrapherOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::GraphSettings;

// ── Interaktion ─────────────────────────────────────────────────────

/// Pick-Radius in Surface-Einheiten: Press innerhalb dieses Radius greift
/// den nächstgelegenen Kontrollpunkt.
pub const PICK_RADIUS_SURFACE: f64 = 10.0;

// ── Kurven-Rendering ────────────────────────────────────────────────

/// Standard-Farbe der Kurve.
pub const CURVE_COLOR: &str = "blue";
/// Strichelung strikter Grenzlinien (Strich-Länge, Lücken-Länge).
pub const CURVE_DASH_PATTERN: [f64; 2] = [10.0, 5.0];

// ── Grid-Rendering ──────────────────────────────────────────────────

/// Farbe der Gitterlinien.
pub const GRID_LINE_COLOR: &str = "#eeeeee";
/// Farbe der beiden Achsen.
pub const AXIS_COLOR: &str = "black";

// ── Halbebenen-Rendering ────────────────────────────────────────────

/// Füllfarbe der erfüllenden Halbebene (durchgereicht an den Renderer).
pub const REGION_COLOR: &str = "rgba(0, 255, 0, 0.1)";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen des Graph-Kerns.
///
/// Pick-Radius und Kurven-Toleranz sind bewusst Konfiguration statt
/// eingebauter Konstanten; die Kurven-Toleranz fällt ohne Override auf
/// die y-Schrittweite des jeweiligen Graphen zurück.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrapherOptions {
    /// Pick-Radius für den Drag-Hit-Test in Surface-Einheiten
    pub pick_radius_surface: f64,
    /// Toleranz für "Klick auf der Kurve" in Grid-y-Einheiten
    /// (`None` = y-Schrittweite des Graphen)
    #[serde(default)]
    pub curve_tolerance_y: Option<f64>,
    /// Kurvenfarbe
    pub curve_color: String,
    /// Gitterlinien-Farbe
    pub grid_line_color: String,
    /// Achsen-Farbe
    pub axis_color: String,
    /// Füllfarbe der erfüllenden Halbebene
    pub region_color: String,
}

impl Default for GrapherOptions {
    fn default() -> Self {
        Self {
            pick_radius_surface: PICK_RADIUS_SURFACE,
            curve_tolerance_y: None,
            curve_color: CURVE_COLOR.to_string(),
            grid_line_color: GRID_LINE_COLOR.to_string(),
            axis_color: AXIS_COLOR.to_string(),
            region_color: REGION_COLOR.to_string(),
        }
    }
}

impl GrapherOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Effektive Kurven-Toleranz für den gegebenen Graphen.
    pub fn curve_tolerance(&self, settings: &GraphSettings) -> f64 {
        self.curve_tolerance_y.unwrap_or(settings.step_y)
    }
}
