//! Koordinaten-Transformation zwischen Grid- und Surface-Raum.
//!
//! Grid-Koordinaten sind die mathematischen Einheiten des Graphen,
//! Surface-Koordinaten der Zielraum des Renderers. Beide Achsen werden
//! unabhängig skaliert; die y-Spiegelung ist Sache des Renderers und
//! findet hier bewusst nicht statt.

use glam::DVec2;

use crate::core::settings::GraphSettings;

/// Bidirektionale Grid↔Surface-Abbildung plus Clamping und Snapping.
#[derive(Debug, Clone, Copy)]
pub struct GridMapper {
    min_grid_x: f64,
    max_grid_x: f64,
    min_grid_y: f64,
    max_grid_y: f64,
    step_x: f64,
    step_y: f64,
    surface_size: DVec2,
}

impl GridMapper {
    /// Erstellt einen Mapper für die gegebenen Grid-Grenzen und Surface-Größe.
    pub fn new(settings: &GraphSettings, surface_size: DVec2) -> Self {
        Self {
            min_grid_x: settings.min_grid_x,
            max_grid_x: settings.max_grid_x,
            min_grid_y: settings.min_grid_y,
            max_grid_y: settings.max_grid_y,
            step_x: settings.step_x,
            step_y: settings.step_y,
            surface_size,
        }
    }

    /// Aktualisiert die Surface-Größe (Resize des Renderziels).
    pub fn set_surface_size(&mut self, surface_size: DVec2) {
        self.surface_size = surface_size;
    }

    /// Aktuelle Surface-Größe.
    pub fn surface_size(&self) -> DVec2 {
        self.surface_size
    }

    /// Konvertiert einen Grid-Punkt in Surface-Koordinaten.
    pub fn grid_to_surface(&self, point: DVec2) -> DVec2 {
        DVec2::new(
            point.x * self.surface_size.x / (self.max_grid_x - self.min_grid_x),
            point.y * self.surface_size.y / (self.max_grid_y - self.min_grid_y),
        )
    }

    /// Konvertiert einen Surface-Punkt in Grid-Koordinaten (exakte Umkehrung).
    pub fn surface_to_grid(&self, point: DVec2) -> DVec2 {
        DVec2::new(
            (self.max_grid_x - self.min_grid_x) / self.surface_size.x * point.x,
            (self.max_grid_y - self.min_grid_y) / self.surface_size.y * point.y,
        )
    }

    /// Rundet beide Koordinaten auf das nächste Vielfache der Schrittweite.
    pub fn snap_to_step(&self, point: DVec2) -> DVec2 {
        DVec2::new(
            (point.x / self.step_x).round() * self.step_x,
            (point.y / self.step_y).round() * self.step_y,
        )
    }

    /// Begrenzt beide Koordinaten auf die Grid-Grenzen.
    pub fn clamp_to_grid(&self, point: DVec2) -> DVec2 {
        DVec2::new(
            point.x.clamp(self.min_grid_x, self.max_grid_x),
            point.y.clamp(self.min_grid_y, self.max_grid_y),
        )
    }

    /// Commit-Position eines Drags: erst clampen, dann snappen.
    ///
    /// Die Reihenfolge hält den Punkt erst in den Grenzen und rastet ihn
    /// danach auf einen gültigen Schritt innerhalb der Grenzen ein.
    pub fn commit_point(&self, point: DVec2) -> DVec2 {
        self.snap_to_step(self.clamp_to_grid(point))
    }
}
