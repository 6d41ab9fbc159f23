//! GraphTool-Trait — Schnittstelle für alle Graph-Strategien.

use glam::DVec2;

use super::PressOutcome;
use crate::core::{GraphKind, GraphModel, GraphProperties, GraphSettings, GridMapper};
use crate::shared::{GrapherOptions, SceneCurve, SceneRegion};

/// Schnittstelle für alle Graph-Strategien (linear, quadratisch, …).
///
/// Strategien sind zustandsarm: sie halten nur den Index des aktiv
/// gegriffenen Punkts. Punkte und Ungleichung liegen im [`GraphModel`],
/// in das während einer Geste direkt geschrieben wird.
pub trait GraphTool {
    /// Graph-Typ dieser Strategie.
    fn kind(&self) -> GraphKind;

    /// Anzeigename für Logging.
    fn name(&self) -> &str;

    /// Grid-Positionen aller greifbaren Punkte (für den Drag-Hit-Test).
    fn drag_targets(&self, model: &GraphModel) -> Vec<DVec2> {
        model.points().to_vec()
    }

    /// Press verarbeiten: nächstgelegenen Punkt innerhalb des Pick-Radius
    /// greifen oder typ-spezifische Klick-Logik ausführen.
    ///
    /// `grid_pos` ist die Cursor-Position in Grid-Koordinaten.
    fn on_press(
        &mut self,
        model: &mut GraphModel,
        mapper: &GridMapper,
        settings: &GraphSettings,
        options: &GrapherOptions,
        grid_pos: DVec2,
    ) -> PressOutcome;

    /// Bewegt den aktiven Punkt auf die Commit-Position (geclampt und
    /// gesnappt) und wendet typ-spezifische Invarianten an.
    ///
    /// Gibt `true` zurück, wenn sich die Grid-Position tatsächlich
    /// geändert hat.
    fn on_move(&mut self, model: &mut GraphModel, step_point: DVec2) -> bool;

    /// Beendet die Drag-Session.
    fn on_release(&mut self);

    /// Startet eine Session direkt auf einem Punkt-Index (Keyboard-Nudge).
    fn begin_drag_at(&mut self, index: usize);

    /// Index des aktiven Punkts, falls eine Session läuft.
    fn active_index(&self) -> Option<usize>;

    /// Meldet der Host-Callback auch ohne Positionsänderung?
    ///
    /// Nur linear-inequality: dort feuert jeder Move einer aktiven
    /// Session, weil die gemeldete Eigenschaft die Ungleichung enthält.
    fn notify_even_without_move(&self) -> bool {
        false
    }

    /// Mathematische Eigenschaften; gemeldete Punkte sind aufs
    /// Schritt-Raster gerundet.
    fn properties(&self, model: &GraphModel, mapper: &GridMapper) -> GraphProperties;

    /// Kurven-Abtastung für die Szene (`None` bei Punktwolken).
    fn curve(
        &self,
        model: &GraphModel,
        settings: &GraphSettings,
        options: &GrapherOptions,
    ) -> Option<SceneCurve>;

    /// Polygon der erfüllenden Halbebene (nur linear-inequality).
    fn region(
        &self,
        _model: &GraphModel,
        _settings: &GraphSettings,
        _options: &GrapherOptions,
    ) -> Option<SceneRegion> {
        None
    }
}
