//! Parabel in Scheitelpunktform: Punkt 0 ist der Scheitel, Punkt 1
//! bestimmt den Öffnungsfaktor. Die Rollen sind fest und tauschen nie.

use glam::DVec2;

use super::{common, GraphTool, PressOutcome};
use crate::core::{equations, GraphKind, GraphModel, GraphProperties, GraphSettings, GridMapper};
use crate::shared::{GrapherOptions, SceneCurve};

/// Index des Scheitelpunkts im Modell.
const VERTEX: usize = 0;
/// Index des Skalierungspunkts im Modell.
const POINT: usize = 1;

/// Strategie für quadratische Funktionen.
pub struct QuadraticGraph {
    dragging: Option<usize>,
}

impl QuadraticGraph {
    /// Erstellt die Strategie ohne aktive Session.
    pub fn new() -> Self {
        Self { dragging: None }
    }
}

impl Default for QuadraticGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphTool for QuadraticGraph {
    fn kind(&self) -> GraphKind {
        GraphKind::Quadratic
    }

    fn name(&self) -> &str {
        "Parabel"
    }

    fn on_press(
        &mut self,
        model: &mut GraphModel,
        mapper: &GridMapper,
        _settings: &GraphSettings,
        options: &GrapherOptions,
        grid_pos: DVec2,
    ) -> PressOutcome {
        // Scheitel und Punkt sind getrennte Pick-Gruppen mit fester
        // Identität; der Hit-Test wählt nur, welche gegriffen wird.
        match common::pick_point_index(
            &self.drag_targets(model),
            mapper,
            grid_pos,
            options.pick_radius_surface,
        ) {
            Some(index) => {
                self.dragging = Some(index);
                PressOutcome::DragStarted
            }
            None => PressOutcome::Missed,
        }
    }

    fn on_move(&mut self, model: &mut GraphModel, step_point: DVec2) -> bool {
        common::move_active_point(model, self.dragging, step_point)
    }

    fn on_release(&mut self) {
        self.dragging = None;
    }

    fn begin_drag_at(&mut self, index: usize) {
        self.dragging = Some(index);
    }

    fn active_index(&self) -> Option<usize> {
        self.dragging
    }

    fn properties(&self, model: &GraphModel, mapper: &GridMapper) -> GraphProperties {
        GraphProperties::Quadratic {
            vertex: mapper.snap_to_step(model.point(VERTEX)),
            point: mapper.snap_to_step(model.point(POINT)),
        }
    }

    fn curve(
        &self,
        model: &GraphModel,
        settings: &GraphSettings,
        options: &GrapherOptions,
    ) -> Option<SceneCurve> {
        let function = equations::quadratic_function(model.point(VERTEX), model.point(POINT));
        Some(SceneCurve {
            samples: common::sample_curve(function, settings),
            color: options.curve_color.clone(),
            dashed: false,
        })
    }
}
