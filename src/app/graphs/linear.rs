//! Gerade durch zwei frei greifbare Punkte.

use glam::DVec2;

use super::{common, GraphTool, PressOutcome};
use crate::core::{equations, GraphKind, GraphModel, GraphProperties, GraphSettings, GridMapper};
use crate::shared::{GrapherOptions, SceneCurve};

/// Strategie für lineare Funktionen.
pub struct LinearGraph {
    dragging: Option<usize>,
}

impl LinearGraph {
    /// Erstellt die Strategie ohne aktive Session.
    pub fn new() -> Self {
        Self { dragging: None }
    }
}

impl Default for LinearGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphTool for LinearGraph {
    fn kind(&self) -> GraphKind {
        GraphKind::Linear
    }

    fn name(&self) -> &str {
        "Gerade"
    }

    fn on_press(
        &mut self,
        model: &mut GraphModel,
        mapper: &GridMapper,
        _settings: &GraphSettings,
        options: &GrapherOptions,
        grid_pos: DVec2,
    ) -> PressOutcome {
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
        GraphProperties::Linear {
            points: common::snapped_points(model, mapper),
        }
    }

    fn curve(
        &self,
        model: &GraphModel,
        settings: &GraphSettings,
        options: &GrapherOptions,
    ) -> Option<SceneCurve> {
        let function = equations::linear_function(model.point(0), model.point(1));
        Some(SceneCurve {
            samples: common::sample_curve(function, settings),
            color: options.curve_color.clone(),
            dashed: false,
        })
    }
}
