//! Exponentialfunktion mit fester Asymptote y=0.
//!
//! Kreuzt der gezogene Punkt die Asymptote, wird der y-Wert des anderen
//! Punkts negiert. Beide Punkte bleiben so immer auf derselben Seite der
//! Asymptote und der Fit `a * b^x` bleibt reell definiert.

use glam::DVec2;

use super::{common, GraphTool, PressOutcome};
use crate::core::{equations, GraphKind, GraphModel, GraphProperties, GraphSettings, GridMapper};
use crate::shared::{GrapherOptions, SceneCurve};

/// Asymptote des Systems (fest bei y=0).
pub const ASYMPTOTE_Y: f64 = 0.0;

/// Strategie für Exponentialfunktionen.
pub struct ExponentialGraph {
    dragging: Option<usize>,
}

impl ExponentialGraph {
    /// Erstellt die Strategie ohne aktive Session.
    pub fn new() -> Self {
        Self { dragging: None }
    }
}

impl Default for ExponentialGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphTool for ExponentialGraph {
    fn kind(&self) -> GraphKind {
        GraphKind::Exponential
    }

    fn name(&self) -> &str {
        "Exponentialkurve"
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
        if !common::move_active_point(model, self.dragging, step_point) {
            return false;
        }

        // Vorzeichen-Invariante: der andere Punkt folgt auf dieselbe
        // Seite der Asymptote, sobald der gezogene Punkt sie kreuzt.
        if let Some(active) = self.dragging {
            let other = 1 - active;
            let other_point = model.point(other);
            let crossed = (other_point.y > ASYMPTOTE_Y && step_point.y < ASYMPTOTE_Y)
                || (other_point.y < ASYMPTOTE_Y && step_point.y > ASYMPTOTE_Y);
            if crossed {
                model.set_point_at(other, DVec2::new(other_point.x, -other_point.y));
                log::debug!(
                    "Asymptoten-Kreuzung: Punkt {} auf y={} gespiegelt",
                    other,
                    -other_point.y
                );
            }
        }
        true
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
        GraphProperties::Exponential {
            points: common::snapped_points(model, mapper),
        }
    }

    fn curve(
        &self,
        model: &GraphModel,
        settings: &GraphSettings,
        options: &GrapherOptions,
    ) -> Option<SceneCurve> {
        let function =
            equations::exponential_function(ASYMPTOTE_Y, model.point(0), model.point(1));
        Some(SceneCurve {
            samples: common::sample_curve(function, settings),
            color: options.curve_color.clone(),
            dashed: false,
        })
    }
}
