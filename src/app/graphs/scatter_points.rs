//! Freie Punktwolke: N unabhängig greifbare Punkte, keine Kurve.

use glam::DVec2;

use super::{common, GraphTool, PressOutcome};
use crate::core::{GraphKind, GraphModel, GraphProperties, GraphSettings, GridMapper};
use crate::shared::{GrapherOptions, SceneCurve};

/// Strategie für Punktwolken.
pub struct ScatterPointsGraph {
    dragging: Option<usize>,
}

impl ScatterPointsGraph {
    /// Erstellt die Strategie ohne aktive Session.
    pub fn new() -> Self {
        Self { dragging: None }
    }
}

impl Default for ScatterPointsGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphTool for ScatterPointsGraph {
    fn kind(&self) -> GraphKind {
        GraphKind::ScatterPoints
    }

    fn name(&self) -> &str {
        "Punktwolke"
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
        GraphProperties::ScatterPoints {
            points: common::snapped_points(model, mapper),
        }
    }

    fn curve(
        &self,
        _model: &GraphModel,
        _settings: &GraphSettings,
        _options: &GrapherOptions,
    ) -> Option<SceneCurve> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GraphSettings;

    #[test]
    fn stacked_points_pick_exactly_one() {
        let settings = GraphSettings::defaults_for(GraphKind::ScatterPoints);
        let mapper = GridMapper::new(&settings, DVec2::new(200.0, 200.0));
        let mut model = GraphModel::new(settings.starting_points.clone(), None);
        let mut tool = ScatterPointsGraph::new();
        let options = GrapherOptions::default();

        // Fünf identische Punkte bei (0,0): genau einer wird gegriffen
        let outcome = tool.on_press(&mut model, &mapper, &settings, &options, DVec2::ZERO);
        assert_eq!(outcome, PressOutcome::DragStarted);

        tool.on_move(&mut model, DVec2::new(3.0, 3.0));
        tool.on_release();

        let moved = model
            .points()
            .iter()
            .filter(|p| **p == DVec2::new(3.0, 3.0))
            .count();
        assert_eq!(moved, 1);
        assert_eq!(
            model.points().iter().filter(|p| **p == DVec2::ZERO).count(),
            4
        );
    }

    #[test]
    fn scatter_has_no_curve() {
        let settings = GraphSettings::defaults_for(GraphKind::ScatterPoints);
        let model = GraphModel::new(settings.starting_points.clone(), None);
        let tool = ScatterPointsGraph::new();
        assert!(tool
            .curve(&model, &settings, &GrapherOptions::default())
            .is_none());
    }
}
