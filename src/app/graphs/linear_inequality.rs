//! Gerade mit Halbebenen-Ungleichung.
//!
//! Ein Press, der keinen Punkt greift, mutiert stattdessen die
//! Ungleichung: auf der Kurve wird die Strenge umgeschaltet, auf der
//! falschen Halbebene die Seite gewechselt. Moves einer aktiven Session
//! melden immer, weil die gemeldete Eigenschaft die Ungleichung enthält.

use glam::DVec2;

use super::{common, GraphTool, PressOutcome};
use crate::core::{
    equations, GraphKind, GraphModel, GraphProperties, GraphSettings, GridMapper, Inequality,
    InequalitySide,
};
use crate::shared::{GrapherOptions, SceneCurve, SceneRegion};

/// Strategie für lineare Ungleichungen.
pub struct LinearInequalityGraph {
    dragging: Option<usize>,
}

impl LinearInequalityGraph {
    /// Erstellt die Strategie ohne aktive Session.
    pub fn new() -> Self {
        Self { dragging: None }
    }

    /// Ungleichung aus dem Modell; die Setup-Validierung garantiert,
    /// dass sie vorhanden ist.
    fn inequality(model: &GraphModel) -> Inequality {
        model.inequality().unwrap_or(Inequality::Lt)
    }
}

impl Default for LinearInequalityGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphTool for LinearInequalityGraph {
    fn kind(&self) -> GraphKind {
        GraphKind::LinearInequality
    }

    fn name(&self) -> &str {
        "Gerade mit Halbebene"
    }

    fn on_press(
        &mut self,
        model: &mut GraphModel,
        mapper: &GridMapper,
        settings: &GraphSettings,
        options: &GrapherOptions,
        grid_pos: DVec2,
    ) -> PressOutcome {
        if let Some(index) = common::pick_point_index(
            &self.drag_targets(model),
            mapper,
            grid_pos,
            options.pick_radius_surface,
        ) {
            self.dragging = Some(index);
            return PressOutcome::DragStarted;
        }

        let function = equations::linear_function(model.point(0), model.point(1));
        let inequality = Self::inequality(model);

        if equations::is_point_close_to(&function, grid_pos, options.curve_tolerance(settings)) {
            // Klick auf der Grenzlinie: Strenge umschalten
            model.set_inequality(inequality.toggled_strictness());
            return PressOutcome::InequalityChanged;
        }

        let clicked_side = if equations::is_point_below(&function, grid_pos) {
            InequalitySide::LessThan
        } else {
            InequalitySide::GreaterThan
        };
        if clicked_side != inequality.side() {
            // Klick auf der nicht erfüllenden Halbebene: Seite wechseln
            model.set_inequality(inequality.flipped_side());
            return PressOutcome::InequalityChanged;
        }

        PressOutcome::Missed
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

    fn notify_even_without_move(&self) -> bool {
        true
    }

    fn properties(&self, model: &GraphModel, mapper: &GridMapper) -> GraphProperties {
        GraphProperties::LinearInequality {
            points: common::snapped_points(model, mapper),
            inequality: Self::inequality(model),
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
            dashed: Self::inequality(model).is_dashed(),
        })
    }

    fn region(
        &self,
        model: &GraphModel,
        settings: &GraphSettings,
        options: &GrapherOptions,
    ) -> Option<SceneRegion> {
        let function = equations::linear_function(model.point(0), model.point(1));
        let end_left = DVec2::new(settings.min_grid_x, function(settings.min_grid_x));
        let end_right = DVec2::new(settings.max_grid_x, function(settings.max_grid_x));

        // Ecken auf der erfüllenden Seite der Grid-Grenzen
        let corner_y = match Self::inequality(model).side() {
            InequalitySide::LessThan => settings.min_grid_y,
            InequalitySide::GreaterThan => settings.max_grid_y,
        };
        let corner_left = DVec2::new(settings.min_grid_x, corner_y);
        let corner_right = DVec2::new(settings.max_grid_x, corner_y);

        Some(SceneRegion {
            polygon: vec![end_left, corner_left, corner_right, end_right],
            color: options.region_color.clone(),
        })
    }
}
