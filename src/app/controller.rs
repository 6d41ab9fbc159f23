//! Graph-Controller für zentrale Gesten-Verarbeitung.
//!
//! Pro Graph-Instanz ein eigener Controller ohne versteckten globalen
//! Zustand. Alle Intents werden synchron verarbeitet; der Host-Callback
//! feuert im selben Aufruf wie das auslösende Event.

use glam::DVec2;

use super::graphs::{self, GraphTool, PressOutcome};
use super::intent::{GraphIntent, NudgeDirection};
use super::scene;
use crate::core::{GraphKind, GraphModel, GraphProperties, GraphSettings, GridMapper};
use crate::error::GraphError;
use crate::shared::{GraphScene, GrapherOptions};

/// Host-Callback: bewegter Punkt (Grid-Position) plus aktualisierte
/// Eigenschaften. `None` ist für Mutationen ohne zugehörigen Punkt
/// reserviert; im aktuellen Umfang immer `Some`.
pub type PointChangedCallback = Box<dyn FnMut(Option<DVec2>, &GraphProperties)>;

/// Orchestriert Gesten-Intents auf Modell, Mapper und Strategie.
pub struct GraphController {
    settings: GraphSettings,
    options: GrapherOptions,
    mapper: GridMapper,
    model: GraphModel,
    tool: Box<dyn GraphTool>,
    focused_point: Option<usize>,
    on_point_changed: PointChangedCallback,
}

impl std::fmt::Debug for GraphController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphController")
            .field("settings", &self.settings)
            .field("options", &self.options)
            .field("mapper", &self.mapper)
            .field("model", &self.model)
            .field("tool", &self.tool.name())
            .field("focused_point", &self.focused_point)
            .finish()
    }
}

impl GraphController {
    /// Erstellt einen Controller für den gegebenen Graph-Typ.
    ///
    /// Validiert die Einstellungen; alle Fehler sind fatal und gehen an
    /// den Host zurück.
    pub fn new(
        kind: GraphKind,
        settings: GraphSettings,
        options: GrapherOptions,
        surface_size: DVec2,
        on_point_changed: PointChangedCallback,
    ) -> Result<Self, GraphError> {
        settings.validate(kind)?;

        let mapper = GridMapper::new(&settings, surface_size);
        let model = GraphModel::new(settings.starting_points.clone(), settings.inequality);
        let tool = graphs::create_tool(kind);
        log::info!(
            "Graph erstellt: {} ({} Punkte, interaktiv: {})",
            tool.name(),
            model.len(),
            settings.can_interact
        );

        Ok(Self {
            settings,
            options,
            mapper,
            model,
            tool,
            focused_point: None,
            on_point_changed,
        })
    }

    /// Wie [`GraphController::new`], mit Graph-Typ als Host-String
    /// (z.B. `"linear-inequality"`).
    pub fn from_type_name(
        type_name: &str,
        settings: GraphSettings,
        options: GrapherOptions,
        surface_size: DVec2,
        on_point_changed: PointChangedCallback,
    ) -> Result<Self, GraphError> {
        let kind: GraphKind = type_name.parse()?;
        Self::new(kind, settings, options, surface_size, on_point_changed)
    }

    /// Graph-Typ dieses Controllers.
    pub fn kind(&self) -> GraphKind {
        self.tool.kind()
    }

    /// Aktive Einstellungen.
    pub fn settings(&self) -> &GraphSettings {
        &self.settings
    }

    /// Aktueller Koordinaten-Mapper (gemeinsamer Vertrag mit dem Renderer).
    pub fn mapper(&self) -> &GridMapper {
        &self.mapper
    }

    /// Punkt-Modell (read-only; Mutationen laufen über Intents).
    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    /// Aktuell fokussierter Punkt für Keyboard-Nudges.
    pub fn focused_point(&self) -> Option<usize> {
        self.focused_point
    }

    /// Aktuelle mathematische Eigenschaften.
    pub fn properties(&self) -> GraphProperties {
        self.tool.properties(&self.model, &self.mapper)
    }

    /// Baut die Render-Szene aus dem aktuellen Zustand.
    pub fn scene(&self) -> GraphScene {
        scene::build(
            &self.settings,
            &self.options,
            &self.model,
            self.tool.as_ref(),
        )
    }

    /// Verarbeitet einen Intent synchron.
    ///
    /// Gesten-Intents werden bei `can_interact == false` vollständig
    /// ignoriert; Resize wirkt immer.
    pub fn handle_intent(&mut self, intent: GraphIntent) {
        match intent {
            GraphIntent::SurfaceResized { size } => self.mapper.set_surface_size(size),
            _ if !self.settings.can_interact => {
                log::debug!("Geste ignoriert: Graph ist nicht interaktiv");
            }
            GraphIntent::DragStartRequested { surface_pos } => self.press(surface_pos),
            GraphIntent::DragMoveRequested { surface_pos } => self.drag_move(surface_pos),
            GraphIntent::DragEndRequested { surface_pos } => self.release(surface_pos),
            GraphIntent::NudgeRequested { direction } => self.nudge(direction),
            GraphIntent::PointFocusRequested { index } => self.focus(index),
            GraphIntent::FocusClearRequested => self.focused_point = None,
        }
    }

    /// Press: Punkt greifen (mit sofortigem Commit-Schritt) oder
    /// Ungleichungs-Klick auswerten.
    fn press(&mut self, surface_pos: DVec2) {
        if self.tool.active_index().is_some() {
            // Doppel-Press während laufender Session: bewusst ignoriert
            log::debug!("Press während aktiver Drag-Session ignoriert");
            return;
        }

        let grid_pos = self.mapper.surface_to_grid(surface_pos);
        let outcome = self.tool.on_press(
            &mut self.model,
            &self.mapper,
            &self.settings,
            &self.options,
            grid_pos,
        );
        match outcome {
            PressOutcome::DragStarted => self.move_and_notify(grid_pos),
            PressOutcome::InequalityChanged => {
                let step_point = self.mapper.commit_point(grid_pos);
                self.notify(step_point);
            }
            PressOutcome::Missed => {}
        }
    }

    /// Move einer aktiven Session.
    fn drag_move(&mut self, surface_pos: DVec2) {
        if self.tool.active_index().is_none() {
            return;
        }
        let grid_pos = self.mapper.surface_to_grid(surface_pos);
        self.move_and_notify(grid_pos);
    }

    /// Release: letzter Move-Schritt mit der letzten Cursor-Position,
    /// danach Session beenden. Ein Release außerhalb der Surface läuft
    /// identisch.
    fn release(&mut self, surface_pos: DVec2) {
        if self.tool.active_index().is_some() {
            let grid_pos = self.mapper.surface_to_grid(surface_pos);
            self.move_and_notify(grid_pos);
        }
        self.tool.on_release();
    }

    /// Keyboard-Nudge: atomar Press+Move+Release auf dem fokussierten
    /// Punkt, verschoben um genau eine Schrittweite.
    fn nudge(&mut self, direction: NudgeDirection) {
        let Some(index) = self.focused_point else {
            log::debug!("Nudge ignoriert: kein Punkt fokussiert");
            return;
        };

        let delta = match direction {
            NudgeDirection::Up => DVec2::new(0.0, self.settings.step_y),
            NudgeDirection::Down => DVec2::new(0.0, -self.settings.step_y),
            NudgeDirection::Left => DVec2::new(-self.settings.step_x, 0.0),
            NudgeDirection::Right => DVec2::new(self.settings.step_x, 0.0),
        };
        let target = self.model.point(index) + delta;

        self.tool.begin_drag_at(index);
        self.move_and_notify(target);
        self.tool.on_release();
    }

    /// Setzt den Keyboard-Fokus auf einen gültigen Punkt-Index.
    fn focus(&mut self, index: usize) {
        if index < self.model.len() {
            self.focused_point = Some(index);
        } else {
            log::warn!(
                "Fokus-Index {} außerhalb der Punktanzahl {}",
                index,
                self.model.len()
            );
        }
    }

    /// Gemeinsamer Commit-Schritt: clampen, snappen, Strategie bewegen,
    /// bei Änderung melden (linear-inequality meldet jede aktive Session).
    fn move_and_notify(&mut self, grid_pos: DVec2) {
        let step_point = self.mapper.commit_point(grid_pos);
        let moved = self.tool.on_move(&mut self.model, step_point);
        let session_active = self.tool.active_index().is_some();
        if moved || (session_active && self.tool.notify_even_without_move()) {
            self.notify(step_point);
        }
    }

    fn notify(&mut self, moving_point: DVec2) {
        let properties = self.tool.properties(&self.model, &self.mapper);
        (self.on_point_changed)(Some(moving_point), &properties);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Inequality;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Recorded = Rc<RefCell<Vec<(Option<DVec2>, GraphProperties)>>>;

    fn recording_callback() -> (Recorded, PointChangedCallback) {
        let recorded: Recorded = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&recorded);
        let callback: PointChangedCallback = Box::new(move |moving, props| {
            sink.borrow_mut().push((moving, props.clone()));
        });
        (recorded, callback)
    }

    /// Surface-Größe 200×200 bei Grid ±10 → 10 Surface-Einheiten pro Grid-Einheit.
    const SURFACE: DVec2 = DVec2::new(200.0, 200.0);

    fn surface_of(controller: &GraphController, grid: DVec2) -> DVec2 {
        controller.mapper().grid_to_surface(grid)
    }

    fn linear_controller() -> (GraphController, Recorded) {
        let (recorded, callback) = recording_callback();
        let controller = GraphController::new(
            GraphKind::Linear,
            GraphSettings::defaults_for(GraphKind::Linear),
            GrapherOptions::default(),
            SURFACE,
            callback,
        )
        .expect("Setup sollte gelingen");
        (controller, recorded)
    }

    #[test]
    fn linear_drag_scenario_reports_moved_points() {
        let (mut controller, recorded) = linear_controller();

        let press = surface_of(&controller, DVec2::new(-1.0, -1.0));
        controller.handle_intent(GraphIntent::DragStartRequested { surface_pos: press });
        let target = surface_of(&controller, DVec2::new(-2.0, -3.0));
        controller.handle_intent(GraphIntent::DragMoveRequested { surface_pos: target });
        controller.handle_intent(GraphIntent::DragEndRequested { surface_pos: target });

        let recorded = recorded.borrow();
        let (moving, props) = recorded.last().expect("Callback erwartet");
        assert_eq!(*moving, Some(DVec2::new(-2.0, -3.0)));
        assert_eq!(
            *props,
            GraphProperties::Linear {
                points: vec![DVec2::new(-2.0, -3.0), DVec2::new(1.0, 1.0)],
            }
        );
    }

    #[test]
    fn noop_move_is_suppressed() {
        let (mut controller, recorded) = linear_controller();

        let press = surface_of(&controller, DVec2::new(-1.0, -1.0));
        controller.handle_intent(GraphIntent::DragStartRequested { surface_pos: press });
        // Press committet auf die aktuelle Position → kein Callback
        assert!(recorded.borrow().is_empty());

        // Move auf exakt dieselbe Grid-Position → weiterhin kein Callback
        controller.handle_intent(GraphIntent::DragMoveRequested { surface_pos: press });
        controller.handle_intent(GraphIntent::DragEndRequested { surface_pos: press });
        assert!(recorded.borrow().is_empty());
    }

    #[test]
    fn move_without_press_does_nothing() {
        let (mut controller, recorded) = linear_controller();
        let pos = surface_of(&controller, DVec2::new(-2.0, -3.0));
        controller.handle_intent(GraphIntent::DragMoveRequested { surface_pos: pos });
        controller.handle_intent(GraphIntent::DragEndRequested { surface_pos: pos });

        assert!(recorded.borrow().is_empty());
        assert_eq!(controller.model().point(0), DVec2::new(-1.0, -1.0));
    }

    #[test]
    fn second_press_during_session_is_ignored() {
        let (mut controller, _recorded) = linear_controller();

        let press = surface_of(&controller, DVec2::new(-1.0, -1.0));
        controller.handle_intent(GraphIntent::DragStartRequested { surface_pos: press });

        // Zweiter Press auf dem anderen Punkt ändert die Session nicht
        let second = surface_of(&controller, DVec2::new(1.0, 1.0));
        controller.handle_intent(GraphIntent::DragStartRequested { surface_pos: second });

        let target = surface_of(&controller, DVec2::new(-4.0, -4.0));
        controller.handle_intent(GraphIntent::DragMoveRequested { surface_pos: target });
        assert_eq!(controller.model().point(0), DVec2::new(-4.0, -4.0));
        assert_eq!(controller.model().point(1), DVec2::new(1.0, 1.0));
    }

    #[test]
    fn cursor_outside_grid_is_clamped_then_snapped() {
        let (mut controller, recorded) = linear_controller();

        let press = surface_of(&controller, DVec2::new(1.0, 1.0));
        controller.handle_intent(GraphIntent::DragStartRequested { surface_pos: press });
        // Weit außerhalb der Surface
        let target = surface_of(&controller, DVec2::new(40.0, -23.0));
        controller.handle_intent(GraphIntent::DragEndRequested { surface_pos: target });

        let recorded = recorded.borrow();
        let (moving, _) = recorded.last().expect("Callback erwartet");
        assert_eq!(*moving, Some(DVec2::new(10.0, -10.0)));
    }

    #[test]
    fn non_interactive_graph_ignores_gestures() {
        let (recorded, callback) = recording_callback();
        let mut controller = GraphController::new(
            GraphKind::Linear,
            GraphSettings {
                can_interact: false,
                ..GraphSettings::defaults_for(GraphKind::Linear)
            },
            GrapherOptions::default(),
            SURFACE,
            callback,
        )
        .expect("Setup sollte gelingen");

        let press = surface_of(&controller, DVec2::new(-1.0, -1.0));
        controller.handle_intent(GraphIntent::DragStartRequested { surface_pos: press });
        let target = surface_of(&controller, DVec2::new(3.0, 3.0));
        controller.handle_intent(GraphIntent::DragMoveRequested { surface_pos: target });

        assert!(recorded.borrow().is_empty());
        assert_eq!(controller.model().point(0), DVec2::new(-1.0, -1.0));

        // Resize wirkt trotzdem
        controller.handle_intent(GraphIntent::SurfaceResized {
            size: DVec2::new(400.0, 400.0),
        });
        assert_eq!(controller.mapper().surface_size(), DVec2::new(400.0, 400.0));
    }

    #[test]
    fn nudge_moves_focused_point_by_one_step() {
        let (mut controller, recorded) = linear_controller();

        controller.handle_intent(GraphIntent::PointFocusRequested { index: 1 });
        controller.handle_intent(GraphIntent::NudgeRequested {
            direction: NudgeDirection::Up,
        });

        assert_eq!(controller.model().point(1), DVec2::new(1.0, 2.0));
        let recorded = recorded.borrow();
        let (moving, _) = recorded.last().expect("Callback erwartet");
        assert_eq!(*moving, Some(DVec2::new(1.0, 2.0)));
    }

    #[test]
    fn nudge_at_grid_edge_clamps() {
        let (mut controller, _recorded) = linear_controller();

        controller.handle_intent(GraphIntent::PointFocusRequested { index: 1 });
        for _ in 0..15 {
            controller.handle_intent(GraphIntent::NudgeRequested {
                direction: NudgeDirection::Right,
            });
        }
        assert_eq!(controller.model().point(1), DVec2::new(10.0, 1.0));
    }

    #[test]
    fn nudge_without_focus_is_ignored() {
        let (mut controller, recorded) = linear_controller();
        controller.handle_intent(GraphIntent::NudgeRequested {
            direction: NudgeDirection::Left,
        });
        assert!(recorded.borrow().is_empty());
    }

    #[test]
    fn focus_index_out_of_range_is_rejected() {
        let (mut controller, _recorded) = linear_controller();
        controller.handle_intent(GraphIntent::PointFocusRequested { index: 7 });
        assert_eq!(controller.focused_point(), None);
    }

    #[test]
    fn exponential_drag_applies_sign_invariant() {
        let (recorded, callback) = recording_callback();
        let mut controller = GraphController::new(
            GraphKind::Exponential,
            GraphSettings::defaults_for(GraphKind::Exponential),
            GrapherOptions::default(),
            SURFACE,
            callback,
        )
        .expect("Setup sollte gelingen");

        let press = surface_of(&controller, DVec2::new(0.0, 1.0));
        controller.handle_intent(GraphIntent::DragStartRequested { surface_pos: press });
        let target = surface_of(&controller, DVec2::new(0.0, -1.0));
        controller.handle_intent(GraphIntent::DragEndRequested { surface_pos: target });

        let recorded = recorded.borrow();
        let (_, props) = recorded.last().expect("Callback erwartet");
        assert_eq!(
            *props,
            GraphProperties::Exponential {
                points: vec![DVec2::new(0.0, -1.0), DVec2::new(2.0, -4.0)],
            }
        );
    }

    #[test]
    fn inequality_toggle_fires_callback_with_new_value() {
        let (recorded, callback) = recording_callback();
        let mut controller = GraphController::new(
            GraphKind::LinearInequality,
            GraphSettings::defaults_for(GraphKind::LinearInequality),
            GrapherOptions::default(),
            SURFACE,
            callback,
        )
        .expect("Setup sollte gelingen");

        // Press exakt auf der Geraden y = x, weit weg von beiden Punkten
        let press = surface_of(&controller, DVec2::new(5.0, 5.0));
        controller.handle_intent(GraphIntent::DragStartRequested { surface_pos: press });

        let recorded_now = recorded.borrow();
        let (_, props) = recorded_now.last().expect("Callback erwartet");
        match props {
            GraphProperties::LinearInequality { inequality, .. } => {
                assert_eq!(*inequality, Inequality::Le);
            }
            other => panic!("Unerwartete Eigenschaften: {other:?}"),
        }
    }

    #[test]
    fn inequality_drag_fires_on_every_move() {
        let (recorded, callback) = recording_callback();
        let mut controller = GraphController::new(
            GraphKind::LinearInequality,
            GraphSettings::defaults_for(GraphKind::LinearInequality),
            GrapherOptions::default(),
            SURFACE,
            callback,
        )
        .expect("Setup sollte gelingen");

        let press = surface_of(&controller, DVec2::new(-1.0, -1.0));
        controller.handle_intent(GraphIntent::DragStartRequested { surface_pos: press });
        // No-op-Move: feuert trotzdem, weil die Session aktiv ist
        controller.handle_intent(GraphIntent::DragMoveRequested { surface_pos: press });
        controller.handle_intent(GraphIntent::DragEndRequested { surface_pos: press });

        assert_eq!(recorded.borrow().len(), 3);
    }

    #[test]
    fn unknown_type_name_fails_at_setup() {
        let (_recorded, callback) = recording_callback();
        let err = GraphController::from_type_name(
            "cubic",
            GraphSettings::defaults_for(GraphKind::Linear),
            GrapherOptions::default(),
            SURFACE,
            callback,
        )
        .unwrap_err();
        assert_eq!(err, GraphError::UnknownGraphType("cubic".to_string()));
    }

    #[test]
    fn missing_inequality_fails_at_setup() {
        let (_recorded, callback) = recording_callback();
        let mut settings = GraphSettings::defaults_for(GraphKind::LinearInequality);
        settings.inequality = None;
        let err = GraphController::new(
            GraphKind::LinearInequality,
            settings,
            GrapherOptions::default(),
            SURFACE,
            callback,
        )
        .unwrap_err();
        assert_eq!(err, GraphError::MissingInequality);
    }
}
