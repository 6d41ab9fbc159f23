//! Baut die Render-Szene aus dem aktuellen Graph-Zustand.
//!
//! Alle Geometrie liegt in Grid-Koordinaten; der Renderer mappt über den
//! [`GridMapper`](crate::core::GridMapper).

use glam::DVec2;

use super::graphs::GraphTool;
use crate::core::settings::DEFAULT_POINT_COLORS;
use crate::core::{GraphModel, GraphSettings};
use crate::shared::{
    Axis, GraphScene, GrapherOptions, LabelAnchor, SceneLabel, SceneLine, ScenePoint, SceneTick,
};

/// Baut die komplette Szene: Grid, Achsen, Beschriftungen, Punkte,
/// Kurve und Halbebene.
pub(crate) fn build(
    settings: &GraphSettings,
    options: &GrapherOptions,
    model: &GraphModel,
    tool: &dyn GraphTool,
) -> GraphScene {
    let mut scene = GraphScene {
        curve: tool.curve(model, settings, options),
        region: tool.region(model, settings, options),
        ..GraphScene::default()
    };

    build_grid(&mut scene, settings, options);
    build_points(&mut scene, settings, model);
    scene
}

/// Gitterlinien, Achsen und optionale Min/Max-Beschriftungen.
fn build_grid(scene: &mut GraphScene, settings: &GraphSettings, options: &GrapherOptions) {
    let min_x_axis = DVec2::new(settings.min_grid_x, 0.0);
    let max_x_axis = DVec2::new(settings.max_grid_x, 0.0);
    let min_y_axis = DVec2::new(0.0, settings.min_grid_y);
    let max_y_axis = DVec2::new(0.0, settings.max_grid_y);

    let mut x = settings.min_grid_x;
    while x < settings.max_grid_x {
        if x != 0.0 {
            scene.grid_lines.push(SceneLine {
                from: DVec2::new(x, settings.min_grid_y),
                to: DVec2::new(x, settings.max_grid_y),
                color: options.grid_line_color.clone(),
            });
        }
        x += settings.step_x;
    }

    let mut y = settings.min_grid_y;
    while y < settings.max_grid_y {
        if y != 0.0 {
            scene.grid_lines.push(SceneLine {
                from: DVec2::new(settings.min_grid_x, y),
                to: DVec2::new(settings.max_grid_x, y),
                color: options.grid_line_color.clone(),
            });
        }
        y += settings.step_y;
    }

    scene.axis_lines.push(SceneLine {
        from: min_x_axis,
        to: max_x_axis,
        color: options.axis_color.clone(),
    });
    scene.axis_lines.push(SceneLine {
        from: min_y_axis,
        to: max_y_axis,
        color: options.axis_color.clone(),
    });

    if settings.show_bounding_labels {
        // Unterhalb von -4 schneidet der untere Rand die Beschriftung ab,
        // dann wandern die x-Labels neben die Achse.
        if settings.min_grid_y > -4.0 {
            scene.labels.push(SceneLabel {
                position: min_x_axis,
                text: settings.min_grid_x.to_string(),
                anchors: vec![LabelAnchor::Bottom, LabelAnchor::Left],
            });
            scene.labels.push(SceneLabel {
                position: max_x_axis,
                text: settings.max_grid_x.to_string(),
                anchors: vec![LabelAnchor::Bottom, LabelAnchor::Right],
            });
        } else {
            scene.labels.push(SceneLabel {
                position: min_x_axis,
                text: settings.min_grid_x.to_string(),
                anchors: vec![LabelAnchor::Left],
            });
            scene.labels.push(SceneLabel {
                position: max_x_axis,
                text: settings.max_grid_x.to_string(),
                anchors: vec![LabelAnchor::Right],
            });
        }
        scene.ticks.push(SceneTick {
            position: max_x_axis,
            axis: Axis::X,
        });
        scene.ticks.push(SceneTick {
            position: min_x_axis,
            axis: Axis::X,
        });

        scene.labels.push(SceneLabel {
            position: min_y_axis,
            text: settings.min_grid_y.to_string(),
            anchors: vec![LabelAnchor::Bottom],
        });
        scene.ticks.push(SceneTick {
            position: min_y_axis,
            axis: Axis::Y,
        });

        scene.labels.push(SceneLabel {
            position: max_y_axis,
            text: settings.max_grid_y.to_string(),
            anchors: vec![LabelAnchor::Left],
        });
        scene.ticks.push(SceneTick {
            position: max_y_axis,
            axis: Axis::Y,
        });
    }
}

/// Kontrollpunkte mit zyklisch verteilten Farben.
fn build_points(scene: &mut GraphScene, settings: &GraphSettings, model: &GraphModel) {
    let palette: Vec<&str> = if settings.point_colors.is_empty() {
        DEFAULT_POINT_COLORS.to_vec()
    } else {
        settings.point_colors.iter().map(|c| c.as_str()).collect()
    };

    for (index, point) in model.points().iter().enumerate() {
        scene.points.push(ScenePoint {
            position: *point,
            radius: settings.point_size,
            color: palette[index % palette.len()].to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::graphs;
    use crate::core::GraphKind;

    fn scene_for(kind: GraphKind) -> GraphScene {
        let settings = GraphSettings::defaults_for(kind);
        let model = GraphModel::new(settings.starting_points.clone(), settings.inequality);
        let tool = graphs::create_tool(kind);
        build(&settings, &GrapherOptions::default(), &model, tool.as_ref())
    }

    #[test]
    fn grid_skips_zero_lines_and_has_two_axes() {
        let scene = scene_for(GraphKind::Linear);
        // 19 vertikale + 19 horizontale Kandidaten, je eine bei 0 übersprungen
        assert_eq!(scene.grid_lines.len(), 38);
        assert_eq!(scene.axis_lines.len(), 2);
        assert!(scene
            .grid_lines
            .iter()
            .all(|line| line.from.x != 0.0 || line.from.y != 0.0));
    }

    #[test]
    fn labels_only_when_configured() {
        let scene = scene_for(GraphKind::Linear);
        assert!(scene.labels.is_empty());
        assert!(scene.ticks.is_empty());

        let settings = GraphSettings {
            show_bounding_labels: true,
            ..GraphSettings::defaults_for(GraphKind::Linear)
        };
        let model = GraphModel::new(settings.starting_points.clone(), None);
        let tool = graphs::create_tool(GraphKind::Linear);
        let scene = build(&settings, &GrapherOptions::default(), &model, tool.as_ref());
        assert_eq!(scene.labels.len(), 4);
        assert_eq!(scene.ticks.len(), 4);
        // min_grid_y = -10 → x-Labels seitlich verankert
        assert_eq!(scene.labels[0].anchors, vec![LabelAnchor::Left]);
        assert_eq!(scene.labels[0].text, "-10");
    }

    #[test]
    fn points_cycle_through_palette() {
        let scene = scene_for(GraphKind::ScatterPoints);
        assert_eq!(scene.points.len(), 5);
        assert_eq!(scene.points[0].color, "#35605A");
        assert_eq!(scene.points[4].color, "#643173");
        assert!(scene.curve.is_none());
        assert!(scene.region.is_none());
    }

    #[test]
    fn inequality_scene_has_curve_and_region() {
        let scene = scene_for(GraphKind::LinearInequality);
        let curve = scene.curve.expect("Kurve erwartet");
        assert!(curve.dashed);
        let region = scene.region.expect("Halbebene erwartet");
        assert_eq!(region.polygon.len(), 4);
    }
}
