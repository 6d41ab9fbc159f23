//! Gemeinsame Hilfsfunktionen für Graph-Strategien.

use glam::DVec2;

use crate::core::{GraphModel, GraphSettings, GridMapper};

/// Findet den Index des nächstgelegenen Punkts innerhalb des Pick-Radius.
///
/// Distanzen werden in Surface-Einheiten gemessen, damit der Hit-Test
/// unabhängig von der Grid-Skalierung dem Mauszeiger folgt.
pub fn pick_point_index(
    points: &[DVec2],
    mapper: &GridMapper,
    grid_pos: DVec2,
    pick_radius_surface: f64,
) -> Option<usize> {
    let cursor = mapper.grid_to_surface(grid_pos);
    let mut best: Option<(usize, f64)> = None;
    for (index, point) in points.iter().enumerate() {
        let distance = mapper.grid_to_surface(*point).distance(cursor);
        if distance <= pick_radius_surface && best.is_none_or(|(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

/// Schreibt die Commit-Position in den aktiven Punkt.
///
/// Gibt `true` zurück, wenn eine Session aktiv ist und sich die
/// Grid-Position geändert hat (No-op-Moves melden `false`).
pub fn move_active_point(
    model: &mut GraphModel,
    active: Option<usize>,
    step_point: DVec2,
) -> bool {
    let Some(index) = active else {
        return false;
    };
    if model.point(index) == step_point {
        return false;
    }
    model.set_point_at(index, step_point);
    true
}

/// Alle Modell-Punkte aufs Schritt-Raster gerundet (für die Meldung an den Host).
pub fn snapped_points(model: &GraphModel, mapper: &GridMapper) -> Vec<DVec2> {
    model
        .points()
        .iter()
        .map(|point| mapper.snap_to_step(*point))
        .collect()
}

/// Tastet eine Funktion von `min_grid_x` bis `max_grid_x` in
/// `step_x`-Schritten ab (Grenzen einschließend).
pub fn sample_curve<F: Fn(f64) -> f64>(function: F, settings: &GraphSettings) -> Vec<DVec2> {
    let mut samples = Vec::new();
    let epsilon = settings.step_x * 1e-9;
    let mut x = settings.min_grid_x;
    while x <= settings.max_grid_x + epsilon {
        samples.push(DVec2::new(x, function(x)));
        x += settings.step_x;
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GraphKind, GraphSettings};

    fn mapper() -> GridMapper {
        GridMapper::new(
            &GraphSettings::defaults_for(GraphKind::Linear),
            DVec2::new(200.0, 200.0),
        )
    }

    #[test]
    fn pick_prefers_closest_point_within_radius() {
        let points = [DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0)];
        // 1 Grid-Einheit = 10 Surface-Einheiten → beide in Reichweite bei Radius 10
        let picked = pick_point_index(&points, &mapper(), DVec2::new(0.6, 0.0), 10.0);
        assert_eq!(picked, Some(1));
    }

    #[test]
    fn pick_misses_outside_radius() {
        let points = [DVec2::new(0.0, 0.0)];
        let picked = pick_point_index(&points, &mapper(), DVec2::new(5.0, 5.0), 10.0);
        assert_eq!(picked, None);
    }

    #[test]
    fn move_without_session_is_noop() {
        let mut model = GraphModel::new(vec![DVec2::ZERO], None);
        assert!(!move_active_point(&mut model, None, DVec2::new(1.0, 1.0)));
        assert_eq!(model.point(0), DVec2::ZERO);
    }

    #[test]
    fn move_to_same_position_reports_no_change() {
        let mut model = GraphModel::new(vec![DVec2::new(2.0, 2.0)], None);
        assert!(!move_active_point(&mut model, Some(0), DVec2::new(2.0, 2.0)));
        assert!(move_active_point(&mut model, Some(0), DVec2::new(3.0, 2.0)));
    }

    #[test]
    fn curve_samples_cover_bounds_inclusive() {
        let settings = GraphSettings::defaults_for(GraphKind::Linear);
        let samples = sample_curve(|x| x, &settings);
        assert_eq!(samples.len(), 21);
        assert_eq!(samples.first().unwrap().x, -10.0);
        assert_eq!(samples.last().unwrap().x, 10.0);
    }
}
