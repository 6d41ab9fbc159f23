//! Geschlossene Kurven-Fits aus Kontrollpunkten.
//!
//! Reine Funktionen ohne Zustand. Die einfachen Varianten rechnen IEEE-754
//! durch: bei gleicher x-Koordinate beider Punkte entstehen ±inf/NaN, damit
//! das Kurvenzeichnen während eines laufenden Drags best-effort bleibt.
//! Die `try_*`-Varianten prüfen die Eingabe und werden bei der
//! Setup-Validierung verwendet.

use glam::DVec2;

use crate::error::GraphError;

// ── Lineare Funktion ─────────────────────────────────────────────

/// Koeffizienten von `y = m*x + b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCoefficients {
    /// Steigung
    pub m: f64,
    /// y-Achsenabschnitt
    pub b: f64,
}

/// Berechnet Steigung und Achsenabschnitt aus zwei Punkten.
pub fn linear_coefficients(point1: DVec2, point2: DVec2) -> LinearCoefficients {
    let m = (point2.y - point1.y) / (point2.x - point1.x);
    let b = point2.y - m * point2.x;
    LinearCoefficients { m, b }
}

/// Wie [`linear_coefficients`], lehnt aber gleiche x-Koordinaten ab.
pub fn try_linear_coefficients(
    point1: DVec2,
    point2: DVec2,
) -> Result<LinearCoefficients, GraphError> {
    if point1.x == point2.x {
        return Err(GraphError::DegenerateInput(format!(
            "beide Punkte bei x = {}",
            point1.x
        )));
    }
    Ok(linear_coefficients(point1, point2))
}

/// Auswertbare lineare Funktion `f(x) = m*x + b`.
pub fn linear_function(point1: DVec2, point2: DVec2) -> impl Fn(f64) -> f64 {
    let LinearCoefficients { m, b } = linear_coefficients(point1, point2);
    move |x| m * x + b
}

// ── Quadratische Funktion ────────────────────────────────────────

/// Koeffizienten der Scheitelpunktform `y = a*(x - vx)^2 + vy`.
///
/// `a` ergibt sich aus dem zweiten Kontrollpunkt:
/// `a = (py - vy) / (px - vx)^2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticCoefficients {
    /// Öffnungsfaktor
    pub a: f64,
    /// Scheitel-x
    pub vx: f64,
    /// Scheitel-y
    pub vy: f64,
}

/// Berechnet den Öffnungsfaktor aus Scheitel und Punkt.
pub fn quadratic_coefficients(vertex: DVec2, point: DVec2) -> QuadraticCoefficients {
    let a = (point.y - vertex.y) / (point.x - vertex.x).powi(2);
    QuadraticCoefficients {
        a,
        vx: vertex.x,
        vy: vertex.y,
    }
}

/// Wie [`quadratic_coefficients`], lehnt aber `point.x == vertex.x` ab.
pub fn try_quadratic_coefficients(
    vertex: DVec2,
    point: DVec2,
) -> Result<QuadraticCoefficients, GraphError> {
    if vertex.x == point.x {
        return Err(GraphError::DegenerateInput(format!(
            "Punkt senkrecht über dem Scheitel bei x = {}",
            vertex.x
        )));
    }
    Ok(quadratic_coefficients(vertex, point))
}

/// Auswertbare quadratische Funktion `f(x) = a*(x - vx)^2 + vy`.
pub fn quadratic_function(vertex: DVec2, point: DVec2) -> impl Fn(f64) -> f64 {
    let QuadraticCoefficients { a, vx, vy } = quadratic_coefficients(vertex, point);
    move |x| a * (x - vx).powi(2) + vy
}

// ── Exponentialfunktion ──────────────────────────────────────────

/// Koeffizienten von `y = a * b^x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialCoefficients {
    /// Skalierung
    pub a: f64,
    /// Basis
    pub b: f64,
    /// Asymptote
    pub c: f64,
}

/// Berechnet Basis und Skalierung aus Asymptote und zwei Punkten.
///
/// Geschlossene Form:
/// `b = ((p2.y - c) / (p1.y - c))^(1 / (p2.x - p1.x))`,
/// `a = b^(-p1.x) * (p1.y - c)`.
/// Liegt `p1.y` auf der Asymptote oder haben die Punkte-y verschiedene
/// Vorzeichen relativ zu `c`, entstehen NaN-Werte — die Interaktion
/// verhindert diesen Zustand durch die Vorzeichen-Invariante.
pub fn exponential_coefficients(
    asymptote_y: f64,
    point1: DVec2,
    point2: DVec2,
) -> ExponentialCoefficients {
    let c = asymptote_y;
    let ratio = (point2.y - c) / (point1.y - c);
    let exponent = 1.0 / (point2.x - point1.x);
    let a = ratio.powf(exponent * -point1.x) * (point1.y - c);
    let b = ratio.powf(exponent);
    ExponentialCoefficients { a, b, c }
}

/// Wie [`exponential_coefficients`], lehnt aber gleiche x-Koordinaten ab.
pub fn try_exponential_coefficients(
    asymptote_y: f64,
    point1: DVec2,
    point2: DVec2,
) -> Result<ExponentialCoefficients, GraphError> {
    if point1.x == point2.x {
        return Err(GraphError::DegenerateInput(format!(
            "beide Punkte bei x = {}",
            point1.x
        )));
    }
    Ok(exponential_coefficients(asymptote_y, point1, point2))
}

/// Auswertbare Exponentialfunktion `f(x) = a * b^x + c`.
pub fn exponential_function(
    asymptote_y: f64,
    point1: DVec2,
    point2: DVec2,
) -> impl Fn(f64) -> f64 {
    let ExponentialCoefficients { a, b, c } = exponential_coefficients(asymptote_y, point1, point2);
    move |x| a * b.powf(x) + c
}

// ── Prädikate ────────────────────────────────────────────────────

/// Liegt der Punkt unterhalb des Funktionsgraphen?
pub fn is_point_below<F: Fn(f64) -> f64>(function: F, point: DVec2) -> bool {
    function(point.x) > point.y
}

/// Liegt der Punkt näher als `tolerance` am Funktionsgraphen (vertikal gemessen)?
pub fn is_point_close_to<F: Fn(f64) -> f64>(function: F, point: DVec2, tolerance: f64) -> bool {
    (function(point.x) - point.y).abs() < tolerance
}
