//! Segment-Polynome: kubische Koeffizienten je Achse und deren Auswertung.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Wertet das kubische Polynom `c0 + c1*t + c2*t² + c3*t³` aus.
pub fn eval_cubic(t: f64, coeffs: &[f64; 4]) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    coeffs[0] + coeffs[1] * t + coeffs[2] * t2 + coeffs[3] * t3
}

/// Wertet die analytische erste Ableitung `c1 + 2*c2*t + 3*c3*t²` aus.
pub fn eval_cubic_derivative(t: f64, coeffs: &[f64; 4]) -> f64 {
    coeffs[1] + 2.0 * coeffs[2] * t + 3.0 * coeffs[3] * t * t
}

/// Ein kubisches Hermite-Segment zwischen zwei Kontrollpunkten.
///
/// Beide Achsen werden unabhängig als Koeffizienten `[c0, c1, c2, c3]`
/// geführt; der Parameter t läuft von 0 (Startpunkt) bis 1 (Endpunkt).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    /// Koeffizienten der x-Achse
    pub x: [f64; 4],
    /// Koeffizienten der y-Achse
    pub y: [f64; 4],
}

impl CubicSegment {
    /// Baut das Segment aus Hermite-Randbedingungen: Startpunkt und
    /// Starttangente, Endpunkt und Endtangente.
    pub fn from_hermite(p0: DVec2, s0: DVec2, p1: DVec2, s1: DVec2) -> Self {
        Self {
            x: hermite_coeffs(p0.x, s0.x, p1.x, s1.x),
            y: hermite_coeffs(p0.y, s0.y, p1.y, s1.y),
        }
    }

    /// Position auf dem Segment bei Parameter `t` ∈ [0, 1].
    pub fn point_at(&self, t: f64) -> DVec2 {
        DVec2::new(eval_cubic(t, &self.x), eval_cubic(t, &self.y))
    }

    /// Tangente (erste Ableitung nach t) bei Parameter `t`.
    pub fn tangent_at(&self, t: f64) -> DVec2 {
        DVec2::new(
            eval_cubic_derivative(t, &self.x),
            eval_cubic_derivative(t, &self.y),
        )
    }

    /// Startpunkt des Segments; per Konstruktion `c0` beider Achsen.
    pub fn start_point(&self) -> DVec2 {
        DVec2::new(self.x[0], self.y[0])
    }
}

/// Hermite-Koeffizienten einer Achse.
///
/// `c0`/`c1` sind direkt Startwert und Starttangente; `c2`/`c3` kodieren
/// Endwert und Endtangente, so dass f(1) = p1 und f'(1) = s1 gilt.
fn hermite_coeffs(p0: f64, s0: f64, p1: f64, s1: f64) -> [f64; 4] {
    [
        p0,
        s0,
        -3.0 * p0 - 2.0 * s0 + 3.0 * p1 - s1,
        2.0 * p0 + s0 - 2.0 * p1 + s1,
    ]
}
