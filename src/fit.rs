//! Spline-Fitting: Tangenten-Schätzung aus Nachbarpunkten und der
//! Hermite-Fit über den Gesamtpfad.

use crate::segment::CubicSegment;
use anyhow::{Result, ensure};
use glam::DVec2;

/// Schätzt die Tangente an einem Kontrollpunkt aus seinem Nachbar-Fenster.
///
/// Sind beide Nachbarn vorhanden, wird die zentrale Differenz
/// `(next - prev) * 0.5` verwendet, halbiert weil das Fenster zwei
/// Parameterschritte überspannt. Am Pfadrand wird die einseitige Differenz
/// **unhalbiert** verwendet (nur ein Schritt). Diese Asymmetrie bestimmt
/// die Kurvenform an den Endpunkten und darf nicht verändert werden.
pub fn estimate_slope(prev: Option<DVec2>, current: DVec2, next: Option<DVec2>) -> DVec2 {
    match (prev, next) {
        (Some(prev), Some(next)) => (next - prev) * 0.5,
        (None, Some(next)) => next - current,
        (Some(prev), None) => current - prev,
        // Einzelner Punkt ohne Nachbarn — keine Richtung bestimmbar
        (None, None) => DVec2::ZERO,
    }
}

/// Fittet einen kubischen Hermite-Spline durch `points`.
///
/// `slopes` läuft parallel zu `points`; `None`-Einträge werden über
/// [`estimate_slope`] aus den Nachbarpunkten bestimmt. Ergebnis ist ein
/// [`CubicSegment`] je Punktepaar, Segment i verläuft von Punkt i nach
/// Punkt i+1 (N − 1 Segmente für N Punkte).
///
/// Fehler wenn weniger als 2 Punkte übergeben werden oder die beiden
/// Listen unterschiedlich lang sind.
pub fn fit_hermite_path(points: &[DVec2], slopes: &[Option<DVec2>]) -> Result<Vec<CubicSegment>> {
    ensure!(points.len() >= 2, "Spline-Fit benoetigt mindestens 2 Punkte");
    ensure!(
        points.len() == slopes.len(),
        "Punkt- und Tangentenliste muessen gleich lang sein ({} vs. {})",
        points.len(),
        slopes.len()
    );

    let resolve = |i: usize| {
        slopes[i].unwrap_or_else(|| {
            let prev = if i > 0 { Some(points[i - 1]) } else { None };
            let next = points.get(i + 1).copied();
            estimate_slope(prev, points[i], next)
        })
    };

    // Tangenten werden je Segment neu aufgelöst, bewusst ohne Cache:
    // die Berechnung ist deterministisch und billig.
    let segments = (0..points.len() - 1)
        .map(|i| CubicSegment::from_hermite(points[i], resolve(i), points[i + 1], resolve(i + 1)))
        .collect();

    Ok(segments)
}
