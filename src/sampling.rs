//! Diskretisiertes Sampling: Bogenlängen, dichte Punktlisten und der
//! Fraction-Lookup entlang des Gesamtpfads.

use crate::segment::CubicSegment;
use anyhow::{Result, ensure};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Diskretisierungsschritte je Segment.
///
/// Gemeinsame Konstante für Längenberechnung, Punkterzeugung und
/// Fraction-Lookup. Eine Abweichung zwischen diesen drei Pfaden würde
/// Gesamtlänge und erzeugte Punkte inkonsistent machen.
pub const STEPS_PER_SEGMENT: usize = 8;

/// Position auf dem Gesamtpfad, Ergebnis von [`locate_at_length_fraction`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathLocation {
    /// Punkt auf der Kurve
    pub point: DVec2,
    /// Analytische Tangente an dieser Stelle
    pub tangent: DVec2,
    /// Null-basierter Index des enthaltenden Segments
    pub segment_index: usize,
}

/// Approximierte Bogenlänge eines Segments.
///
/// Summiert die Sehnenlängen zwischen den Samples bei
/// `t = i / STEPS_PER_SEGMENT`; der letzte Schritt erreicht t = 1.
pub fn segment_length(segment: &CubicSegment) -> f64 {
    let mut length = 0.0;
    let mut last = segment.point_at(0.0);
    for i in 1..=STEPS_PER_SEGMENT {
        let next = segment.point_at(i as f64 / STEPS_PER_SEGMENT as f64);
        length += last.distance(next);
        last = next;
    }
    length
}

/// Dichte Punktliste je Segment.
///
/// Jedes Segment liefert die Punkte bei `t = i / STEPS_PER_SEGMENT` für
/// i = 0..STEPS_PER_SEGMENT; nur das letzte Segment hängt zusätzlich den
/// Endpunkt bei t = 1 an. Die t=1-Punkte der übrigen Segmente fallen mit
/// dem t=0-Punkt des Folgesegments zusammen und werden nicht dupliziert.
pub fn sample_path_points(segments: &[CubicSegment]) -> Vec<Vec<DVec2>> {
    let last_index = segments.len().saturating_sub(1);
    segments
        .iter()
        .enumerate()
        .map(|(seg_index, segment)| {
            let steps = if seg_index == last_index {
                STEPS_PER_SEGMENT + 1 // letztes Segment: Endpunkt einschließen
            } else {
                STEPS_PER_SEGMENT
            };
            (0..steps)
                .map(|i| segment.point_at(i as f64 / STEPS_PER_SEGMENT as f64))
                .collect()
        })
        .collect()
}

/// Sucht Punkt, Tangente und Segment-Index bei `fraction` der kumulierten
/// Bogenlänge des Gesamtpfads.
///
/// Läuft die diskretisierten Sehnen aller Segmente in Reihenfolge ab und
/// stoppt beim ersten Schritt, dessen kumulierte Länge das Ziel
/// `fraction * Gesamtlänge` erreicht oder überschreitet. Fraction 0
/// liefert den Pfadanfang, Fraction 1 das Pfadende mit dem Index des
/// letzten Segments.
///
/// Fehler bei leerem Pfad oder Fraction außerhalb [0, 1].
pub fn locate_at_length_fraction(segments: &[CubicSegment], fraction: f64) -> Result<PathLocation> {
    ensure!(!segments.is_empty(), "Fraction-Lookup auf leerem Pfad");
    ensure!(
        (0.0..=1.0).contains(&fraction),
        "Fraction muss in [0, 1] liegen, war {fraction}"
    );

    let total: f64 = segments.iter().map(segment_length).sum();
    if total <= f64::EPSILON {
        // Degenerierter Pfad, alle Punkte fallen zusammen: deterministisch
        // den Startpunkt liefern statt durch null zu teilen.
        log::warn!("Pfad hat Laenge null, Fraction-Abfrage liefert den Startpunkt");
        return Ok(location_at(&segments[0], 0, 0.0));
    }

    let target = fraction * total;
    if target <= 0.0 {
        return Ok(location_at(&segments[0], 0, 0.0));
    }

    let mut accumulated = 0.0;
    for (seg_index, segment) in segments.iter().enumerate() {
        let mut last = segment.point_at(0.0);
        for i in 1..=STEPS_PER_SEGMENT {
            let t = i as f64 / STEPS_PER_SEGMENT as f64;
            let next = segment.point_at(t);
            accumulated += last.distance(next);
            last = next;
            if accumulated >= target {
                return Ok(location_at(segment, seg_index, t));
            }
        }
    }

    // Rundungs-Unterlauf der Summe: Ziel knapp verfehlt, Pfadende liefern
    let last_index = segments.len() - 1;
    Ok(location_at(&segments[last_index], last_index, 1.0))
}

fn location_at(segment: &CubicSegment, segment_index: usize, t: f64) -> PathLocation {
    PathLocation {
        point: segment.point_at(t),
        tangent: segment.tangent_at(t),
        segment_index,
    }
}
