//! Kubische Hermite-Splines für 2D-Wegpunkt-Pfade.
//!
//! Fittet eine geordnete Punktfolge (mit optionalen Tangenten) zu einem
//! Segment-Polynom je Punktepaar und beantwortet darauf Positions-,
//! Tangenten-, Längen- und Fraction-Abfragen.

pub mod fit;
pub mod sampling;
pub mod segment;

pub use fit::{estimate_slope, fit_hermite_path};
pub use sampling::{
    PathLocation, STEPS_PER_SEGMENT, locate_at_length_fraction, sample_path_points,
    segment_length,
};
pub use segment::{CubicSegment, eval_cubic, eval_cubic_derivative};
