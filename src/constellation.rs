//! The fixed 16-QAM symbol table shared by the generator and the analyzer.
use num_complex::Complex;

use crate::Sample;

/// Inner amplitude level.
pub const INNER: f64 = 0x1000 as f64;
/// Outer amplitude level.
pub const OUTER: f64 = 0x3000 as f64;

/// Ideal constellation points, row by row from the top-left corner.
pub static CONSTELLATION: [Sample; 16] = [
    Complex::new(-OUTER, OUTER),
    Complex::new(-INNER, OUTER),
    Complex::new(INNER, OUTER),
    Complex::new(OUTER, OUTER),
    Complex::new(-OUTER, INNER),
    Complex::new(-INNER, INNER),
    Complex::new(INNER, INNER),
    Complex::new(OUTER, INNER),
    Complex::new(-OUTER, -INNER),
    Complex::new(-INNER, -INNER),
    Complex::new(INNER, -INNER),
    Complex::new(OUTER, -INNER),
    Complex::new(-OUTER, -OUTER),
    Complex::new(-INNER, -OUTER),
    Complex::new(INNER, -OUTER),
    Complex::new(OUTER, -OUTER),
];

/// Unit phasor `exp(j * angle)`.
#[inline]
pub fn rotation(angle: f64) -> Sample {
    Complex::from_polar(1f64, angle)
}

/// The constellation rotated by `angle` radians.
pub fn rotated(angle: f64) -> [Sample; 16] {
    let phasor = rotation(angle);
    CONSTELLATION.map(|point| point * phasor)
}

/// Index of and distance to the point in `points` closest to `sample`.
///
/// `points` is the grid, possibly rotated: adjacent entries in a row are one
/// grid step apart.
pub fn nearest(sample: Sample, points: &[Sample; 16]) -> (usize, f64) {
    // This is half the separation between adjacent symbols.
    let min_distance = (points[0] - points[1]).norm() / 2f64;

    let mut smallest_distance = f64::MAX;
    let mut best_index = 0;

    for (index, &point) in points.iter().enumerate() {
        let distance = (sample - point).norm();

        if distance < min_distance {
            // Nothing else can be closer.
            return (index, distance);
        } else if distance < smallest_distance {
            smallest_distance = distance;
            best_index = index;
        }
    }
    (best_index, smallest_distance)
}

/// Distance from `sample` to the closest point in `points`.
#[inline]
pub fn nearest_distance(sample: Sample, points: &[Sample; 16]) -> f64 {
    nearest(sample, points).1
}

/// Largest distance between any two points of the grid.
pub fn diameter() -> f64 {
    CONSTELLATION
        .iter()
        .flat_map(|&a| CONSTELLATION.iter().map(move |&b| (a - b).norm()))
        .fold(0f64, f64::max)
}
