use crate::alphabet::Letter;
use crate::geometry::PixelPoint;

/// Generates a synthetic trace along `letter`: one stroke per segment, with
/// `points_per_edge` samples interpolated between consecutive control points
/// and uniform jitter of up to `jitter` units per coordinate.
///
/// Deterministic for a given seed; used for threshold calibration and the
/// `simulate` command.
pub fn synthesize_trace(
    letter: &Letter,
    points_per_edge: usize,
    jitter: f32,
    seed: Option<u64>,
) -> Vec<Vec<PixelPoint>> {
    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    let steps = points_per_edge.max(1);

    let mut strokes = Vec::with_capacity(letter.segments.len());
    for segment in &letter.segments {
        let points = &segment.control_points;
        let mut stroke = Vec::new();
        if let Some(first) = points.first() {
            stroke.push(jittered(first.x, first.y, jitter, &mut rng));
        }
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            for i in 1..=steps {
                let t = i as f32 / steps as f32;
                let x = a.x + (b.x - a.x) * t;
                let y = a.y + (b.y - a.y) * t;
                stroke.push(jittered(x, y, jitter, &mut rng));
            }
        }
        strokes.push(stroke);
    }
    strokes
}

fn jittered(x: f32, y: f32, jitter: f32, rng: &mut fastrand::Rng) -> PixelPoint {
    if jitter <= 0.0 {
        return PixelPoint::new(x, y);
    }
    let dx = (rng.f32() * 2.0 - 1.0) * jitter;
    let dy = (rng.f32() * 2.0 - 1.0) * jitter;
    PixelPoint::new(x + dx, y + dy)
}
