use rstest::rstest;
use scrivepad::alphabet::{ControlPoint, Letter, LetterSegment, BASE_LINE};
use scrivepad::error::ScrivePadError;
use scrivepad::geometry::{
    build_letter_path, build_ruling_path, letter_on_canvas, Reference, RULING_LINES,
};
use scrivepad::letters::KnownLetter;

const EPS: f32 = 1e-4;

fn two_segment_letter() -> Letter {
    Letter::new(vec![
        LetterSegment::new(vec![
            ControlPoint::new(0.0, 0.0),
            ControlPoint::new(1.0, 1.0),
        ]),
        LetterSegment::new(vec![
            ControlPoint::new(2.0, 0.5),
            ControlPoint::new(3.0, 0.5),
            ControlPoint::new(4.0, 0.5),
        ]),
    ])
}

#[test]
fn anchor_reference_places_capital_a_baseline_start() {
    let a = KnownLetter::CapitalA.definition();
    let path = build_letter_path(&a, 100.0, 200.0, 150.0, Reference::Anchor).unwrap();

    let first = path.polylines[0][0];
    assert!(
        (first.x - 100.0).abs() < EPS,
        "First point x was {}, expected 100",
        first.x
    );
    // 200 - (1/3) * 150
    assert!(
        (first.y - 150.0).abs() < EPS,
        "First point y was {}, expected 150",
        first.y
    );
}

#[test]
fn first_reference_maps_first_point_onto_anchor() {
    let a = KnownLetter::CapitalA.definition();
    let path = build_letter_path(&a, 42.0, 77.0, 93.0, Reference::First).unwrap();

    let first = path.polylines[0][0];
    assert!((first.x - 42.0).abs() < EPS);
    assert!((first.y - 77.0).abs() < EPS);
}

#[test]
fn one_polyline_per_segment_in_segment_order() {
    let letter = two_segment_letter();
    let path = build_letter_path(&letter, 0.0, 0.0, 10.0, Reference::Anchor).unwrap();

    assert_eq!(path.polyline_count(), 2);
    assert_eq!(path.polylines[0].len(), 2);
    assert_eq!(path.polylines[1].len(), 3);
}

#[test]
fn letter_local_y_is_flipped_on_canvas() {
    let letter = two_segment_letter();
    let path = build_letter_path(&letter, 0.0, 500.0, 10.0, Reference::Anchor).unwrap();

    // (1.0, 1.0) is above the anchor in letter space, so smaller pixel y.
    let lifted = path.polylines[0][1];
    assert!((lifted.y - 490.0).abs() < EPS);
    assert!((lifted.x - 10.0).abs() < EPS);
}

#[rstest]
#[case(0.0)]
#[case(-3.0)]
fn non_positive_scale_is_rejected(#[case] scale: f32) {
    let letter = two_segment_letter();
    let result = build_letter_path(&letter, 0.0, 0.0, scale, Reference::Anchor);
    assert!(matches!(result, Err(ScrivePadError::InvalidArgument(_))));
}

#[test]
fn empty_letter_is_rejected() {
    let letter = Letter::new(vec![]);
    let result = build_letter_path(&letter, 0.0, 0.0, 1.0, Reference::Anchor);
    assert!(matches!(result, Err(ScrivePadError::InvalidArgument(_))));
}

#[test]
fn empty_segment_is_rejected() {
    let letter = Letter::new(vec![LetterSegment::new(vec![])]);
    let result = build_letter_path(&letter, 0.0, 0.0, 1.0, Reference::First);
    assert!(matches!(result, Err(ScrivePadError::InvalidArgument(_))));
}

#[test]
fn unknown_reference_mode_is_rejected() {
    assert!(matches!(
        Reference::parse("diagonal"),
        Err(ScrivePadError::InvalidArgument(_))
    ));
    assert_eq!(Reference::parse("anchor").unwrap(), Reference::Anchor);
    assert_eq!(Reference::parse("first").unwrap(), Reference::First);
}

// 4 guide lines plus 2 verticals, whatever the requested count.
#[rstest]
#[case(4)]
#[case(1)]
#[case(2)]
#[case(17)]
fn ruling_always_renders_four_lines(#[case] line_count: usize) {
    let path = build_ruling_path(10.0, 400.0, 200.0, 90.0, line_count).unwrap();
    assert_eq!(
        path.polyline_count(),
        6,
        "Requested {} lines, expected 4 horizontals + 2 verticals",
        line_count
    );
}

#[test]
fn ruling_line_positions() {
    let (x, y, width, scale) = (10.0f32, 400.0f32, 200.0f32, 90.0f32);
    let path = build_ruling_path(x, y, width, scale, 4).unwrap();

    for (i, ly) in RULING_LINES.iter().enumerate() {
        let line = &path.polylines[i];
        let expected_y = y - ly * scale;
        assert_eq!(line.len(), 2);
        assert!((line[0].y - expected_y).abs() < EPS);
        assert!((line[1].y - expected_y).abs() < EPS);
        assert!((line[0].x - x).abs() < EPS);
        assert!((line[1].x - (x + width)).abs() < EPS);
    }

    // Verticals span from the under line to the top line.
    for (i, xv) in [x, x + width].iter().enumerate() {
        let line = &path.polylines[4 + i];
        assert!((line[0].x - xv).abs() < EPS);
        assert!((line[1].x - xv).abs() < EPS);
        assert!((line[0].y - y).abs() < EPS);
        assert!((line[1].y - (y - scale)).abs() < EPS);
    }
}

#[test]
fn ruling_rejects_negative_width() {
    let result = build_ruling_path(0.0, 0.0, -1.0, 10.0, 4);
    assert!(matches!(result, Err(ScrivePadError::InvalidArgument(_))));
}

#[test]
fn ruling_rejects_non_positive_scale() {
    let result = build_ruling_path(0.0, 0.0, 100.0, 0.0, 4);
    assert!(matches!(result, Err(ScrivePadError::InvalidArgument(_))));
}

#[test]
fn letter_on_canvas_matches_letter_path() {
    let a = KnownLetter::CapitalA.definition();
    let pixel_letter = letter_on_canvas(&a, 20.0, 420.0, 150.0).unwrap();
    let path = build_letter_path(&a, 20.0, 420.0, 150.0, Reference::Anchor).unwrap();

    assert_eq!(pixel_letter.segments.len(), path.polyline_count());
    for (segment, polyline) in pixel_letter.segments.iter().zip(&path.polylines) {
        for (cp, pp) in segment.control_points.iter().zip(polyline) {
            assert!((cp.x - pp.x).abs() < EPS);
            assert!((cp.y - pp.y).abs() < EPS);
        }
    }

    let first = pixel_letter.first_point().unwrap();
    assert!((first.y - (420.0 - BASE_LINE * 150.0)).abs() < EPS);
}
