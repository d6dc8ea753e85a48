use criterion::{criterion_group, criterion_main, Criterion};
use scrivepad::checker::TraceChecker;
use scrivepad::config::CheckerParams;
use scrivepad::geometry::{self, PixelPoint, Reference};
use scrivepad::letters::KnownLetter;
use scrivepad::synth::synthesize_trace;
use std::hint::black_box;

fn setup_trace() -> (scrivepad::alphabet::Letter, Vec<Vec<PixelPoint>>) {
    let letter = KnownLetter::CapitalA.definition();
    let on_canvas = geometry::letter_on_canvas(&letter, 20.0, 420.0, 150.0).unwrap();
    let strokes = synthesize_trace(&on_canvas, 16, 3.0, Some(42));
    (on_canvas, strokes)
}

fn bench_checker(c: &mut Criterion) {
    let (letter, strokes) = setup_trace();
    let params = CheckerParams::default();

    c.bench_function("score_synthetic_trace", |b| {
        b.iter(|| {
            let mut checker = TraceChecker::with_params(letter.clone(), params).unwrap();
            for stroke in &strokes {
                for p in stroke {
                    black_box(checker.add_drawn_point(p.x, p.y).unwrap());
                }
            }
            black_box(checker.is_complete())
        })
    });
}

fn bench_geometry(c: &mut Criterion) {
    let letter = KnownLetter::CapitalA.definition();

    c.bench_function("build_letter_path", |b| {
        b.iter(|| {
            black_box(
                geometry::build_letter_path(&letter, 100.0, 200.0, 150.0, Reference::Anchor)
                    .unwrap(),
            )
        })
    });

    c.bench_function("build_ruling_path", |b| {
        b.iter(|| black_box(geometry::build_ruling_path(20.0, 420.0, 760.0, 150.0, 4).unwrap()))
    });
}

criterion_group!(benches, bench_checker, bench_geometry);
criterion_main!(benches);
