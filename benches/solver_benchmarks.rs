use criterion::{black_box, criterion_group, criterion_main, Criterion};

use crossfill::{solve, Crossword};

fn corner_puzzle() -> Crossword {
    // Every 3-letter word over {A, B, C}: a dense domain for two crossing slots.
    let letters = ['A', 'B', 'C'];
    let mut words = Vec::new();
    for a in letters {
        for b in letters {
            for c in letters {
                words.push(format!("{a}{b}{c}"));
            }
        }
    }
    Crossword::parse("___\n_##\n_##", &words.join("\n")).unwrap()
}

fn ring_puzzle() -> Crossword {
    Crossword::from_files(
        concat!(env!("CARGO_MANIFEST_DIR"), "/data/structure1.txt"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/data/words1.txt"),
    )
    .unwrap()
}

fn solve_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    let corner = corner_puzzle();
    group.bench_function("corner 3x3, 27 words", |b| {
        b.iter(|| {
            let solution = solve(black_box(&corner));
            assert!(solution.is_some());
        })
    });

    let ring = ring_puzzle();
    group.bench_function("ring 4x4, bundled words", |b| {
        b.iter(|| {
            let solution = solve(black_box(&ring));
            assert!(solution.is_some());
        })
    });

    group.finish();
}

criterion_group!(benches, solve_benchmarks);
criterion_main!(benches);
