use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use expected_wordle::{FeedbackPattern, Session, Word};

/// Deterministic word list drawn from a small alphabet so words overlap the
/// way real dictionary words do.
fn synthetic_words(n: usize) -> Vec<Word> {
    const LETTERS: &[u8] = b"aeirstlnoc";
    (0..)
        .map(|mut i: usize| {
            let mut letters = String::with_capacity(5);
            for _ in 0..5 {
                letters.push(LETTERS[i % LETTERS.len()] as char);
                i = i / LETTERS.len() * 7 + 3;
            }
            letters
        })
        .filter_map(|s| Word::parse(&s))
        .take(n)
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let words = synthetic_words(400);
    let mut session = Session::new(words.clone(), words);
    let opener = Word::parse("raise").unwrap();
    let target = session.solutions()[17];
    session.apply_feedback(&opener, FeedbackPattern::simulate(&opener, &target));

    let mut group = c.benchmark_group("pick_guess");
    group.sample_size(10);
    group.bench_function("sequential", |b| b.iter(|| session.pick_guess().unwrap()));
    for workers in [2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("parallel", workers), &workers, |b, &w| {
            b.iter(|| session.pick_guess_parallel(w).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
