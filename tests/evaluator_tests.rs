use expected_wordle::evaluator::{expected_remaining, RunningMean};
use expected_wordle::{ConstraintState, Word};

#[test]
fn running_mean_of_nothing_is_zero() {
    let acc = RunningMean::new();
    assert_eq!(acc.mean(), 0.0);
    assert_eq!(acc.count(), 0);
}

#[test]
fn running_mean_matches_plain_average() {
    let samples = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
    let acc: RunningMean = samples.iter().copied().collect();
    let plain = samples.iter().sum::<f64>() / samples.len() as f64;
    assert!((acc.mean() - plain).abs() < 1e-12);
    assert_eq!(acc.count(), samples.len());
}

#[test]
fn guessing_the_only_answer_leaves_one() {
    let words: Vec<Word> = ["crane", "slate", "toast"]
        .iter()
        .filter_map(|w| Word::parse(w))
        .collect();
    let state = ConstraintState::new();
    let crane = words[0];
    let score = expected_remaining(&state, &crane, &words[..1], &words);
    assert_eq!(score, 1.0);
}
