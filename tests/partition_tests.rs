use expected_wordle::partition::{merge, partition, PartialScores};
use expected_wordle::Word;

fn words(n: usize) -> Vec<Word> {
    (0..n)
        .map(|i| {
            let c = (b'a' + (i % 26) as u8) as char;
            Word::parse(&c.to_string().repeat(5)).unwrap()
        })
        .collect()
}

#[test]
fn chunk_count_is_clamped() {
    let list = words(10);
    assert_eq!(partition(&list, 0).len(), 1);
    assert_eq!(partition(&list, 3).len(), 3);
    assert_eq!(partition(&list, 64).len(), 10);
    assert!(partition(&[], 4).is_empty());
}

#[test]
fn last_chunk_absorbs_remainder() {
    let list = words(10);
    let sizes: Vec<usize> = partition(&list, 3).iter().map(|c| c.solutions.len()).collect();
    assert_eq!(sizes, vec![3, 3, 4]);
    let weight: f64 = partition(&list, 3).iter().map(|c| c.weight).sum();
    assert!((weight - 1.0).abs() < 1e-12);
}

#[test]
fn chunks_are_contiguous_and_cover_everything() {
    let list = words(23);
    let rejoined: Vec<Word> = partition(&list, 4)
        .iter()
        .flat_map(|c| c.solutions.iter().copied())
        .collect();
    assert_eq!(rejoined, list);
}

#[test]
fn merge_weights_each_chunk() {
    let partials = [
        PartialScores {
            weight: 0.25,
            scores: vec![4.0, 2.0],
        },
        PartialScores {
            weight: 0.75,
            scores: vec![0.0, 2.0],
        },
    ];
    assert_eq!(merge(&partials, 2), vec![1.0, 2.0]);
}
