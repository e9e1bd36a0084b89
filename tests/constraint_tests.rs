use expected_wordle::{ConstraintState, FeedbackPattern, Word};

fn word(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|s| word(s)).collect()
}

#[test]
fn test_empty_state_accepts_everything() {
    let state = ConstraintState::new();
    assert!(state.is_empty());
    for w in words(&["crane", "fuzzy", "geese", "qajaq"]) {
        assert!(state.is_consistent(&w));
    }
}

#[test]
fn test_hit_locks_position() {
    let mut state = ConstraintState::new();
    state.record_hit(0, b'c');
    assert_eq!(state.position_lock(0), Some(b'c'));
    assert!(state.is_consistent(&word("crane")));
    assert!(!state.is_consistent(&word("trace")));
}

#[test]
fn test_present_requires_letter_elsewhere() {
    let mut state = ConstraintState::new();
    state.record_present(1, b'r');
    assert!(state.required_letters().contains(b'r'));
    assert!(state.position_exclusions(1).contains(b'r'));

    assert!(state.is_consistent(&word("tiara")));
    assert!(state.is_consistent(&word("stare")));
    assert!(!state.is_consistent(&word("trace")), "r is excluded at 1");
    assert!(!state.is_consistent(&word("crane")), "r is excluded at 1");
    assert!(!state.is_consistent(&word("slate")), "r is required");
}

#[test]
fn test_absent_excludes_letter() {
    let mut state = ConstraintState::new();
    state.record_absent(b's');
    assert!(state.is_consistent(&word("crane")));
    assert!(!state.is_consistent(&word("slate")));
    assert!(!state.is_consistent(&word("toast")));
}

#[test]
fn test_absent_letter_that_is_also_required_is_allowed() {
    // "geese" against "those": one e is present, the other absent.
    let mut state = ConstraintState::new();
    state.record_present(1, b'e');
    state.record_absent(b'e');
    assert!(state.is_consistent(&word("those")));
    assert!(!state.is_consistent(&word("heron")), "e is excluded at 1");
    assert!(!state.is_consistent(&word("stark")), "e is required");
}

#[test]
fn test_apply_feedback_dispatches_per_position() {
    let mut state = ConstraintState::new();
    state.apply_feedback(&word("slate"), FeedbackPattern::parse("bbyyg").unwrap());

    assert_eq!(state.position_lock(4), Some(b'e'));
    assert!(state.required_letters().contains(b'a'));
    assert!(state.required_letters().contains(b't'));
    assert!(state.position_exclusions(2).contains(b'a'));
    assert!(state.position_exclusions(3).contains(b't'));
    assert!(state.excluded_letters().contains(b's'));
    assert!(state.excluded_letters().contains(b'l'));

    let pool = words(&["taupe", "crane", "teach", "taste", "latte", "table"]);
    assert_eq!(state.filter(&pool), words(&["taupe"]));
}

#[test]
fn test_slate_feedback_against_crane() {
    let slate = word("slate");
    let crane = word("crane");
    let mut state = ConstraintState::new();
    state.apply_feedback(&slate, FeedbackPattern::simulate(&slate, &crane));

    let pool = words(&["crane", "brace", "stare", "craze", "grace", "crank", "adobe"]);
    let kept = state.filter(&pool);
    assert!(kept.contains(&crane));
    // s, l and t are out; a must be at 2 and e at 4.
    assert_eq!(kept, words(&["crane", "brace", "craze", "grace"]));
}

#[test]
fn test_hypothetical_leaves_state_untouched() {
    let mut state = ConstraintState::new();
    state.record_hit(4, b'e');
    let before = state;

    let next = state.hypothetical(&word("crane"), &word("slate"));
    assert_eq!(state, before);
    assert_ne!(next, before);
    assert!(next.is_consistent(&word("slate")));
}

#[test]
fn test_filter_preserves_order() {
    let mut state = ConstraintState::new();
    state.record_hit(4, b'e');
    let pool = words(&["trace", "toast", "crane", "beast", "arise"]);
    assert_eq!(state.filter(&pool), words(&["trace", "crane", "arise"]));
    assert_eq!(state.count_consistent(&pool), 3);
}
