use std::io::Cursor;

use expected_wordle::interactive::{run_interactive, Prompter};
use expected_wordle::{Session, SolverError, Word};

fn word(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn grape_session() -> Session {
    let list: Vec<Word> = ["crane", "grape", "frame", "drape", "shape"]
        .iter()
        .map(|s| word(s))
        .collect();
    Session::new(list.clone(), list)
}

fn run(session: &mut Session, input: &str) -> (Result<Word, SolverError>, String) {
    let mut output = Vec::new();
    let result = {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes()), &mut output);
        run_interactive(session, 2, &mut prompter)
    };
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn suggests_until_one_candidate_remains() {
    let mut session = grape_session();
    let (answer, output) = run(&mut session, "crane\nbggbg\nggggg\n");

    assert_eq!(answer.unwrap(), word("grape"));
    assert!(output.contains("Your next guess should be grape"));
    assert!(output.ends_with("The answer is grape\n"));
}

#[test]
fn reprompts_on_malformed_input() {
    let mut session = grape_session();
    let input = "cranes\nzzzzz\ncrane\nbggb\nbgxbg\nBGGBG\nbggbg\nggggg\n";
    let (answer, output) = run(&mut session, input);

    assert_eq!(answer.unwrap(), word("grape"));
    assert!(output.contains("Guess needs to be of length 5 (got 6)."));
    assert!(output.contains("'zzzzz' is not a valid word."));
    assert!(output.contains("Result needs to be of length 5 (got 4)."));
    assert!(output.contains("Only y, b, and g are valid inputs (found 'x' at position 2)."));
    assert!(output.contains("(found 'B' at position 0)."));
}

#[test]
fn first_feedback_can_finish_the_game() {
    let mut session = grape_session();
    let (answer, output) = run(&mut session, "shape\nggggg\n");
    assert_eq!(answer.unwrap(), word("shape"));
    assert!(!output.contains("Your next guess"));
}

#[test]
fn contradictory_feedback_aborts() {
    let mut session = grape_session();
    let (answer, _) = run(&mut session, "crane\nggggb\n");
    assert!(matches!(answer, Err(SolverError::EmptyCandidatePool)));
}

#[test]
fn closed_input_is_an_error() {
    let mut session = grape_session();
    let (answer, _) = run(&mut session, "crane\n");
    assert!(matches!(answer, Err(SolverError::Io(_))));
}
