//! Prompt-driven solving session.
//!
//! The player types their opening guess and the colour pattern the game
//! showed; the solver then suggests each following guess until one
//! candidate is left.

use std::io::{self, BufRead, Write};

use crate::error::{Result, SolverError};
use crate::feedback::{validate_feedback_format, FeedbackPattern};
use crate::partition::worker_pool;
use crate::solver::Session;
use crate::word::{validate_guess_format, Word};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the player enters a word from the guess list.
    pub fn read_guess(&mut self, allowed: &[Word]) -> Result<Word> {
        loop {
            let line = self.prompt_line("Input your first guess: ")?;
            match validate_guess_format(&line, allowed) {
                Ok(word) => return Ok(word),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    /// Ask until the player enters a well-formed pattern.
    pub fn read_pattern(&mut self) -> Result<FeedbackPattern> {
        loop {
            let line = self.prompt_line("Input the result pattern (e.g. ybgbb): ")?;
            match validate_feedback_format(&line) {
                Ok(pattern) => return Ok(pattern),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}

/// Run a session to completion and return the answer.
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut Session,
    workers: usize,
    prompter: &mut Prompter<R, W>,
) -> Result<Word> {
    let threads = worker_pool(workers)?;
    let first_guess = prompter.read_guess(session.guesses())?;
    let pattern = prompter.read_pattern()?;
    session.apply_feedback(&first_guess, pattern);

    while session.remaining_count() > 1 {
        let guess = session.pick_guess_in(&threads)?;
        prompter.say(&format!("Your next guess should be {guess}"))?;
        let pattern = prompter.read_pattern()?;
        session.apply_feedback(&guess, pattern);
    }

    let answer = *session
        .filtered_solutions()
        .first()
        .ok_or(SolverError::EmptyCandidatePool)?;
    prompter.say(&format!("The answer is {answer}"))?;
    Ok(answer)
}
