//! Batch evaluation: self-play against every known solution.
//!
//! Each finished run appends one `solution,rounds` line to the results log.
//! A later invocation skips as many solutions as the log already holds, so an
//! interrupted batch picks up where it stopped.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use indicatif::ProgressBar;
use log::info;

use crate::config::SolverConfig;
use crate::error::{Result, SolverError};
use crate::partition::worker_pool;
use crate::solver::Session;
use crate::word::Word;

/// Aggregate results read back from a results log.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub runs: usize,
    pub average_rounds: f64,
    /// `(rounds, number of solutions solved in that many rounds)`, ascending.
    pub distribution: Vec<(usize, usize)>,
}

fn read_log(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

/// Number of runs already recorded in the log: every line counts, blank or
/// not. A missing log counts as empty.
pub fn completed_runs(path: &Path) -> Result<usize> {
    Ok(read_log(path)?.lines().count())
}

fn parse_entry(line_no: usize, line: &str) -> Result<(Word, usize)> {
    let malformed = || SolverError::MalformedLog { line: line_no };
    let (word, rounds) = line.trim().split_once(',').ok_or_else(malformed)?;
    let word = Word::parse(word).ok_or_else(malformed)?;
    let rounds = rounds.parse().map_err(|_| malformed())?;
    Ok((word, rounds))
}

/// Read a results log back into a summary.
pub fn summarize_log(path: &Path) -> Result<BatchSummary> {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    let mut runs = 0;
    let mut total_rounds = 0;
    for (i, line) in read_log(path)?.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (_, rounds) = parse_entry(i + 1, line)?;
        *counts.entry(rounds).or_default() += 1;
        runs += 1;
        total_rounds += rounds;
    }
    let average_rounds = if runs == 0 {
        0.0
    } else {
        total_rounds as f64 / runs as f64
    };
    Ok(BatchSummary {
        runs,
        average_rounds,
        distribution: counts.into_iter().collect(),
    })
}

/// Solve every solution not yet in the results log, appending one line per
/// run. At most `limit` new runs are made when given. Returns the number of
/// runs made.
pub fn run_batch(
    session: &Session,
    config: &SolverConfig,
    limit: Option<usize>,
    progress: &ProgressBar,
) -> Result<usize> {
    let path = config.results_path.as_path();
    let done = completed_runs(path)?;
    let solutions = session.solutions();
    let pending = solutions.iter().skip(done).take(limit.unwrap_or(usize::MAX));
    info!(
        "resuming batch at {}/{} ({})",
        done,
        solutions.len(),
        path.display()
    );

    progress.set_length(solutions.len() as u64);
    progress.set_position(done.min(solutions.len()) as u64);

    let threads = worker_pool(config.workers)?;
    let mut log = OpenOptions::new().create(true).append(true).open(path)?;
    let mut made = 0;
    for solution in pending {
        let mut run = session.restart();
        let rounds = run.solve_for_target(solution, config.first_guess, &threads)?;
        writeln!(log, "{},{}", solution, rounds.len())?;
        log.flush()?;
        info!("{} solved in {} rounds", solution, rounds.len());
        made += 1;
        progress.inc(1);
    }
    progress.finish();
    Ok(made)
}
