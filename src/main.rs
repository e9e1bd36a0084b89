//! Expected Wordle CLI
//!
//! Interactive and batch command-line interface for the expected-value solver.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use expected_wordle::harness::{run_batch, summarize_log};
use expected_wordle::interactive::{run_interactive, Prompter};
use expected_wordle::partition::worker_pool;
use expected_wordle::{GuessFormatError, Session, SolverConfig, SolverError, Word};

#[derive(Parser)]
#[command(
    name = "expected-wordle",
    version,
    about = "Wordle solver minimizing expected remaining candidates"
)]
struct Cli {
    /// Word list of possible solutions
    #[arg(long, global = true, default_value = "wordlist_solutions.txt")]
    solutions: PathBuf,

    /// Word list of allowed guesses
    #[arg(long, global = true, default_value = "wordlist_guesses.txt")]
    guesses: PathBuf,

    /// Only suggest guesses consistent with the feedback so far
    #[arg(long, global = true)]
    hard_mode: bool,

    /// Number of search workers (defaults to the number of CPUs)
    #[arg(long, global = true)]
    workers: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve interactively from typed feedback (default)
    Play,
    /// Show the best opening guesses
    Suggest {
        #[arg(long, default_value_t = 1)]
        top: usize,
    },
    /// Self-play against a known answer
    Solve {
        #[arg(value_parser = parse_word)]
        target: Word,
        #[arg(long, value_parser = parse_word)]
        first_guess: Option<Word>,
    },
    /// Self-play against every solution, appending to a results log
    Bench {
        #[arg(long, default_value = "results.txt")]
        results: PathBuf,
        #[arg(long, value_parser = parse_word)]
        first_guess: Option<Word>,
        /// Stop after this many new runs
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn parse_word(s: &str) -> Result<Word, String> {
    Word::parse(s.trim()).ok_or_else(|| format!("'{s}' is not a five-letter word"))
}

fn config_from(cli: &Cli) -> SolverConfig {
    let mut config = SolverConfig {
        solutions_path: cli.solutions.clone(),
        guesses_path: cli.guesses.clone(),
        hard_mode: cli.hard_mode,
        ..SolverConfig::default()
    };
    if let Some(workers) = cli.workers {
        config.workers = workers;
    }
    match &cli.command {
        Some(Command::Solve {
            first_guess: Some(word),
            ..
        }) => config.first_guess = *word,
        Some(Command::Bench {
            results,
            first_guess,
            ..
        }) => {
            config.results_path = results.clone();
            if let Some(word) = first_guess {
                config.first_guess = *word;
            }
        }
        _ => {}
    }
    config
}

fn play(session: &mut Session, config: &SolverConfig) -> Result<(), SolverError> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    run_interactive(session, config.workers, &mut prompter)?;
    Ok(())
}

fn suggest(session: &Session, config: &SolverConfig, top: usize) -> Result<(), SolverError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Computing...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    let start = Instant::now();
    let ranked = session.rank_guesses(top, Some(config.workers))?;
    spinner.finish_and_clear();

    println!();
    println!("{:>4} {:>8} {:>12} Possible?", "#", "Word", "Exp. Remain");
    println!("{}", "-".repeat(36));
    for (i, analysis) in ranked.iter().enumerate() {
        let remain = analysis
            .expected_remaining
            .map(|r| format!("{r:.3}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>4} {:>8} {:>12} {}",
            i + 1,
            analysis.word.to_string().to_uppercase(),
            remain,
            if analysis.is_possible_answer { "✓" } else { "" }
        );
    }
    println!();
    println!("Candidates: {}", session.remaining_count());
    println!("Time elapsed: {:.2?}", start.elapsed());
    Ok(())
}

fn solve(session: &mut Session, config: &SolverConfig, target: Word) -> Result<(), SolverError> {
    if !session.solutions().contains(&target) {
        return Err(GuessFormatError::NotInList(target.to_string()).into());
    }

    println!("Solving for: {}", target.to_string().to_uppercase());
    println!();

    let threads = worker_pool(config.workers)?;
    let rounds = session.solve_for_target(&target, config.first_guess, &threads)?;
    for (i, (guess, pattern)) in rounds.iter().enumerate() {
        println!(
            "Guess {}: {} → {} ({})",
            i + 1,
            guess.to_string().to_uppercase(),
            pattern,
            pattern.to_symbols()
        );
    }
    println!();
    println!("Solved in {} guesses.", rounds.len());
    Ok(())
}

fn bench(
    session: &Session,
    config: &SolverConfig,
    limit: Option<usize>,
) -> Result<(), SolverError> {
    let progress = ProgressBar::new(session.solutions().len() as u64).with_style(
        ProgressStyle::with_template("Solving: [{elapsed_precise}] {wide_bar} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let start = Instant::now();
    let made = run_batch(session, config, limit, &progress)?;
    let elapsed = start.elapsed();

    let summary = summarize_log(&config.results_path)?;
    println!("Results:");
    println!("{}", "=".repeat(40));
    println!();
    println!("Guess distribution:");
    for (rounds, count) in &summary.distribution {
        let pct = *count as f64 / summary.runs as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / summary.runs).max(1));
        println!("  {} guesses: {:>5} ({:>5.1}%) {}", rounds, count, pct, bar);
    }
    println!();
    println!("Average guesses: {:.3}", summary.average_rounds);
    println!("Total words: {}", summary.runs);
    println!("New runs: {} in {:.2?}", made, elapsed);
    Ok(())
}

fn run(cli: Cli) -> Result<(), SolverError> {
    let config = config_from(&cli);
    let mut session = config.load_session()?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => play(&mut session, &config),
        Command::Suggest { top } => suggest(&session, &config, top),
        Command::Solve { target, .. } => solve(&mut session, &config, target),
        Command::Bench { limit, .. } => bench(&session, &config, limit),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
