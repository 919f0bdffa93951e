//! Masterand CLI
//!
//! Terminal front end for the color guessing engine and its code breaker.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use masterand::config::DEFAULT_POOL_SIZE;
use masterand::{
    Code, CodeBreaker, ColorPool, GameConfig, Guess, MemorySink, ScoringRule, Session, PALETTE,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

const BANNER_TEXT: &str = include_str!("text/banner.txt");

#[derive(Debug, Parser)]
#[command(name = "masterand", version, about = "Mastermind-style color guessing game")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Colors in the pool (5-10)
    #[arg(long, global = true, env = "MASTERAND_POOL_SIZE", default_value_t = DEFAULT_POOL_SIZE)]
    pool_size: usize,

    /// Seed for pool and target draws
    #[arg(long, global = true, env = "MASTERAND_SEED")]
    seed: Option<u64>,

    /// Scoring rule: guesses | matched
    #[arg(long, global = true, env = "MASTERAND_SCORING", default_value = "guesses")]
    scoring: ScoringRule,

    /// Player the score is recorded for
    #[arg(long, global = true, env = "MASTERAND_PLAYER_ID")]
    player_id: Option<i64>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play interactively (default)
    Play,
    /// Let the code breaker find CODE, e.g. RBGY
    Solve { code: String },
    /// Print the best opening guess for a pool
    Suggest,
    /// Solve every possible target and print the guess distribution
    Bench,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            pool_size: self.pool_size,
            scoring: self.scoring,
            player_id: self.player_id,
        }
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }
}

fn print_banner() {
    for line in BANNER_TEXT.lines().take(6) {
        println!("{}", line);
    }
}

fn print_help() {
    println!("{}", BANNER_TEXT);
}

fn describe(code: &Guess) -> String {
    code.iter()
        .map(|c| format!("{}({})", c.to_letter(), c))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_state(session: &Session) {
    println!("Pool:  {}", session.pool());
    println!("Guess: {}", describe(session.guess()));
}

fn run_interactive(cli: &Cli) -> anyhow::Result<()> {
    print_banner();

    let mut rng = cli.rng();
    let mut session = Session::start(cli.config(), &mut rng).context("cannot start a game")?;
    let mut sink = MemorySink::default();

    println!(
        "New game with {} colors (difficulty {}).",
        session.pool().len(),
        session.config().difficulty_level()
    );
    print_state(&session);
    println!("Type 'help' for commands.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                print_help();
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "rotate" | "r" => {
                if parts.len() < 2 {
                    println!("Usage: rotate <slot>...  (slots 1-4)");
                    continue;
                }
                for arg in &parts[1..] {
                    let slot = match arg.parse::<usize>() {
                        Ok(n) if n >= 1 => n - 1,
                        _ => {
                            println!("Invalid slot: {}", arg);
                            continue;
                        }
                    };
                    if let Err(err) = session.rotate_slot(slot) {
                        println!("{}", err);
                    }
                }
                println!("Guess: {}", describe(session.guess()));
            }
            "submit" | "s" => match session.submit_to(&mut sink) {
                Ok(submission) => {
                    println!();
                    println!(
                        "#{} {} → {}",
                        submission.key + 1,
                        session.guess(),
                        submission.feedback
                    );
                    if submission.won {
                        println!();
                        println!("🎉 Cracked it in {} guesses!", session.history().size());
                        println!("Your score: {}", submission.score);
                        if let Some(record) = sink.records.last() {
                            tracing::info!(?record, "Score recorded");
                            println!(
                                "Recorded score {} at difficulty {}{}",
                                record.score,
                                record.difficulty_level,
                                record
                                    .player_id
                                    .map(|id| format!(" for player {}", id))
                                    .unwrap_or_default()
                            );
                        }
                        println!("Type 'reset' to play again.");
                    }
                    println!();
                }
                Err(err) => println!("{}", err),
            },
            "history" | "hist" => {
                if session.history().is_empty() {
                    println!("No guesses yet.");
                    continue;
                }
                println!();
                for (key, entry) in session.history().iter() {
                    println!("{:>3}  {}  {}", key + 1, entry.guess, entry.feedback);
                }
                println!();
            }
            "scores" => {
                let records = match cli.player_id {
                    Some(id) => sink.scores_for(id),
                    None => sink.scores(),
                };
                if records.is_empty() {
                    println!("No scores recorded yet.");
                    continue;
                }
                println!();
                println!("{:>4} {:>7} {:>10} {:>7}", "#", "Player", "Difficulty", "Score");
                println!("{}", "-".repeat(31));
                for (i, record) in records.iter().enumerate() {
                    println!(
                        "{:>4} {:>7} {:>10} {:>7}",
                        i + 1,
                        record.player_id.map(|id| id.to_string()).unwrap_or_else(|| "-".into()),
                        record.difficulty_level,
                        record.score
                    );
                }
                println!();
            }
            "pool" | "p" => {
                print_state(&session);
            }
            "hint" | "t" => {
                let n: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);
                let mut breaker = CodeBreaker::new(session.pool())?;
                breaker.apply_history(session.history());
                let top = breaker.find_best_guesses(n);

                println!();
                println!("Remaining possible targets: {}", breaker.remaining_count());
                println!("{:>4} {:>6} {:>8} {:>12} Possible?", "#", "Code", "Entropy", "Exp. Remain");
                println!("{}", "-".repeat(46));
                for (i, analysis) in top.iter().enumerate() {
                    println!(
                        "{:>4} {:>6} {:>8.3} {:>12.1} {}",
                        i + 1,
                        analysis.code,
                        analysis.entropy,
                        analysis.expected_remaining,
                        if analysis.is_possible_answer { "✓" } else { "" }
                    );
                }
                println!();
            }
            "reset" => {
                session.reset(&mut rng)?;
                println!("New game.");
                print_state(&session);
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }

    Ok(())
}

/// Pool for a known target: its colors first, then palette order.
fn pool_around(target: &Code, size: usize) -> anyhow::Result<ColorPool> {
    let mut colors: Vec<_> = target.iter().collect();
    colors.extend(PALETTE.iter().copied().filter(|c| !target.contains(*c)));
    colors.truncate(size.max(target.colors().len()));
    Ok(ColorPool::new(colors)?)
}

fn run_solve(cli: &Cli, code: &str) -> anyhow::Result<()> {
    let config = cli.config();
    config.validate()?;
    let target = Code::parse(code)?;
    let pool = pool_around(&target, config.pool_size)?;
    let mut breaker = CodeBreaker::new(&pool)?;

    println!("Solving for: {}", target);
    println!("Pool: {}", pool);
    println!();

    let guesses = breaker.solve_for_target(&target);
    for (i, (guess, pattern)) in guesses.iter().enumerate() {
        println!("Guess {}: {} → {}", i + 1, guess, pattern);
    }

    println!();
    match guesses.last() {
        Some((_, pattern)) if pattern.is_win() => println!("Solved in {} guesses.", guesses.len()),
        _ => println!("Failed to solve within {} guesses.", guesses.len()),
    }
    Ok(())
}

fn run_suggest(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config();
    config.validate()?;
    let pool = masterand::select_pool(&PALETTE, config.pool_size, &mut cli.rng())?;
    let breaker = CodeBreaker::new(&pool)?;

    println!("Pool: {}", pool);
    match breaker.find_best_guess() {
        Some(analysis) => {
            println!("Best opening guess: {}", analysis.code);
            println!("Entropy: {:.3} bits", analysis.entropy);
        }
        None => println!("No codes available."),
    }
    Ok(())
}

fn run_bench(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config();
    config.validate()?;
    let pool = masterand::select_pool(&PALETTE, config.pool_size, &mut cli.rng())?;
    let breaker = CodeBreaker::new(&pool)?;

    println!("Running benchmark on all {} targets...", breaker.all_codes().len());
    let start = Instant::now();
    let distribution = breaker.benchmark_guess_distribution();
    let elapsed = start.elapsed();

    let total: usize = distribution.iter().map(|(_, c)| c).sum();
    let total_guesses: usize = distribution.iter().map(|(g, c)| g * c).sum();

    println!();
    println!("Guess distribution:");
    for (guesses, count) in &distribution {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / total).max(1));
        println!("  {:>2} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
    }
    println!();
    println!("Average guesses: {:.3}", total_guesses as f64 / total as f64);
    println!("Time elapsed: {:.2?}", elapsed);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        None | Some(Command::Play) => run_interactive(&cli),
        Some(Command::Solve { code }) => run_solve(&cli, code),
        Some(Command::Suggest) => run_suggest(&cli),
        Some(Command::Bench) => run_bench(&cli),
    };

    if let Err(err) = result {
        tracing::error!(error = %err, "masterand failed");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
