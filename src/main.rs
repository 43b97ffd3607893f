//! Codebreaker CLI
//!
//! Interactive terminal game plus a few one-shot commands for scoring,
//! generating keys and letting the solver play.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codebreaker::{
    generate, grade, score, CodeSolver, ColorTable, Feedback, GameConfig, Key, Outcome, Round,
    DEFAULT_KEY_LENGTH, DEFAULT_MAX_ATTEMPTS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "codebreaker")]
#[command(version)]
#[command(about = "Guess the hidden color key from positional and color hints")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of colors in the key
    #[arg(short, long, global = true, default_value_t = DEFAULT_KEY_LENGTH)]
    length: usize,

    /// Guesses allowed per round
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: u32,

    /// Seed for reproducible keys
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Color catalog file (`-n|naranjo:#F6421B;` entries)
    #[arg(long, global = true)]
    colors: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Score a guess against a secret key
    Score { secret: String, guess: String },

    /// Generate secret keys
    Generate {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// List the available colors
    Colors,

    /// Let the solver break a known key
    Solve { secret: String },

    /// Solve every possible key and print the guess distribution
    Bench,
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut i = 0;
            while running_clone.load(Ordering::Relaxed) {
                print!("\r{} {}", frames[i % frames.len()], message);
                let _ = io::stdout().flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            print!("\r{}\r", " ".repeat(message.len() + 3));
            let _ = io::stdout().flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let colors = match &cli.colors {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading color catalog {}", path.display()))?;
            ColorTable::parse(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => ColorTable::default(),
    };
    let config = GameConfig {
        key_length: cli.length,
        max_attempts: cli.attempts,
        colors,
    };
    config.validate()?;
    Ok(config)
}

fn print_colors(colors: &ColorTable) {
    println!("Colors:");
    for spec in colors.specs() {
        println!("  {} - {} ({})", spec.symbol, spec.name, spec.hex);
    }
    println!("Type the initials of your colors as one word.");
    println!("  For rosado(r), amarillo(a), naranjo(n) type: ran");
}

fn describe(key: &Key, colors: &ColorTable) -> String {
    key.symbols()
        .iter()
        .map(|&s| colors.name_of(s).unwrap_or("?"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn prompt(stdin: &io::Stdin, message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn run_interactive(config: &GameConfig, rng: &mut StdRng) -> Result<()> {
    let palette = config.colors.palette();
    print_colors(&config.colors);
    println!();

    let stdin = io::stdin();
    loop {
        let secret = generate(palette, config.key_length, rng)?;
        let mut round = Round::new(secret, config.max_attempts)?;
        let mut solver: Option<CodeSolver> = None;
        println!(
            "New key of {} colors. You have {} guesses.",
            config.key_length, config.max_attempts
        );

        let outcome = loop {
            let Some(line) = prompt(&stdin, "> ")? else {
                return Ok(());
            };

            match line.to_lowercase().as_str() {
                "?" | "help" => {
                    print_colors(&config.colors);
                    continue;
                }
                "quit" | "exit" | "q" => return Ok(()),
                "hint" => {
                    // built on first use
                    if solver.is_none() {
                        solver = Some(CodeSolver::from_history(
                            palette,
                            config.key_length,
                            round.history(),
                        )?);
                    }
                    if let Some(solver) = &solver {
                        match solver.find_best_guess() {
                            Some(analysis) => println!(
                                "Try {} ({}), {} keys still possible",
                                analysis.key,
                                describe(&analysis.key, &config.colors),
                                solver.remaining_count()
                            ),
                            None => println!("No key matches the feedback so far."),
                        }
                    }
                    continue;
                }
                _ => {}
            }

            let guess = match config.colors.parse_guess(&line, config.key_length) {
                Ok(guess) => guess,
                Err(e) => {
                    println!("ERROR: {}", e);
                    continue;
                }
            };

            let outcome = round.submit(guess.clone())?;
            if let Some(feedback) = round.last_feedback() {
                println!(
                    "{:>3}. {}  {}",
                    round.attempts(),
                    describe(&guess, &config.colors),
                    feedback
                );
                if let Some(solver) = solver.as_mut() {
                    solver.apply_feedback(&guess, feedback)?;
                }
            }

            match outcome {
                Outcome::InProgress { .. } => {}
                finished => break finished,
            }
        };

        match outcome {
            Outcome::Won { attempts } => println!("You won in {} guesses!", attempts),
            Outcome::Lost { secret } => println!(
                "Out of guesses. The key was {} ({}).",
                secret,
                describe(&secret, &config.colors)
            ),
            Outcome::InProgress { .. } => {}
        }

        match prompt(&stdin, "Play again? (y/n): ")? {
            Some(answer) if answer.eq_ignore_ascii_case("n") => return Ok(()),
            None => return Ok(()),
            _ => println!(),
        }
    }
}

fn print_solution(guesses: &[(Key, Feedback)], length: usize) {
    for (i, (guess, feedback)) in guesses.iter().enumerate() {
        println!("Guess {}: {} → {}", i + 1, guess, feedback);
    }
    println!();
    match guesses.last() {
        Some((_, feedback)) if feedback.is_win(length) => {
            println!("✓ Solved in {} guesses!", guesses.len())
        }
        _ => println!("✗ Not solved within the attempt budget."),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("codebreaker=debug,info")
    } else {
        EnvFilter::new("codebreaker=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let config = load_config(&cli)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_interactive(&config, &mut rng)?,
        Commands::Score { secret, guess } => {
            let secret = config.colors.parse_secret(&secret, secret.trim().chars().count())?;
            let guess = config.colors.parse_guess(&guess, secret.len())?;
            let feedback = score(&secret, &guess)?;
            let pegs: String = grade(&secret, &guess)?.iter().map(|p| p.to_char()).collect();
            println!(
                "positional hits: {}, color hits: {}",
                feedback.positional_hits, feedback.color_hits
            );
            println!("{}  {}", guess, pegs);
        }
        Commands::Generate { count } => {
            for _ in 0..count {
                let key = generate(config.colors.palette(), config.key_length, &mut rng)?;
                println!("{}", key);
            }
        }
        Commands::Colors => print_colors(&config.colors),
        Commands::Solve { secret } => {
            let secret = config.colors.parse_secret(&secret, config.key_length)?;
            let mut solver = CodeSolver::new(config.colors.palette(), config.key_length)?;
            println!("Solving for: {} ({})", secret, describe(&secret, &config.colors));
            println!();
            let guesses = solver.solve_for_secret(&secret, config.max_attempts)?;
            print_solution(&guesses, config.key_length);
        }
        Commands::Bench => {
            let solver = CodeSolver::new(config.colors.palette(), config.key_length)?;
            println!("Solving all {} keys...", solver.all_keys().len());

            let spinner = Spinner::new("Computing...");
            let start = std::time::Instant::now();
            let distribution = solver.benchmark_guess_distribution(config.max_attempts);
            let elapsed = start.elapsed();
            spinner.stop();

            let total: usize = distribution.iter().map(|(_, c)| c).sum();
            let total_guesses: usize = distribution.iter().map(|(g, c)| g * c).sum();
            println!("Guess distribution:");
            for (guesses, count) in &distribution {
                let pct = *count as f64 / total as f64 * 100.0;
                let bar = "█".repeat((*count * 40 / total).max(1));
                println!("  {:>2} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
            }
            println!();
            println!("Average guesses: {:.3}", total_guesses as f64 / total as f64);
            println!("Time elapsed: {:.2?}", elapsed);
        }
    }

    Ok(())
}
