//! # Equilab CLI Application
//!
//! Terminal practice sessions on top of algebra_core.
//!
//! Usage:
//!   algebra_cli [options]
//!
//! Options:
//!   --settings <file>     Load settings from a JSON file
//!   --type <category>     polynomial, fractional, radical, quadratic, wordProblem
//!   --difficulty <tier>   basic, intermediate, advanced
//!   --challenge           Start in challenge mode
//!   --json                Print one generated equation as JSON and exit
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=algebra_core=debug`).

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use algebra_core::equations::{generate, Difficulty, Equation, EquationType};
use algebra_core::session::{Feedback, PracticeSession, SessionMode, StepWalkthrough};
use algebra_core::settings::{load_settings_or_default, Settings};
use algebra_core::AlgebraError;
use log::info;

struct Options {
    settings_path: Option<PathBuf>,
    category: Option<EquationType>,
    difficulty: Option<Difficulty>,
    challenge: bool,
    json: bool,
}

fn parse_args(args: &[String]) -> Result<Options, AlgebraError> {
    let mut options = Options {
        settings_path: None,
        category: None,
        difficulty: None,
        challenge: false,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--settings" => {
                options.settings_path = Some(PathBuf::from(option_value(args, i)?));
                i += 1;
            }
            "--type" => {
                options.category = Some(option_value(args, i)?.parse()?);
                i += 1;
            }
            "--difficulty" => {
                options.difficulty = Some(option_value(args, i)?.parse()?);
                i += 1;
            }
            "--challenge" => options.challenge = true,
            "--json" => options.json = true,
            other => {
                eprintln!("Unknown option: {}", other);
            }
        }
        i += 1;
    }

    Ok(options)
}

/// Value following the flag at `i`; a missing value or another flag is an error.
fn option_value(args: &[String], i: usize) -> Result<&str, AlgebraError> {
    match args.get(i + 1) {
        Some(value) if !value.starts_with("--") => Ok(value),
        _ => Err(AlgebraError::invalid_input(
            args[i].as_str(),
            "",
            "option requires a value",
        )),
    }
}

fn print_usage() {
    println!("Usage: algebra_cli [--settings <file>] [--type <category>] [--difficulty <tier>] [--challenge] [--json]");
    println!();
    println!("Categories: polynomial, fractional, radical, quadratic, wordProblem");
    println!("Tiers:      basic, intermediate, advanced");
}

fn prompt(label: &str) -> Option<String> {
    print!("{}", label);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn print_question(equation: &Equation) {
    println!("═══════════════════════════════════════");
    println!(
        "  {} ({})",
        equation.equation_type().display_name(),
        equation.difficulty().display_name()
    );
    println!("═══════════════════════════════════════");
    println!();
    println!("  {}", equation.text());
    if equation.text() != equation.latex() && !equation.text().ends_with(equation.latex()) {
        println!("  {}", equation.latex());
    }
    println!();
}

fn print_steps(equation: &Equation) {
    let mut walk = StepWalkthrough::new(equation);
    loop {
        let step = walk.current_step();
        let (current, total) = walk.progress();
        println!("  Step {}/{}: {}", current, total, step.instruction);
        println!("      {}", step.latex);
        println!("      {}", step.explanation);
        if !walk.next() {
            break;
        }
    }
    println!();
    println!("  {}", equation.explanation());
    println!();
}

fn run(settings: &Settings, options: &Options) {
    let category = options.category.unwrap_or(settings.default_category);
    let difficulty = options.difficulty.unwrap_or(settings.default_difficulty);

    let mut session = PracticeSession::new(category, difficulty)
        .with_checker(settings.checker())
        .with_hint_threshold(settings.hint_threshold);
    if options.challenge {
        session.start_challenge();
    }

    println!("Commands: hint, steps, new, stats, quit");
    println!();

    loop {
        let progress = session
            .challenge()
            .map(|c| (c.is_completed(), c.index() + 1, c.questions().len()));
        if let Some((completed, number, total)) = progress {
            if completed {
                let (correct, total) = session.challenge_score().unwrap_or((0, total));
                println!("Challenge complete: {}/{} correct", correct, total);
                match prompt("Play again? [y/N]: ").as_deref() {
                    Some("y") | Some("Y") => {
                        session.start_challenge();
                        continue;
                    }
                    _ => break,
                }
            }
            println!("Question {} of {}", number, total);
        }

        let equation = session.current().equation().clone();
        print_question(&equation);

        let Some(input) = prompt("Your answer: ") else {
            break;
        };

        match input.as_str() {
            "quit" | "q" | "exit" => break,
            "hint" => {
                let step = session.current_mut().show_hint();
                println!("  Hint (step {}): {}", step.step_number, step.instruction);
                println!("      {}", step.latex);
                println!();
            }
            "steps" => print_steps(&equation),
            "new" => {
                if session.mode() == SessionMode::Challenge {
                    println!("  Skipping this question.");
                }
                session.skip();
            }
            "stats" => {
                let stats = session.stats();
                println!(
                    "  Solved: {}  Attempts: {}  Streak: {}  Best streak: {}",
                    stats.solved, stats.attempts, stats.streak, stats.best_streak
                );
                println!();
            }
            answer => match session.submit(answer) {
                Ok(Feedback::Correct) => {
                    println!("  [OK] Correct! Streak: {}", session.stats().streak);
                    println!();
                }
                Ok(Feedback::Incorrect) => {
                    println!("  [X] Not quite, try again.");
                    println!();
                }
                Ok(Feedback::Hint) => {
                    println!("  [X] Not quite. Here is a hint:");
                    if let Some(step) = session.current().current_hint() {
                        println!("      {}: {}", step.instruction, step.latex);
                    }
                    println!();
                }
                Err(AlgebraError::EmptyAnswer) => {
                    println!("  Please enter an answer.");
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    if let Ok(json) = serde_json::to_string_pretty(&e) {
                        eprintln!("{}", json);
                    }
                }
            },
        }
    }

    let stats = session.stats();
    info!("session finished: {:?}", stats);
    println!();
    println!("Solved {} in {} attempts (best streak {}).", stats.solved, stats.attempts, stats.best_streak);
}

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(2);
        }
    };

    let settings = match &options.settings_path {
        Some(path) => load_settings_or_default(path),
        None => Settings::default(),
    };

    if options.json {
        let equation = generate(
            options.category.unwrap_or(settings.default_category),
            options.difficulty.unwrap_or(settings.default_difficulty),
        );
        match serde_json::to_string_pretty(&equation) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Equilab CLI - Algebra Practice");
    println!("==============================");
    println!();

    run(&settings, &options);
}
