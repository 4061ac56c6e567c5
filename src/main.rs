mod cli;

use anyhow::{anyhow, Result};
use clap::Parser as ClapParser;
use colored::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use codymath::alphabets::greek::{greek_letter, letters, GreekLetter};
use codymath::constants::{constant, sorted_constants};
use codymath::diagnostics::{Diagnostic, DiagnosticEngine};
use codymath::runtime::builtins::{self, builtin_names};
use codymath::runtime::values::Value;
use codymath::MathError;

use crate::cli::{Args, Commands};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Call { function, args, json } => call_function(&function, &args, json),
        Commands::Constants { json } => list_constants(json),
        Commands::Constant { name } => show_constant(&name),
        Commands::Greek { letter, json } => show_greek(letter.as_deref(), json),
        Commands::Functions => list_functions(),
        Commands::Info => show_info(),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print a diagnostic and turn the error into the process failure
fn fail(error: MathError, command: &str, invocation: String) -> anyhow::Error {
    let mut diagnostics = DiagnosticEngine::new();
    diagnostics.add(Diagnostic::new(error).with_invocation(invocation));
    diagnostics.emit_all();
    anyhow!("{} failed", command)
}

fn call_function(function: &str, args: &[f64], json: bool) -> Result<()> {
    let invocation = format!(
        "{} {}",
        function,
        args.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(" ")
    );
    info!("Evaluating {}", invocation.trim_end());

    match builtins::call(function, args) {
        Ok(value) if json => {
            println!("{}", serde_json::to_string(&value)?);
            Ok(())
        }
        Ok(value) => {
            println!("{}", value);
            Ok(())
        }
        Err(err) => Err(fail(err, "call", invocation.trim_end().to_string())),
    }
}

fn list_constants(json: bool) -> Result<()> {
    let entries = sorted_constants();

    if json {
        let table: serde_json::Map<String, serde_json::Value> = entries
            .iter()
            .map(|(name, value)| (name.to_string(), serde_json::json!(value)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    for (name, value) in entries {
        println!("{:<18} {}", name.bright_cyan(), value);
    }
    Ok(())
}

fn show_constant(name: &str) -> Result<()> {
    match constant(name) {
        Some(value) => {
            println!("{}", Value::Number(value));
            Ok(())
        }
        None => Err(fail(
            MathError::UndefinedConstant(name.to_string()),
            "constant",
            format!("constant {}", name),
        )),
    }
}

fn print_letter(key: &str, letter: &GreekLetter) {
    println!(
        "{:<8} {} {}  {}",
        key.bright_cyan(),
        letter.upper.bold(),
        letter.lower,
        letter.name
    );
}

fn show_greek(letter: Option<&str>, json: bool) -> Result<()> {
    match letter {
        Some(key) => {
            let found = greek_letter(key).ok_or_else(|| {
                fail(
                    MathError::UndefinedLetter(key.to_string()),
                    "greek",
                    format!("greek {}", key),
                )
            })?;
            if json {
                println!("{}", serde_json::to_string_pretty(found)?);
            } else {
                print_letter(key, found);
            }
        }
        None if json => {
            let table: serde_json::Map<String, serde_json::Value> = letters()
                .map(|(key, letter)| -> serde_json::Result<(String, serde_json::Value)> {
                    Ok((key.to_string(), serde_json::to_value(letter)?))
                })
                .collect::<serde_json::Result<_>>()?;
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        None => {
            for (key, letter) in letters() {
                print_letter(key, letter);
            }
        }
    }
    Ok(())
}

fn list_functions() -> Result<()> {
    for name in builtin_names() {
        println!("{}", name);
    }
    Ok(())
}

fn show_info() -> Result<()> {
    println!("{}", "CodyMath".bright_cyan().bold());
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Modules:");
    println!("  {} Arithmetic: sum, subtract, multiply, divide, mean", "✓".green());
    println!("  {} Powers and logarithms: power, roots, exp, ln, log", "✓".green());
    println!("  {} Number theory: gcd, lcm, primality, parity, factorial", "✓".green());
    println!("  {} Utilities: round, clamp, lerp, modulo, sign", "✓".green());
    println!("  {} Tables: {} constants, {} Greek letters", "✓".green(), sorted_constants().len(), letters().count());
    println!();
    println!("Errors:");
    println!("  {} Division by zero is the only raised error", "⚠".yellow());
    println!("  {} Other invalid input returns NaN or Infinity", "⚠".yellow());

    Ok(())
}
