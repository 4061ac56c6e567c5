use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "codymath")]
#[command(about = "CodyMath - arithmetic, number theory and mathematical tables")]
#[command(long_about = "CodyMath exposes a small library of pure math functions:
• Arithmetic folds, powers, roots and logarithms
• Number theory: gcd, lcm, primality, parity, factorial
• Rounding, clamping, interpolation and floored modulo
• Tables of named constants and the Greek alphabet")]
#[command(version)]
#[command(after_help = "EXAMPLES:
  codymath call gcd 48 18          # Greatest common divisor
  codymath call round 1234 -1      # Round to tens
  codymath constant pi             # Look up a constant
  codymath greek omega             # Show a Greek letter
  codymath constants --json        # Dump the constant table")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable detailed output and logging
    #[arg(short, long, global = true, help = "Show debug logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Call a function by name
    Call {
        /// Function name, e.g. `gcd` or `nthRoot`
        function: String,

        /// Numeric arguments
        #[arg(allow_negative_numbers = true, help = "Arguments passed to the function")]
        args: Vec<f64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every named constant
    Constants {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up a single constant
    Constant {
        /// Constant name, e.g. `pi` or `euler_mascheroni`
        name: String,
    },

    /// List the Greek alphabet or show one letter
    Greek {
        /// Lowercase English letter name
        letter: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List functions accepted by `call`
    Functions,

    /// Show version and feature information
    Info,
}
