//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand};

/// NTCalc-rs — concurrent number-theory calculator.
#[derive(Parser, Debug)]
#[command(name = "ntcalc", version, about)]
pub struct AppConfig {
    /// Operation to perform.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Quiet mode (only output the value).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (timing on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write the result line to a file.
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// One subcommand per toolkit operation.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Greatest common divisor of two numbers.
    Gcd { a: u64, b: u64 },

    /// Least common multiple of two numbers.
    Lcm { a: u64, b: u64 },

    /// Modular exponentiation: BASE^EXP mod MODULUS.
    Modpow { base: u64, exp: u64, modulus: u64 },

    /// Modular inverse of A modulo MODULUS.
    Inverse { a: u64, modulus: u64 },

    /// Test a number for primality.
    IsPrime { n: u64 },

    /// Prime factorization, ascending with multiplicity.
    Factor { n: u64 },

    /// All primes up to LIMIT.
    Sieve { limit: u64 },

    /// The first COUNT Fibonacci numbers.
    Fib { count: u64 },

    /// The first COUNT primes.
    Primes { count: u64 },

    /// Count primes in [START, END] with worker threads.
    Count {
        start: u64,
        end: u64,

        /// Worker threads (default: available parallelism).
        #[arg(long, env = "NTCALC_THREADS")]
        threads: Option<u32>,

        /// Run on the shared rayon pool instead of per-call threads.
        #[arg(long)]
        pooled: bool,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
