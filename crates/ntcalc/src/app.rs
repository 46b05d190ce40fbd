//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{bail, Context, Result};

use ntcalc_core::{
    gcd, is_prime, lcm, mod_inverse, modpow, prime_factors, sieve, FibonacciSequence,
    PrimeSequence,
};
use ntcalc_parallel::{count_primes, count_primes_auto, count_primes_pooled};

use crate::config::{AppConfig, Command};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let Some(command) = &config.command else {
        bail!("no operation given; see --help");
    };

    let started = Instant::now();
    let line = evaluate(command)?;
    let elapsed = started.elapsed();

    if config.quiet {
        println!("{line}");
    } else {
        println!("{} = {line}", label(command));
    }
    if config.verbose {
        eprintln!("computed in {elapsed:.3?}");
    }

    if let Some(path) = &config.output {
        write_to_file(path, &line)?;
    }

    Ok(())
}

fn evaluate(command: &Command) -> Result<String> {
    Ok(match command {
        Command::Gcd { a, b } => gcd(*a, *b).to_string(),
        Command::Lcm { a, b } => lcm(*a, *b).to_string(),
        Command::Modpow { base, exp, modulus } => modpow(*base, *exp, *modulus)?.to_string(),
        Command::Inverse { a, modulus } => mod_inverse(*a, *modulus)?.to_string(),
        Command::IsPrime { n } => is_prime(*n).to_string(),
        Command::Factor { n } => join(&prime_factors(*n)?),
        Command::Sieve { limit } => join(&sieve(*limit)),
        Command::Fib { count } => join(&FibonacciSequence::new(*count).collect::<Vec<_>>()),
        Command::Primes { count } => join(&PrimeSequence::new(*count).collect::<Vec<_>>()),
        Command::Count {
            start,
            end,
            threads,
            pooled,
        } => {
            let count = if *pooled {
                count_primes_pooled(*start, *end)?
            } else if let Some(threads) = threads {
                count_primes(*start, *end, *threads)?
            } else {
                count_primes_auto(*start, *end)?
            };
            count.to_string()
        }
    })
}

fn label(command: &Command) -> String {
    match command {
        Command::Gcd { a, b } => format!("gcd({a}, {b})"),
        Command::Lcm { a, b } => format!("lcm({a}, {b})"),
        Command::Modpow { base, exp, modulus } => format!("{base}^{exp} mod {modulus}"),
        Command::Inverse { a, modulus } => format!("{a}^-1 mod {modulus}"),
        Command::IsPrime { n } => format!("is_prime({n})"),
        Command::Factor { n } => format!("factors({n})"),
        Command::Sieve { limit } => format!("primes <= {limit}"),
        Command::Fib { count } => format!("fibonacci[0..{count}]"),
        Command::Primes { count } => format!("primes[0..{count}]"),
        Command::Count { start, end, .. } => format!("pi[{start}, {end}]"),
    }
}

fn join(values: &[u64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_to_file(path: &str, line: &str) -> Result<()> {
    std::fs::write(path, format!("{line}\n")).with_context(|| format!("writing {path}"))
}
