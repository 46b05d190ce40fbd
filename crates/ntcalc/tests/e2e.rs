//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn ntcalc() -> Command {
    Command::cargo_bin("ntcalc").expect("binary not found")
}

#[test]
fn help_flag() {
    ntcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("number-theory"));
}

#[test]
fn version_flag() {
    ntcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ntcalc"));
}

#[test]
fn no_subcommand_fails() {
    ntcalc().assert().failure();
}

#[test]
fn gcd_quiet() {
    ntcalc()
        .args(["gcd", "56", "98", "-q"])
        .assert()
        .success()
        .stdout("14\n");
}

#[test]
fn lcm_labelled() {
    ntcalc()
        .args(["lcm", "12", "18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lcm(12, 18) = 36"));
}

#[test]
fn modpow_known_value() {
    ntcalc()
        .args(["modpow", "4", "13", "497", "-q"])
        .assert()
        .success()
        .stdout("445\n");
}

#[test]
fn modpow_zero_modulus_exits_with_config_code() {
    ntcalc()
        .args(["modpow", "2", "5", "0"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("modulus must be nonzero"));
}

#[test]
fn inverse_known_value() {
    ntcalc()
        .args(["inverse", "3", "11", "-q"])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn inverse_not_coprime_fails() {
    ntcalc()
        .args(["inverse", "4", "8"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("not invertible"));
}

#[test]
fn is_prime_true_and_false() {
    ntcalc()
        .args(["is-prime", "997", "-q"])
        .assert()
        .success()
        .stdout("true\n");
    ntcalc()
        .args(["is-prime", "999", "-q"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn factor_840() {
    ntcalc()
        .args(["factor", "840", "-q"])
        .assert()
        .success()
        .stdout("2 2 2 3 5 7\n");
}

#[test]
fn factor_zero_fails() {
    ntcalc().args(["factor", "0"]).assert().failure().code(4);
}

#[test]
fn sieve_30() {
    ntcalc()
        .args(["sieve", "30", "-q"])
        .assert()
        .success()
        .stdout("2 3 5 7 11 13 17 19 23 29\n");
}

#[test]
fn sieve_below_two_is_empty() {
    ntcalc()
        .args(["sieve", "1", "-q"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn fib_first_ten() {
    ntcalc()
        .args(["fib", "10", "-q"])
        .assert()
        .success()
        .stdout("0 1 1 2 3 5 8 13 21 34\n");
}

#[test]
fn primes_first_ten() {
    ntcalc()
        .args(["primes", "10", "-q"])
        .assert()
        .success()
        .stdout("2 3 5 7 11 13 17 19 23 29\n");
}

#[test]
fn count_with_threads() {
    ntcalc()
        .args(["count", "1", "10000", "--threads", "4", "-q"])
        .assert()
        .success()
        .stdout("1229\n");
}

#[test]
fn count_pooled_matches() {
    ntcalc()
        .args(["count", "1", "10000", "--pooled", "-q"])
        .assert()
        .success()
        .stdout("1229\n");
}

#[test]
fn count_inverted_range_fails() {
    ntcalc()
        .args(["count", "100", "1"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("invalid range"));
}

#[test]
fn count_zero_threads_fails() {
    ntcalc()
        .args(["count", "1", "100", "--threads", "0"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn verbose_reports_timing() {
    ntcalc()
        .args(["gcd", "56", "98", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("computed in"));
}

#[test]
fn output_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.txt");
    ntcalc()
        .args(["gcd", "56", "98", "-q", "-o"])
        .arg(&path)
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "14\n");
}

#[test]
fn completion_generates_script() {
    ntcalc()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ntcalc"));
}
