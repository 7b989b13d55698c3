use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn run_solve() {
    let output = "Solving levels/01-simplest.txt...
Found path in 1 steps:
→
";

    Command::main_binary()
        .unwrap()
        .arg("levels/01-simplest.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_dead_end() {
    let output = "Solving levels/04-destroyer-dead-end.txt...
No moves possible anymore after 0 steps.
";

    Command::main_binary()
        .unwrap()
        .arg("levels/04-destroyer-dead-end.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_walkthrough() {
    let output = "#####
#   #
#aA #
#   #
#####
→
#####
#   #
# a #
#   #
#####
";

    Command::main_binary()
        .unwrap()
        .arg("--walkthrough")
        .arg("→")
        .arg("levels/01-simplest.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_walkthrough_bad_symbol() {
    let output = "ERROR: unknown direction symbol 'x' - use arrow symbols like in the solver output (←→↑↓)
";

    Command::main_binary()
        .unwrap()
        .arg("--walkthrough")
        .arg("x")
        .arg("levels/01-simplest.txt")
        .assert()
        .failure()
        .stdout(output);
}

#[test]
fn run_missing_file() {
    Command::main_binary()
        .unwrap()
        .arg("levels/no-such-level.txt")
        .assert()
        .failure();
}
