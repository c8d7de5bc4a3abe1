//! End-to-end tests for the report printed by the gitbcalc binary.
//!
//! These run the compiled binary with real arguments and check stdout,
//! stderr and the exit status.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command instance for the gitbcalc binary with a clean environment.
#[allow(deprecated)]
fn gitbcalc_cmd() -> Command {
    let mut cmd = Command::cargo_bin("gitbcalc").expect("Failed to find gitbcalc binary");
    cmd.env_remove("GITBCALC_LOG").env_remove("CLICOLOR_FORCE");
    cmd
}

#[test]
fn test_two_maxed_talents() {
    gitbcalc_cmd()
        .args(["1,1", "10,10"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Teachings\s+6\n").unwrap())
        .stdout(predicate::str::is_match(r"Guide\s+42\n").unwrap())
        .stdout(predicate::str::is_match(r"Philosophies\s+76\n").unwrap())
        .stdout(predicate::str::contains("Craft").not())
        .stdout(predicate::str::contains("Roughly estimating 68 more runs needed"));
}

#[test]
fn test_exact_table_layout() {
    let expected = "
  Tier  Name            Needed
------  ------------  --------
     1  Teachings            3
     2  Guide               21
     3  Philosophies        38

Roughly estimating 34 more runs needed

";
    gitbcalc_cmd()
        .args(["1", "10"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_inventory_covers_everything() {
    gitbcalc_cmd()
        .args(["1,1", "10,10", "--books", "6,42,76"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Philosophies\s+0\n").unwrap())
        .stdout(predicate::str::contains("Roughly estimating 0 more runs needed"));
}

#[test]
fn test_conversion_adds_craft_column() {
    // 1 -> 6 needs [3, 21, 0]; 30 Teachings leave 27 spare, crafting 9 Guides
    gitbcalc_cmd()
        .args(["1", "6", "-b", "30,0,0", "-a"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Needed\s+Craft\n").unwrap())
        .stdout(predicate::str::is_match(r"Teachings\s+0\n").unwrap())
        .stdout(predicate::str::is_match(r"Guide\s+12\s+9\n").unwrap())
        .stdout(predicate::str::is_match(r"Philosophies\s+0\s+0\n").unwrap());
}

#[test]
fn test_singular_run() {
    // 6 -> 7 needs 4 Philosophies; owning 3 leaves 1 -> 0.88 runs -> 1
    gitbcalc_cmd()
        .args(["6", "7", "--books", "0,0,3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Roughly estimating 1 more run needed"));
}

#[test]
fn test_json_output() {
    let output = gitbcalc_cmd()
        .args(["1,1", "10,10", "--format", "json"])
        .output()
        .expect("Failed to run gitbcalc");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["needed"]["teachings"], 6);
    assert_eq!(report["needed"]["guide"], 42);
    assert_eq!(report["needed"]["philosophies"], 76);
    assert_eq!(report["estimated_runs"], 68);
}

#[test]
fn test_length_mismatch_fails_without_table() {
    gitbcalc_cmd()
        .args(["1,2", "1"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "number of current and target Talent levels do not match",
        ));
}

#[test]
fn test_out_of_range_level_fails() {
    gitbcalc_cmd()
        .args(["0", "5"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("current Talent level out of bounds"));

    gitbcalc_cmd()
        .args(["1", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("target Talent level out of bounds"));
}

#[test]
fn test_target_below_current_fails() {
    gitbcalc_cmd()
        .args(["8", "7"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("lower than current Talent level"));
}

#[test]
fn test_wrong_inventory_length_fails() {
    gitbcalc_cmd()
        .args(["1", "10", "--books", "1,2"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unexpected number of Talent book tiers"));
}

#[test]
fn test_non_integer_level_fails() {
    gitbcalc_cmd()
        .args(["1,a", "2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid integer 'a'"));
}

#[test]
fn test_help_lists_options() {
    gitbcalc_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--books"))
        .stdout(predicate::str::contains("--allow-conversion"));
}
