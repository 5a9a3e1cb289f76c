use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::Sandbox;

#[test]
fn test_config_set_and_get() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["config", "--set", "breaks.weekday.lunch.start_time=12:30"])
        .assert()
        .success();

    sb.cmd()
        .args(["config", "--get", "breaks.weekday.lunch.start_time"])
        .assert()
        .success()
        .stdout(contains("12:30"));

    sb.cmd()
        .args(["config", "--get", "breaks.weekend.lunch.end_time"])
        .assert()
        .success()
        .stdout(contains("13:30"));

    let yaml = fs::read_to_string(&sb.config).unwrap();
    assert!(yaml.contains("12:30"));
    // command-line record file override is not persisted
    assert!(!yaml.contains(&sb.records));
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["config", "--set", "breaks.weekday.lunch.end_time=13:75"])
        .assert()
        .failure()
        .stderr(contains("not a valid HH:MM time"));

    sb.cmd()
        .args(["config", "--set", "rounding_algorithm=hourly"])
        .assert()
        .failure()
        .stderr(contains("unknown rounding algorithm"));

    sb.cmd()
        .args(["config", "--set", "language=tr"])
        .assert()
        .failure()
        .stderr(contains("unknown configuration key"));

    sb.cmd()
        .args(["config", "--set", "rounding_algorithm"])
        .assert()
        .failure()
        .stderr(contains("KEY=VALUE"));

    assert!(!std::path::Path::new(&sb.config).exists());
}

#[test]
fn test_rounding_algorithm_from_configuration() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["config", "--set", "rounding_algorithm=floor"])
        .assert()
        .success();

    sb.cmd()
        .args(["calc", "08:14", "16:59"])
        .assert()
        .success()
        .stdout(contains("Rounded entry:   08:00"))
        .stdout(contains("Rounded exit:    16:45"))
        .stdout(contains("Round down"));
}

#[test]
fn test_disabled_break_from_configuration() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["config", "--set", "breaks.weekday.lunch.enabled=false"])
        .assert()
        .success();

    sb.cmd()
        .args(["calc", "08:00", "17:00"])
        .assert()
        .success()
        .stdout(contains("9.00"))
        .stdout(contains("none"));
}

#[test]
fn test_malformed_break_in_file_falls_back_to_default() {
    let sb = Sandbox::new();
    sb.write_config(
        "rounding_algorithm: standard\n\
         breaks:\n  \
           weekday:\n    \
             lunch:\n      \
               start_time: '12:00'\n      \
               end_time: 'half past'\n      \
               enabled: true\n",
    );

    sb.cmd()
        .args(["calc", "08:00", "17:00"])
        .assert()
        .success()
        .stdout(contains("8.25"))
        .stdout(contains("default, config invalid"));
}

#[test]
fn test_unknown_rounding_algorithm_in_file_uses_standard() {
    let sb = Sandbox::new();
    sb.write_config("rounding_algorithm: quarterly\n");

    sb.cmd()
        .args(["calc", "08:08", "17:00"])
        .assert()
        .success()
        .stdout(contains("08:15"))
        .stdout(contains("Standard (15 minutes)"));
}

#[test]
fn test_config_check_reports_missing_keys() {
    let sb = Sandbox::new();
    sb.write_config("rounding_algorithm: nearest_5\n");

    sb.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("missing"))
        .stdout(contains("breaks.weekday.lunch.start_time"))
        .stdout(contains("rounding_algorithm").not());

    sb.cmd().args(["init"]).assert().success();

    sb.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete"));
}

#[test]
fn test_config_print_shows_effective_values() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("Default configuration"))
        .stdout(contains("rounding_algorithm: standard"))
        .stdout(contains("weekend:"));
}

#[test]
fn test_broken_config_file_is_an_error() {
    let sb = Sandbox::new();
    sb.write_config("breaks: [not, a, mapping\n");

    sb.cmd()
        .args(["calc", "08:00", "17:00"])
        .assert()
        .failure()
        .stderr(contains("Configuration file error"));
}
