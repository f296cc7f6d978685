use std::path::PathBuf;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

fn hebnum() -> Command {
    let mut cmd = cargo_bin_cmd!("hebnum");
    cmd.env_remove("RUST_LOG")
       .env_remove("HEBNUM_OUTPUT__FORMAT")
       .env_remove("HEBNUM_OUTPUT__WORDS")
       .env_remove("HEBNUM_INPUT__MAX_CHARS");
    cmd
}

#[test]
fn converts_a_phrase() {
    hebnum().arg("מיליון וחצי").assert().success().stdout("1500000\n");
}

#[test]
fn renders_words_on_request() {
    hebnum().arg("--words").arg("אלפיים").assert().success().stdout("2000\tאלפיים\n");
}

#[test]
fn reports_grammar_errors_on_stderr() {
    hebnum().arg("מאה בננה")
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("Error at word 2: Unknown word: בננה."));
}

#[test]
fn prints_json_responses() {
    hebnum().arg("--json").arg("שבע").assert().success().stdout("{\"number\":7.0}\n");

    hebnum().arg("--json")
            .arg("חצי חצי")
            .assert()
            .failure()
            .stdout(predicate::str::starts_with("{\"error\":")
                    .and(predicate::str::contains("used more than once")));
}

#[test]
fn converts_each_line_of_a_file() {
    hebnum().arg("--file")
            .arg(data_path("phrases.txt"))
            .assert()
            .failure()
            .stdout("1234\n0.7\n")
            .stderr(predicate::str::contains("Unknown word: בננה"));
}

#[test]
fn missing_input_file_is_reported() {
    hebnum().arg("--file")
            .arg(data_path("missing.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read the input file"));
}

#[test]
fn renders_numbers_as_words() {
    hebnum().arg("--to-words")
            .arg("1234")
            .assert()
            .success()
            .stdout("אלף מאתיים שלושים וארבע\n");

    hebnum().arg("--to-words").arg("-7").assert().success().stdout("מינוס שבע\n");

    hebnum().arg("--to-words")
            .arg("seven")
            .assert()
            .failure()
            .stderr(predicate::str::contains("'seven' is not a number"));
}

#[test]
fn environment_overrides_configuration() {
    hebnum().env("HEBNUM_OUTPUT__FORMAT", "json")
            .arg("שבע")
            .assert()
            .success()
            .stdout("{\"number\":7.0}\n");
}

#[test]
fn long_phrases_are_rejected_before_parsing() {
    hebnum().env("HEBNUM_INPUT__MAX_CHARS", "3")
            .arg("מיליון")
            .assert()
            .failure()
            .stderr(predicate::str::contains("longer than 3 characters"));
}

#[test]
fn missing_config_file_is_an_error() {
    hebnum().arg("--config")
            .arg(data_path("missing.toml"))
            .arg("שבע")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load configuration"));
}
