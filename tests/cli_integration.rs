use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn fridge(data: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fridge").unwrap();
    cmd.env("FRIDGE_DATA", data)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn init(data: &Path) {
    fridge(data)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 16 catalogue items"));
}

#[test]
fn empty_fridge_lists_nothing() {
    let temp = tempfile::tempdir().unwrap();

    fridge(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No groceries found."));
    assert!(temp.path().join("fridge.db").exists());
}

#[test]
fn init_seeds_catalogue_once() {
    let temp = tempfile::tempdir().unwrap();
    init(temp.path());

    fridge(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));

    fridge(temp.path())
        .arg("items")
        .assert()
        .success()
        .stdout(predicate::str::contains("Frozen Peas"))
        .stdout(predicate::str::contains("Milk"));
}

#[test]
fn add_use_and_remove() {
    let temp = tempfile::tempdir().unwrap();
    init(temp.path());

    fridge(temp.path())
        .args(["add", "Milk", "cooling", "2", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 2 x Milk to COOLING (id 1)"))
        .stdout(predicate::str::contains("today"));

    fridge(temp.path())
        .args(["use", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Used one Milk, 1 left"));

    fridge(temp.path())
        .args(["consume", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quantity cannot be less than 1"))
        .stderr(predicate::str::contains("Error: ").count(1))
        .stderr(predicate::str::contains("fridge remove 1"));

    fridge(temp.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("quantity:  1"));

    fridge(temp.path())
        .args(["rm", "1", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 Milk"))
        .stdout(predicate::str::contains("No groceries found."));
}

#[test]
fn list_filters_and_json() {
    let temp = tempfile::tempdir().unwrap();
    init(temp.path());

    for (item, section) in [("Milk", "cooling"), ("Ice Cream", "freezer"), ("Bacon", "meat")] {
        fridge(temp.path())
            .args(["add", item, section, "1", "-y"])
            .assert()
            .success();
    }

    fridge(temp.path())
        .args(["list", "--filter", "free", "--by", "section"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ice Cream"))
        .stdout(predicate::str::contains("Milk").not());

    fridge(temp.path())
        .args(["ls", "--expiring"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bacon"))
        .stdout(predicate::str::contains("Ice Cream").not());

    fridge(temp.path())
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"section\": \"MEAT\""));
}

#[test]
fn declined_add_changes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    init(temp.path());

    fridge(temp.path())
        .args(["add", "Milk", "cooling", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Add 2 x Milk to COOLING? [y/N]"))
        .stdout(predicate::str::contains("Cancelled."));

    fridge(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No groceries found."));
}

#[test]
fn confirmation_can_be_switched_off() {
    let temp = tempfile::tempdir().unwrap();
    init(temp.path());

    fridge(temp.path())
        .args(["config", "confirm", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("confirm set to false"));

    fridge(temp.path())
        .args(["add", "Eggs", "cooling", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 6 x Eggs"));

    fridge(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("confirm = false"));
}

#[test]
fn bad_input_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    init(temp.path());

    fridge(temp.path())
        .args(["add", "Caviar", "cooling", "1", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("item `Caviar` does not exist"));

    fridge(temp.path())
        .args(["add", "Milk", "pantry", "1", "-y"])
        .assert()
        .failure();

    fridge(temp.path())
        .args(["add", "Milk", "cooling", "-3", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quantity must be a number"));

    fridge(temp.path())
        .args(["add", "Milk", "cooling", "0", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quantity must be at least 1"));

    fridge(temp.path())
        .args(["remove", "42", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("grocery id 42 does not exist"));

    fridge(temp.path())
        .args(["use", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("grocery id 42 does not exist"));
}
