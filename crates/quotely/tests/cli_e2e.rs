#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn quotely(data_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("quotely"));
    cmd.arg("--data-dir")
        .arg(data_dir)
        .env_remove("QUOTELY_DATA")
        .env_remove("QUOTELY_BUSINESS_NAME")
        .env_remove("QUOTELY_CURRENCY_SYMBOL")
        .env_remove("QUOTELY_BACKUP_PREFIX")
        .env_remove("QUOTELY_OUTPUT_DIR")
        .env_remove("QUOTELY_LOG");
    cmd
}

fn create_invoice(data_dir: &Path, client: &str) -> assert_cmd::assert::Assert {
    quotely(data_dir)
        .args([
            "create",
            "--client",
            client,
            "--email",
            "billing@example.test",
            "--item",
            "Garden clearance|2|10.00",
            "--item",
            "Skip hire|1|5.25",
        ])
        .assert()
}

#[test]
fn invoices_are_numbered_consecutively() {
    let temp = TempDir::new().unwrap();

    create_invoice(temp.path(), "Acme")
        .success()
        .stdout(predicate::str::contains("Invoice No: 0001"))
        .stdout(predicate::str::contains("Total: £25.25"));

    create_invoice(temp.path(), "Acme")
        .success()
        .stdout(predicate::str::contains("Invoice No: 0002"));

    quotely(temp.path())
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("Next invoice: 0003"));
}

#[test]
fn quotes_do_not_use_invoice_numbers() {
    let temp = TempDir::new().unwrap();

    quotely(temp.path())
        .args([
            "create",
            "--quote",
            "--client",
            "Bob",
            "--description",
            "Replant the borders",
            "--total",
            "450",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("QUOTE"))
        .stdout(predicate::str::contains("Replant the borders"))
        .stdout(predicate::str::contains("Invoice No").not());

    quotely(temp.path())
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("Next invoice: 0001"));
}

#[test]
fn manual_number_moves_the_counter() {
    let temp = TempDir::new().unwrap();

    quotely(temp.path())
        .args(["create", "-c", "Acme", "--number", "0041", "--item", "Work|1|1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invoice No: 0041"));

    quotely(temp.path())
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("Next invoice: 0042"));
}

#[test]
fn saved_customer_details_are_reused() {
    let temp = TempDir::new().unwrap();
    create_invoice(temp.path(), "Acme Ltd").success();

    quotely(temp.path())
        .args(["customers", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Ltd"))
        .stdout(predicate::str::contains("billing@example.test"));

    quotely(temp.path())
        .args(["create", "-c", "acme ltd", "--item", "Work|1|1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email: billing@example.test"));
}

#[test]
fn invoice_without_items_is_rejected() {
    let temp = TempDir::new().unwrap();

    quotely(temp.path())
        .args(["create", "-c", "Acme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("line item"));

    quotely(temp.path())
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("Next invoice: 0001"));
}

#[test]
fn invoice_number_without_digits_is_rejected() {
    let temp = TempDir::new().unwrap();

    quotely(temp.path())
        .args(["create", "-c", "Acme", "--number", "abc", "--item", "Work|1|1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invoice number must contain digits"));

    quotely(temp.path())
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("Next invoice: 0001"));
    quotely(temp.path())
        .args(["customers", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved customers."));
}

#[test]
fn quote_needs_a_total_but_not_a_description() {
    let temp = TempDir::new().unwrap();

    quotely(temp.path())
        .args(["create", "--quote", "-c", "Bob", "--description", "Hedges"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("A quote needs a total"));

    quotely(temp.path())
        .args(["create", "--quote", "-c", "Bob", "--total", "80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("QUOTE"))
        .stdout(predicate::str::contains("£80.00"));
}

#[test]
fn oversized_invoice_does_not_use_a_number() {
    let temp = TempDir::new().unwrap();

    quotely(temp.path())
        .args([
            "create",
            "-c",
            "Acme",
            "--item",
            "Big|79228162514264337593543950335|2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));

    quotely(temp.path())
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("Next invoice: 0001"));
    quotely(temp.path())
        .args(["customers", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved customers."));
}

#[test]
fn save_writes_document_file() {
    let temp = TempDir::new().unwrap();
    create_invoice(temp.path(), "Acme").success();

    quotely(temp.path())
        .args(["create", "-c", "Acme", "--item", "Work|1|1", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to"));

    let year = chrono::Local::now().format("%Y").to_string();
    let path = temp.path().join(format!("INV-{}-0002_Acme.txt", year));
    let written = fs::read_to_string(path).unwrap();
    assert!(written.contains("Invoice No: 0002"));
}

#[test]
fn reset_asks_first() {
    let temp = TempDir::new().unwrap();
    create_invoice(temp.path(), "Acme").success();

    quotely(temp.path())
        .arg("reset")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));

    quotely(temp.path())
        .arg("next")
        .assert()
        .stdout(predicate::str::contains("Next invoice: 0002"));

    quotely(temp.path())
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next invoice: 0001"));
}

#[test]
fn export_then_import_into_another_data_dir() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let backups = TempDir::new().unwrap();

    create_invoice(source.path(), "Acme").success();
    create_invoice(source.path(), "Bob").success();

    quotely(source.path())
        .args(["export", "--dir"])
        .arg(backups.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep this file safe"));

    let backup = fs::read_dir(backups.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .find(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("quotely_backup_") && n.ends_with(".json"))
        })
        .expect("backup file written");

    quotely(target.path())
        .arg("import")
        .arg(&backup)
        .args(["--yes", "--restore-counter"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully imported 2 customers! Total customers now: 2",
        ))
        .stdout(predicate::str::contains("Next invoice: 0003"));

    quotely(target.path())
        .args(["customers", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme"))
        .stdout(predicate::str::contains("Bob"));
}

#[test]
fn import_without_yes_can_be_declined() {
    let temp = TempDir::new().unwrap();
    let backup = temp.path().join("backup.json");
    fs::write(&backup, r#"{"customers":[{"name":"Acme"}]}"#).unwrap();
    let data = temp.path().join("data");

    quotely(&data)
        .arg("import")
        .arg(&backup)
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("contains 1 customers"))
        .stdout(predicate::str::contains("Aborted."));

    quotely(&data)
        .args(["customers", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved customers."));
}

#[test]
fn import_rejects_malformed_backup() {
    let temp = TempDir::new().unwrap();
    let backup = temp.path().join("bad.json");
    fs::write(&backup, r#"{"lastInvoiceNumber":"4"}"#).unwrap();

    quotely(&temp.path().join("data"))
        .args(["import", "--yes"])
        .arg(&backup)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid backup file format"));
}

#[test]
fn config_file_and_env_are_applied() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("quotely.toml"),
        "business_name = \"Lifestyle Partnership\"\n",
    )
    .unwrap();

    quotely(temp.path())
        .env("QUOTELY_CURRENCY_SYMBOL", "$")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("business_name = Lifestyle Partnership"))
        .stdout(predicate::str::contains("currency_symbol = $"));

    quotely(temp.path())
        .env("QUOTELY_CURRENCY_SYMBOL", "$")
        .args(["create", "-c", "Acme", "--item", "Work|1|12.5"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Lifestyle Partnership"))
        .stdout(predicate::str::contains("Total: $12.50"));
}

#[test]
fn customers_can_be_deleted() {
    let temp = TempDir::new().unwrap();
    quotely(temp.path())
        .args(["customers", "add", "Acme", "--email", "a@acme.test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer saved: Acme"));

    quotely(temp.path())
        .args(["customers", "delete", "ACME", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer deleted"));

    quotely(temp.path())
        .args(["customers", "show", "Acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer not found"));
}
