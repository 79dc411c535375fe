mod common;
use common::{TestFixture, UNREACHABLE_URL};

use predicates::prelude::*;

#[test]
fn add_with_empty_field_fails_before_any_request() {
    let fixture = TestFixture::new();

    // The backend is unreachable; validation must reject the input first
    fixture
        .command()
        .arg("--api-url")
        .arg(UNREACHABLE_URL)
        .arg("add")
        .arg("Alice")
        .arg("")
        .arg("alice@example.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("All fields are required"));
}

#[test]
fn add_with_whitespace_only_name_is_rejected() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("--api-url")
        .arg(UNREACHABLE_URL)
        .arg("add")
        .arg("   ")
        .arg("555-0101")
        .arg("alice@example.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("All fields are required"));
}

#[test]
fn list_against_unreachable_server_reports_connection_error() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("--api-url")
        .arg(UNREACHABLE_URL)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error connecting to server"));
}

#[test]
fn update_against_unreachable_server_reports_connection_error() {
    let fixture = TestFixture::new();

    // update pre-fills from the current record, so the initial load fails
    fixture
        .command()
        .arg("--api-url")
        .arg(UNREACHABLE_URL)
        .arg("update")
        .arg("Alice")
        .arg("--phone")
        .arg("555-0102")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error connecting to server"));
}

#[test]
fn invalid_api_url_is_rejected() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("--api-url")
        .arg("not a url")
        .arg("list")
        .assert()
        .failure();
}
