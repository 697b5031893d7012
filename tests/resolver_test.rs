// ABOUTME: Tests for profile-page bootstrap extraction of the account identifier
// ABOUTME: Covers success, missing bootstrap, malformed JSON, and absent user_id
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use strengthlevel_insights::errors::ParseError;
use strengthlevel_insights::models::AccountId;
use strengthlevel_insights::strengthlevel::parse_account_id;

fn page_with_prefill(prefill: &str) -> String {
    format!(
        "<html><head><title>Workouts</title></head><body>\n\
         <div id=\"app\"></div>\n\
         <script>\nwindow.prefill = {prefill};\nwindow.other = 1;\n</script>\n\
         </body></html>"
    )
}

#[test]
fn test_extracts_string_user_id() {
    let html = page_with_prefill(
        r#"[
            {"request": {"url": "/api/exercises", "params": {}}},
            {"request": {"url": "/api/workouts", "params": {"user_id": "123456", "limit": "200"}}}
        ]"#,
    );
    assert_eq!(parse_account_id(&html).unwrap(), AccountId::from("123456"));
}

#[test]
fn test_extracts_numeric_user_id() {
    let html = page_with_prefill(
        r#"[{"request": {"url": "/api/workouts", "params": {"user_id": 98765}}}]"#,
    );
    assert_eq!(parse_account_id(&html).unwrap(), AccountId::from("98765"));
}

#[test]
fn test_first_matching_entry_wins() {
    let html = page_with_prefill(
        r#"[
            {"request": {"url": "/api/workouts", "params": {"user_id": "first"}}},
            {"request": {"url": "/api/workouts", "params": {"user_id": "second"}}}
        ]"#,
    );
    assert_eq!(parse_account_id(&html).unwrap(), AccountId::from("first"));
}

#[test]
fn test_page_without_prefill_is_bootstrap_missing() {
    let html = "<html><body><p>profile page without scripts</p></body></html>";
    assert!(matches!(
        parse_account_id(html),
        Err(ParseError::BootstrapMissing)
    ));
}

#[test]
fn test_invalid_prefill_json_is_malformed() {
    let html = page_with_prefill(r#"[{"request": {unquoted: true}}]"#);
    assert!(matches!(
        parse_account_id(&html),
        Err(ParseError::MalformedBootstrap(_))
    ));
}

#[test]
fn test_no_workouts_entry_is_account_id_not_found() {
    let html = page_with_prefill(
        r#"[{"request": {"url": "/api/exercises", "params": {"user_id": "123"}}}]"#,
    );
    assert!(matches!(
        parse_account_id(&html),
        Err(ParseError::AccountIdNotFound)
    ));
}

#[test]
fn test_empty_user_id_is_rejected() {
    let html =
        page_with_prefill(r#"[{"request": {"url": "/api/workouts", "params": {"user_id": ""}}}]"#);
    assert!(matches!(
        parse_account_id(&html),
        Err(ParseError::AccountIdNotFound)
    ));
}

#[test]
fn test_prefill_spanning_multiple_lines() {
    let html = page_with_prefill(
        "[\n  {\"request\": {\n    \"url\": \"/api/workouts\",\n    \"params\": {\"user_id\": \"42\"}\n  }}\n]",
    );
    assert_eq!(parse_account_id(&html).unwrap(), AccountId::from("42"));
}
