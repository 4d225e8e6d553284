// crates/clear-attribute-cli/src/tests/terminal.rs
// ============================================================================
// Module: Console Terminal Tests
// Description: Unit tests for the confirmation prompt and status lines.
// Purpose: Ensure the prompt defaults to "no" and lines carry UTC stamps.
// Dependencies: clear-attribute-cli terminal module, time
// ============================================================================

//! ## Overview
//! Drives [`ConsoleTerminal`] over in-memory readers and writers.

use std::io::Cursor;

use clear_attribute_core::AttributeCode;
use clear_attribute_core::ReportKind;
use clear_attribute_core::ReportLine;
use clear_attribute_core::Terminal;
use time::macros::datetime;

use crate::terminal::ConsoleTerminal;
use crate::terminal::is_affirmative;

fn answer(input: &str) -> (bool, String) {
    let mut terminal = ConsoleTerminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let code = AttributeCode::parse("special_price").unwrap();
    let confirmed = terminal.confirm(&code).unwrap();
    (confirmed, String::from_utf8(terminal.into_output()).unwrap())
}

fn rendered(kind: ReportKind) -> String {
    let mut terminal = ConsoleTerminal::new(Cursor::new(Vec::new()), Vec::new());
    terminal
        .report(&ReportLine {
            at: datetime!(2024-03-05 07:08:09 +02:00),
            kind,
        })
        .unwrap();
    String::from_utf8(terminal.into_output()).unwrap()
}

#[test]
fn prompt_names_the_attribute() {
    let (_, output) = answer("y\n");
    assert_eq!(
        output,
        "You are about to null product attribute data for special_price. Are you sure? [y/N] "
    );
}

#[test]
fn yes_answers_confirm() {
    assert!(answer("y\n").0);
    assert!(answer("Yes\n").0);
    assert!(answer("  YEAH\n").0);
}

#[test]
fn other_answers_decline() {
    assert!(!answer("n\n").0);
    assert!(!answer("\n").0);
    assert!(!answer("").0);
    assert!(!answer("ok y\n").0);
}

#[test]
fn affirmative_check_ignores_surrounding_whitespace() {
    assert!(is_affirmative(" y \r\n"));
    assert!(!is_affirmative(" \n"));
}

#[test]
fn status_lines_are_stamped_in_utc() {
    assert_eq!(rendered(ReportKind::Start), "[2024-03-05 05:08:09] Start\n");
    assert_eq!(rendered(ReportKind::Finish), "[2024-03-05 05:08:09] Finish\n");
}

#[test]
fn setting_line_names_id_and_table() {
    let line = rendered(ReportKind::Setting {
        attribute_id: 42,
        table: "catalog_product_entity_decimal".to_string(),
    });
    assert_eq!(line, "[2024-03-05 05:08:09] Setting ID 42 to NULL in catalog_product_entity_decimal\n");
}

#[test]
fn problem_lines_match_operator_text() {
    assert_eq!(
        rendered(ReportKind::AttributeNotFound),
        "[2024-03-05 05:08:09] Cannot find attribute code\n"
    );
    assert_eq!(
        rendered(ReportKind::NullRejected),
        "[2024-03-05 05:08:09] Problem setting values to NULL\n"
    );
    assert_eq!(
        rendered(ReportKind::NullFailed {
            error: "disk I/O error".to_string(),
        }),
        "[2024-03-05 05:08:09] Problem setting values to NULL : disk I/O error\n"
    );
}
