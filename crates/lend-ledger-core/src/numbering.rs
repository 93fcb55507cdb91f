//! Sequential document numbers for loans and receipts.
//!
//! Format: `LN-2025-001`, `RCP-2025-014`. Sequences restart every
//! calendar year. The store hands in the most recent number on file and
//! gets back the next one; malformed input restarts the sequence rather
//! than failing a booking.

const LOAN_PREFIX: &str = "LN";
const RECEIPT_PREFIX: &str = "RCP";

/// Next loan number, given the latest `LN-<year>-*` on file for `year`.
pub fn next_loan_number(year: i32, last: Option<&str>) -> String {
    next_number(LOAN_PREFIX, year, last)
}

/// Next receipt number, given the latest `RCP-<year>-*` on file for `year`.
pub fn next_receipt_number(year: i32, last: Option<&str>) -> String {
    next_number(RECEIPT_PREFIX, year, last)
}

fn next_number(prefix: &str, year: i32, last: Option<&str>) -> String {
    let seq = last.map_or(1, |l| parse_sequence(l) + 1);
    format!("{prefix}-{year}-{seq:03}")
}

/// Expected format: PREFIX-YYYY-SEQ.
fn parse_sequence(number: &str) -> u32 {
    let parts: Vec<&str> = number.split('-').collect();
    if parts.len() != 3 {
        return 0;
    }
    parts[2].parse().unwrap_or(0)
}
