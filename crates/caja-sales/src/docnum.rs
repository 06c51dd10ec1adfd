//! # Document Numbering
//!
//! Document id generation and the date/time stamps written on documents.
//!
//! ## Id Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Document Id Anatomy                                  │
//! │                                                                         │
//! │        8 4 7 2 9 1   5 8 3 6                                         │
//! │        ───────────   ───────                                           │
//! │        last 6 digits  random                                            │
//! │        of epoch ms    1000..=9999                                       │
//! │                                                                         │
//! │  Always 10 digits. The millisecond tail makes ids time-ordered within  │
//! │  a session; the random suffix separates documents issued in the same   │
//! │  millisecond.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Local, Utc};
use rand::Rng;

/// Generates a 10-digit document id.
pub fn generate_document_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let tail = millis.rem_euclid(1_000_000);
    let suffix = rand::thread_rng().gen_range(1000..=9999);
    format!("{:06}{}", tail, suffix)
}

/// Current local date as printed on documents (`dd/mm/yyyy`).
pub fn current_date() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}

/// Current local time as printed on documents and the punch clock (`HH:MM`).
pub fn current_time() -> String {
    Local::now().format("%H:%M").to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_is_ten_digits() {
        let id = generate_document_id();
        assert_eq!(id.len(), 10);
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_suffix_stays_in_range() {
        for _ in 0..50 {
            let id = generate_document_id();
            let suffix: u32 = id[6..].parse().unwrap();
            assert!((1000..=9999).contains(&suffix));
        }
    }

    #[test]
    fn test_ids_vary() {
        let ids: HashSet<String> = (0..20).map(|_| generate_document_id()).collect();
        assert!(ids.len() > 1);
    }

    #[test]
    fn test_date_format() {
        let date = current_date();
        assert!(chrono::NaiveDate::parse_from_str(&date, "%d/%m/%Y").is_ok());
    }

    #[test]
    fn test_time_format() {
        let time = current_time();
        assert_eq!(time.len(), 5);
        assert_eq!(time.as_bytes()[2], b':');
    }
}
