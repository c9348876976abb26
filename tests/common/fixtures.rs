//! Test fixtures and sample data.
//!
//! Builders for records and a pre-populated directory used across the
//! integration tests.

use chrono::NaiveDate;
use contact_book::{Directory, Record};

/// Create a record with the given phones and optional birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).expect("fixture name is valid");
    for phone in phones {
        record.add_phone(phone).expect("fixture phone is valid");
    }
    if let Some(birthday) = birthday {
        record.set_birthday(birthday).expect("fixture birthday is valid");
    }
    record
}

/// A directory with a handful of contacts spread over October 2026.
#[allow(dead_code)]
pub fn sample_directory() -> Directory {
    let mut directory = Directory::new();
    directory.add_record(sample_record("Alice", &["1111111111"], Some("19.10.1990")));
    directory.add_record(sample_record("Bob", &["2222222222", "3333333333"], Some("25.10.1985")));
    directory.add_record(sample_record("Carol", &["4444444444"], Some("26.10.1979")));
    directory.add_record(sample_record("Dave", &[], None));
    directory
}

/// Build a date, panicking on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is valid")
}
