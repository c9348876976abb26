//! Integration tests for the directory and its birthday window.

mod common;

use chrono::NaiveDate;
use common::fixtures::*;
use contact_book::{BookError, Directory, Phone};

#[test]
fn test_find_is_case_insensitive() {
    let mut directory = Directory::new();
    directory.add_record(sample_record("Alice", &["1111111111"], None));

    let record = directory.find("aLICE").expect("Alice should be found");
    assert_eq!(record.name().as_str(), "Alice");
}

#[test]
fn test_find_in_empty_directory() {
    let directory = Directory::new();
    assert!(directory.find("anyone").is_none());
}

#[test]
fn test_delete_removes_case_variants() {
    let mut directory = sample_directory();
    assert_eq!(directory.delete("bOB"), 1);
    assert!(directory.find("Bob").is_none());
    assert_eq!(directory.len(), 3);
}

#[test]
fn test_at_most_one_record_per_case_insensitive_name() {
    let mut directory = Directory::new();
    directory.add_record(sample_record("eve", &["1111111111"], None));
    directory.add_record(sample_record("Eve", &["2222222222"], None));
    directory.add_record(sample_record("EVE", &["3333333333"], None));

    assert_eq!(directory.len(), 1);
    assert_eq!(directory.find("eve").unwrap().phone_list(), "3333333333");
}

#[test]
fn test_edit_first_phone_without_phones() {
    let mut directory = sample_directory();
    let dave = directory.find_mut("dave").unwrap();

    let result = dave.edit_first_phone("5555555555");
    assert_eq!(result, Err(BookError::EmptyPhoneList("Dave".to_string())));
    assert!(dave.phones().is_empty());
}

#[test]
fn test_record_mutations_visible_through_directory() {
    let mut directory = sample_directory();
    {
        let bob = directory.find_mut("BOB").unwrap();
        bob.edit_first_phone("9999999999").unwrap();
        bob.remove_phone("3333333333");
        bob.set_birthday("01.01.1985").unwrap();
    }

    let bob = directory.find("bob").unwrap();
    let phones: Vec<&str> = bob.phones().iter().map(Phone::as_str).collect();
    assert_eq!(phones, vec!["9999999999"]);
    assert_eq!(
        bob.to_string(),
        "Contact name: Bob, phones: 9999999999; birthday: 01.01.1985"
    );
}

#[test]
fn test_birthdays_next_week() {
    let directory = sample_directory();

    // Thursday 15 Oct 2026: window is Mon 19 Oct - Sun 25 Oct
    let upcoming: Vec<(&str, NaiveDate)> =
        directory.birthdays_in_window(date(2026, 10, 15)).collect();

    assert_eq!(
        upcoming,
        vec![("Alice", date(2026, 10, 19)), ("Bob", date(2026, 10, 25))]
    );
}

#[test]
fn test_christmas_birthday_seen_from_previous_monday() {
    let mut directory = Directory::new();
    directory.add_record(sample_record("Noel", &["1234567890"], Some("25.12.1990")));

    // Monday 14 Dec 2026: window is 21-27 Dec, Christmas is Friday
    let upcoming: Vec<(&str, NaiveDate)> =
        directory.birthdays_in_window(date(2026, 12, 14)).collect();
    assert_eq!(upcoming, vec![("Noel", date(2026, 12, 25))]);

    // Monday 21 Dec itself looks at the week after Christmas
    assert_eq!(directory.birthdays_in_window(date(2026, 12, 21)).count(), 0);
}

#[test]
fn test_birthday_window_is_lazy_and_restartable() {
    let directory = sample_directory();
    let reference = date(2026, 10, 15);

    let mut upcoming = directory.birthdays_in_window(reference);
    assert_eq!(upcoming.next(), Some(("Alice", date(2026, 10, 19))));

    // A fresh scan starts over
    assert_eq!(directory.birthdays_in_window(reference).count(), 2);
}

#[test]
fn test_birthdays_stamped_onto_reference_year() {
    let mut directory = Directory::new();
    directory.add_record(sample_record("Jan", &["1234567890"], Some("05.01.2000")));
    directory.add_record(sample_record("Sylvester", &["0987654321"], Some("31.12.1980")));

    // Wednesday 30 Dec 2026: window is 4-10 Jan 2027, birthdays land in 2026
    assert_eq!(directory.birthdays_in_window(date(2026, 12, 30)).count(), 0);

    // Tuesday 22 Dec 2026: window is 28 Dec 2026 - 3 Jan 2027
    let upcoming: Vec<(&str, NaiveDate)> =
        directory.birthdays_in_window(date(2026, 12, 22)).collect();
    assert_eq!(upcoming, vec![("Sylvester", date(2026, 12, 31))]);
}
