//! Integration tests for the address book and its validated fields.

use contact_assistant::domain::{parse_birthday, parse_phone, ValidationError};
use contact_assistant::error::BookError;
use contact_assistant::models::{AddressBook, ContactRecord};

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    for (name, phone) in [
        ("Alice", "0501111111"),
        ("Bob", "0672222222"),
        ("Carol", "0933333333"),
    ] {
        let mut record = ContactRecord::new(name).unwrap();
        record.add_phone(phone).unwrap();
        book.add_record(record);
    }
    book
}

#[test]
fn test_every_ten_digit_string_is_a_phone() {
    // Walk a spread of ten-digit strings, including leading zeros
    for seed in (0u64..10_000_000_000).step_by(987_654_321) {
        let text = format!("{:010}", seed);
        let phone = parse_phone(&text).unwrap();
        assert_eq!(phone.as_str(), text);
    }
}

#[test]
fn test_non_ten_digit_strings_are_rejected() {
    for text in [
        "",
        "1",
        "123456789",
        "12345678901",
        "12345 67890",
        "(050)123456",
        "050.123.456",
        "abcdefghij",
        "+123456789",
    ] {
        assert_eq!(
            parse_phone(text),
            Err(ValidationError::InvalidPhone(text.to_string())),
            "expected '{}' to be rejected",
            text
        );
    }
}

#[test]
fn test_birthday_examples() {
    assert!(parse_birthday("15.03.1990").is_ok());
    assert!(parse_birthday("29.02.2024").is_ok());
    assert!(parse_birthday("31.12.1999").is_ok());

    for text in ["30.02.2024", "31.04.2024", "1.1.2024"] {
        assert!(
            matches!(parse_birthday(text), Err(ValidationError::InvalidBirthday(_))),
            "expected '{}' to be rejected",
            text
        );
    }
}

#[test]
fn test_add_then_find_round_trip() {
    let mut book = AddressBook::new();
    book.add_record(ContactRecord::new("Dmytro").unwrap());

    let found = book.find("Dmytro").expect("record should be found");
    assert_eq!(found.name(), "Dmytro");
}

#[test]
fn test_key_matches_record_name() {
    let book = sample_book();
    for name in book.names() {
        assert_eq!(book.find(name).unwrap().name(), name);
    }
}

#[test]
fn test_delete_unknown_leaves_book_unchanged() {
    let mut book = sample_book();
    let before = book.clone();

    book.delete("Zed");

    assert_eq!(book, before);
    assert_eq!(book.len(), 3);
}

#[test]
fn test_overwrite_does_not_merge_phones() {
    let mut book = sample_book();
    book.add_record(ContactRecord::new("Bob").unwrap());

    assert_eq!(book.len(), 3);
    assert!(book.find("Bob").unwrap().phones().is_empty());
    assert_eq!(book.names(), vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn test_record_without_phones_is_addressable() {
    let mut book = AddressBook::new();
    book.add_record(ContactRecord::new("Quiet").unwrap());

    let record = book.find_mut("Quiet").unwrap();
    record.add_birthday("01.01.2000").unwrap();
    assert_eq!(
        book.find("Quiet").unwrap().describe_birthday(),
        "Quiet's birthday is 01.01.2000"
    );
}

#[test]
fn test_edit_phone_with_invalid_number_is_atomic() {
    let mut book = sample_book();
    let record = book.find_mut("Alice").unwrap();

    let err = record.edit_phone("0501111111", "05011").unwrap_err();

    assert!(matches!(err, BookError::InvalidFormat(_)));
    assert_eq!(
        book.find("Alice").unwrap().phones()[0].as_str(),
        "0501111111"
    );
}
