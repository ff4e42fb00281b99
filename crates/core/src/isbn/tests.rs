// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn parse_valid() {
    let isbn = Isbn13::parse("9780441172719").unwrap();
    assert_eq!("9780441172719", isbn.to_string());
    assert_eq!(isbn, "978-0-441-17271-9".parse().unwrap());
    assert_eq!(isbn, Isbn13::parse(" 978 0441 172719 ").unwrap());
}

#[test]
fn parse_979_prefix() {
    assert!(Isbn13::parse("979-10-90636-07-1").is_ok());
}

#[test]
fn reject_invalid_input() {
    assert_eq!(
        Err(ParseIsbnError::InvalidCheckDigit),
        Isbn13::parse("9780441172718")
    );
    assert_eq!(
        Err(ParseIsbnError::InvalidLength(10)),
        Isbn13::parse("0441172717")
    );
    assert_eq!(
        Err(ParseIsbnError::InvalidCharacter('X')),
        Isbn13::parse("978044117271X")
    );
    assert_eq!(
        Err(ParseIsbnError::InvalidPrefix),
        Isbn13::parse("1234567890128")
    );
}
