// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, str::FromStr};

use thiserror::Error;

const ISBN13_LEN: usize = 13;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseIsbnError {
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),

    #[error("expected 13 digits, got {0}")]
    InvalidLength(usize),

    #[error("unknown prefix")]
    InvalidPrefix,

    #[error("check digit mismatch")]
    InvalidCheckDigit,
}

/// International Standard Book Number (ISBN-13)
///
/// Stored as 13 decimal digits without separators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Isbn13([u8; ISBN13_LEN]);

impl Isbn13 {
    /// Parse an ISBN-13, ignoring hyphens and whitespace.
    pub fn parse(input: &str) -> Result<Self, ParseIsbnError> {
        let mut digits = [0u8; ISBN13_LEN];
        let mut len = 0;
        for c in input.chars() {
            if c == '-' || c.is_whitespace() {
                continue;
            }
            let Some(digit) = c.to_digit(10) else {
                return Err(ParseIsbnError::InvalidCharacter(c));
            };
            if len < ISBN13_LEN {
                digits[len] = digit as u8;
            }
            len += 1;
        }
        if len != ISBN13_LEN {
            return Err(ParseIsbnError::InvalidLength(len));
        }
        if !matches!(digits[..3], [9, 7, 8 | 9]) {
            return Err(ParseIsbnError::InvalidPrefix);
        }
        if check_digit(&digits[..ISBN13_LEN - 1]) != digits[ISBN13_LEN - 1] {
            return Err(ParseIsbnError::InvalidCheckDigit);
        }
        Ok(Self(digits))
    }

    #[must_use]
    pub const fn digits(&self) -> &[u8; ISBN13_LEN] {
        &self.0
    }
}

/// Weighted sum of alternating factors 1 and 3, modulo 10.
fn check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &digit)| u32::from(digit) * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

impl fmt::Display for Isbn13 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromStr for Isbn13 {
    type Err = ParseIsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Isbn13 {
    type Error = ParseIsbnError;

    fn try_from(from: String) -> Result<Self, Self::Error> {
        Self::parse(&from)
    }
}

impl From<Isbn13> for String {
    fn from(from: Isbn13) -> Self {
        from.to_string()
    }
}

#[cfg(test)]
mod tests;
