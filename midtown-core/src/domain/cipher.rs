//! Caesar cipher
//!
//! Only ASCII letters move. Uppercase stays within A-Z and lowercase within
//! a-z; digits, punctuation, whitespace, accented and non-Latin characters
//! are copied through untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

const ALPHABET_LEN: i64 = 26;

/// Direction of a cipher transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherMode {
    Encrypt,
    Decrypt,
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherMode::Encrypt => f.write_str("encrypt"),
            CipherMode::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// Shift actually applied to letters, always in 0..26
pub fn effective_shift(shift: i64, mode: CipherMode) -> u8 {
    let forward = shift.rem_euclid(ALPHABET_LEN);
    let applied = match mode {
        CipherMode::Encrypt => forward,
        CipherMode::Decrypt => (ALPHABET_LEN - forward) % ALPHABET_LEN,
    };
    applied as u8
}

/// True when the shift leaves every letter where it is
pub fn is_identity_shift(shift: i64) -> bool {
    shift.rem_euclid(ALPHABET_LEN) == 0
}

/// Encrypt or decrypt `text` with `shift`
pub fn transform(text: &str, shift: i64, mode: CipherMode) -> String {
    let k = effective_shift(shift, mode);
    text.chars().map(|c| rotate(c, k)).collect()
}

pub fn encrypt(text: &str, shift: i64) -> String {
    transform(text, shift, CipherMode::Encrypt)
}

pub fn decrypt(text: &str, shift: i64) -> String {
    transform(text, shift, CipherMode::Decrypt)
}

fn rotate(c: char, k: u8) -> char {
    let base = match c {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return c,
    };
    let offset = (c as u8 - base + k) % ALPHABET_LEN as u8;
    (base + offset) as char
}

/// Classic message preparation: uppercase, full stop becomes `X`, and every
/// other character that is not an ASCII letter is dropped.
pub fn prepare_classic(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '.' => Some('X'),
            c if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
            _ => None,
        })
        .collect()
}

/// A cipher key as typed by a user
///
/// Integer text is taken at face value. Anything else is turned into a
/// number by summing its character code points, so "key" and "KEY" give
/// different shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherKey(i64);

impl CipherKey {
    pub fn new(shift: i64) -> Self {
        Self(shift)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::validation(["Cipher key empty"]));
        }

        let trimmed = raw.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Ok(Self(n));
        }
        if let Some(n) = reduce_integer_literal(trimmed) {
            return Ok(Self(n));
        }

        Ok(Self(raw.chars().map(|c| c as i64).sum()))
    }

    pub fn shift(&self) -> i64 {
        self.0
    }
}

/// Integer literals too large for i64 only matter modulo 26
fn reduce_integer_literal(s: &str) -> Option<i64> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let reduced = digits
        .bytes()
        .fold(0i64, |acc, b| (acc * 10 + (b - b'0') as i64) % ALPHABET_LEN);
    Some(if negative { -reduced } else { reduced })
}
