//! Decoding of signed integers written in bases 2 through 62.
//!
//! Digits are drawn from [DIGITS]; the value of a digit is its index in that alphabet.

pub(crate) mod errors;

use crate::{Error, Result};

use lazy_static::lazy_static;
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// The digit alphabet, in increasing order of value.
pub const DIGITS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Bases supported by [decode] and [encode].
pub const BASES: RangeInclusive<u32> = 2..=62;

lazy_static! {
    static ref DIGIT_VALUES: HashMap<char, u32> = DIGITS
        .chars()
        .enumerate()
        .map(|(value, ch)| (ch, value as u32))
        .collect();
}

fn check_base(base: u32) -> Result<()> {
    if BASES.contains(&base) {
        Ok(())
    } else {
        Err(Error::UnsupportedBase(base.into()))
    }
}

/// Returns the value of `ch` as a digit of `base`.
///
/// A character missing from [DIGITS] is retried in its uppercase form before being checked
/// against `base`. Every ASCII letter is itself a digit, so "ff" is not a base-16 number.
fn digit_value(ch: char, base: u32) -> Option<u32> {
    let value = DIGIT_VALUES.get(&ch).copied().or_else(|| {
        let mut upper = ch.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(upper), None) => DIGIT_VALUES.get(&upper).copied(),
            _ => None,
        }
    })?;
    Some(value).filter(|&d| d < base)
}

/// Decodes `digits`, a number written in `base`, optionally prefixed with a "-".
///
/// An empty string of digits decodes to 0.
///
/// ```
/// # use librecon::decode;
/// # use num_bigint::BigInt;
/// assert_eq!(decode("-111", 2), Ok(BigInt::from(-7)));
/// assert_eq!(decode("zz", 62), Ok(BigInt::from(3843)));
/// assert_eq!(decode("FF", 16), Ok(BigInt::from(255)));
/// ```
pub fn decode(digits: &str, base: u32) -> Result<BigInt> {
    check_base(base)?;

    let (negative, digits) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits),
    };

    let mut value = BigInt::zero();
    for ch in digits.chars() {
        let digit = digit_value(ch, base).ok_or(Error::InvalidDigit { digit: ch, base })?;
        value = value * base + digit;
    }

    Ok(if negative { -value } else { value })
}

/// Encodes `value` in `base`, using uppercase digits before lowercase ones.
///
/// The inverse of [decode].
pub fn encode(value: &BigInt, base: u32) -> Result<String> {
    check_base(base)?;

    let (sign, digits) = value.to_radix_be(base);
    let alphabet = DIGITS.as_bytes();
    let mut encoded = String::with_capacity(digits.len() + 1);
    if sign == Sign::Minus {
        encoded.push('-');
    }
    encoded.extend(digits.iter().map(|&d| alphabet[d as usize] as char));
    Ok(encoded)
}
