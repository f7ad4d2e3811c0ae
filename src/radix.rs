//! Positional numeral conversion between arbitrary bases.
//!
//! Digits are `usize` values, most significant first. The conversion is the
//! carry-propagation loop used by base58 coders, generalized to any pair of
//! bases; it only ever needs to handle a handful of digits at a time.

use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidBase { base: usize },
    InvalidDigit { digit: usize, index: usize },
    Overflow,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
            Self::InvalidBase { base } => write!(f, "Invalid base {} (at least 2 required)", base),
            Self::InvalidDigit { digit, index } => write!(f, "Invalid digit {} at index {}", digit, index),
            Self::Overflow => write!(f, "Value does not fit in 64 bits"),
        }
    }
}

const fn check_base(base: usize) -> Result<(), Error> {
    if base < 2 {
        return Err(Error::InvalidBase { base });
    }
    Ok(())
}

/// Converts `input` (base `from`) into base `to`, writing the minimal
/// representation to the start of `output` and returning its length.
///
/// A zero value has an empty minimal representation, so `Ok(0)` is returned
/// for an all-zero input.
pub fn convert_into(input: impl AsRef<[usize]>, from: usize, to: usize, output: &mut impl AsMut<[usize]>) -> Result<usize, Error> {
    check_base(from)?;
    check_base(to)?;
    let input = input.as_ref();
    let output = output.as_mut();
    let (from_wide, to_wide) = (from as u128, to as u128);
    let mut index = 0;
    for (input_index, &digit) in input.iter().enumerate() {
        if digit >= from {
            return Err(Error::InvalidDigit { digit, index: input_index });
        }
        let mut carry = digit as u128;
        for value in &mut output[..index] {
            carry += (*value as u128) * from_wide;
            *value = (carry % to_wide) as usize;
            carry /= to_wide;
        }
        while carry > 0 {
            *output.get_mut(index).ok_or(Error::BufferTooSmall)? = (carry % to_wide) as usize;
            index += 1;
            carry /= to_wide;
        }
    }
    output[..index].reverse();
    Ok(index)
}

/// Converts `input` (base `from`) into its minimal base-`to` digits.
/// Zero is returned as `[0]`.
pub fn convert(input: impl AsRef<[usize]>, from: usize, to: usize) -> Result<Vec<usize>, Error> {
    check_base(from)?;
    check_base(to)?;
    let input = input.as_ref();
    // from <= to^per_digit, hence from^n - 1 < to^(n * per_digit)
    let per_digit = digits_for_value((from - 1) as u64, to).len();
    let mut output = vec![0usize; input.len() * per_digit];
    let len = convert_into(input, from, to, &mut output)?;
    if len == 0 {
        return Ok(vec![0]);
    }
    output.truncate(len);
    Ok(output)
}

/// Base-`base` digits of `value`, most significant first, at least one digit.
///
/// # Panics
///
/// Panics if `base < 2`.
pub fn digits_for_value(mut value: u64, base: usize) -> Vec<usize> {
    assert!(base >= 2, "base must be at least 2");
    let base = base as u64;
    let mut digits = Vec::new();
    loop {
        digits.push((value % base) as usize);
        value /= base;
        if value == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

pub fn value_for_digits(digits: impl AsRef<[usize]>, base: usize) -> Result<u64, Error> {
    check_base(base)?;
    let mut value: u64 = 0;
    for (index, &digit) in digits.as_ref().iter().enumerate() {
        if digit >= base {
            return Err(Error::InvalidDigit { digit, index });
        }
        value = u64::try_from(base)
            .ok()
            .and_then(|base| value.checked_mul(base))
            .and_then(|value| value.checked_add(digit as u64))
            .ok_or(Error::Overflow)?;
    }
    Ok(value)
}
