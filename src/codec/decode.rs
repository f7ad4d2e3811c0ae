use super::{UnitDomain, BYTE_RADIX};
use crate::{alphabet, radix, Alphabet, Symbol};
use std::{error, fmt};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A symbol or a raw-string position is not in the alphabet.
    Symbol(alphabet::DecodeError),
    InvalidLength { length: usize, width: usize },
    UnitOutOfRange { value: u64, index: usize },
    InvalidUtf8 { index: usize },
    InvalidGroup { index: usize, error: radix::Error },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(error) => write!(f, "{}", error),
            Self::InvalidLength { length, width } => {
                write!(f, "Invalid length {} (expected a multiple of {} digits)", length, width)
            }
            Self::UnitOutOfRange { value, index } => {
                write!(f, "Group at index {} has value {:#x}, which is not a character", index, value)
            }
            Self::InvalidUtf8 { index } => write!(f, "Decoded bytes are not valid UTF-8 from byte {}", index),
            Self::InvalidGroup { index, error } => write!(f, "Invalid group at index {}: {}", index, error),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        Error::Symbol(error)
    }
}

pub struct Decoder<'a, S> {
    alphabet: &'a Alphabet<S>,
    domain: UnitDomain,
    width: usize,
}

impl<'a, S: Symbol> Decoder<'a, S> {
    pub fn new(alphabet: &'a Alphabet<S>, domain: UnitDomain, width: usize) -> Self {
        Self { alphabet, domain, width }
    }

    fn digits(&self, input: &[S]) -> Result<Vec<usize>, Error> {
        let digits = input
            .iter()
            .enumerate()
            .map(|(index, symbol)| self.alphabet.decode(symbol, index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(digits)
    }

    /// Splits `digits` into groups of `width`, yielding each group with the index of its first digit.
    fn groups<'b>(&self, digits: &'b [usize]) -> Result<impl Iterator<Item = (usize, &'b [usize])>, Error> {
        if digits.len() % self.width != 0 {
            return Err(Error::InvalidLength {
                length: digits.len(),
                width: self.width,
            });
        }
        let width = self.width;
        Ok(digits.chunks_exact(width).enumerate().map(move |(group, digits)| (group * width, digits)))
    }

    /// Converts each group back to base 256. A group encoded from a single
    /// unit yields exactly one byte, zero included, so trailing zero bytes
    /// survive the round trip instead of being stripped as padding; a group
    /// whose value exceeds 255 yields its minimal big-endian byte run.
    pub fn decode_digits(&self, digits: &[usize]) -> Result<Vec<u8>, Error> {
        let mut output = Vec::with_capacity(digits.len() / self.width);
        for (index, group) in self.groups(digits)? {
            let cells = radix::convert(group, self.alphabet.len(), BYTE_RADIX).map_err(|error| Error::InvalidGroup { index, error })?;
            output.extend(cells.into_iter().map(|cell| cell as u8));
        }
        Ok(output)
    }

    /// Converts the digits to text: one character per group in the `Char`
    /// domain, UTF-8 over the decoded bytes in the `Byte` domain.
    pub fn decode_digits_to_string(&self, digits: &[usize]) -> Result<String, Error> {
        match self.domain {
            UnitDomain::Byte => {
                let bytes = self.decode_digits(digits)?;
                String::from_utf8(bytes).map_err(|error| Error::InvalidUtf8 {
                    index: error.utf8_error().valid_up_to(),
                })
            }
            UnitDomain::Char => {
                let mut output = String::with_capacity(digits.len() / self.width);
                for (index, group) in self.groups(digits)? {
                    let value = radix::value_for_digits(group, self.alphabet.len()).map_err(|error| Error::InvalidGroup { index, error })?;
                    let character = u32::try_from(value)
                        .ok()
                        .and_then(char::from_u32)
                        .ok_or(Error::UnitOutOfRange { value, index })?;
                    output.push(character);
                }
                Ok(output)
            }
        }
    }

    pub fn decode(&self, input: &[S]) -> Result<Vec<u8>, Error> {
        self.decode_digits(&self.digits(input)?)
    }

    pub fn decode_to_string(&self, input: &[S]) -> Result<String, Error> {
        self.decode_digits_to_string(&self.digits(input)?)
    }

    pub fn decode_str(&self, input: &str) -> Result<Vec<u8>, Error> {
        self.decode_digits(&self.alphabet.tokenize(input)?)
    }

    pub fn decode_str_to_string(&self, input: &str) -> Result<String, Error> {
        self.decode_digits_to_string(&self.alphabet.tokenize(input)?)
    }
}
