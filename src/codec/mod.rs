//! Fixed-width alphabet codec.
//!
//! Every input unit (a byte, or a character in the [`UnitDomain::Char`]
//! domain) is written as exactly `width` digits of the alphabet's base,
//! zero-padded on the left. `width` is the number of digits of the largest
//! unit of the domain, so every group decodes on its own.

pub mod decode;
pub mod encode;

pub use decode::Decoder;
pub use encode::Encoder;

use crate::{alphabet, radix, Alphabet, Symbol};
use serde::{Deserialize, Serialize};
use std::{error, fmt, str::FromStr};

pub const BYTE_RADIX: usize = 0x100;
pub const CHAR_RADIX: usize = char::MAX as usize + 1;

/// The value space of the units a codec works on.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitDomain {
    /// Bytes, `0..=0xFF`. Text is encoded as its UTF-8 bytes.
    #[default]
    Byte,
    /// Unicode scalar values, `0..=0x10FFFF`. Text is encoded one character per group.
    Char,
}

impl UnitDomain {
    pub const fn radix(self) -> usize {
        match self {
            Self::Byte => BYTE_RADIX,
            Self::Char => CHAR_RADIX,
        }
    }

    pub const fn max_unit(self) -> u32 {
        (self.radix() - 1) as u32
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownDomain {
    name: String,
}

impl error::Error for UnknownDomain {}

impl fmt::Display for UnknownDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown unit domain '{}' (expected 'byte' or 'char')", self.name)
    }
}

impl FromStr for UnitDomain {
    type Err = UnknownDomain;

    fn from_str(name: &str) -> Result<Self, UnknownDomain> {
        match name {
            "byte" => Ok(Self::Byte),
            "char" => Ok(Self::Char),
            _ => Err(UnknownDomain { name: name.to_string() }),
        }
    }
}

impl fmt::Display for UnitDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte => write!(f, "byte"),
            Self::Char => write!(f, "char"),
        }
    }
}

/// Smallest `width` such that `base.pow(width) > domain.max_unit()`.
pub fn canonical_width(base: usize, domain: UnitDomain) -> usize {
    radix::digits_for_value(domain.max_unit().into(), base).len()
}

/// An alphabet together with the unit domain and the group width derived from both.
///
/// Encoding and decoding only read this configuration, so a codec can be
/// shared between threads freely.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "Description<S>",
    into = "Description<S>",
    bound(serialize = "S: Symbol + Serialize", deserialize = "S: Symbol + Deserialize<'de>")
)]
pub struct Codec<S> {
    alphabet: Alphabet<S>,
    domain: UnitDomain,
    width: usize,
}

impl<S: Symbol> Codec<S> {
    /// A byte-domain codec over `alphabet`.
    pub fn new(alphabet: Alphabet<S>) -> Self {
        Self::with_domain(alphabet, UnitDomain::Byte)
    }

    pub fn with_domain(alphabet: Alphabet<S>, domain: UnitDomain) -> Self {
        let width = canonical_width(alphabet.len(), domain);
        Self { alphabet, domain, width }
    }

    /// A byte-domain codec over `symbols`, in the order given.
    pub fn from_symbols(symbols: impl IntoIterator<Item = S>) -> Result<Self, alphabet::Error> {
        Ok(Self::new(Alphabet::new(symbols)?))
    }

    pub fn encoder(&self) -> Encoder<'_, S> {
        Encoder::new(&self.alphabet, self.domain, self.width)
    }

    pub fn decoder(&self) -> Decoder<'_, S> {
        Decoder::new(&self.alphabet, self.domain, self.width)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> Vec<S> {
        self.encoder().encode(input)
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut Vec<S>) -> usize {
        self.encoder().encode_into(input, output)
    }

    pub fn encode_str(&self, input: &str) -> Vec<S> {
        self.encoder().encode_str(input)
    }

    pub fn encode_to_string(&self, input: impl AsRef<[u8]>) -> String {
        self.encoder().encode_to_string(input)
    }

    pub fn encode_str_to_string(&self, input: &str) -> String {
        self.encoder().encode_str_to_string(input)
    }

    pub fn decode_to_bytes(&self, input: &[S]) -> Result<Vec<u8>, decode::Error> {
        self.decoder().decode(input)
    }

    pub fn decode_to_string(&self, input: &[S]) -> Result<String, decode::Error> {
        self.decoder().decode_to_string(input)
    }

    pub fn decode_str_to_bytes(&self, input: &str) -> Result<Vec<u8>, decode::Error> {
        self.decoder().decode_str(input)
    }

    pub fn decode_str_to_string(&self, input: &str) -> Result<String, decode::Error> {
        self.decoder().decode_str_to_string(input)
    }

    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    pub fn domain(&self) -> UnitDomain {
        self.domain
    }

    pub fn base(&self) -> usize {
        self.alphabet.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

#[derive(Serialize, Deserialize)]
#[serde(bound(serialize = "S: Symbol + Serialize", deserialize = "S: Symbol + Deserialize<'de>"))]
struct Description<S> {
    alphabet: Alphabet<S>,
    #[serde(default)]
    domain: UnitDomain,
}

impl<S: Symbol> From<Description<S>> for Codec<S> {
    fn from(description: Description<S>) -> Self {
        Self::with_domain(description.alphabet, description.domain)
    }
}

impl<S> From<Codec<S>> for Description<S> {
    fn from(codec: Codec<S>) -> Self {
        Self {
            alphabet: codec.alphabet,
            domain: codec.domain,
        }
    }
}
