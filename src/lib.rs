//! Fixed-width byte-to-text encoding over any alphabet.
//!
//! ```
//! use alphabet_codec::Codec;
//!
//! let codec = Codec::from_symbols("0123456789ABCDEF".chars())?;
//! assert_eq!(codec.encode_to_string(b"A"), "41");
//! assert_eq!(codec.decode_str_to_bytes("41")?, b"A");
//! # Ok::<(), alphabet_codec::Error>(())
//! ```

pub mod alphabet;
pub mod codec;
pub mod error;
pub mod presets;
pub mod radix;
pub mod symbol;

pub use self::{
    alphabet::Alphabet,
    codec::{Codec, Decoder, Encoder, UnitDomain},
    error::Error,
    symbol::Symbol,
};
