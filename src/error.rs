use crate::{alphabet, codec::decode};
use std::{error, fmt};

/// Any error the crate can report, for callers that do not care which layer produced it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The alphabet could not be built: empty, a single symbol, duplicates, or ambiguous renderings.
    InvalidArgument(alphabet::Error),
    /// The input to a decode operation is malformed.
    Format(decode::Error),
}

impl Error {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
            Self::Format(error) => Some(error),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(f, "Invalid alphabet: {}", error),
            Self::Format(error) => write!(f, "Invalid input: {}", error),
        }
    }
}

impl From<alphabet::Error> for Error {
    fn from(error: alphabet::Error) -> Self {
        Error::InvalidArgument(error)
    }
}

impl From<decode::Error> for Error {
    fn from(error: decode::Error) -> Self {
        Error::Format(error)
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        Error::Format(error.into())
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::{codec::decode, Codec};

    fn round_trip(symbols: &str, input: &[u8]) -> Result<Vec<u8>, Error> {
        let codec = Codec::from_symbols(symbols.chars())?;
        let encoded = codec.encode_to_string(input);
        Ok(codec.decode_str_to_bytes(&encoded)?)
    }

    #[test]
    fn propagation() {
        assert_eq!(round_trip("01", b"abc"), Ok(b"abc".to_vec()));
        assert!(round_trip("", b"abc").unwrap_err().is_invalid_argument());
        assert!(round_trip("1", b"abc").unwrap_err().is_invalid_argument());
        assert!(Error::from(Codec::from_symbols(vec!["a", "aa"]).unwrap_err()).is_invalid_argument());

        let codec = Codec::from_symbols("01".chars()).unwrap();
        let error = Error::from(codec.decode_str_to_bytes("01").unwrap_err());
        assert!(error.is_format());
        assert_eq!(error, Error::Format(decode::Error::InvalidLength { length: 2, width: 8 }));
        assert_eq!(error.to_string(), "Invalid input: Invalid length 2 (expected a multiple of 8 digits)");
    }
}
