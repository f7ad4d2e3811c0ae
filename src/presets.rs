//! Codecs over the usual digit alphabets, built on first use and shared.

use crate::Codec;
use std::sync::OnceLock;

pub const BINARY: &str = "01";
pub const OCTAL: &str = "01234567";
pub const DECIMAL: &str = "0123456789";
pub const HEXADECIMAL: &str = "0123456789ABCDEF";

fn build(cell: &'static OnceLock<Codec<char>>, symbols: &'static str) -> &'static Codec<char> {
    cell.get_or_init(|| match Codec::from_symbols(symbols.chars()) {
        Ok(codec) => codec,
        Err(_) => panic!("Could not build alphabet {:?}", symbols),
    })
}

pub fn binary() -> &'static Codec<char> {
    static CODEC: OnceLock<Codec<char>> = OnceLock::new();
    build(&CODEC, BINARY)
}

pub fn octal() -> &'static Codec<char> {
    static CODEC: OnceLock<Codec<char>> = OnceLock::new();
    build(&CODEC, OCTAL)
}

pub fn decimal() -> &'static Codec<char> {
    static CODEC: OnceLock<Codec<char>> = OnceLock::new();
    build(&CODEC, DECIMAL)
}

pub fn hexadecimal() -> &'static Codec<char> {
    static CODEC: OnceLock<Codec<char>> = OnceLock::new();
    build(&CODEC, HEXADECIMAL)
}
