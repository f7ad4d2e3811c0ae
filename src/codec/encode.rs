use super::UnitDomain;
use crate::{radix, Alphabet, Symbol};

pub struct Encoder<'a, S> {
    alphabet: &'a Alphabet<S>,
    domain: UnitDomain,
    width: usize,
}

impl<'a, S: Symbol> Encoder<'a, S> {
    pub fn new(alphabet: &'a Alphabet<S>, domain: UnitDomain, width: usize) -> Self {
        Self { alphabet, domain, width }
    }

    /// Feeds the `width` digits of every unit to `write`, most significant first.
    fn write_digits(&self, units: impl Iterator<Item = u32>, mut write: impl FnMut(usize)) {
        for unit in units {
            let digits = radix::digits_for_value(unit.into(), self.alphabet.len());
            debug_assert!(digits.len() <= self.width);
            for _ in digits.len()..self.width {
                write(0);
            }
            digits.into_iter().for_each(&mut write);
        }
    }

    fn write_text_digits(&self, input: &str, write: impl FnMut(usize)) {
        match self.domain {
            UnitDomain::Byte => self.write_digits(input.bytes().map(u32::from), write),
            UnitDomain::Char => self.write_digits(input.chars().map(u32::from), write),
        }
    }

    /// Appends the symbols for `input` to `output`, returning how many were appended.
    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut Vec<S>) -> usize {
        let input = input.as_ref();
        let len = output.len();
        output.reserve(input.len() * self.width);
        self.write_digits(input.iter().copied().map(u32::from), |digit| output.push(self.alphabet.encode(digit).clone()));
        output.len() - len
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> Vec<S> {
        let mut output = Vec::new();
        self.encode_into(input, &mut output);
        output
    }

    pub fn encode_str(&self, input: &str) -> Vec<S> {
        let mut output = Vec::with_capacity(input.len() * self.width);
        self.write_text_digits(input, |digit| output.push(self.alphabet.encode(digit).clone()));
        output
    }

    pub fn encode_to_string(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let mut output = String::with_capacity(input.len() * self.width);
        self.write_digits(input.iter().copied().map(u32::from), |digit| output.push_str(self.alphabet.render(digit)));
        output
    }

    pub fn encode_str_to_string(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len() * self.width);
        self.write_text_digits(input, |digit| output.push_str(self.alphabet.render(digit)));
        output
    }
}
