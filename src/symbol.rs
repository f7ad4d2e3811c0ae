use std::hash::Hash;

/// A value usable as one digit of an alphabet.
///
/// Symbols are compared and hashed to build the reverse lookup, and rendered
/// to text when an encoded sequence is turned into a string or a string is
/// tokenized back into symbols.
pub trait Symbol: Clone + Eq + Hash {
    /// Appends the textual form of the symbol to `output`.
    fn render(&self, output: &mut String);

    fn rendered(&self) -> String {
        let mut output = String::new();
        self.render(&mut output);
        output
    }
}

impl Symbol for char {
    fn render(&self, output: &mut String) {
        output.push(*self);
    }
}

impl Symbol for String {
    fn render(&self, output: &mut String) {
        output.push_str(self);
    }
}

impl Symbol for &str {
    fn render(&self, output: &mut String) {
        output.push_str(self);
    }
}

#[cfg(test)]
mod tests {
    use super::Symbol;

    #[test]
    fn rendered() {
        assert_eq!('x'.rendered(), "x");
        assert_eq!('λ'.rendered(), "λ");
        assert_eq!(String::from("ab").rendered(), "ab");
        assert_eq!("<0>".rendered(), "<0>");
    }
}
