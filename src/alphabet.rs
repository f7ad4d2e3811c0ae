use crate::Symbol;
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    error, fmt,
    str::FromStr,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    Empty,
    TooFewSymbols { count: usize },
    DuplicateSymbol { symbol: String, first: usize, second: usize },
    EmptySymbol { index: usize },
    /// Some concatenation of renderings splits into symbols in more than one way.
    AmbiguousSymbols { symbol: String, index: usize },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    InvalidSymbol { symbol: String, index: usize },
    UnmatchedToken { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Alphabet is empty"),
            Self::TooFewSymbols { count } => write!(f, "Alphabet has {} symbol(s), at least 2 required", count),
            Self::DuplicateSymbol { symbol, first, second } => {
                write!(f, "Duplicate symbol '{}' at indexes {} and {}", symbol, first, second)
            }
            Self::EmptySymbol { index } => write!(f, "Symbol at index {} renders as an empty string", index),
            Self::AmbiguousSymbols { symbol, index } => {
                write!(f, "Symbol '{}' at index {} makes concatenated symbols ambiguous", symbol, index)
            }
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbol { symbol, index } => write!(f, "Invalid symbol '{}' at index {}", symbol, index),
            Self::UnmatchedToken { character, index } => {
                write!(f, "No symbol matches the input at character {:?} (byte offset {})", character, index)
            }
        }
    }
}

/// An ordered set of unique symbols. The position of a symbol is its digit
/// value; the number of symbols is the numeral base.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<S>",
    into = "Vec<S>",
    bound(serialize = "S: Symbol + Serialize", deserialize = "S: Symbol + Deserialize<'de>")
)]
pub struct Alphabet<S> {
    symbols: Vec<S>,
    indexes: HashMap<S, usize>,
    rendered: Vec<String>,
    tokens: HashMap<String, usize>,
    lengths: Vec<usize>,
}

impl<S: Symbol> Alphabet<S> {
    pub fn new(symbols: impl IntoIterator<Item = S>) -> Result<Self, Error> {
        let symbols: Vec<S> = symbols.into_iter().collect();
        match symbols.len() {
            0 => return Err(Error::Empty),
            count @ 1 => return Err(Error::TooFewSymbols { count }),
            _ => {}
        }

        let mut indexes: HashMap<S, usize> = HashMap::with_capacity(symbols.len());
        let mut rendered = Vec::with_capacity(symbols.len());
        let mut tokens: HashMap<String, usize> = HashMap::with_capacity(symbols.len());
        for (index, symbol) in symbols.iter().enumerate() {
            let text = symbol.rendered();
            if text.is_empty() {
                return Err(Error::EmptySymbol { index });
            }
            if let Some(&first) = indexes.get(symbol).or_else(|| tokens.get(&text)) {
                return Err(Error::DuplicateSymbol {
                    symbol: text,
                    first,
                    second: index,
                });
            }
            indexes.insert(symbol.clone(), index);
            tokens.insert(text.clone(), index);
            rendered.push(text);
        }
        check_unique_parsing(&rendered, &tokens)?;
        let mut lengths: Vec<usize> = rendered.iter().map(String::len).collect();
        lengths.sort_unstable();
        lengths.dedup();

        Ok(Self {
            symbols,
            indexes,
            rendered,
            tokens,
            lengths,
        })
    }

    /// Symbol for `digit`. Panics if `digit >= self.len()`.
    pub fn encode(&self, digit: usize) -> &S {
        &self.symbols[digit]
    }

    /// Textual form of the symbol for `digit`. Panics if `digit >= self.len()`.
    pub fn render(&self, digit: usize) -> &str {
        &self.rendered[digit]
    }

    /// Digit value of `symbol`; `index` is its position in the input, used for reporting.
    pub fn decode(&self, symbol: &S, index: usize) -> Result<usize, DecodeError> {
        self.index_of(symbol).ok_or_else(|| DecodeError::InvalidSymbol {
            symbol: symbol.rendered(),
            index,
        })
    }

    /// Splits `input` into digits. Renderings parse uniquely, so at most one
    /// split covers the whole input; an unknown position is reported at the
    /// furthest byte offset any split reaches.
    pub fn tokenize(&self, input: &str) -> Result<Vec<usize>, DecodeError> {
        // previous[end] = (start, digit) of the token ending at byte offset `end`
        let mut previous: Vec<Option<(usize, usize)>> = vec![None; input.len() + 1];
        let mut furthest = 0;
        for (start, _) in input.char_indices() {
            if start > 0 && previous[start].is_none() {
                continue;
            }
            let rest = &input[start..];
            for &length in &self.lengths {
                if let Some(&digit) = rest.get(..length).and_then(|token| self.tokens.get(token)) {
                    let end = start + length;
                    if previous[end].is_none() {
                        previous[end] = Some((start, digit));
                    }
                    furthest = furthest.max(end);
                }
            }
        }
        if previous[input.len()].is_none() && !input.is_empty() {
            return Err(DecodeError::UnmatchedToken {
                character: input[furthest..].chars().next().unwrap_or_default(),
                index: furthest,
            });
        }

        let mut digits = Vec::new();
        let mut end = input.len();
        while let Some((start, digit)) = previous[end] {
            digits.push(digit);
            end = start;
        }
        digits.reverse();
        Ok(digits)
    }

    pub fn index_of(&self, symbol: &S) -> Option<usize> {
        self.indexes.get(symbol).copied()
    }

    pub fn symbol(&self, digit: usize) -> Option<&S> {
        self.symbols.get(digit)
    }

    pub fn symbols(&self) -> &[S] {
        &self.symbols
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.indexes.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

// Sardinas-Patterson: follow the dangling suffixes left when one rendering
// (or suffix) is a proper prefix of another; the renderings parse uniquely
// unless a dangling suffix is itself a rendering.
fn check_unique_parsing(rendered: &[String], tokens: &HashMap<String, usize>) -> Result<(), Error> {
    let mut sorted: Vec<&str> = rendered.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let mut pending: Vec<&str> = Vec::new();
    for text in rendered {
        push_dangling(text, tokens, &mut pending);
    }
    let mut seen: HashSet<&str> = HashSet::new();
    while let Some(suffix) = pending.pop() {
        if let Some(&index) = tokens.get(suffix) {
            return Err(Error::AmbiguousSymbols {
                symbol: suffix.to_string(),
                index,
            });
        }
        if !seen.insert(suffix) {
            continue;
        }
        let from = sorted.partition_point(|text| *text < suffix);
        for text in sorted[from..].iter().take_while(|text| text.starts_with(suffix)) {
            pending.push(&text[suffix.len()..]);
        }
        push_dangling(suffix, tokens, &mut pending);
    }
    Ok(())
}

// Pushes what is left of `text` after each rendering that is a proper prefix of it.
fn push_dangling<'a>(text: &'a str, tokens: &HashMap<String, usize>, pending: &mut Vec<&'a str>) {
    for (split, _) in text.char_indices().skip(1) {
        if tokens.contains_key(&text[..split]) {
            pending.push(&text[split..]);
        }
    }
}

impl<S: PartialEq> PartialEq for Alphabet<S> {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl<S: Eq> Eq for Alphabet<S> {}

impl<S: Symbol> TryFrom<Vec<S>> for Alphabet<S> {
    type Error = Error;

    fn try_from(symbols: Vec<S>) -> Result<Self, Error> {
        Self::new(symbols)
    }
}

impl<S> From<Alphabet<S>> for Vec<S> {
    fn from(alphabet: Alphabet<S>) -> Self {
        alphabet.symbols
    }
}

impl FromStr for Alphabet<char> {
    type Err = Error;

    fn from_str(characters: &str) -> Result<Self, Error> {
        Self::new(characters.chars())
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, DecodeError, Error};

    fn syllables() -> Alphabet<String> {
        Alphabet::new(["a", "ab", "bc", "<x>"].iter().map(|s| s.to_string())).unwrap()
    }

    #[test]
    fn new() {
        let alphabet: Alphabet<char> = "0123456789ABCDEF".parse().unwrap();
        assert_eq!(alphabet.len(), 16);
        assert_eq!(*alphabet.encode(10), 'A');
        assert_eq!(alphabet.render(15), "F");
        assert_eq!(alphabet.index_of(&'7'), Some(7));
        assert_eq!(alphabet.index_of(&'a'), None);
        assert_eq!(alphabet.symbol(16), None);
        assert!(alphabet.contains(&'0'));
    }

    #[test]
    fn new_keeps_caller_order() {
        let alphabet: Alphabet<char> = "TGCA".parse().unwrap();
        assert_eq!(alphabet.symbols(), &['T', 'G', 'C', 'A']);
        assert_eq!(alphabet.index_of(&'A'), Some(3));
    }

    #[test]
    fn new_errors() {
        assert_eq!("".parse::<Alphabet<char>>(), Err(Error::Empty));
        assert_eq!("0".parse::<Alphabet<char>>(), Err(Error::TooFewSymbols { count: 1 }));
        assert_eq!(
            "0120".parse::<Alphabet<char>>(),
            Err(Error::DuplicateSymbol {
                symbol: "0".to_string(),
                first: 0,
                second: 3
            })
        );
        assert_eq!(Alphabet::new(vec!["x", ""]), Err(Error::EmptySymbol { index: 1 }));
    }

    #[test]
    fn new_rejects_ambiguous_symbols() {
        assert_eq!(
            Alphabet::new(vec!["a", "aa"]),
            Err(Error::AmbiguousSymbols {
                symbol: "a".to_string(),
                index: 0
            })
        );
        assert_eq!(
            Alphabet::new(vec!["a", "ab", "b"]),
            Err(Error::AmbiguousSymbols {
                symbol: "b".to_string(),
                index: 2
            })
        );
        // "abc" + "d" versus "ab" + "cd"
        assert_eq!(
            Alphabet::new(vec!["ab", "abc", "cd", "d"]),
            Err(Error::AmbiguousSymbols {
                symbol: "d".to_string(),
                index: 3
            })
        );
        assert!(Alphabet::new(vec!["a", "ab", "bc"]).is_ok());
        assert!(Alphabet::new(vec!["0", "10", "110", "111"]).is_ok());
    }

    #[test]
    fn new_large_alphabet() {
        let alphabet = Alphabet::new((0..200_000).map(|i| format!("<{}>", i))).unwrap();
        assert_eq!(alphabet.len(), 200_000);
        assert_eq!(alphabet.tokenize("<199999><0><10>"), Ok(vec![199_999, 0, 10]));
    }

    #[test]
    fn decode() {
        let alphabet: Alphabet<char> = "01".parse().unwrap();
        assert_eq!(alphabet.decode(&'1', 0), Ok(1));
        assert_eq!(
            alphabet.decode(&'2', 5),
            Err(DecodeError::InvalidSymbol {
                symbol: "2".to_string(),
                index: 5
            })
        );
    }

    #[test]
    fn tokenize() {
        let alphabet = syllables();
        assert_eq!(alphabet.tokenize(""), Ok(vec![]));
        assert_eq!(alphabet.tokenize("ab"), Ok(vec![1]));
        assert_eq!(alphabet.tokenize("aab<x>bc"), Ok(vec![0, 1, 3, 2]));
        assert_eq!(alphabet.tokenize("bca"), Ok(vec![2, 0]));
        assert_eq!(
            alphabet.tokenize("ab<y>"),
            Err(DecodeError::UnmatchedToken { character: '<', index: 2 })
        );
    }

    #[test]
    fn tokenize_looks_ahead() {
        let alphabet = Alphabet::new(vec!["a", "ab", "bc"]).unwrap();
        // the longest match at offset 4 ("ab") leaves an unreadable "c"
        assert_eq!(alphabet.tokenize("aaaaabc"), Ok(vec![0, 0, 0, 0, 0, 2]));
        assert_eq!(alphabet.tokenize("aabbc"), Ok(vec![0, 1, 2]));
        assert_eq!(alphabet.tokenize("abc"), Ok(vec![0, 2]));
        assert_eq!(alphabet.tokenize("abcc"), Err(DecodeError::UnmatchedToken { character: 'c', index: 3 }));
    }

    #[test]
    fn tokenize_punctuation() {
        let alphabet = Alphabet::new(vec![".", "*", "(", "|"]).unwrap();
        assert_eq!(alphabet.tokenize("|(*."), Ok(vec![3, 2, 1, 0]));
        assert!(alphabet.tokenize("a").is_err());
    }

    #[test]
    fn tokenize_non_ascii() {
        let alphabet: Alphabet<char> = "αβγδ".parse().unwrap();
        assert_eq!(alphabet.tokenize("δαβ"), Ok(vec![3, 0, 1]));
        assert_eq!(alphabet.tokenize("αx"), Err(DecodeError::UnmatchedToken { character: 'x', index: 2 }));
    }

    #[test]
    fn serde() {
        let alphabet = syllables();
        let json = serde_json::to_string(&alphabet).unwrap();
        assert_eq!(json, r#"["a","ab","bc","<x>"]"#);
        let parsed: Alphabet<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, alphabet);
        assert!(serde_json::from_str::<Alphabet<String>>(r#"["a","a"]"#).is_err());
        assert!(serde_json::from_str::<Alphabet<char>>(r#"["x"]"#).is_err());
        assert!(serde_json::from_str::<Alphabet<String>>(r#"["a","aa"]"#).is_err());
    }
}
