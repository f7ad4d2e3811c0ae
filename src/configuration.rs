use alphabet_codec::UnitDomain;
use std::{env, error, fmt, str::FromStr};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Encode,
    Decode,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Output {
    Bytes,
    Text,
}

#[derive(Debug)]
pub struct UnknownValue {
    value: String,
}

impl error::Error for UnknownValue {}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown value {:?}", self.value)
    }
}

impl FromStr for Action {
    type Err = UnknownValue;

    fn from_str(value: &str) -> Result<Self, UnknownValue> {
        match value {
            "encode" => Ok(Self::Encode),
            "decode" => Ok(Self::Decode),
            _ => Err(UnknownValue { value: value.to_string() }),
        }
    }
}

impl FromStr for Output {
    type Err = UnknownValue;

    fn from_str(value: &str) -> Result<Self, UnknownValue> {
        match value {
            "bytes" => Ok(Self::Bytes),
            "text" => Ok(Self::Text),
            _ => Err(UnknownValue { value: value.to_string() }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    alphabet: Vec<String>,
    action: Action,
    domain: UnitDomain,
    output: Output,
    verbose: bool,
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Option<String>) -> Result<String, String> {
    match lookup(key) {
        Some(value) => Ok(value),
        None => default.ok_or(format!("Missing {}", key)),
    }
}

fn var_map<T, E: error::Error>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    mut f: impl FnMut(&str) -> Result<T, E>,
    default: Option<T>,
) -> Result<T, String> {
    match var(lookup, key, None) {
        Ok(value) => f(&value).map_err(|error| format!("Invalid {} {} ({})", key, value, error)),
        Err(err) => default.ok_or(err),
    }
}

/// A JSON array of strings, or a plain string whose characters are the symbols.
fn parse_alphabet(value: &str) -> Result<Vec<String>, serde_json::Error> {
    if value.trim_start().starts_with('[') {
        serde_json::from_str(value)
    } else {
        Ok(value.chars().map(String::from).collect())
    }
}

impl Configuration {
    pub fn new() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let alphabet = var_map(&lookup, "ALPHABET", parse_alphabet, None)?;
        let action = var_map(&lookup, "ACTION", |action| action.parse::<Action>(), None)?;
        let domain = var_map(&lookup, "DOMAIN", |domain| domain.parse(), Some(UnitDomain::Byte))?;
        let output = var_map(&lookup, "OUTPUT", |output| output.parse(), Some(Output::Bytes))?;
        let verbose = var_map(&lookup, "VERBOSE", |verbose| verbose.parse(), Some(false))?;
        Ok(Self {
            alphabet,
            action,
            domain,
            output,
            verbose,
        })
    }

    pub fn alphabet(&self) -> &[String] {
        &self.alphabet
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn domain(&self) -> UnitDomain {
        self.domain
    }

    pub fn output(&self) -> Output {
        self.output
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, Configuration, Output};
    use alphabet_codec::UnitDomain;
    use std::collections::HashMap;

    fn configuration(vars: &[(&str, &str)]) -> Result<Configuration, String> {
        let vars: HashMap<String, String> = vars.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect();
        Configuration::from_lookup(move |key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let configuration = configuration(&[("ALPHABET", "01"), ("ACTION", "encode")]).unwrap();
        assert_eq!(configuration.alphabet(), ["0", "1"]);
        assert_eq!(configuration.action(), Action::Encode);
        assert_eq!(configuration.domain(), UnitDomain::Byte);
        assert_eq!(configuration.output(), Output::Bytes);
        assert!(!configuration.verbose());
    }

    #[test]
    fn json_alphabet() {
        let configuration = configuration(&[
            ("ALPHABET", r#"["zero", "one"]"#),
            ("ACTION", "decode"),
            ("DOMAIN", "char"),
            ("OUTPUT", "text"),
            ("VERBOSE", "true"),
        ])
        .unwrap();
        assert_eq!(configuration.alphabet(), ["zero", "one"]);
        assert_eq!(configuration.action(), Action::Decode);
        assert_eq!(configuration.domain(), UnitDomain::Char);
        assert_eq!(configuration.output(), Output::Text);
        assert!(configuration.verbose());
    }

    #[test]
    fn errors() {
        assert_eq!(configuration(&[("ACTION", "encode")]).unwrap_err(), "Missing ALPHABET");
        assert_eq!(configuration(&[("ALPHABET", "01")]).unwrap_err(), "Missing ACTION");
        assert!(configuration(&[("ALPHABET", "01"), ("ACTION", "compress")])
            .unwrap_err()
            .starts_with("Invalid ACTION compress"));
        assert!(configuration(&[("ALPHABET", "[\"a\","), ("ACTION", "encode")])
            .unwrap_err()
            .starts_with("Invalid ALPHABET"));
    }
}
