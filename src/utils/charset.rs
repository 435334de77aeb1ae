const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Character-class switches as supplied by the caller. They may overlap;
/// [`Charset::from_flags`] resolves them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub no_symbols: bool,
    pub digits_only: bool,
    pub letters_only: bool,
}

impl Flags {
    pub fn no_symbols() -> Self {
        Self {
            no_symbols: true,
            ..Default::default()
        }
    }

    pub fn digits_only() -> Self {
        Self {
            digits_only: true,
            ..Default::default()
        }
    }

    pub fn letters_only() -> Self {
        Self {
            letters_only: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Digits,
    Letters,
    Alphanumeric,
    Full,
}

impl Charset {
    // First match wins: digits, letters, alphanumeric, then everything.
    pub fn from_flags(flags: &Flags) -> Self {
        if flags.digits_only {
            Charset::Digits
        } else if flags.letters_only {
            Charset::Letters
        } else if flags.no_symbols {
            Charset::Alphanumeric
        } else {
            Charset::Full
        }
    }

    pub fn alphabet(&self) -> Vec<char> {
        let parts: &[&str] = match self {
            Self::Digits => &[DIGITS],
            Self::Letters => &[LETTERS],
            Self::Alphanumeric => &[LETTERS, DIGITS],
            Self::Full => &[LETTERS, DIGITS, PUNCTUATION],
        };
        parts.iter().flat_map(|part| part.chars()).collect()
    }

    pub fn contains(&self, c: char) -> bool {
        match self {
            Self::Digits => c.is_ascii_digit(),
            Self::Letters => c.is_ascii_alphabetic(),
            Self::Alphanumeric => c.is_ascii_alphanumeric(),
            Self::Full => c.is_ascii_alphanumeric() || c.is_ascii_punctuation(),
        }
    }
}
