//! Character sets and set-code resolution.
//!
//! A set-code specification is a list of clusters separated by spaces. Each
//! cluster is a run of single-character codes whose sets are concatenated into
//! one [`Group`]. `"u l n"` is three groups; `"uln"` is one.

use std::fmt;

use rand::CryptoRng;

use crate::rng;

// Unambiguous sets drop characters that read as others: g/9, G/6, l/1/I, o/O/0.
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UNAMBIGUOUS_LOWERCASE: &str = "abcdefhjkmnpqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const UNAMBIGUOUS_UPPERCASE: &str = "ABCDEFHJKLMNPQRSTUVWXYZ";
const DIGITS: &str = "1234567890";
const UNAMBIGUOUS_DIGITS: &str = "2345789";
const SAFE_SYMBOLS: &str = "!@#^*_";

/// A registered character set, addressed by its one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetCode {
    /// `L`
    Lowercase,
    /// `l`
    UnambiguousLowercase,
    /// `U`
    Uppercase,
    /// `u`
    UnambiguousUppercase,
    /// `N`
    Digits,
    /// `n`
    UnambiguousDigits,
    /// `s`
    SafeSymbols,
    /// `c`, whose characters come from the caller.
    Custom,
}

impl SetCode {
    pub const ALL: [SetCode; 8] = [
        SetCode::Lowercase,
        SetCode::UnambiguousLowercase,
        SetCode::Uppercase,
        SetCode::UnambiguousUppercase,
        SetCode::Digits,
        SetCode::UnambiguousDigits,
        SetCode::SafeSymbols,
        SetCode::Custom,
    ];

    pub fn from_char(code: char) -> Option<Self> {
        match code {
            'L' => Some(SetCode::Lowercase),
            'l' => Some(SetCode::UnambiguousLowercase),
            'U' => Some(SetCode::Uppercase),
            'u' => Some(SetCode::UnambiguousUppercase),
            'N' => Some(SetCode::Digits),
            'n' => Some(SetCode::UnambiguousDigits),
            's' => Some(SetCode::SafeSymbols),
            'c' => Some(SetCode::Custom),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            SetCode::Lowercase => 'L',
            SetCode::UnambiguousLowercase => 'l',
            SetCode::Uppercase => 'U',
            SetCode::UnambiguousUppercase => 'u',
            SetCode::Digits => 'N',
            SetCode::UnambiguousDigits => 'n',
            SetCode::SafeSymbols => 's',
            SetCode::Custom => 'c',
        }
    }

    /// Characters of this set. Only [`SetCode::Custom`] reads `custom`.
    pub fn chars(self, custom: &str) -> &str {
        match self {
            SetCode::Lowercase => LOWERCASE,
            SetCode::UnambiguousLowercase => UNAMBIGUOUS_LOWERCASE,
            SetCode::Uppercase => UPPERCASE,
            SetCode::UnambiguousUppercase => UNAMBIGUOUS_UPPERCASE,
            SetCode::Digits => DIGITS,
            SetCode::UnambiguousDigits => UNAMBIGUOUS_DIGITS,
            SetCode::SafeSymbols => SAFE_SYMBOLS,
            SetCode::Custom => custom,
        }
    }
}

/// Look up the characters for a raw code. `None` if the code is unknown.
pub fn lookup(code: char, custom: &str) -> Option<&str> {
    SetCode::from_char(code).map(|set| set.chars(custom))
}

/// A non-empty pool of candidate characters sampled as one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group(Vec<char>);

impl Group {
    /// Wrap `chars` as a group. `None` if it is empty.
    pub fn new(chars: &str) -> Option<Self> {
        if chars.is_empty() {
            None
        } else {
            Some(Group(chars.chars().collect()))
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a group built through [`Group::new`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// Draw one character uniformly at random.
    #[inline]
    pub(crate) fn pick<R: CryptoRng>(&self, rng: &mut R) -> char {
        self.0[rng::index(rng, self.0.len())]
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Resolve a set-code specification into groups.
///
/// Unknown codes and codes with no characters (an unset custom set) are
/// skipped; a cluster left with nothing is dropped. Order is preserved and
/// duplicates are kept. The result may be empty; callers decide whether that
/// is an error.
pub fn resolve(set_codes: &str, custom_set: &str) -> Vec<Group> {
    let mut groups = Vec::new();

    for cluster in set_codes.split(' ') {
        let mut chars = String::new();
        for code in cluster.chars() {
            match lookup(code, custom_set) {
                Some(set) => chars.push_str(set),
                None => tracing::debug!(code = %code, "skipping unknown set code"),
            }
        }

        match Group::new(&chars) {
            Some(group) => groups.push(group),
            None if !cluster.is_empty() => {
                tracing::debug!(cluster, "dropping cluster with no characters")
            }
            None => {}
        }
    }

    groups
}
