//! Password generation.

use rand::CryptoRng;
use zeroize::Zeroizing;

use super::charset::{self, Group};
use crate::error::Error;
use crate::rng;

/// Generated password. Wiped from memory when dropped.
pub type Password = Zeroizing<String>;

const DEFAULT_SET_CODES: &str = "u l n";

/// Round-robin password generator over a fixed list of character groups.
///
/// Each call shuffles the group order, then takes one character from each
/// group in turn, wrapping around until the length is reached. Every group
/// therefore contributes `floor(len / n)` or `ceil(len / n)` characters, and
/// which groups get the extra ones changes from call to call.
#[derive(Debug, Clone)]
pub struct Generator {
    groups: Vec<Group>,
}

impl Generator {
    /// Build a generator from a set-code specification such as `"u l n"`.
    ///
    /// `custom_set` supplies the characters for the `c` code and is ignored
    /// otherwise. Fails with [`Error::EmptyResolution`] if no group survives.
    pub fn new(set_codes: &str, custom_set: &str) -> Result<Self, Error> {
        let groups = resolve_non_empty(set_codes, custom_set)?;
        tracing::debug!(set_codes, groups = groups.len(), "generator ready");
        Ok(Self { groups })
    }

    /// Unambiguous upper- and lowercase letters, as two round-robin groups.
    pub fn alpha() -> Self {
        Self::preset("u l")
    }

    /// All ten digits.
    pub fn numeric() -> Self {
        Self::preset("N")
    }

    /// Unambiguous uppercase, lowercase and digits.
    pub fn alphanumeric() -> Self {
        Self::preset("u l n")
    }

    pub fn loweralphanumeric() -> Self {
        Self::preset("l n")
    }

    /// Unambiguous letters and digits plus the safe symbols.
    pub fn ascii() -> Self {
        Self::preset("u l n s")
    }

    /// Only the characters of `custom_set`.
    pub fn custom(custom_set: &str) -> Result<Self, Error> {
        Self::new("c", custom_set)
    }

    fn preset(set_codes: &str) -> Self {
        let groups = charset::resolve(set_codes, "");
        debug_assert!(!groups.is_empty(), "preset {set_codes:?} resolved empty");
        Self { groups }
    }

    /// Groups resolved at construction, in specification order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Generate `length` characters from the construction-time groups.
    pub fn generate(&self, length: usize) -> Password {
        self.generate_from(&mut rng::secure(), length)
    }

    /// Generate with groups resolved from `set_codes` for this call only.
    pub fn generate_with(
        &self,
        length: usize,
        set_codes: &str,
        custom_set: &str,
    ) -> Result<Password, Error> {
        self.generate_with_from(&mut rng::secure(), length, set_codes, custom_set)
    }

    /// [`Generator::generate`] driven by a caller-supplied CSPRNG.
    pub fn generate_from<R: CryptoRng>(&self, rng: &mut R, length: usize) -> Password {
        round_robin(&self.groups, rng, length)
    }

    /// [`Generator::generate_with`] driven by a caller-supplied CSPRNG.
    pub fn generate_with_from<R: CryptoRng>(
        &self,
        rng: &mut R,
        length: usize,
        set_codes: &str,
        custom_set: &str,
    ) -> Result<Password, Error> {
        let groups = resolve_non_empty(set_codes, custom_set)?;
        Ok(round_robin(&groups, rng, length))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::preset(DEFAULT_SET_CODES)
    }
}

/// Parse a textual length, rejecting negatives and non-numbers.
pub fn parse_length(s: &str) -> Result<usize, Error> {
    s.trim()
        .parse()
        .map_err(|_| Error::InvalidLength(s.to_string()))
}

fn resolve_non_empty(set_codes: &str, custom_set: &str) -> Result<Vec<Group>, Error> {
    let groups = charset::resolve(set_codes, custom_set);
    if groups.is_empty() {
        return Err(Error::EmptyResolution {
            set_codes: set_codes.to_string(),
            custom_set_len: custom_set.chars().count(),
        });
    }
    Ok(groups)
}

/// `groups` must be non-empty.
fn round_robin<R: CryptoRng>(groups: &[Group], rng: &mut R, length: usize) -> Password {
    let order = rng::shuffled(groups, rng);
    tracing::trace!(groups = order.len(), length, "generating");

    // Full capacity up front: a reallocation would leave an unwiped copy behind.
    let width = order
        .iter()
        .flat_map(|group| group.chars())
        .map(|c| c.len_utf8())
        .max()
        .unwrap_or(1);
    let mut password = Zeroizing::new(String::with_capacity(length.saturating_mul(width)));
    for group in order.iter().cycle().take(length) {
        password.push(group.pick(rng));
    }
    password
}
