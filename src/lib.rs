//! Round-robin password generation over randomly ordered character classes.
//!
//! A [`Generator`] is built from a set-code specification: clusters of
//! one-letter codes separated by spaces. Each cluster becomes one group of
//! candidate characters. Every generated password cycles through the groups
//! in a freshly shuffled order, drawing one character per visit, so each
//! class shows up an even number of times without a predictable layout.
//!
//! | code | characters |
//! |------|------------|
//! | `L`  | `a-z` |
//! | `l`  | `a-z` without `i g l o` |
//! | `U`  | `A-Z` |
//! | `u`  | `A-Z` without `I G O` |
//! | `N`  | `0-9` |
//! | `n`  | `0-9` without `1 6 0` |
//! | `s`  | `!@#^*_` |
//! | `c`  | caller-supplied custom set |
//!
//! # Examples
//!
//! ```
//! use classpass::Generator;
//!
//! let generator = Generator::new("u l n", "").unwrap();
//! let password = generator.generate(12);
//! assert_eq!(password.len(), 12);
//!
//! // Per-call override, stored groups are untouched.
//! let pin = generator.generate_with(6, "N", "").unwrap();
//! assert!(pin.chars().all(|c| c.is_ascii_digit()));
//! ```
//!
//! Unknown codes are skipped, but a specification that yields nothing is an
//! error:
//!
//! ```
//! use classpass::{Error, Generator};
//!
//! assert!(matches!(
//!     Generator::new("c", ""),
//!     Err(Error::EmptyResolution { .. })
//! ));
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod pass;
pub mod rng;
pub mod settings;

pub use error::Error;
pub use pass::{Generator, Password};
