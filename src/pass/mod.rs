//! Character sets and password generation.

pub mod charset;
mod generate;

pub use generate::{Generator, Password, parse_length};
