//! Password generation settings.

mod file;

use std::path::Path;

use crate::error::Error;
use crate::pass::Generator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub set_codes: String,
    pub custom_set: String,
    pub pass_length: usize,
    pub to_clipboard: bool,
    pub colorize: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&file::default_path())
    }

    /// Load from `path`, creating it with defaults if missing or malformed.
    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(self, path)
    }

    /// Build the generator these settings describe.
    pub fn generator(&self) -> Result<Generator, Error> {
        Generator::new(&self.set_codes, &self.custom_set)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            set_codes: String::from("u l n"),
            custom_set: String::new(),
            pass_length: 20,
            to_clipboard: false,
            colorize: true,
        }
    }
}
