//! Settings file persistence.
//!
//! One line, comma separated, `|` escapes the next character:
//! `set_codes,custom_set,pass_length,to_clipboard,colorize`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;
use crate::pass::parse_length;

const FIELDS: usize = 5;

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{}\n",
        escape(&settings.set_codes),
        escape(&settings.custom_set),
        settings.pass_length,
        settings.to_clipboard,
        settings.colorize,
    );

    file.write_all(data.as_bytes())
}

pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, writing defaults");
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let line = line.trim_end_matches(['\n', '\r']);
    let parts = split_escaped(line, ',');

    if parts.len() != FIELDS {
        tracing::warn!(
            path = %path.display(),
            fields = parts.len(),
            "malformed settings file, resetting to defaults"
        );
        return save(settings, path);
    }

    settings.set_codes = parts[0].clone();
    settings.custom_set = parts[1].clone();
    match parse_length(&parts[2]) {
        Ok(len) => settings.pass_length = len,
        Err(e) => tracing::warn!("{}, keeping {}", e, settings.pass_length),
    }
    settings.to_clipboard = parse_flag(&parts[3], settings.to_clipboard);
    settings.colorize = parse_flag(&parts[4], settings.colorize);

    Ok(())
}

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/classpass/settings")
}

fn parse_flag(s: &str, fallback: bool) -> bool {
    s.parse().unwrap_or_else(|_| {
        tracing::warn!(value = s, "invalid boolean in settings, keeping {}", fallback);
        fallback
    })
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir()
            .join(format!("classpass-test-{}-{}", std::process::id(), name))
            .join("settings")
    }

    #[test]
    fn test_split_escaped() {
        assert_eq!(split_escaped("a,b,c", ','), vec!["a", "b", "c"]);
        assert_eq!(split_escaped("a|,b,c", ','), vec!["a,b", "c"]);
        assert_eq!(split_escaped("a||,b", ','), vec!["a|", "b"]);
        assert_eq!(split_escaped(",,", ','), vec!["", "", ""]);
        assert_eq!(split_escaped("", ','), vec![""]);
    }

    #[test]
    fn test_escape_is_split_inverse() {
        let raw = "x,|y";
        let line = format!("{},{}", escape(raw), escape(""));
        assert_eq!(split_escaped(&line, ','), vec![raw, ""]);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save-load");
        let saved = Settings {
            set_codes: "U L s c".into(),
            custom_set: "a,b|c".into(),
            pass_length: 33,
            to_clipboard: true,
            colorize: false,
        };
        saved.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, saved);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let path = temp_path("missing");
        let _ = fs::remove_dir_all(path.parent().unwrap());

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, Settings::default());
        assert!(path.exists());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_negative_length_keeps_default() {
        let path = temp_path("negative");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "N,,-8,false,true\n").unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.set_codes, "N");
        assert_eq!(loaded.pass_length, Settings::default().pass_length);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_malformed_file_is_reset() {
        let path = temp_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "only,three,fields\n").unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, Settings::default());
        let on_disk = fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, "u l n,,20,false,true\n");

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
