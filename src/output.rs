//! Password output to the clipboard or the terminal.

use std::io::{self, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::queue;
use crossterm::style::{Color, PrintStyledContent, Stylize};
use crossterm::tty::IsTty;
use zeroize::Zeroize;

use classpass::Password;
use classpass::settings::Settings;

/// Send `password` where `settings` asks. Falls back to the terminal when the
/// clipboard is unavailable.
pub fn emit(password: &Password, settings: &Settings) -> io::Result<()> {
    if settings.to_clipboard {
        match to_clipboard(password) {
            Ok(()) => {
                eprintln!("*** -COPIED TO CLIPBOARD- ***");
                return Ok(());
            }
            Err(e) => tracing::warn!("Clipboard unavailable ({}), printing instead", e),
        }
    }
    to_terminal(password, settings.colorize)
}

fn to_clipboard(password: &Password) -> Result<(), String> {
    let mut ctx = ClipboardContext::new().map_err(|e| e.to_string())?;
    ctx.set_contents(password.as_str().to_owned()).map_err(|e| e.to_string())?;
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}

fn to_terminal(password: &str, colorize: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let styled = colorize && stdout.is_tty();
    let mut out = stdout.lock();

    if styled {
        for c in password.chars() {
            let content = match class_color(c) {
                Some(color) => c.with(color),
                None => c.stylize(),
            };
            queue!(out, PrintStyledContent(content))?;
        }
        writeln!(out)?;
    } else {
        writeln!(out, "{}", password)?;
    }

    out.flush()
}

fn class_color(c: char) -> Option<Color> {
    if c.is_ascii_digit() {
        Some(Color::Blue)
    } else if c.is_ascii_punctuation() {
        Some(Color::Red)
    } else {
        None
    }
}
