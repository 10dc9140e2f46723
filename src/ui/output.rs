//! Themed line writers for the interactive session.
//!
//! Everything writes to a caller-supplied sink so the session can be driven
//! against an in-memory buffer.

use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;
use std::io::{self, Write};

pub fn header(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text.style(theme().header.clone()))
}

pub fn menu_line(out: &mut impl Write, key: u8, label: &str) -> io::Result<()> {
    writeln!(out, "{}. {}", key, label)
}

/// Write a prompt without a newline and flush so it shows before the read blocks.
pub fn prompt(out: &mut impl Write, label: &str) -> io::Result<()> {
    write!(out, "{}", label.style(theme().prompt.clone()))?;
    out.flush()
}

pub fn success(out: &mut impl Write, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}", Icons::CHECK, label.style(theme().success.clone()))
}

pub fn error(out: &mut impl Write, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}", Icons::CROSS, label.style(theme().error.clone()))
}

pub fn warn(out: &mut impl Write, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}", Icons::WARN, label.style(theme().warn.clone()))
}
