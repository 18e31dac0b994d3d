//! Single-attempt numbered prompts.
//!
//! Menus are rendered to stdout; exactly one answer line is read. A bad
//! keystroke ends the selection, there is no retry loop.

use std::io::BufRead;

use anyhow::{Context, Result};
use console::style;

/// Print the styled selection prompt, e.g. `Select an MSU Type (1-4)`.
pub fn print_prompt(what: &str, max: usize) {
    println!("{}", style(format!("Select {what} (1-{max})")).cyan().bold());
}

/// Print one 1-based menu entry.
pub fn print_entry(index: usize, label: &str) {
    println!("{} {label}", style(format!("{index})")).cyan());
}

/// Parse one answer line into a 1-based index within `[1, max]`.
pub fn parse_index(line: &str, max: usize) -> Option<usize> {
    match line.trim().parse::<usize>() {
        Ok(index) if (1..=max).contains(&index) => Some(index),
        _ => None,
    }
}

/// Read exactly one line from `input` and parse it as a menu index.
///
/// Returns `None` for unparseable or out-of-range answers.
pub fn read_index(input: &mut impl BufRead, max: usize) -> Result<Option<usize>> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read selection from input")?;
    Ok(parse_index(&line, max))
}
