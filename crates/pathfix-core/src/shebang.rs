use std::borrow::Cow;

use crate::config::RewriteConfig;

/// A `#!` line naming some flavour of python anywhere on it.
#[must_use]
pub fn is_python_shebang(line: &[u8]) -> bool {
    line.starts_with(b"#!") && contains(line, b"python")
}

/// Returns the flags fragment of a shebang, starting at the first ` -`.
///
/// The leading space is kept and a trailing newline is dropped, so
/// `#! /usr/bin/env python -W Error -s\n` yields ` -W Error -s`.
#[must_use]
pub fn parse_flags(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    match find(line, b" -") {
        Some(start) => &line[start..],
        None => &[],
    }
}

/// Computes the replacement for the first line of a file.
///
/// Lines that are not python shebangs come back borrowed and untouched.
/// New flags go right after the single `-` in front of any kept flags: Linux
/// hands everything after the interpreter to it as one argument, so
/// `-s` plus `-W Error` has to become `-sW Error`.
#[must_use]
pub fn fix_line<'a>(line: &'a [u8], config: &RewriteConfig) -> Cow<'a, [u8]> {
    if !is_python_shebang(line) {
        return Cow::Borrowed(line);
    }

    let old_flags: &[u8] = if config.keep_flags() {
        parse_flags(line).get(2..).unwrap_or_default()
    } else {
        &[]
    };

    let mut fixed = b"#! ".to_vec();
    fixed.extend_from_slice(&config.interpreter_bytes());
    if !old_flags.is_empty() || !config.add_flags().is_empty() {
        fixed.extend_from_slice(b" -");
        fixed.extend_from_slice(config.add_flags());
        fixed.extend_from_slice(old_flags);
    }
    fixed.push(b'\n');
    Cow::Owned(fixed)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    find(haystack, needle).is_some()
}
