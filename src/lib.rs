#![allow(clippy::module_inception)]

use std::rc::Rc;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A byte offset into a named source file.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    /// Position attached to tokens the parser invents during recovery.
    pub fn error() -> Self {
        Position(0, Rc::new(String::from("<error>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Locates the line containing `position` in `content`.
///
/// Returns the 1-based line number, the line's text and the column of
/// `position` within that line. Positions at or past the end of the
/// content resolve to the last line, so end-of-file diagnostics still
/// render something sensible.
pub fn get_line_at_position(content: &str, position: u32) -> (usize, String, usize) {
    if content.is_empty() {
        return (1, String::new(), 0);
    }

    let pos = (position as usize).min(content.len() - 1);

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    (line_number - 1, String::new(), 0)
}
