//! Line classifier - decides what role a single layout line plays
//!
//! Structure is carried entirely by indentation:
//! - column 0: a direction tag (`serverbound` / `clientbound`)
//! - 2 spaces: a packet header, `id[Name]`
//! - 4 spaces: a field, `Type[name]notes`
//!
//! Anything else is ignored. Classification does not look at parser state;
//! the parser decides whether a header or field has a container to land in.

use super::types::Direction;
use std::fmt;

/// Indentation of a packet header line
pub const PACKET_INDENT: usize = 2;

/// Indentation of a field declaration line
pub const FIELD_INDENT: usize = 4;

/// Role of one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Direction(Direction),
    PacketHeader { id: &'a str, name: &'a str },
    Field { field_type: &'a str, name: &'a str, notes: &'a str },
    Ignored,
}

impl fmt::Display for LineKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineKind::Direction(direction) => write!(f, "Direction({})", direction),
            LineKind::PacketHeader { id, name } => write!(f, "PacketHeader({}[{}])", id, name),
            LineKind::Field { field_type, name, .. } => write!(f, "Field({}[{}])", field_type, name),
            LineKind::Ignored => f.write_str("Ignored"),
        }
    }
}

/// Classify one line (without its line terminator)
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(direction) = Direction::from_tag(line) {
        return LineKind::Direction(direction);
    }

    let (indent, content) = split_indent(line);

    // Whitespace-only lines are blank, whatever their width
    if content.is_empty() {
        return LineKind::Ignored;
    }

    match indent {
        PACKET_INDENT => {
            let (id, name, _) = split_brackets(content);
            LineKind::PacketHeader { id, name }
        }
        FIELD_INDENT => {
            let (field_type, name, notes) = split_brackets(content);
            LineKind::Field { field_type, name, notes }
        }
        _ => LineKind::Ignored,
    }
}

/// Count leading spaces and return the remaining content.
///
/// Only `' '` counts; a tab is ordinary content.
pub fn split_indent(line: &str) -> (usize, &str) {
    let content = line.trim_start_matches(' ');
    (line.len() - content.len(), content)
}

/// Split `head[inner]tail`.
///
/// Malformed input degrades instead of failing:
/// - no `[`: the whole content is the head, inner and tail are empty
/// - `[` with no later `]`: inner runs to the end of the line, tail is empty
///
/// The closing bracket is the first `]` after the opening one.
pub fn split_brackets(content: &str) -> (&str, &str, &str) {
    let Some(open) = content.find('[') else {
        return (content, "", "");
    };

    let head = &content[..open];
    let rest = &content[open + 1..];

    match rest.find(']') {
        Some(close) => (head, &rest[..close], &rest[close + 1..]),
        None => (head, rest, ""),
    }
}
