//! HTML table and Markdown rendering
//!
//! Every packet becomes one `<table>` with a fixed five column header. The
//! packet id and direction cells are written once and span all field rows.

use crate::layout::{Direction, Packet, ProtocolSet};
use std::borrow::Cow;
use std::fmt::Write;

const TABLE_HEAD: &str = "<table>
    <thead>
        <tr>
            <th>Packet ID</th>
            <th>Bound To</th>
            <th>Field Name</th>
            <th>Field Type</th>
            <th>Notes</th>
        </tr>
    </thead>
    <tbody>";

const TABLE_TAIL: &str = "\n    </tbody>\n</table>";

/// Renders packets as HTML table fragments
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer {
    /// Escape `& < > "` in cell text. Off by default: cells are verbatim.
    pub escape_html: bool,
}

impl TableRenderer {
    pub fn new(escape_html: bool) -> Self {
        Self { escape_html }
    }

    /// Render one packet as a standalone `<table>` fragment
    pub fn render_table(&self, packet: &Packet) -> String {
        let mut table = String::from(TABLE_HEAD);

        // A packet without fields still gets one row
        let rowspan = packet.fields.len().max(1);
        let bound_to = packet.bound_to();

        // fmt::Write into a String cannot fail
        let _ = write!(
            table,
            "
        <tr>
            <td rowspan={rowspan}>{}</td>
            <td rowspan={rowspan}>{}</td>",
            self.cell(&packet.id),
            self.cell(&bound_to),
        );

        for (index, field) in packet.fields.iter().enumerate() {
            if index > 0 {
                table.push_str("\n        <tr>");
            }

            // Name before type, matching the header order
            let _ = write!(
                table,
                "
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
        </tr>",
                self.cell(&field.name),
                self.cell(&field.field_type),
                self.cell(&field.notes),
            );
        }

        if packet.fields.is_empty() {
            table.push_str(
                "
            <td></td>
            <td></td>
            <td></td>
        </tr>",
            );
        }

        table.push_str(TABLE_TAIL);
        table
    }

    /// Render every protocol into one Markdown document: a section per
    /// direction, a heading per packet, each followed by its table
    pub fn render_markdown(&self, protocols: &ProtocolSet) -> String {
        let mut document = String::new();

        for protocol in protocols.iter() {
            let _ = write!(
                document,
                "## {}\n\n{}\n\n",
                heading(protocol.direction),
                blurb(protocol.direction)
            );

            for packet in &protocol.packets {
                let _ = write!(
                    document,
                    "### {}\n\n{}\n\n",
                    self.cell(&packet.name),
                    self.render_table(packet)
                );
            }
        }

        document
    }

    fn cell<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.escape_html {
            escape_html(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

fn heading(direction: Direction) -> &'static str {
    match direction {
        Direction::Serverbound => "Serverbound",
        Direction::Clientbound => "Clientbound",
    }
}

fn blurb(direction: Direction) -> &'static str {
    match direction {
        Direction::Serverbound => "These are messages sent from the client to the server.",
        Direction::Clientbound => "These are messages sent by the server to the client.",
    }
}

/// Escape the characters that would change HTML structure
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
