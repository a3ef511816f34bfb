//! packetdoc: packet reference tables from a plain-text layout
//!
//! packetdoc reads an indentation-structured description of a protocol's
//! packets and fields and renders one HTML table per packet, suitable for
//! pasting into wiki pages or Markdown documentation.
//!
//! ## Layout format
//!
//! ```text
//! serverbound
//!   0x00[Handshake]
//!     VarInt[protocolVersion]: the client's protocol version
//! clientbound
//!   0x00[Handshake Response]
//! ```
//!
//! Direction tags sit at column 0, packet headers (`id[Name]`) at two
//! spaces, fields (`Type[name]notes`) at four. Everything else is skipped.
//!
//! ## Quick Start
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use packetdoc::{PacketLayout, TableRenderer, TableWriter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let layout = PacketLayout::load_from_file("protocol.txt")?;
//!
//!     let writer = TableWriter::new(".", TableRenderer::default());
//!     let report = writer.write_all(layout.protocols());
//!     println!("wrote {} tables", report.written.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ### As a Command-Line Tool
//!
//! ```bash
//! # serverbound_<id>.html / clientbound_<id>.html in the current directory
//! packetdoc
//!
//! # Everything in one Markdown document
//! packetdoc markdown --output PROTOCOL.md
//! ```

pub mod config;
pub mod layout;
pub mod render;
pub mod writer;

pub use config::{MarkdownConfig, OutputConfig, PacketDocConfig};
pub use layout::{Direction, Field, Packet, PacketLayout, Protocol, ProtocolSet};
pub use render::TableRenderer;
pub use writer::{TableWriter, WriteError, WriteReport};

use std::path::PathBuf;

/// packetdoc error types
#[derive(Debug, thiserror::Error)]
pub enum PacketDocError {
    /// Layout file missing or unreadable
    #[error("Cannot read layout {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file is not valid TOML
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Some packet tables could not be written
    #[error("{failed} of {total} packet tables could not be written")]
    WriteFailed { failed: usize, total: usize },
}
