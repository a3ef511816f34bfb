//! Packet layout format
//!
//! A plain-text, indentation-structured description of a protocol's packets:
//!
//! ```text
//! serverbound
//!   0x00[Handshake]
//!     VarInt[protocolVersion]: the client's protocol version
//! clientbound
//!   0x00[Handshake Response]
//! ```
//!
//! Architecture:
//! - Classifier: decides the role of each line
//! - Parser: builds the model in one pass
//! - Loader: file entry point

pub mod classifier;
pub mod loader;
pub mod parser;
pub mod types;

pub use loader::PacketLayout;
pub use parser::{ParseStats, Parser};
pub use types::{Direction, Field, Packet, Protocol, ProtocolSet};
