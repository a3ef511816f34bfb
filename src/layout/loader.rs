//! Layout loader - reads a layout file and hands it to the parser

use super::parser::{ParseStats, Parser};
use super::types::{Direction, Packet, Protocol, ProtocolSet};
use crate::PacketDocError;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// A parsed packet layout document
#[derive(Debug, Clone)]
pub struct PacketLayout {
    protocols: ProtocolSet,
    stats: ParseStats,
}

impl PacketLayout {
    /// Load and parse a layout file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PacketDocError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PacketDocError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Read {} bytes from {}", content.len(), path.display());
        let layout = Self::load_from_string(&content);

        info!(
            "Parsed {}: {} protocols, {} packets, {} fields ({} lines ignored)",
            path.display(),
            layout.protocols.len(),
            layout.stats.packets,
            layout.stats.fields,
            layout.stats.ignored
        );

        Ok(layout)
    }

    /// Parse a layout from memory. Never fails; unrecognized lines are skipped.
    pub fn load_from_string(content: &str) -> Self {
        let (protocols, stats) = Parser::new().parse(content);
        Self { protocols, stats }
    }

    pub fn protocols(&self) -> &ProtocolSet {
        &self.protocols
    }

    pub fn protocol(&self, direction: Direction) -> Option<&Protocol> {
        self.protocols.get(direction)
    }

    /// Every packet, protocol by protocol
    pub fn packets(&self) -> impl Iterator<Item = &Packet> {
        self.protocols.packets()
    }

    pub fn stats(&self) -> ParseStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_input_error() {
        let err = PacketLayout::load_from_file("definitely/not/here/protocol.txt").unwrap_err();
        match err {
            PacketDocError::InputRead { path, .. } => {
                assert!(path.ends_with("protocol.txt"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_packets_follow_protocol_order() {
        let layout = PacketLayout::load_from_string(
            "clientbound\n  0[Results]\nserverbound\n  0[Handshake]\n  1[Toggle]\n",
        );

        let names: Vec<_> = layout.packets().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Results", "Handshake", "Toggle"]);
        assert_eq!(layout.stats().packets, 3);
        assert_eq!(layout.protocol(Direction::Serverbound).unwrap().packets.len(), 2);
    }
}
