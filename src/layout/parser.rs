//! Layout parser - single pass over the input, one line at a time
//!
//! Keeps two cursors: the active protocol and the active packet. A new
//! direction tag or packet header implicitly closes whatever came before it.

use super::classifier::{classify, LineKind};
use super::types::{Direction, Field, Packet, ProtocolSet};
use log::trace;

/// Counters gathered while parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub lines: usize,
    pub packets: usize,
    pub fields: usize,
    pub ignored: usize,
}

pub struct Parser {
    protocols: ProtocolSet,
    current_protocol: Option<usize>,
    // (protocol index, packet index)
    current_packet: Option<(usize, usize)>,
    stats: ParseStats,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            protocols: ProtocolSet::new(),
            current_protocol: None,
            current_packet: None,
            stats: ParseStats::default(),
        }
    }

    /// Parse a whole document
    pub fn parse(mut self, input: &str) -> (ProtocolSet, ParseStats) {
        for line in input.lines() {
            self.feed_line(line);
        }
        self.finish()
    }

    /// Apply one line to the model
    pub fn feed_line(&mut self, line: &str) {
        self.stats.lines += 1;

        let kind = classify(line);
        let applied = match kind {
            LineKind::Direction(direction) => {
                self.enter_protocol(direction);
                true
            }
            LineKind::PacketHeader { id, name } => self.open_packet(id, name),
            LineKind::Field { field_type, name, notes } => self.add_field(Field {
                field_type: field_type.to_string(),
                name: name.to_string(),
                notes: notes.to_string(),
            }),
            LineKind::Ignored => false,
        };

        if !applied {
            self.stats.ignored += 1;
            trace!("line {} dropped as {}: {:?}", self.stats.lines, kind, line);
        }
    }

    pub fn finish(self) -> (ProtocolSet, ParseStats) {
        (self.protocols, self.stats)
    }

    fn enter_protocol(&mut self, direction: Direction) {
        // Re-entering a known direction only moves the protocol cursor
        self.current_protocol = Some(self.protocols.register(direction));
    }

    fn open_packet(&mut self, id: &str, name: &str) -> bool {
        let Some(protocol_index) = self.current_protocol else {
            return false;
        };
        let Some(protocol) = self.protocols.at_mut(protocol_index) else {
            return false;
        };

        let direction = protocol.direction;
        let packet_index = protocol.add_packet(Packet::new(id, name, direction));
        self.current_packet = Some((protocol_index, packet_index));
        self.stats.packets += 1;
        true
    }

    fn add_field(&mut self, field: Field) -> bool {
        let Some((protocol_index, packet_index)) = self.current_packet else {
            return false;
        };

        match self
            .protocols
            .at_mut(protocol_index)
            .and_then(|protocol| protocol.packets.get_mut(packet_index))
        {
            Some(packet) => {
                packet.add_field(field);
                self.stats.fields += 1;
                true
            }
            None => false,
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> (ProtocolSet, ParseStats) {
        Parser::new().parse(input)
    }

    #[test]
    fn test_handshake_example() {
        let (protocols, stats) =
            parse("serverbound\n  1[Handshake]\n    VarInt[protocolVersion]: the protocol version\n");

        assert_eq!(protocols.len(), 1);
        let protocol = protocols.get(Direction::Serverbound).unwrap();
        assert_eq!(protocol.display_name(), "Server");
        assert_eq!(protocol.packets.len(), 1);

        let packet = &protocol.packets[0];
        assert_eq!(packet.id, "1");
        assert_eq!(packet.name, "Handshake");
        assert_eq!(
            packet.fields,
            vec![Field {
                field_type: "VarInt".to_string(),
                name: "protocolVersion".to_string(),
                notes: ": the protocol version".to_string(),
            }]
        );

        assert_eq!(stats, ParseStats { lines: 3, packets: 1, fields: 1, ignored: 0 });
    }

    #[test]
    fn test_header_before_direction_is_dropped() {
        let (protocols, stats) = parse("  1[Orphan]\n    Int[x]\nserverbound\n");
        assert_eq!(protocols.len(), 1);
        assert!(protocols.get(Direction::Serverbound).unwrap().packets.is_empty());
        assert_eq!(stats.ignored, 2);
    }

    #[test]
    fn test_field_before_header_is_dropped() {
        let (protocols, stats) = parse("clientbound\n    Int[x]\n  2[Real]\n");
        let packets = &protocols.get(Direction::Clientbound).unwrap().packets;
        assert_eq!(packets.len(), 1);
        assert!(packets[0].fields.is_empty());
        assert_eq!(stats.ignored, 1);
    }

    #[test]
    fn test_repeated_direction_reuses_protocol() {
        let input = "\
serverbound
  0[A]
clientbound
  0[B]
serverbound
  1[C]
";
        let (protocols, _) = parse(input);
        assert_eq!(protocols.len(), 2);

        let server: Vec<_> = protocols
            .get(Direction::Serverbound)
            .unwrap()
            .packets
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(server, vec!["A", "C"]);

        let order: Vec<_> = protocols.iter().map(|p| p.direction).collect();
        assert_eq!(order, vec![Direction::Serverbound, Direction::Clientbound]);
    }

    #[test]
    fn test_direction_switch_keeps_packet_cursor() {
        let input = "serverbound\n  0[A]\n    Int[first]\nclientbound\n    Int[second]\n";
        let (protocols, _) = parse(input);

        let packet = &protocols.get(Direction::Serverbound).unwrap().packets[0];
        let names: Vec<_> = packet.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert!(protocols.get(Direction::Clientbound).unwrap().packets.is_empty());
    }

    #[test]
    fn test_field_order_preserved() {
        let input = "serverbound\n  5[Multi]\n    A[z]\n    B[a]\n    C[m]\n";
        let (protocols, _) = parse(input);
        let packet = &protocols.get(Direction::Serverbound).unwrap().packets[0];
        let types: Vec<_> = packet.fields.iter().map(|f| f.field_type.as_str()).collect();
        assert_eq!(types, vec!["A", "B", "C"]);
        assert!(packet.fields.iter().all(|f| f.notes.is_empty()));
    }

    #[test]
    fn test_crlf_input() {
        let (protocols, _) = parse("clientbound\r\n  3[Win]\r\n    Int[x]: note\r\n");
        let packet = &protocols.get(Direction::Clientbound).unwrap().packets[0];
        assert_eq!(packet.id, "3");
        assert_eq!(packet.fields[0].notes, ": note");
    }

    #[test]
    fn test_empty_input() {
        let (protocols, stats) = parse("");
        assert!(protocols.is_empty());
        assert_eq!(stats, ParseStats::default());
    }
}
