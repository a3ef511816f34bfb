//! Packet layout model
//!
//! Data structures populated by the parser: protocols keyed by direction,
//! packets in declaration order, and the fields of each packet.

use serde::Serialize;
use std::fmt;

/// Flow direction of a protocol section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Messages sent from the client to the server
    Serverbound,
    /// Messages sent from the server to the client
    Clientbound,
}

impl Direction {
    /// Every direction tag accepted in a layout file
    pub const ALL: [Direction; 2] = [Direction::Serverbound, Direction::Clientbound];

    /// Match a whole line against the reserved direction tags
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|direction| direction.tag() == tag)
    }

    /// The tag as written in the layout file
    pub fn tag(&self) -> &'static str {
        match self {
            Direction::Serverbound => "serverbound",
            Direction::Clientbound => "clientbound",
        }
    }

    /// Tag without its "bound" suffix, capitalized ("Server", "Client")
    pub fn display_name(&self) -> String {
        let base = self.tag().replace("bound", "");
        let mut chars = base.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single typed field of a packet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Declared type, e.g. `VarInt`
    pub field_type: String,

    /// Field name
    pub name: String,

    /// Everything after the closing bracket, kept verbatim
    pub notes: String,
}

/// One packet definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Packet {
    /// Identifier exactly as written; not necessarily numeric
    pub id: String,

    /// Human readable name
    pub name: String,

    /// Direction of the owning protocol
    pub direction: Direction,

    /// Fields in declaration order
    pub fields: Vec<Field>,
}

impl Packet {
    pub fn new(id: impl Into<String>, name: impl Into<String>, direction: Direction) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            direction,
            fields: Vec::new(),
        }
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Display name of the owning protocol, shown in the "Bound To" column
    pub fn bound_to(&self) -> String {
        self.direction.display_name()
    }
}

/// All packets declared under one direction tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Protocol {
    pub direction: Direction,
    pub packets: Vec<Packet>,
}

impl Protocol {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            packets: Vec::new(),
        }
    }

    pub fn display_name(&self) -> String {
        self.direction.display_name()
    }

    /// Append a packet, returning its index
    pub fn add_packet(&mut self, packet: Packet) -> usize {
        self.packets.push(packet);
        self.packets.len() - 1
    }
}

/// Protocols in order of first appearance, at most one per direction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProtocolSet {
    protocols: Vec<Protocol>,
}

impl ProtocolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the protocol for `direction`, registering it on first sight
    pub fn register(&mut self, direction: Direction) -> usize {
        match self.position(direction) {
            Some(index) => index,
            None => {
                self.protocols.push(Protocol::new(direction));
                self.protocols.len() - 1
            }
        }
    }

    pub fn get(&self, direction: Direction) -> Option<&Protocol> {
        self.position(direction).map(|index| &self.protocols[index])
    }

    pub(crate) fn at_mut(&mut self, index: usize) -> Option<&mut Protocol> {
        self.protocols.get_mut(index)
    }

    fn position(&self, direction: Direction) -> Option<usize> {
        self.protocols.iter().position(|p| p.direction == direction)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Protocol> {
        self.protocols.iter()
    }

    /// Every packet across every protocol, in insertion order
    pub fn packets(&self) -> impl Iterator<Item = &Packet> {
        self.protocols.iter().flat_map(|p| p.packets.iter())
    }

    pub fn len(&self) -> usize {
        self.protocols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }
}
