//! Table writer - one HTML file per packet
//!
//! Files are named `{direction}_{id}.html` and overwritten on every run. A
//! failed file does not stop the remaining packets; failures are collected
//! into the returned [`WriteReport`].

use crate::layout::{Packet, ProtocolSet};
use crate::render::TableRenderer;
use crate::PacketDocError;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Why a single packet's file could not be written
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The identifier cannot be used as part of a file name
    #[error("Packet id {packet_id:?} ({direction}) is not a valid file name component")]
    InvalidFileName { direction: String, packet_id: String },

    /// The file system refused the write
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of writing every packet table
#[derive(Debug, Default)]
pub struct WriteReport {
    /// Files written, in packet order
    pub written: Vec<PathBuf>,

    /// Packets whose file could not be written
    pub failures: Vec<WriteError>,
}

impl WriteReport {
    pub fn total(&self) -> usize {
        self.written.len() + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Collapse the report into a single error when any file failed
    pub fn check(&self) -> Result<(), PacketDocError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(PacketDocError::WriteFailed {
                failed: self.failures.len(),
                total: self.total(),
            })
        }
    }
}

/// File name for a packet's table
pub fn table_file_name(packet: &Packet) -> Result<String, WriteError> {
    if packet.id.contains(['/', '\\', '\0']) || packet.id == "." || packet.id == ".." {
        return Err(WriteError::InvalidFileName {
            direction: packet.direction.tag().to_string(),
            packet_id: packet.id.clone(),
        });
    }

    Ok(format!("{}_{}.html", packet.direction.tag(), packet.id))
}

/// Writes rendered packet tables into an output directory
pub struct TableWriter {
    output_dir: PathBuf,
    renderer: TableRenderer,
}

impl TableWriter {
    pub fn new(output_dir: impl Into<PathBuf>, renderer: TableRenderer) -> Self {
        Self {
            output_dir: output_dir.into(),
            renderer,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write one file per packet across all protocols
    pub fn write_all(&self, protocols: &ProtocolSet) -> WriteReport {
        let mut report = WriteReport::default();

        for packet in protocols.packets() {
            match self.write_packet(packet) {
                Ok(path) => report.written.push(path),
                Err(e) => {
                    warn!("{}", e);
                    report.failures.push(e);
                }
            }
        }

        info!(
            "Wrote {}/{} packet tables to {}",
            report.written.len(),
            report.total(),
            self.output_dir.display()
        );

        report
    }

    /// Render and write a single packet, returning the path written
    pub fn write_packet(&self, packet: &Packet) -> Result<PathBuf, WriteError> {
        let path = self.output_dir.join(table_file_name(packet)?);
        let table = self.renderer.render_table(packet);

        fs::write(&path, table).map_err(|source| WriteError::Io {
            path: path.clone(),
            source,
        })?;

        debug!(
            "{} [{}] -> {} ({} fields)",
            packet.id,
            packet.name,
            path.display(),
            packet.fields.len()
        );

        Ok(path)
    }
}
