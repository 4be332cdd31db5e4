//! File input for ticket batches.
//!
//! Batch exports from the ticket store can get large, so files above a size
//! threshold are memory-mapped instead of read into a buffer. Decoding is
//! strict JSON: a batch file is a JSON array of ticket objects.

use std::fs::File;
use std::path::{Path, PathBuf};

use memmap2::Mmap;

use crate::core::ticket::TicketInput;

const MMAP_THRESHOLD: u64 = 1024 * 1024; // 1 MiB

/// Errors while loading a ticket batch file.
#[derive(Debug, thiserror::Error)]
pub enum TicketFileError {
    #[error("failed to read ticket file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid ticket JSON in {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub enum FileContent {
    Mapped(Mmap),
    Buffered(String),
}

impl AsRef<str> for FileContent {
    fn as_ref(&self) -> &str {
        match self {
            FileContent::Mapped(mmap) => {
                // Invalid UTF-8 degrades to an empty view; the JSON decoder
                // then reports the file as malformed rather than panicking
                std::str::from_utf8(mmap).unwrap_or("")
            }
            FileContent::Buffered(s) => s.as_str(),
        }
    }
}

pub fn read_file_smart<P: AsRef<Path>>(path: P) -> Result<FileContent, TicketFileError> {
    let path = path.as_ref();

    let metadata = std::fs::metadata(path)
        .map_err(|source| TicketFileError::Read { path: path.to_path_buf(), source })?;

    if metadata.len() > MMAP_THRESHOLD {
        // Use memory mapping for large batch files
        let file = File::open(path)
            .map_err(|source| TicketFileError::Read { path: path.to_path_buf(), source })?;

        // Safety: we only read the mapping and never resize the file
        let mmap = unsafe { Mmap::map(&file) }
            .map_err(|source| TicketFileError::Read { path: path.to_path_buf(), source })?;

        Ok(FileContent::Mapped(mmap))
    } else {
        // Read small files into memory
        let content = std::fs::read_to_string(path)
            .map_err(|source| TicketFileError::Read { path: path.to_path_buf(), source })?;

        Ok(FileContent::Buffered(content))
    }
}

/// Decode a JSON array of tickets.
pub fn parse_tickets(json: &str) -> Result<Vec<TicketInput>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load and decode a ticket batch file.
pub fn load_tickets<P: AsRef<Path>>(path: P) -> Result<Vec<TicketInput>, TicketFileError> {
    let path = path.as_ref();
    let content = read_file_smart(path)?;

    parse_tickets(content.as_ref())
        .map_err(|source| TicketFileError::Decode { path: path.to_path_buf(), source })
}
