//! Error type for container-level demuxing failures.
//!
//! Scoped to exactly what `bitvue_formats::mp4` raises, so this crate carries
//! no dependency on a workspace-wide GUI/session error type.

use thiserror::Error;

/// Errors surfaced by container parsing.
#[derive(Error, Debug)]
pub enum BitvueError {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Invalid range: offset={offset}, length={length}")]
    InvalidRange { offset: u64, length: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
