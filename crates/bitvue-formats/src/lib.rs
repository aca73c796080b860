//! ISO Base Media File Format (MP4/3GP/QuickTime) demuxer for bitvue.
//!
//! This crate reconstructs per-track sample tables from an ISO BMFF box tree
//! (`ftyp`/`moov`/`trak`/`mdia`/`minf`/`stbl`, plus the fragmented-movie
//! `moof` variant) into [`mp4::MediaFile`] / [`mp4::MediaStream`] — the
//! demuxer half of bitvue's decoding pipeline (codec-level NAL/CABAC decoding
//! lives in `bitvue-avc`).
//!
//! # Example
//!
//! ```no_run
//! use bitvue_formats::mp4::parse_mp4;
//! use std::fs;
//!
//! let data = fs::read("video.mp4").unwrap();
//! let file = parse_mp4(&data).unwrap();
//! for stream in &file.streams {
//!     println!("{} samples", stream.sample_offset.len());
//! }
//! ```

pub mod error;
pub mod mp4;
pub mod resource_budget;

pub use error::BitvueError;
pub use mp4::{MediaFile, MediaStream};
pub use mp4::boxes::BoxHeader;
pub use resource_budget::{AllocationError, ResourceBudget, MAX_ENTRY_COUNT, MAX_TOTAL_SAMPLES};
