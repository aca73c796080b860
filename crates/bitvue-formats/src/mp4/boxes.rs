//! ISO BMFF box header parsing and the "jumpy" recovery primitive.
//!
//! Grounded on `original_source/minivideo/src/demuxer/mp4/mp4_box.c` (box
//! header + `jumpy_mp4` are a single pair of functions there), generalized to
//! 64-bit sizes, `uuid` usertypes and fullbox version/flags.

use crate::mp4::bitstream::Mp4Bitstream;

/// An ISO BMFF box header. `offset_start`/`offset_end` are absolute byte
/// offsets into the file; `end == start + size` is the box invariant.
#[derive(Debug, Clone)]
pub struct BoxHeader {
    pub offset_start: u64,
    pub offset_end: u64,
    pub size: u64,
    pub box_type: [u8; 4],
    /// Present only when `box_type == "uuid"`.
    pub usertype: Option<[u8; 16]>,
    /// Byte offset where the box payload begins (after size/type/extended
    /// size/usertype, before any fullbox version+flags).
    pub payload_offset: u64,
}

impl BoxHeader {
    pub fn box_type_str(&self) -> String {
        String::from_utf8_lossy(&self.box_type).into_owned()
    }

    pub fn is_type(&self, t: &[u8; 4]) -> bool {
        &self.box_type == t
    }
}

/// A fullbox's extra version+flags header.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullBoxHeader {
    pub version: u8,
    pub flags: u32,
}

/// Read a box header at the stream's current position (assumed byte-aligned).
///
/// Handles `size == 0` ("extends to end of file", clamped to `file_size`) and
/// `size == 1` (64-bit extended size follows the type). Returns `None` if
/// there isn't even enough data for the minimal 8-byte header, so callers can
/// treat a truncated trailing box as end-of-input rather than an error.
pub fn parse_box_header(bs: &mut Mp4Bitstream, file_size: u64) -> Option<BoxHeader> {
    let offset_start = bs.bitstream_get_absolute_byte_offset();
    if bs.remaining() < 8 {
        return None;
    }

    let size32 = bs.read_u32() as u64;
    let box_type = bs.read_fourcc();

    let mut size = size32;
    if size32 == 1 {
        if bs.remaining() < 8 {
            return None;
        }
        size = bs.read_u64();
    } else if size32 == 0 {
        size = file_size.saturating_sub(offset_start);
    }

    let usertype = if &box_type == b"uuid" {
        if bs.remaining() < 16 {
            return None;
        }
        let mut ut = [0u8; 16];
        for b in ut.iter_mut() {
            *b = bs.read_u8();
        }
        Some(ut)
    } else {
        None
    };

    let payload_offset = bs.bitstream_get_absolute_byte_offset();
    let header_len = payload_offset - offset_start;

    // A box smaller than its own header is malformed; the caller's jumpy_mp4
    // recovery is what keeps parsing alive past this.
    let offset_end = if size < header_len {
        offset_start + header_len
    } else {
        offset_start + size
    };

    Some(BoxHeader {
        offset_start,
        offset_end,
        size: offset_end - offset_start,
        box_type,
        usertype,
        payload_offset,
    })
}

/// Read the extra version+flags fields of a "full box".
pub fn parse_fullbox_header(bs: &mut Mp4Bitstream) -> FullBoxHeader {
    let version = bs.read_u8();
    let flags = bs.read_u24();
    FullBoxHeader { version, flags }
}

/// The single recovery primitive: after parsing a subbox, reposition the
/// stream cursor to exactly `current.offset_end`, clamped to the parent's end
/// (or file size, when there is no parent) if the box's own declared end
/// overshoots it.
///
/// Idempotent: calling this twice in a row for the same `current`/`parent_end`
/// leaves the cursor exactly where the first call left it, since the cursor
/// is always driven to the same clamped target regardless of where it
/// started from.
pub fn jumpy_mp4(bs: &mut Mp4Bitstream, current: &BoxHeader, parent_end: Option<u64>) -> bool {
    let limit = parent_end.unwrap_or(bs.len() as u64);
    let target = current.offset_end.min(limit);
    let recovered = bs.bitstream_get_absolute_byte_offset() != target;
    bs.bitstream_goto_offset(target);
    recovered
}
