//! ISO Base Media File Format demuxer.
//!
//! Recomposes the box-tree walk (`ftyp`/`styp` → `moov`/`trak`/`mdia`/`minf`/`stbl`,
//! plus the fragmented-movie `moof` variant) into a `MediaFile` of `MediaStream`s.
//! Generalizes the box header parsing and table layout to cover 64-bit sizes,
//! `uuid` vendor sub-types, and fragment folding.

pub mod bitstream;
pub mod boxes;
pub mod sample_table;
pub mod stream;

use crate::error::BitvueError;
use crate::resource_budget::MAX_ENTRY_COUNT;
use bitstream::Mp4Bitstream;
use boxes::{jumpy_mp4, parse_box_header, parse_fullbox_header, BoxHeader};
use sample_table::{parse_trak, FragmentSample, Mp4Track};
use serde::{Deserialize, Serialize};
pub use stream::MediaStream;
use stream::track_to_stream;

/// Top-level parse result: zero or more streams, one per usable track.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaFile {
    pub major_brand: Option<String>,
    pub compatible_brands: Vec<String>,
    pub streams: Vec<MediaStream>,
}

/// Parse an ISO BMFF buffer end to end.
///
/// Malformed boxes are logged and skipped (`jumpy_mp4`); tracks missing
/// mandatory tables are dropped but do not abort the file. The top-level loop
/// also honors a cooperative `run` flag: pass `&AtomicBool` via
/// [`parse_mp4_cancellable`] for early-stop support, or use this entry point
/// when cancellation isn't needed.
pub fn parse_mp4(data: &[u8]) -> Result<MediaFile, BitvueError> {
    parse_mp4_cancellable(data, &std::sync::atomic::AtomicBool::new(true))
}

/// Same as [`parse_mp4`], but the box loop checks `run` at every iteration so
/// a caller can request an early, non-corrupting stop (§5 cancellation model).
pub fn parse_mp4_cancellable(
    data: &[u8],
    run: &std::sync::atomic::AtomicBool,
) -> Result<MediaFile, BitvueError> {
    if data.is_empty() {
        return Err(BitvueError::InvalidData("empty MP4 buffer".to_string()));
    }

    let mut bs = Mp4Bitstream::new(data);
    let file_size = data.len() as u64;
    let mut file = MediaFile::default();
    let mut tracks: Vec<Mp4Track> = Vec::new();
    let mut fragments: Vec<(u32, Vec<FragmentSample>)> = Vec::new();

    let mut pos = 0u64;
    while pos < file_size {
        if !run.load(std::sync::atomic::Ordering::Relaxed) {
            break;
        }
        bs.bitstream_goto_offset(pos);
        let Some(header) = parse_box_header(&mut bs, file_size) else {
            break;
        };

        match &header.box_type {
            b"ftyp" | b"styp" => parse_ftyp(&mut bs, &header, &mut file),
            b"moov" => parse_moov(&mut bs, &header, &mut tracks),
            b"moof" => {
                if let Some((track_id, samples)) = parse_moof(&mut bs, &header) {
                    fragments.push((track_id, samples));
                }
            }
            b"uuid" => {
                if let Some(usertype) = header.usertype {
                    abseil::vlog!(2, "uuid box, vendor subtype {:02x?}", usertype);
                }
            }
            b"mdat" | b"free" | b"skip" | b"pdin" | b"udta" | b"meta" => {
                // Recognized, not structurally interesting to this core.
            }
            _ => {
                abseil::vlog!(2, "skipping unknown box type {}", header.box_type_str());
            }
        }

        jumpy_mp4(&mut bs, &header, None);
        let new_pos = bs.bitstream_get_absolute_byte_offset();
        if new_pos <= pos {
            break; // defensive: never spin on a zero-size/zero-progress box
        }
        pos = new_pos;
    }

    // Fold fragment samples into their owning track (§9 open item resolved),
    // capped at MAX_TOTAL_SAMPLES so a pathological number of tiny moof
    // fragments can't exhaust memory one sample at a time.
    for (track_id, samples) in fragments {
        if let Some(track) = tracks.iter_mut().find(|t| t.track_id == track_id) {
            let room = crate::resource_budget::MAX_TOTAL_SAMPLES
                .saturating_sub(track.fragment_samples.len());
            let accepted = samples.len().min(room);
            track.stsz_sample_count += accepted as u32;
            for s in samples.into_iter().take(accepted) {
                track.fragment_samples.push(s.into());
            }
        }
    }

    for track in &tracks {
        if let Some(mut stream) = track_to_stream(track) {
            apply_fragment_samples(track, &mut stream);
            file.streams.push(stream);
        }
    }

    Ok(file)
}

/// Append fragment-derived samples (offset/size/dts/pts/sync) after the
/// `moov`-derived ones, per the §9 resolution direction.
fn apply_fragment_samples(track: &Mp4Track, stream: &mut MediaStream) {
    for f in &track.fragment_samples {
        stream.sample_offset.push(f.offset);
        stream.sample_size.push(f.size);
        stream.dts_us.push(f.dts.saturating_mul(1_000_000) / track.timescale.max(1) as i64);
        stream.pts_us.push(f.pts.saturating_mul(1_000_000) / track.timescale.max(1) as i64);
        stream.sample_type.push(if f.is_sync {
            stream::SampleType::VideoSync
        } else {
            stream::SampleType::Video
        });
    }
}

fn parse_ftyp(bs: &mut Mp4Bitstream, header: &BoxHeader, file: &mut MediaFile) {
    bs.bitstream_goto_offset(header.payload_offset);
    let brand = bs.read_fourcc();
    file.major_brand = Some(String::from_utf8_lossy(&brand).into_owned());
    bs.skip_bits(32); // minor_version
    while bs.bitstream_get_absolute_byte_offset() + 4 <= header.offset_end {
        let compat = bs.read_fourcc();
        file.compatible_brands
            .push(String::from_utf8_lossy(&compat).into_owned());
    }
}

fn parse_moov(bs: &mut Mp4Bitstream, moov: &BoxHeader, tracks: &mut Vec<Mp4Track>) {
    let mut pos = moov.payload_offset;
    while pos < moov.offset_end {
        bs.bitstream_goto_offset(pos);
        let Some(child) = parse_box_header(bs, bs.len() as u64) else {
            break;
        };
        if &child.box_type == b"trak" {
            let mut track = Mp4Track::default();
            parse_trak(bs, &child, &mut track);
            tracks.push(track);
        }
        jumpy_mp4(bs, &child, Some(moov.offset_end));
        pos = bs.bitstream_get_absolute_byte_offset();
        if pos <= child.offset_start {
            break;
        }
    }
}

/// Parse one `moof` fragment: `mfhd` (ignored beyond presence) plus one or
/// more `traf` (`tfhd`/`tfdt`/`trun`), returning the owning track id and the
/// reconstructed sample quadruples.
fn parse_moof(bs: &mut Mp4Bitstream, moof: &BoxHeader) -> Option<(u32, Vec<FragmentSample>)> {
    let mut pos = moof.payload_offset;
    let mut result: Option<(u32, Vec<FragmentSample>)> = None;
    while pos < moof.offset_end {
        bs.bitstream_goto_offset(pos);
        let Some(child) = parse_box_header(bs, bs.len() as u64) else {
            break;
        };
        if &child.box_type == b"traf" {
            if let Some(r) = parse_traf(bs, &child, moof) {
                result = Some(r);
            }
        }
        jumpy_mp4(bs, &child, Some(moof.offset_end));
        pos = bs.bitstream_get_absolute_byte_offset();
        if pos <= child.offset_start {
            break;
        }
    }
    result
}

#[derive(Default)]
struct TrackFragmentHeader {
    track_id: u32,
    base_data_offset: Option<u64>,
    default_sample_duration: u32,
    default_sample_size: u32,
}

fn parse_traf(
    bs: &mut Mp4Bitstream,
    traf: &BoxHeader,
    moof: &BoxHeader,
) -> Option<(u32, Vec<FragmentSample>)> {
    let mut tfhd = TrackFragmentHeader::default();
    let mut base_decode_time: i64 = 0;
    let mut samples = Vec::new();

    let mut pos = traf.payload_offset;
    while pos < traf.offset_end {
        bs.bitstream_goto_offset(pos);
        let child = parse_box_header(bs, bs.len() as u64)?;
        match &child.box_type {
            b"tfhd" => parse_tfhd(bs, &child, &mut tfhd),
            b"tfdt" => base_decode_time = parse_tfdt(bs, &child),
            b"trun" => {
                let base_offset = tfhd.base_data_offset.unwrap_or(moof.offset_start);
                parse_trun(bs, &child, &tfhd, base_offset, base_decode_time, &mut samples);
            }
            _ => {}
        }
        jumpy_mp4(bs, &child, Some(traf.offset_end));
        pos = bs.bitstream_get_absolute_byte_offset();
        if pos <= child.offset_start {
            break;
        }
    }

    if samples.is_empty() {
        None
    } else {
        Some((tfhd.track_id, samples))
    }
}

fn parse_tfhd(bs: &mut Mp4Bitstream, b: &BoxHeader, out: &mut TrackFragmentHeader) {
    bs.bitstream_goto_offset(b.payload_offset);
    let full = parse_fullbox_header(bs);
    let flags = full.flags;
    out.track_id = bs.read_u32();
    if flags & 0x01 != 0 {
        out.base_data_offset = Some(bs.read_u64());
    }
    if flags & 0x02 != 0 {
        bs.skip_bits(32); // sample_description_index
    }
    if flags & 0x08 != 0 {
        out.default_sample_duration = bs.read_u32();
    }
    if flags & 0x10 != 0 {
        out.default_sample_size = bs.read_u32();
    }
}

fn parse_tfdt(bs: &mut Mp4Bitstream, b: &BoxHeader) -> i64 {
    bs.bitstream_goto_offset(b.payload_offset);
    let full = parse_fullbox_header(bs);
    if full.version == 1 {
        bs.read_u64() as i64
    } else {
        bs.read_u32() as i64
    }
}

fn parse_trun(
    bs: &mut Mp4Bitstream,
    b: &BoxHeader,
    tfhd: &TrackFragmentHeader,
    base_offset: u64,
    base_decode_time: i64,
    out: &mut Vec<FragmentSample>,
) {
    bs.bitstream_goto_offset(b.payload_offset);
    let full = parse_fullbox_header(bs);
    let flags = full.flags;
    let sample_count = bs.read_u32().min(MAX_ENTRY_COUNT);

    let mut data_offset = base_offset;
    if flags & 0x0001 != 0 {
        data_offset = (base_offset as i64 + bs.read_i32() as i64) as u64;
    }
    if flags & 0x0004 != 0 {
        bs.skip_bits(32); // first_sample_flags
    }

    let mut dts = base_decode_time;
    let mut offset = data_offset;
    for i in 0..sample_count {
        let duration = if flags & 0x0100 != 0 {
            bs.read_u32()
        } else {
            tfhd.default_sample_duration
        };
        let size = if flags & 0x0200 != 0 {
            bs.read_u32()
        } else {
            tfhd.default_sample_size
        };
        let mut is_sync = i == 0;
        if flags & 0x0400 != 0 {
            let sample_flags = bs.read_u32();
            let sample_depends_on = (sample_flags >> 24) & 0x3;
            is_sync = sample_depends_on == 2;
        }
        let cto = if flags & 0x0800 != 0 {
            bs.read_i32() as i64
        } else {
            0
        };

        out.push(FragmentSample {
            offset,
            size,
            dts,
            pts: dts + cto,
            is_sync,
        });

        offset += size as u64;
        dts += duration as i64;
    }
}
