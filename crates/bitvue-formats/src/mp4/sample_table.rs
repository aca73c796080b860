//! Per-track sample table builder (component C).
//!
//! Parses the `stbl` children of a `trak` into an `Mp4Track`, following the
//! field names of `original_source/minivideo/src/demuxer/mp4/mp4_struct.h`
//! (`Mp4Track_t`), re-expressed as owned `Vec`s instead of raw-pointer arrays.

use crate::error::BitvueError;
use crate::mp4::bitstream::Mp4Bitstream;
use crate::mp4::boxes::{jumpy_mp4, parse_box_header, parse_fullbox_header, BoxHeader};
use crate::resource_budget::MAX_ENTRY_COUNT;
use serde::{Deserialize, Serialize};

/// `hdlr` handler type, used to decide how a track is exposed as a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandlerType {
    Video,
    Audio,
    Subtitle,
    TimedMetadata,
    Hint,
    Other,
}

impl HandlerType {
    pub fn from_fourcc(fourcc: &[u8; 4]) -> Self {
        match fourcc {
            b"vide" => HandlerType::Video,
            b"soun" => HandlerType::Audio,
            b"sbtl" | b"subt" | b"text" => HandlerType::Subtitle,
            b"meta" => HandlerType::TimedMetadata,
            b"hint" => HandlerType::Hint,
            _ => HandlerType::Other,
        }
    }
}

/// A `(count, delta)` run as found in `stts`/`ctts`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CountDeltaRun {
    pub count: u32,
    pub delta: i64,
}

/// A `stsc` run: samples `first_chunk..` (1-based, until the next run's
/// `first_chunk`) each contain `samples_per_chunk` samples described by
/// `sample_description_index`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChunkRun {
    pub first_chunk: u32,
    pub samples_per_chunk: u32,
    pub sample_description_index: u32,
}

/// `sdtp` dependency hints, one nibble-pair set per sample.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SampleDependency {
    pub is_leading: u8,
    pub depends_on: u8,
    pub is_depended_on: u8,
    pub has_redundancy: u8,
}

impl SampleDependency {
    pub fn from_byte(b: u8) -> Self {
        Self {
            is_leading: (b >> 6) & 0x3,
            depends_on: (b >> 4) & 0x3,
            is_depended_on: (b >> 2) & 0x3,
            has_redundancy: b & 0x3,
        }
    }
}

/// A parameter-set NAL unit referenced by `avcC`/`hvcC`: its offset+size
/// within the file rather than a copy, matching how the sample tables
/// themselves only ever record offsets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParameterSetRef {
    pub offset: u64,
    pub size: u32,
}

/// Codec configuration extracted from a visual/audio sample entry inside
/// `stsd`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleEntryInfo {
    pub codec_fourcc: Option<String>,
    pub width: u16,
    pub height: u16,
    pub compressor_name: String,
    pub sample_rate: u32,
    pub channel_count: u16,
    pub sps: Vec<ParameterSetRef>,
    pub pps: Vec<ParameterSetRef>,
    /// `pasp` pixel aspect ratio, `(h_spacing, v_spacing)`.
    pub pixel_aspect_ratio: Option<(u32, u32)>,
}

/// One `trun` entry after `tfhd`/`tfdt` defaults have been applied (§9 open
/// item: fragmented-movie sample reconstruction).
#[derive(Debug, Clone, Copy)]
pub struct FragmentSample {
    pub offset: u64,
    pub size: u32,
    pub dts: i64,
    pub pts: i64,
    pub is_sync: bool,
}

/// Everything parsed out of one `trak`'s `stbl` (plus `tkhd`/`mdhd`/`hdlr`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mp4Track {
    pub track_id: u32,
    pub handler: Option<HandlerType>,
    pub timescale: u32,
    pub duration: u64,
    pub mediatime: i64,

    pub stts: Vec<CountDeltaRun>,
    pub ctts: Vec<CountDeltaRun>,
    pub stsc: Vec<ChunkRun>,
    pub stsz_constant_size: Option<u32>,
    pub stsz_sizes: Vec<u32>,
    pub stsz_sample_count: u32,
    pub stco: Vec<u64>,
    /// 1-based sync sample numbers; empty + `stss_present == false` means
    /// "every sample is sync".
    pub stss: Vec<u32>,
    pub stss_present: bool,
    pub sdtp: Vec<SampleDependency>,

    pub sample_entry: SampleEntryInfo,

    #[serde(skip)]
    pub fragment_samples: Vec<FragmentSampleOwned>,
}

/// Serde-friendly (no `i64` signedness surprises) mirror of `FragmentSample`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FragmentSampleOwned {
    pub offset: u64,
    pub size: u32,
    pub dts: i64,
    pub pts: i64,
    pub is_sync: bool,
}

impl From<FragmentSample> for FragmentSampleOwned {
    fn from(f: FragmentSample) -> Self {
        Self {
            offset: f.offset,
            size: f.size,
            dts: f.dts,
            pts: f.pts,
            is_sync: f.is_sync,
        }
    }
}

impl Mp4Track {
    /// Total sample count as given by `stsz` (component-D's authority on
    /// "how many samples does this track have").
    pub fn sample_count(&self) -> usize {
        self.stsz_sample_count as usize
    }

    /// Track-fatal check: every mandatory table present and internally
    /// consistent. Returns the first violated invariant, if any.
    pub fn validate(&self) -> Result<(), BitvueError> {
        if self.stsz_sample_count == 0 && self.stsz_sizes.is_empty() && self.stsz_constant_size.is_none() {
            return Err(BitvueError::InvalidData("missing mandatory stsz".to_string()));
        }
        if self.stsc.is_empty() {
            return Err(BitvueError::InvalidData("missing mandatory stsc".to_string()));
        }
        if self.stco.is_empty() {
            return Err(BitvueError::InvalidData("missing mandatory stco/co64".to_string()));
        }
        let stts_total: u64 = self.stts.iter().map(|r| r.count as u64).sum();
        if !self.stts.is_empty() && stts_total != self.stsz_sample_count as u64 {
            return Err(BitvueError::InvalidData(format!(
                "stts total {} != stsz sample_count {}",
                stts_total, self.stsz_sample_count
            )));
        }
        let mut prev = 0u32;
        for s in &self.stss {
            if *s <= prev {
                return Err(BitvueError::InvalidData(
                    "stss sample numbers not strictly increasing".to_string(),
                ));
            }
            prev = *s;
        }
        Ok(())
    }
}

/// Parse a `trak`'s children (`tkhd`, `mdia`, ...) strictly in the order they
/// appear, filling in `track`. `jumpy_mp4` repositions the cursor after every
/// child so a malformed descendant never traps the walk.
pub fn parse_trak(bs: &mut Mp4Bitstream, trak: &BoxHeader, track: &mut Mp4Track) {
    let mut pos = trak.payload_offset;
    while pos < trak.offset_end {
        bs.bitstream_goto_offset(pos);
        let Some(child) = parse_box_header(bs, bs.len() as u64) else {
            break;
        };
        match &child.box_type {
            b"tkhd" => parse_tkhd(bs, &child, track),
            b"mdia" => parse_mdia(bs, &child, track),
            _ => {}
        }
        jumpy_mp4(bs, &child, Some(trak.offset_end));
        pos = bs.bitstream_get_absolute_byte_offset();
        if pos <= child.offset_start {
            break; // defensive: never spin on a zero-progress box
        }
    }
}

fn parse_tkhd(bs: &mut Mp4Bitstream, tkhd: &BoxHeader, track: &mut Mp4Track) {
    bs.bitstream_goto_offset(tkhd.payload_offset);
    let full = parse_fullbox_header(bs);
    if full.version == 1 {
        bs.skip_bits(64 + 64); // creation_time, modification_time
        track.track_id = bs.read_u32();
        bs.skip_bits(32); // reserved
        bs.skip_bits(64); // duration (v1 is 64-bit; kept in mdhd/mvhd timescale terms)
    } else {
        bs.skip_bits(32 + 32);
        track.track_id = bs.read_u32();
        bs.skip_bits(32);
        bs.skip_bits(32);
    }
}

fn parse_mdia(bs: &mut Mp4Bitstream, mdia: &BoxHeader, track: &mut Mp4Track) {
    let mut pos = mdia.payload_offset;
    while pos < mdia.offset_end {
        bs.bitstream_goto_offset(pos);
        let Some(child) = parse_box_header(bs, bs.len() as u64) else {
            break;
        };
        match &child.box_type {
            b"mdhd" => parse_mdhd(bs, &child, track),
            b"hdlr" => parse_hdlr(bs, &child, track),
            b"minf" => parse_minf(bs, &child, track),
            _ => {}
        }
        jumpy_mp4(bs, &child, Some(mdia.offset_end));
        pos = bs.bitstream_get_absolute_byte_offset();
        if pos <= child.offset_start {
            break;
        }
    }
}

fn parse_mdhd(bs: &mut Mp4Bitstream, mdhd: &BoxHeader, track: &mut Mp4Track) {
    bs.bitstream_goto_offset(mdhd.payload_offset);
    let full = parse_fullbox_header(bs);
    if full.version == 1 {
        bs.skip_bits(64 + 64);
        track.timescale = bs.read_u32();
        track.duration = bs.read_u64();
    } else {
        bs.skip_bits(32 + 32);
        track.timescale = bs.read_u32();
        track.duration = bs.read_u32() as u64;
    }
}

fn parse_hdlr(bs: &mut Mp4Bitstream, hdlr: &BoxHeader, track: &mut Mp4Track) {
    bs.bitstream_goto_offset(hdlr.payload_offset);
    let _full = parse_fullbox_header(bs);
    bs.skip_bits(32); // pre_defined
    let handler_type = bs.read_fourcc();
    track.handler = Some(HandlerType::from_fourcc(&handler_type));
}

fn parse_minf(bs: &mut Mp4Bitstream, minf: &BoxHeader, track: &mut Mp4Track) {
    let mut pos = minf.payload_offset;
    while pos < minf.offset_end {
        bs.bitstream_goto_offset(pos);
        let Some(child) = parse_box_header(bs, bs.len() as u64) else {
            break;
        };
        if &child.box_type == b"stbl" {
            parse_stbl(bs, &child, track);
        }
        jumpy_mp4(bs, &child, Some(minf.offset_end));
        pos = bs.bitstream_get_absolute_byte_offset();
        if pos <= child.offset_start {
            break;
        }
    }
}

/// Parse `stbl`'s children strictly in the order they appear (§4.C).
fn parse_stbl(bs: &mut Mp4Bitstream, stbl: &BoxHeader, track: &mut Mp4Track) {
    let mut pos = stbl.payload_offset;
    while pos < stbl.offset_end {
        bs.bitstream_goto_offset(pos);
        let Some(child) = parse_box_header(bs, bs.len() as u64) else {
            break;
        };
        let result = match &child.box_type {
            b"stsd" => parse_stsd(bs, &child, track),
            b"stts" => parse_stts(bs, &child, track),
            b"ctts" => parse_ctts(bs, &child, track),
            b"stsc" => parse_stsc(bs, &child, track),
            b"stsz" | b"stz2" => parse_stsz(bs, &child, track),
            b"stco" => parse_stco(bs, &child, track),
            b"co64" => parse_co64(bs, &child, track),
            b"stss" => parse_stss(bs, &child, track),
            b"sdtp" => parse_sdtp(bs, &child, track),
            _ => Ok(()),
        };
        if let Err(msg) = result {
            abseil::vlog!(1, "dropping malformed {} box: {}", child.box_type_str(), msg);
        }
        jumpy_mp4(bs, &child, Some(stbl.offset_end));
        pos = bs.bitstream_get_absolute_byte_offset();
        if pos <= child.offset_start {
            break;
        }
    }
}

fn parse_stts(bs: &mut Mp4Bitstream, b: &BoxHeader, track: &mut Mp4Track) -> Result<(), BitvueError> {
    bs.bitstream_goto_offset(b.payload_offset);
    let _full = parse_fullbox_header(bs);
    let entry_count = bs.read_u32().min(MAX_ENTRY_COUNT);
    for _ in 0..entry_count {
        let count = bs.read_u32();
        let delta = bs.read_u32() as i64;
        track.stts.push(CountDeltaRun { count, delta });
    }
    Ok(())
}

fn parse_ctts(bs: &mut Mp4Bitstream, b: &BoxHeader, track: &mut Mp4Track) -> Result<(), BitvueError> {
    bs.bitstream_goto_offset(b.payload_offset);
    let full = parse_fullbox_header(bs);
    let entry_count = bs.read_u32().min(MAX_ENTRY_COUNT);
    for _ in 0..entry_count {
        let count = bs.read_u32();
        let raw = bs.read_u32();
        let delta = if full.version >= 1 { raw as i32 as i64 } else { raw as i64 };
        track.ctts.push(CountDeltaRun { count, delta });
    }
    Ok(())
}

fn parse_stsc(bs: &mut Mp4Bitstream, b: &BoxHeader, track: &mut Mp4Track) -> Result<(), BitvueError> {
    bs.bitstream_goto_offset(b.payload_offset);
    let _full = parse_fullbox_header(bs);
    let entry_count = bs.read_u32().min(MAX_ENTRY_COUNT);
    for _ in 0..entry_count {
        let first_chunk = bs.read_u32();
        let samples_per_chunk = bs.read_u32();
        let sample_description_index = bs.read_u32();
        track.stsc.push(ChunkRun {
            first_chunk,
            samples_per_chunk,
            sample_description_index,
        });
    }
    Ok(())
}

fn parse_stsz(bs: &mut Mp4Bitstream, b: &BoxHeader, track: &mut Mp4Track) -> Result<(), BitvueError> {
    bs.bitstream_goto_offset(b.payload_offset);
    let _full = parse_fullbox_header(bs);
    if b.is_type(b"stz2") {
        bs.skip_bits(24); // reserved
        let field_size = bs.read_u8();
        let sample_count = bs.read_u32();
        track.stsz_sample_count = sample_count;
        for _ in 0..sample_count.min(MAX_ENTRY_COUNT) {
            let size = match field_size {
                4 => {
                    let byte = bs.next_bits(8) as u8;
                    bs.skip_bits(4);
                    ((byte >> 4) & 0xf) as u32
                }
                8 => bs.read_u8() as u32,
                16 => bs.read_u16() as u32,
                _ => bs.read_u8() as u32,
            };
            track.stsz_sizes.push(size);
        }
        return Ok(());
    }

    let sample_size = bs.read_u32();
    let sample_count = bs.read_u32();
    track.stsz_sample_count = sample_count;
    if sample_size != 0 {
        track.stsz_constant_size = Some(sample_size);
    } else {
        for _ in 0..sample_count.min(MAX_ENTRY_COUNT) {
            track.stsz_sizes.push(bs.read_u32());
        }
    }
    Ok(())
}

fn parse_stco(bs: &mut Mp4Bitstream, b: &BoxHeader, track: &mut Mp4Track) -> Result<(), BitvueError> {
    bs.bitstream_goto_offset(b.payload_offset);
    let _full = parse_fullbox_header(bs);
    let entry_count = bs.read_u32().min(MAX_ENTRY_COUNT);
    for _ in 0..entry_count {
        track.stco.push(bs.read_u32() as u64);
    }
    Ok(())
}

fn parse_co64(bs: &mut Mp4Bitstream, b: &BoxHeader, track: &mut Mp4Track) -> Result<(), BitvueError> {
    bs.bitstream_goto_offset(b.payload_offset);
    let _full = parse_fullbox_header(bs);
    let entry_count = bs.read_u32().min(MAX_ENTRY_COUNT);
    for _ in 0..entry_count {
        track.stco.push(bs.read_u64());
    }
    Ok(())
}

fn parse_stss(bs: &mut Mp4Bitstream, b: &BoxHeader, track: &mut Mp4Track) -> Result<(), BitvueError> {
    bs.bitstream_goto_offset(b.payload_offset);
    let _full = parse_fullbox_header(bs);
    let entry_count = bs.read_u32().min(MAX_ENTRY_COUNT);
    track.stss_present = true;
    for _ in 0..entry_count {
        track.stss.push(bs.read_u32());
    }
    Ok(())
}

fn parse_sdtp(bs: &mut Mp4Bitstream, b: &BoxHeader, track: &mut Mp4Track) -> Result<(), BitvueError> {
    bs.bitstream_goto_offset(b.payload_offset);
    let _full = parse_fullbox_header(bs);
    let n = track.stsz_sample_count.max(1) as usize;
    let available = (b.offset_end - bs.bitstream_get_absolute_byte_offset()) as usize;
    for _ in 0..n.min(available) {
        track.sdtp.push(SampleDependency::from_byte(bs.read_u8()));
    }
    Ok(())
}

/// `stsd`: discover the codec via the visual/audio sample entry, and dig out
/// `avcC`/`hvcC` parameter sets, `pasp`, and basic sample-entry metadata.
fn parse_stsd(bs: &mut Mp4Bitstream, b: &BoxHeader, track: &mut Mp4Track) -> Result<(), BitvueError> {
    bs.bitstream_goto_offset(b.payload_offset);
    let _full = parse_fullbox_header(bs);
    let entry_count = bs.read_u32();
    if entry_count == 0 {
        return Ok(());
    }

    let entry_start = bs.bitstream_get_absolute_byte_offset();
    let entry_size = bs.read_u32() as u64;
    let codec = bs.read_fourcc();
    track.sample_entry.codec_fourcc = Some(String::from_utf8_lossy(&codec).into_owned());

    let is_visual = matches!(
        track.handler,
        Some(HandlerType::Video) | None
    );
    let entry_end = entry_start + entry_size;

    if is_visual && entry_end - bs.bitstream_get_absolute_byte_offset() >= 70 {
        bs.skip_bits(8 * 6); // reserved
        bs.skip_bits(16); // data_reference_index
        bs.skip_bits(16); // pre_defined
        bs.skip_bits(16); // reserved
        bs.skip_bits(8 * 12); // pre_defined[3]
        track.sample_entry.width = bs.read_u16();
        track.sample_entry.height = bs.read_u16();
        bs.skip_bits(32); // horizresolution
        bs.skip_bits(32); // vertresolution
        bs.skip_bits(32); // reserved
        bs.skip_bits(16); // frame_count
        let name_len = bs.read_u8().min(31);
        let name_bytes = bs.read_bytes(31);
        track.sample_entry.compressor_name =
            String::from_utf8_lossy(&name_bytes[..name_len as usize]).into_owned();
        bs.skip_bits(16); // depth
        bs.skip_bits(16); // pre_defined
    } else if !is_visual && entry_end - bs.bitstream_get_absolute_byte_offset() >= 20 {
        bs.skip_bits(8 * 6);
        bs.skip_bits(16); // data_reference_index
        bs.skip_bits(32 * 2); // reserved
        track.sample_entry.channel_count = bs.read_u16();
        bs.skip_bits(16); // samplesize
        bs.skip_bits(32); // pre_defined + reserved
        track.sample_entry.sample_rate = bs.read_u32() >> 16;
    }

    // Walk config sub-boxes (avcC/hvcC/pasp/...) until the sample entry ends.
    let mut pos = bs.bitstream_get_absolute_byte_offset();
    while pos < entry_end {
        bs.bitstream_goto_offset(pos);
        let Some(child) = parse_box_header(bs, bs.len() as u64) else {
            break;
        };
        match &child.box_type {
            b"avcC" => parse_avcc(bs, &child, track),
            b"hvcC" => parse_hvcc(bs, &child, track),
            b"pasp" => {
                let h = bs.read_u32();
                let v = bs.read_u32();
                track.sample_entry.pixel_aspect_ratio = Some((h, v));
            }
            _ => {}
        }
        jumpy_mp4(bs, &child, Some(entry_end));
        pos = bs.bitstream_get_absolute_byte_offset();
        if pos <= child.offset_start {
            break;
        }
    }
    Ok(())
}

/// `avcC`: AVCDecoderConfigurationRecord. Extracts SPS/PPS NAL offset+size.
fn parse_avcc(bs: &mut Mp4Bitstream, b: &BoxHeader, track: &mut Mp4Track) {
    bs.bitstream_goto_offset(b.payload_offset);
    bs.skip_bits(8); // configurationVersion
    bs.skip_bits(8); // AVCProfileIndication
    bs.skip_bits(8); // profile_compatibility
    bs.skip_bits(8); // AVCLevelIndication
    bs.skip_bits(5); // reserved
    bs.skip_bits(3); // lengthSizeMinusOne
    bs.skip_bits(3); // reserved
    let num_sps = bs.read_bits(5);
    for _ in 0..num_sps {
        let len = bs.read_u16() as u32;
        let offset = bs.bitstream_get_absolute_byte_offset();
        track.sample_entry.sps.push(ParameterSetRef { offset, size: len });
        bs.bitstream_goto_offset(offset + len as u64);
    }
    let num_pps = bs.read_u8() as u32;
    for _ in 0..num_pps {
        let len = bs.read_u16() as u32;
        let offset = bs.bitstream_get_absolute_byte_offset();
        track.sample_entry.pps.push(ParameterSetRef { offset, size: len });
        bs.bitstream_goto_offset(offset + len as u64);
    }
}

/// `hvcC`: HEVCDecoderConfigurationRecord. Out-of-scope codec (§1), but the
/// box is still recognized at the container level so parsing doesn't stall
/// on it (`jumpy_mp4` needs a parsed header either way).
fn parse_hvcc(bs: &mut Mp4Bitstream, b: &BoxHeader, track: &mut Mp4Track) {
    bs.bitstream_goto_offset(b.payload_offset);
    track.sample_entry.codec_fourcc = track
        .sample_entry
        .codec_fourcc
        .clone()
        .or_else(|| Some("hvcC".to_string()));
}
