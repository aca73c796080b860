//! Track-to-stream converter (component D).
//!
//! Walks a parsed `Mp4Track` and emits a language-neutral `MediaStream`: per
//! sample type/offset/size, DTS/PTS in microseconds, and stream-level
//! metadata. Grounded on `original_source/minivideo/src/demuxer/mp4/mp4_convert.cpp`.

use crate::mp4::sample_table::{HandlerType, Mp4Track, SampleEntryInfo};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamType {
    Video,
    Audio,
    Text,
    Hint,
    TimedMetadata,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleType {
    Video,
    VideoSync,
    Audio,
    Text,
    Other,
}

/// `framerate_num / framerate_base`, in the track's timescale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rational {
    pub num: u32,
    pub base: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamMetadata {
    pub language: Option<String>,
    pub title: Option<String>,
    pub encoder: Option<String>,
    pub pixel_aspect_ratio: Option<(u32, u32)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaStream {
    pub track_id: u32,
    pub stream_type: StreamType,
    pub codec_id: Option<String>,
    pub timescale: u32,
    pub duration_us: i64,

    pub sample_type: Vec<SampleType>,
    pub sample_offset: Vec<u64>,
    pub sample_size: Vec<u32>,
    pub dts_us: Vec<i64>,
    pub pts_us: Vec<i64>,

    pub framerate: Option<Rational>,
    pub width: u16,
    pub height: u16,
    pub metadata: StreamMetadata,
    pub sample_entry: SampleEntryInfo,
}

fn handler_to_stream_type(h: HandlerType) -> StreamType {
    match h {
        HandlerType::Video => StreamType::Video,
        HandlerType::Audio => StreamType::Audio,
        HandlerType::Subtitle => StreamType::Text,
        HandlerType::Hint => StreamType::Hint,
        HandlerType::TimedMetadata => StreamType::TimedMetadata,
        HandlerType::Other => StreamType::Other,
    }
}

/// Expand `stsc` runs into "how many samples in chunk `i` (0-based)", up to
/// `chunk_count` chunks. Ties at a chunk boundary resolve to the run whose
/// `first_chunk` is the largest value not exceeding the chunk number (1-based).
fn samples_per_chunk(stsc: &[crate::mp4::sample_table::ChunkRun], chunk_count: usize) -> Vec<u32> {
    let mut out = Vec::with_capacity(chunk_count);
    if stsc.is_empty() {
        return out;
    }
    for chunk_no in 1..=chunk_count as u32 {
        // stsc is sorted by first_chunk ascending in a conforming file; find
        // the last run whose first_chunk <= chunk_no.
        let mut spc = stsc[0].samples_per_chunk;
        for run in stsc {
            if run.first_chunk <= chunk_no {
                spc = run.samples_per_chunk;
            } else {
                break;
            }
        }
        out.push(spc);
    }
    out
}

/// Convert one track into a `MediaStream`. Returns `None` on a track-fatal
/// condition (missing mandatory table, or inconsistent tables) per §4.C/§7 —
/// the caller drops the track but keeps parsing the rest of the file.
pub fn track_to_stream(track: &Mp4Track) -> Option<MediaStream> {
    if let Err(reason) = track.validate() {
        abseil::vlog!(1, "dropping track {}: {}", track.track_id, reason);
        return None;
    }

    let sample_count = track.sample_count();
    if sample_count == 0 {
        return None;
    }

    let handler = track.handler.unwrap_or(HandlerType::Other);
    let stream_type = handler_to_stream_type(handler);

    // --- sizes ---
    let sample_size: Vec<u32> = if let Some(constant) = track.stsz_constant_size {
        vec![constant; sample_count]
    } else {
        track.stsz_sizes.clone()
    };
    if sample_size.len() != sample_count {
        abseil::vlog!(1, "track {}: stsz size mismatch", track.track_id);
        return None;
    }

    // --- DTS via stts run-walk ---
    let mut dts_us = Vec::with_capacity(sample_count);
    let mut dts_ticks = Vec::with_capacity(sample_count);
    let mut running: i64 = 0;
    for run in &track.stts {
        for _ in 0..run.count {
            if dts_ticks.len() >= sample_count {
                break;
            }
            dts_ticks.push(running);
            running += run.delta;
        }
    }
    while dts_ticks.len() < sample_count {
        dts_ticks.push(running);
        running += 1;
    }
    let timescale = track.timescale.max(1) as i64;
    for t in &dts_ticks {
        dts_us.push(t.saturating_mul(1_000_000) / timescale);
    }

    // --- PTS: dts + ctts offset, expanded per-sample the same way as stts ---
    let mut pts_ticks = dts_ticks.clone();
    if !track.ctts.is_empty() {
        let mut idx = 0usize;
        'outer: for run in &track.ctts {
            for _ in 0..run.count {
                if idx >= sample_count {
                    break 'outer;
                }
                pts_ticks[idx] = dts_ticks[idx] + run.delta;
                idx += 1;
            }
        }
    }
    let pts_us: Vec<i64> = pts_ticks
        .iter()
        .map(|t| t.saturating_mul(1_000_000) / timescale)
        .collect();

    // --- offsets via stsc/stco chunk walk ---
    let spc = samples_per_chunk(&track.stsc, track.stco.len());
    let mut sample_offset = Vec::with_capacity(sample_count);
    let mut sample_idx = 0usize;
    for (chunk_idx, count) in spc.iter().enumerate() {
        let mut offset = track.stco[chunk_idx];
        for _ in 0..*count {
            if sample_idx >= sample_count {
                break;
            }
            sample_offset.push(offset);
            offset += sample_size[sample_idx] as u64;
            sample_idx += 1;
        }
    }
    if sample_offset.len() != sample_count {
        abseil::vlog!(
            1,
            "track {}: stsc/stco produced {} offsets for {} samples",
            track.track_id,
            sample_offset.len(),
            sample_count
        );
        return None;
    }

    // --- sample type / sync flags ---
    let is_video = stream_type == StreamType::Video;
    let sync_set: std::collections::HashSet<u32> = track.stss.iter().copied().collect();
    let mut sample_type = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        let sample_number = (i + 1) as u32; // stss is 1-based
        let is_sync = !track.stss_present || sync_set.contains(&sample_number);
        sample_type.push(match stream_type {
            StreamType::Video if is_sync && is_video => SampleType::VideoSync,
            StreamType::Video => SampleType::Video,
            StreamType::Audio => SampleType::Audio,
            StreamType::Text => SampleType::Text,
            _ => SampleType::Other,
        });
    }

    // --- framerate ---
    let framerate = if sample_count > 0 {
        let base = if track.duration > 0 {
            (track.duration / sample_count as u64).max(1) as u32
        } else if track.mediatime != 0 {
            track.mediatime.unsigned_abs() as u32
        } else {
            1
        };
        Some(Rational {
            num: track.timescale,
            base,
        })
    } else {
        None
    };

    Some(MediaStream {
        track_id: track.track_id,
        stream_type,
        codec_id: track.sample_entry.codec_fourcc.clone(),
        timescale: track.timescale,
        duration_us: (track.duration as i64).saturating_mul(1_000_000) / timescale,
        sample_type,
        sample_offset,
        sample_size,
        dts_us,
        pts_us,
        framerate,
        width: track.sample_entry.width,
        height: track.sample_entry.height,
        metadata: StreamMetadata {
            pixel_aspect_ratio: track.sample_entry.pixel_aspect_ratio,
            ..Default::default()
        },
        sample_entry: track.sample_entry.clone(),
    })
}
