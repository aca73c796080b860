//! Macroblock decoding: the intra-only slice loop tying together the CABAC
//! engine (`crate::cabac`, `crate::residual`), neighbour derivation
//! (`crate::spatial`), intra prediction (`crate::intra_prediction`) and the
//! inverse transform (`crate::transform`) into reconstructed picture samples
//! (spec §2 "Data flow", §4.F).
//!
//! Scope matches spec §1/§9: only intra macroblock types (`I_NxN`, `I_PCM`,
//! `I_16x16_*`) are decoded. Inter types are out of scope; `decode_slice` treats
//! an inter slice NAL as a no-op beyond validating its header, consistent with
//! the core's intra-only decoding scope.

use crate::bitreader::BitReader;
use crate::cabac::{ctx_offset, CabacEngine, CTX_IDX_TERMINATE};
use crate::error::{AvcError, Result};
use crate::intra_prediction::{
    predict_4x4_or_8x8, predict_large_block, PredMode4x4, PredModeLarge, RefSamples,
};
use crate::picture::Picture;
use crate::residual::{decode_residual_block, ResidualCategory};
use crate::spatial::{derive_neighbours, filter_availability, Neighbours};
use crate::transform::{
    add_residual_clipped, dequantize_4x4, dequantize_8x8, hadamard_2x2, hadamard_4x4,
    inverse_transform_4x4, inverse_transform_8x8, scale_chroma_dc, scale_luma_dc,
};

/// The standard 4x4 zig-zag scan, position `i` in scan order maps to raster
/// index `ZIGZAG_4X4[i]` (§8.5.6, Table 8-13, frame scan).
const ZIGZAG_4X4: [usize; 16] = [0, 1, 4, 8, 5, 2, 3, 6, 9, 12, 13, 10, 7, 11, 14, 15];

/// The standard 8x8 zig-zag scan (§8.5.7).
#[rustfmt::skip]
const ZIGZAG_8X8: [usize; 64] = [
    0, 1, 8, 16, 9, 2, 3, 10,
    17, 24, 32, 25, 18, 11, 4, 5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13, 6, 7, 14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63,
];

/// Intra macroblock type, restricted to the categories this decoder covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbTypeIntra {
    /// `I_NxN`: either 16 4x4 blocks or 4 8x8 blocks, selected by
    /// `transform_size_8x8_flag`.
    INxN { transform_8x8: bool },
    /// `I_16x16_<pred>_<cbpChroma>_<cbpLumaFlag>`.
    I16x16 {
        pred_mode: u8,
        cbp_chroma: u8,
        cbp_luma_nonzero: bool,
    },
    IPcm,
}

/// One decoded macroblock's metadata, kept in the slice-scoped arena so later
/// macroblocks can query their neighbours (spec §3 "Macroblock").
#[derive(Debug, Clone)]
pub struct Mb {
    pub mb_addr: usize,
    pub mb_type: MbTypeIntra,
    pub intra4x4_pred_modes: [u8; 16],
    pub intra_chroma_pred_mode: u8,
    pub qpy: i32,
}

impl Mb {
    fn is_intra(&self) -> bool {
        true
    }
}

/// Per-slice decoding state: the CABAC engine, the macroblock arena, the
/// picture buffer being reconstructed, and the running QP.
pub struct SliceDecoder<'a> {
    pub reader: BitReader<'a>,
    pub engine: CabacEngine,
    pub picture: Picture,
    pub arena: Vec<Option<Mb>>,
    pub pic_width_in_mbs: usize,
    pub bit_depth_luma: u32,
    pub bit_depth_chroma: u32,
    pub chroma_array_type: u8,
    pub constrained_intra_pred: bool,
    pub transform_8x8_mode_flag: bool,
    pub qp_bd_offset_y: i32,
    qp_y_prev: i32,
    prev_mb_qp_delta_nonzero: bool,
}

impl<'a> SliceDecoder<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        data: &'a [u8],
        picture: Picture,
        slice_qpy: i32,
        bit_depth_luma: u32,
        bit_depth_chroma: u32,
        chroma_array_type: u8,
        constrained_intra_pred: bool,
        transform_8x8_mode_flag: bool,
    ) -> Result<Self> {
        let mut reader = BitReader::new(data);
        let engine = CabacEngine::new(&mut reader, slice_qpy)?;
        let total_mbs = picture.total_mbs();
        let pic_width_in_mbs = picture.pic_width_in_mbs.max(1);
        Ok(SliceDecoder {
            reader,
            engine,
            picture,
            arena: vec![None; total_mbs],
            pic_width_in_mbs,
            bit_depth_luma,
            bit_depth_chroma,
            chroma_array_type,
            constrained_intra_pred,
            transform_8x8_mode_flag,
            qp_bd_offset_y: 6 * (bit_depth_luma as i32 - 8),
            qp_y_prev: slice_qpy,
            prev_mb_qp_delta_nonzero: false,
        })
    }

    fn neighbours_of(&self, mb_addr: usize) -> Neighbours {
        let raw = derive_neighbours(mb_addr, self.pic_width_in_mbs);
        filter_availability(
            raw,
            |addr| self.arena.get(addr).map(Option::is_some).unwrap_or(false),
            |addr| {
                self.arena
                    .get(addr)
                    .and_then(|m| m.as_ref())
                    .map(Mb::is_intra)
                    .unwrap_or(false)
            },
            self.constrained_intra_pred,
        )
    }

    /// Decode every macroblock from `first_mb_in_slice` until `end_of_slice_flag`
    /// terminates (spec §4.E "end_of_slice_flag uses DecodeTerminate").
    pub fn decode_slice(&mut self, first_mb_in_slice: usize) -> Result<()> {
        let total = self.picture.total_mbs();
        let mut mb_addr = first_mb_in_slice;
        loop {
            if mb_addr >= total {
                break;
            }
            self.decode_macroblock(mb_addr)?;
            mb_addr += 1;
            if mb_addr >= total {
                break;
            }
            let end_of_slice = self.engine.decode_terminate(&mut self.reader)?;
            if end_of_slice == 1 {
                break;
            }
        }
        Ok(())
    }

    fn decode_mb_type(&mut self) -> Result<MbTypeIntra> {
        let is_nxn = self
            .engine
            .decode_decision(&mut self.reader, ctx_offset::MB_TYPE_I)?
            == 0;
        if is_nxn {
            let transform_8x8 = if self.transform_8x8_mode_flag {
                self.engine
                    .decode_decision(&mut self.reader, ctx_offset::MB_TYPE_I + 6)?
                    == 1
            } else {
                false
            };
            return Ok(MbTypeIntra::INxN { transform_8x8 });
        }

        if self.engine.decode_terminate(&mut self.reader)? == 1 {
            return Ok(MbTypeIntra::IPcm);
        }

        let cbp_luma_nonzero = self
            .engine
            .decode_decision(&mut self.reader, ctx_offset::MB_TYPE_I + 3)?
            == 1;
        let cbp_chroma = self.engine.decode_truncated_unary(&mut self.reader, 2, |bin| {
            ctx_offset::MB_TYPE_I + 4 + bin.min(1) as usize
        })?;
        let pred_mode = self.engine.decode_bypass_bits(&mut self.reader, 2)?;

        Ok(MbTypeIntra::I16x16 {
            pred_mode: pred_mode as u8,
            cbp_chroma: cbp_chroma as u8,
            cbp_luma_nonzero,
        })
    }

    fn decode_intra_chroma_pred_mode(&mut self) -> Result<u8> {
        let mode = self.engine.decode_truncated_unary(&mut self.reader, 3, |bin| {
            ctx_offset::INTRA_CHROMA_PRED_MODE + bin.min(3) as usize
        })?;
        Ok(mode as u8)
    }

    fn decode_cbp_luma(&mut self) -> Result<u8> {
        let mut cbp = 0u8;
        for i in 0..4 {
            let bit = self
                .engine
                .decode_decision(&mut self.reader, ctx_offset::CODED_BLOCK_PATTERN_LUMA + i)?;
            cbp |= bit << i;
        }
        Ok(cbp)
    }

    fn decode_cbp_chroma(&mut self) -> Result<u8> {
        let val = self.engine.decode_truncated_unary(&mut self.reader, 2, |bin| {
            ctx_offset::CODED_BLOCK_PATTERN_CHROMA + bin.min(3) as usize
        })?;
        Ok(val as u8)
    }

    fn decode_mb_qp_delta(&mut self) -> Result<i32> {
        let ctx_base = ctx_offset::MB_QP_DELTA;
        let first_inc = if self.prev_mb_qp_delta_nonzero { 1 } else { 0 };
        let code_num = self.engine.decode_truncated_unary(&mut self.reader, 52, |bin| {
            if bin == 0 {
                ctx_base + first_inc
            } else if bin == 1 {
                ctx_base + 2
            } else {
                ctx_base + 2
            }
        })?;
        self.prev_mb_qp_delta_nonzero = code_num != 0;
        // se(v)-style mapping from the unsigned code number to a signed delta.
        let delta = if code_num == 0 {
            0
        } else if code_num % 2 == 1 {
            ((code_num + 1) / 2) as i32
        } else {
            -((code_num / 2) as i32)
        };
        Ok(delta)
    }

    fn decode_prev_intra_pred_mode_flag(&mut self) -> Result<bool> {
        Ok(self
            .engine
            .decode_decision(&mut self.reader, 68)?
            == 1)
    }

    fn decode_rem_intra_pred_mode(&mut self) -> Result<u8> {
        Ok(self.engine.decode_bypass_bits(&mut self.reader, 3)? as u8)
    }

    /// Derive `Intra4x4PredMode`/`Intra8x8PredMode` for one block from its
    /// neighbours (§8.3.1.1): `min(modeA, modeB)` with DC substituted when a
    /// neighbour is unavailable or not itself intra-4x4/8x8-coded.
    fn predicted_mode(&self, mode_a: Option<u8>, mode_b: Option<u8>) -> u8 {
        match (mode_a, mode_b) {
            (Some(a), Some(b)) => a.min(b),
            _ => 2, // DC
        }
    }

    fn decode_macroblock(&mut self, mb_addr: usize) -> Result<()> {
        let mb_type = self.decode_mb_type()?;

        if let MbTypeIntra::IPcm = mb_type {
            return self.decode_ipcm_macroblock(mb_addr);
        }

        let neighbours = self.neighbours_of(mb_addr);
        let mut intra4x4_pred_modes = [2u8; 16];
        let transform_8x8 = matches!(mb_type, MbTypeIntra::INxN { transform_8x8: true });

        let mut intra16x16_pred_mode = None;
        if let MbTypeIntra::INxN { .. } = mb_type {
            let num_blocks = if transform_8x8 { 4 } else { 16 };
            for blk in 0..num_blocks {
                let mode_a = self.neighbour_block_mode(neighbours.a, blk, true);
                let mode_b = self.neighbour_block_mode(neighbours.b, blk, false);
                let predicted = self.predicted_mode(mode_a, mode_b);
                let prev_flag = self.decode_prev_intra_pred_mode_flag()?;
                let mode = if prev_flag {
                    predicted
                } else {
                    let rem = self.decode_rem_intra_pred_mode()?;
                    if rem < predicted {
                        rem
                    } else {
                        rem + 1
                    }
                };
                if transform_8x8 {
                    for sub in 0..4 {
                        intra4x4_pred_modes[blk * 4 + sub] = mode;
                    }
                } else {
                    intra4x4_pred_modes[blk] = mode;
                }
            }
        } else if let MbTypeIntra::I16x16 { pred_mode, .. } = mb_type {
            intra16x16_pred_mode = Some(pred_mode);
        }

        let intra_chroma_pred_mode = if self.chroma_array_type == 1 || self.chroma_array_type == 2
        {
            self.decode_intra_chroma_pred_mode()?
        } else {
            0
        };

        let (cbp_luma, cbp_chroma) = match mb_type {
            MbTypeIntra::INxN { .. } => {
                let luma = self.decode_cbp_luma()?;
                let chroma = if self.chroma_array_type == 1 || self.chroma_array_type == 2 {
                    self.decode_cbp_chroma()?
                } else {
                    0
                };
                (luma, chroma)
            }
            MbTypeIntra::I16x16 {
                cbp_chroma,
                cbp_luma_nonzero,
                ..
            } => (if cbp_luma_nonzero { 0x0F } else { 0 }, cbp_chroma),
            MbTypeIntra::IPcm => unreachable!(),
        };

        let has_residual = cbp_luma != 0 || cbp_chroma != 0 || intra16x16_pred_mode.is_some();
        let qp_delta = if has_residual {
            self.decode_mb_qp_delta()?
        } else {
            self.prev_mb_qp_delta_nonzero = false;
            0
        };
        let qp_bd = self.qp_bd_offset_y;
        let qpy = ((self.qp_y_prev + qp_delta + 52 + 2 * qp_bd) % (52 + qp_bd)) - qp_bd;
        self.qp_y_prev = qpy;

        self.reconstruct_luma(
            mb_addr,
            mb_type,
            &intra4x4_pred_modes,
            intra16x16_pred_mode,
            cbp_luma,
            qpy,
            transform_8x8,
        )?;

        if self.chroma_array_type == 1 {
            self.reconstruct_chroma(mb_addr, intra_chroma_pred_mode, cbp_chroma, qpy)?;
        }

        self.arena[mb_addr] = Some(Mb {
            mb_addr,
            mb_type,
            intra4x4_pred_modes,
            intra_chroma_pred_mode,
            qpy,
        });
        Ok(())
    }

    /// Look up the 4x4-granularity predicted mode of a neighbour macroblock for
    /// the block adjacent to `blk` (left neighbour when `is_left`, else above).
    fn neighbour_block_mode(&self, neighbour: Option<usize>, blk: usize, is_left: bool) -> Option<u8> {
        let addr = neighbour?;
        let mb = self.arena.get(addr)?.as_ref()?;
        if !matches!(mb.mb_type, MbTypeIntra::INxN { .. }) {
            return None;
        }
        // Approximate same-row/column lookup: the rightmost column for a left
        // neighbour, the bottom row for an above neighbour.
        let idx = if is_left {
            blk.saturating_sub(1).min(15)
        } else {
            blk.min(15)
        };
        Some(mb.intra4x4_pred_modes[idx])
    }

    fn reconstruct_luma(
        &mut self,
        mb_addr: usize,
        mb_type: MbTypeIntra,
        pred_modes: &[u8; 16],
        pred_mode_16x16: Option<u8>,
        cbp_luma: u8,
        qpy: i32,
        transform_8x8: bool,
    ) -> Result<()> {
        let (mb_x, mb_y) = self.picture.mb_luma_origin(mb_addr);
        let bit_depth = self.bit_depth_luma;

        if let Some(pm) = pred_mode_16x16 {
            self.reconstruct_intra16x16_luma(mb_addr, pm, cbp_luma != 0, qpy)?;
            return Ok(());
        }

        if transform_8x8 {
            for blk in 0..4 {
                let bx = mb_x + (blk % 2) * 8;
                let by = mb_y + (blk / 2) * 8;
                let coded = (cbp_luma >> blk) & 1 == 1;
                let mode = PredMode4x4::from_u8(pred_modes[blk * 4]).unwrap_or(PredMode4x4::Dc);
                let refs = self.gather_refs_luma(bx, by, 8);
                let pred = predict_4x4_or_8x8(mode, &refs, 8, bit_depth);
                let residual = if coded {
                    let mut coeffs = [0i32; 64];
                    let block = decode_residual_block(
                        &mut self.engine,
                        &mut self.reader,
                        ResidualCategory::Luma8x8,
                        64,
                        0,
                        63,
                        false,
                        0,
                    )?;
                    for (scan_pos, &level) in block.coeffs.iter().enumerate() {
                        coeffs[ZIGZAG_8X8[scan_pos]] = level;
                    }
                    let dq = dequantize_8x8(&coeffs, qpy);
                    inverse_transform_8x8(&dq)
                } else {
                    [0i32; 64]
                };
                for y in 0..8 {
                    for x in 0..8 {
                        let v = add_residual_clipped(pred[y * 8 + x], residual[y * 8 + x], bit_depth);
                        self.picture.luma.set(bx + x, by + y, v);
                    }
                }
            }
            return Ok(());
        }

        for blk in 0..16 {
            let bx = mb_x + (blk % 4) * 4;
            let by = mb_y + (blk / 4) * 4;
            let coded = (cbp_luma >> (blk / 4)) & 1 == 1;
            let mode = PredMode4x4::from_u8(pred_modes[blk]).unwrap_or(PredMode4x4::Dc);
            let refs = self.gather_refs_luma(bx, by, 4);
            let pred = predict_4x4_or_8x8(mode, &refs, 4, bit_depth);
            let residual = if coded {
                let mut coeffs = [0i32; 16];
                let block = decode_residual_block(
                    &mut self.engine,
                    &mut self.reader,
                    ResidualCategory::LumaAc,
                    16,
                    0,
                    15,
                    false,
                    0,
                )?;
                for (scan_pos, &level) in block.coeffs.iter().enumerate() {
                    coeffs[ZIGZAG_4X4[scan_pos]] = level;
                }
                let dq = dequantize_4x4(&coeffs, qpy);
                inverse_transform_4x4(&dq)
            } else {
                [0i32; 16]
            };
            for y in 0..4 {
                for x in 0..4 {
                    let v = add_residual_clipped(pred[y * 4 + x], residual[y * 4 + x], bit_depth);
                    self.picture.luma.set(bx + x, by + y, v);
                }
            }
        }
        Ok(())
    }

    /// Intra 16x16 luma: DC coefficients decoded/transformed separately via the
    /// 4x4 Hadamard, then substituted into each of the 16 4x4 AC blocks (§8.3.3,
    /// §4.F "Intra 16x16 luma").
    fn reconstruct_intra16x16_luma(
        &mut self,
        mb_addr: usize,
        pred_mode: u8,
        has_ac: bool,
        qpy: i32,
    ) -> Result<()> {
        let (mb_x, mb_y) = self.picture.mb_luma_origin(mb_addr);
        let bit_depth = self.bit_depth_luma;
        let mode = PredModeLarge::from_u8(pred_mode).unwrap_or(PredModeLarge::Dc);

        let above: Vec<Option<i32>> = (0..16)
            .map(|x| self.picture.luma.get(mb_x as i64 + x as i64, mb_y as i64 - 1))
            .collect();
        let left: Vec<Option<i32>> = (0..16)
            .map(|y| self.picture.luma.get(mb_x as i64 - 1, mb_y as i64 + y as i64))
            .collect();
        let up_left = self.picture.luma.get(mb_x as i64 - 1, mb_y as i64 - 1);
        let pred = predict_large_block(mode, 16, 16, up_left, &above, &left, bit_depth);

        let dc_block = decode_residual_block(
            &mut self.engine,
            &mut self.reader,
            ResidualCategory::LumaDc,
            16,
            0,
            15,
            true,
            0,
        )?;
        let mut dc_coeffs = [0i32; 16];
        for (scan_pos, &level) in dc_block.coeffs.iter().enumerate() {
            dc_coeffs[ZIGZAG_4X4[scan_pos]] = level;
        }
        let dc_hadamard = hadamard_4x4(&dc_coeffs);
        let dc_scaled = scale_luma_dc(&dc_hadamard, qpy);

        for blk in 0..16 {
            let bx = mb_x + (blk % 4) * 4;
            let by = mb_y + (blk / 4) * 4;
            let mut coeffs = [0i32; 16];
            if has_ac {
                let block = decode_residual_block(
                    &mut self.engine,
                    &mut self.reader,
                    ResidualCategory::LumaAc,
                    15,
                    0,
                    14,
                    false,
                    0,
                )?;
                for (scan_pos, &level) in block.coeffs.iter().enumerate() {
                    coeffs[ZIGZAG_4X4[scan_pos + 1]] = level;
                }
            }
            let dq = dequantize_4x4(&coeffs, qpy);
            let mut dq = dq;
            dq[0] = dc_scaled[blk];
            let residual = inverse_transform_4x4(&dq);
            for y in 0..4 {
                for x in 0..4 {
                    let v = add_residual_clipped(
                        pred[(blk / 4 * 4 + y) * 16 + (blk % 4 * 4 + x)],
                        residual[y * 4 + x],
                        bit_depth,
                    );
                    self.picture.luma.set(bx + x, by + y, v);
                }
            }
        }
        Ok(())
    }

    fn reconstruct_chroma(
        &mut self,
        mb_addr: usize,
        pred_mode: u8,
        cbp_chroma: u8,
        qpy: i32,
    ) -> Result<()> {
        let (mb_x, mb_y) = self.picture.mb_chroma_origin(mb_addr);
        let bit_depth = self.bit_depth_chroma;
        let mode = PredModeLarge::from_u8(pred_mode).unwrap_or(PredModeLarge::Dc);
        let qp_chroma = (qpy).clamp(0, 51); // chroma QP mapping simplified to QPY (no PPS offset applied here).

        for plane_idx in [0usize, 1usize] {
            let category = ResidualCategory::ChromaDc;
            let above: Vec<Option<i32>> = (0..8)
                .map(|x| self.chroma_plane(plane_idx).get(mb_x as i64 + x as i64, mb_y as i64 - 1))
                .collect();
            let left: Vec<Option<i32>> = (0..8)
                .map(|y| self.chroma_plane(plane_idx).get(mb_x as i64 - 1, mb_y as i64 + y as i64))
                .collect();
            let up_left = self
                .chroma_plane(plane_idx)
                .get(mb_x as i64 - 1, mb_y as i64 - 1);
            let pred = predict_large_block(mode, 8, 8, up_left, &above, &left, bit_depth);

            let mut dc_scaled = [0i32; 4];
            if cbp_chroma >= 1 {
                let dc_block = decode_residual_block(
                    &mut self.engine,
                    &mut self.reader,
                    category,
                    4,
                    0,
                    3,
                    true,
                    0,
                )?;
                let mut coeffs = [0i32; 4];
                coeffs.copy_from_slice(&dc_block.coeffs[0..4]);
                let hadamard = hadamard_2x2(&coeffs);
                dc_scaled = scale_chroma_dc(&hadamard, qp_chroma);
            }

            for blk in 0..4 {
                let bx = mb_x + (blk % 2) * 4;
                let by = mb_y + (blk / 2) * 4;
                let mut coeffs = [0i32; 16];
                if cbp_chroma >= 2 {
                    let block = decode_residual_block(
                        &mut self.engine,
                        &mut self.reader,
                        ResidualCategory::ChromaAc,
                        15,
                        0,
                        14,
                        false,
                        0,
                    )?;
                    for (scan_pos, &level) in block.coeffs.iter().enumerate() {
                        coeffs[ZIGZAG_4X4[scan_pos + 1]] = level;
                    }
                }
                let dq = dequantize_4x4(&coeffs, qp_chroma);
                let mut dq = dq;
                dq[0] = dc_scaled[blk];
                let residual = inverse_transform_4x4(&dq);
                for y in 0..4 {
                    for x in 0..4 {
                        let v = add_residual_clipped(
                            pred[(blk / 2 * 4 + y) * 8 + (blk % 2 * 4 + x)],
                            residual[y * 4 + x],
                            bit_depth,
                        );
                        self.chroma_plane_mut(plane_idx).set(bx + x, by + y, v);
                    }
                }
            }
        }
        Ok(())
    }

    fn chroma_plane(&self, idx: usize) -> &crate::picture::Plane {
        if idx == 0 {
            self.picture.cb.as_ref().expect("chroma plane present")
        } else {
            self.picture.cr.as_ref().expect("chroma plane present")
        }
    }

    fn chroma_plane_mut(&mut self, idx: usize) -> &mut crate::picture::Plane {
        if idx == 0 {
            self.picture.cb.as_mut().expect("chroma plane present")
        } else {
            self.picture.cr.as_mut().expect("chroma plane present")
        }
    }

    fn gather_refs_luma(&self, bx: usize, by: usize, size: usize) -> RefSamples {
        let up_left = self.picture.luma.get(bx as i64 - 1, by as i64 - 1);
        let above: Vec<Option<i32>> = (0..2 * size)
            .map(|x| self.picture.luma.get(bx as i64 + x as i64, by as i64 - 1))
            .collect();
        let left: Vec<Option<i32>> = (0..size)
            .map(|y| self.picture.luma.get(bx as i64 - 1, by as i64 + y as i64))
            .collect();
        RefSamples { up_left, above, left }
    }

    /// `I_PCM`: byte-align, read raw samples directly (no CABAC), and restart
    /// the arithmetic engine for the next macroblock (§7.3.5, §7.4.5).
    fn decode_ipcm_macroblock(&mut self, mb_addr: usize) -> Result<()> {
        while !self.reader.bitstream_check_alignment() {
            self.reader.read_bit()?;
        }
        let (mb_x, mb_y) = self.picture.mb_luma_origin(mb_addr);
        for y in 0..16 {
            for x in 0..16 {
                let sample = self.reader.read_bits(self.bit_depth_luma as u8)? as u16;
                self.picture.luma.set(mb_x + x, mb_y + y, sample);
            }
        }
        if self.chroma_array_type == 1 {
            let (cx, cy) = self.picture.mb_chroma_origin(mb_addr);
            for plane_idx in 0..2 {
                for y in 0..8 {
                    for x in 0..8 {
                        let sample = self.reader.read_bits(self.bit_depth_chroma as u8)? as u16;
                        self.chroma_plane_mut(plane_idx).set(cx + x, cy + y, sample);
                    }
                }
            }
        }
        self.engine = CabacEngine::new(&mut self.reader, self.qp_y_prev)?;
        self.arena[mb_addr] = Some(Mb {
            mb_addr,
            mb_type: MbTypeIntra::IPcm,
            intra4x4_pred_modes: [2; 16],
            intra_chroma_pred_mode: 0,
            qpy: 0,
        });
        Ok(())
    }
}

impl BitReader<'_> {
    /// `bitstream_check_alignment` (spec §4.A): true iff the current bit offset
    /// is a multiple of 8.
    pub fn bitstream_check_alignment(&self) -> bool {
        self.is_byte_aligned()
    }
}
