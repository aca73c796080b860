//! CABAC residual block decoding (§7.3.5.3.3 / ITU-T H.264 §9.3.3 residual syntax).
//!
//! Decodes one transform block's quantized coefficient levels in scan order, used
//! for luma 4x4/8x8/16x16-DC/AC blocks and the 4:2:0 chroma DC/AC blocks. The block
//! "category" selects which context sub-range (`ctx_offset::*`) is used, mirroring
//! the five residual block categories the normative table distinguishes for an
//! intra-only decoder (luma DC, luma AC/4x4, luma 8x8, chroma DC, chroma AC).

use crate::bitreader::BitReader;
use crate::cabac::{ctx_offset, CabacEngine};
use crate::error::Result;

/// Which of the five residual-block context categories a block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidualCategory {
    LumaDc,
    LumaAc,
    Luma8x8,
    ChromaDc,
    ChromaAc,
}

impl ResidualCategory {
    fn index(self) -> usize {
        match self {
            ResidualCategory::LumaDc => 0,
            ResidualCategory::LumaAc => 1,
            ResidualCategory::Luma8x8 => 2,
            ResidualCategory::ChromaDc => 3,
            ResidualCategory::ChromaAc => 4,
        }
    }
}

/// Decoded residual block: coefficients in scan order, zero-filled past `num_coeff`.
#[derive(Debug, Clone)]
pub struct ResidualBlock {
    pub coded_block_flag: bool,
    pub coeffs: Vec<i32>,
}

/// Decode one residual block of up to `max_num_coeff` coefficients spanning scan
/// positions `[start_idx, end_idx]` (§4.E "Residual block decoding").
///
/// `coded_block_flag` is read unless `implicit_cbf` is set (the luma 16x16 DC block
/// is always present per the normative spec and has no coded_block_flag bin).
#[allow(clippy::too_many_arguments)]
pub fn decode_residual_block(
    engine: &mut CabacEngine,
    reader: &mut BitReader,
    category: ResidualCategory,
    max_num_coeff: usize,
    start_idx: usize,
    end_idx: usize,
    implicit_cbf: bool,
    cbf_ctx_inc: u32,
) -> Result<ResidualBlock> {
    let cat_idx = category.index() as usize;

    let coded_block_flag = if implicit_cbf {
        true
    } else {
        let ctx_idx = ctx_offset::CODED_BLOCK_FLAG + cat_idx * 4 + (cbf_ctx_inc as usize % 4);
        engine.decode_decision(reader, ctx_idx)? == 1
    };

    let mut coeffs = vec![0i32; max_num_coeff];
    if !coded_block_flag {
        return Ok(ResidualBlock {
            coded_block_flag,
            coeffs,
        });
    }

    let mut significant = vec![false; max_num_coeff];
    let mut num_coeff = 0usize;

    for i in start_idx..end_idx {
        let sig_ctx = ctx_offset::SIGNIFICANT_COEFF_FLAG + cat_idx * 15 + (i.min(14));
        let is_significant = engine.decode_decision(reader, sig_ctx)? == 1;
        significant[i] = is_significant;
        if is_significant {
            let last_ctx =
                ctx_offset::LAST_SIGNIFICANT_COEFF_FLAG + cat_idx * 15 + (i.min(14));
            let is_last = engine.decode_decision(reader, last_ctx)? == 1;
            num_coeff = i + 1;
            if is_last {
                break;
            }
        }
    }
    // end_idx itself is always significant and implicitly last if reached without a
    // last_significant_coeff_flag of 1 (the final scan position carries no bin).
    if num_coeff == 0 && end_idx < max_num_coeff {
        significant[end_idx] = true;
        num_coeff = end_idx + 1;
    }

    let mut num_decod_abs_level_eq1 = 0u32;
    let mut num_decod_abs_level_gt1 = 0u32;

    for i in (0..num_coeff).rev() {
        if !significant[i] {
            continue;
        }
        let ctx_base = ctx_offset::COEFF_ABS_LEVEL_MINUS1 + cat_idx * 5;
        let abs_level_minus1 = engine.decode_ueg_k(reader, 14, 0, |bin_idx| {
            let inc = if num_decod_abs_level_gt1 > 0 {
                0
            } else {
                (bin_idx.min(3) + (num_decod_abs_level_eq1 > 0) as u32).min(4)
            };
            ctx_base + inc as usize
        })?;

        if abs_level_minus1 == 0 {
            num_decod_abs_level_eq1 += 1;
        } else {
            num_decod_abs_level_gt1 += 1;
        }

        let sign = engine.decode_bypass(reader)?;
        let level = (abs_level_minus1 as i32 + 1) * if sign == 1 { -1 } else { 1 };
        coeffs[i] = level;
    }

    Ok(ResidualBlock {
        coded_block_flag,
        coeffs,
    })
}
