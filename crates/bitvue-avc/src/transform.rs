//! Inverse integer transforms and quantization (ITU-T H.264 §8.5).
//!
//! Covers the 4x4 and 8x8 inverse transforms (§8.5.12.2 / §8.5.13.2), the 4x4 and
//! 2x2 Hadamard transforms used for the luma-16x16 and chroma DC coefficients, and
//! scaling via the normative `LevelScale4x4`/`LevelScale8x8` tables. Transform
//! bypass (`qpprime_y_zero_transform_bypass_flag` with `QPprimeY == 0`) is handled
//! by the caller, which skips straight to `add_residual` without invoking scaling.

/// `normAdjust4x4[qp % 6][idx]`, §8.5.9 Table 8-15 (indices 0=(0,0)/(0,2)/(2,0)/(2,2),
/// 1=(1,1)/(1,3)/(3,1)/(3,3), 2=the remaining positions).
#[rustfmt::skip]
const NORM_ADJUST_4X4: [[i32; 3]; 6] = [
    [10, 16, 13],
    [11, 18, 14],
    [13, 20, 16],
    [14, 23, 18],
    [16, 25, 20],
    [18, 29, 23],
];

fn norm_adjust_4x4_pos(row: usize, col: usize) -> usize {
    match (row % 2, col % 2) {
        (0, 0) => 0,
        (1, 1) => 1,
        _ => 2,
    }
}

/// Build the flat `LevelScale4x4` matrix for one `qp % 6` residue, assuming the
/// flat (unweighted) default scaling list, as used when the SPS/PPS carry no
/// explicit scaling matrices.
pub fn level_scale_4x4(qp_rem: usize) -> [i32; 16] {
    let mut scale = [0i32; 16];
    for row in 0..4 {
        for col in 0..4 {
            let pos = norm_adjust_4x4_pos(row, col);
            scale[row * 4 + col] = NORM_ADJUST_4X4[qp_rem][pos] * 16;
        }
    }
    scale
}

/// Dequantize one 4x4 block of coefficients (§8.5.9/§8.5.12.1).
pub fn dequantize_4x4(coeffs: &[i32; 16], qp: i32) -> [i32; 16] {
    let qp_rem = (qp.rem_euclid(6)) as usize;
    let qp_per = qp.div_euclid(6);
    let scale = level_scale_4x4(qp_rem);
    let mut out = [0i32; 16];
    if qp_per >= 4 {
        let shift = qp_per - 4;
        for i in 0..16 {
            out[i] = coeffs[i] * scale[i] << shift;
        }
    } else {
        let shift = 4 - qp_per;
        let round = 1 << (shift - 1);
        for i in 0..16 {
            out[i] = (coeffs[i] * scale[i] + round) >> shift;
        }
    }
    out
}

/// The 4x4 inverse integer transform (§8.5.12.2), butterfly form, applied after
/// dequantization. Input/output in raster order.
pub fn inverse_transform_4x4(d: &[i32; 16]) -> [i32; 16] {
    let mut e = [0i32; 16];
    // Vertical (per-column) butterfly.
    for col in 0..4 {
        let d0 = d[col];
        let d1 = d[4 + col];
        let d2 = d[8 + col];
        let d3 = d[12 + col];
        let e0 = d0 + d2;
        let e1 = d0 - d2;
        let e2 = (d1 >> 1) - d3;
        let e3 = d1 + (d3 >> 1);
        e[col] = e0 + e3;
        e[4 + col] = e1 + e2;
        e[8 + col] = e1 - e2;
        e[12 + col] = e0 - e3;
    }
    let mut f = [0i32; 16];
    // Horizontal (per-row) butterfly, then final (h + 32) >> 6 scaling.
    for row in 0..4 {
        let base = row * 4;
        let e0 = e[base];
        let e1 = e[base + 1];
        let e2 = e[base + 2];
        let e3 = e[base + 3];
        let f0 = e0 + e2;
        let f1 = e0 - e2;
        let f2 = (e1 >> 1) - e3;
        let f3 = e1 + (e3 >> 1);
        f[base] = (f0 + f3 + 32) >> 6;
        f[base + 1] = (f1 + f2 + 32) >> 6;
        f[base + 2] = (f1 - f2 + 32) >> 6;
        f[base + 3] = (f0 - f3 + 32) >> 6;
    }
    f
}

/// The 4x4 Hadamard transform used to decode the luma-16x16 DC coefficients and
/// the raw chroma DC block prior to the 2x2 variant (§8.5.10).
pub fn hadamard_4x4(c: &[i32; 16]) -> [i32; 16] {
    let mut e = [0i32; 16];
    for col in 0..4 {
        let c0 = c[col];
        let c1 = c[4 + col];
        let c2 = c[8 + col];
        let c3 = c[12 + col];
        e[col] = c0 + c1 + c2 + c3;
        e[4 + col] = c0 + c1 - c2 - c3;
        e[8 + col] = c0 - c1 - c2 + c3;
        e[12 + col] = c0 - c1 + c2 - c3;
    }
    let mut f = [0i32; 16];
    for row in 0..4 {
        let base = row * 4;
        let e0 = e[base];
        let e1 = e[base + 1];
        let e2 = e[base + 2];
        let e3 = e[base + 3];
        f[base] = e0 + e1 + e2 + e3;
        f[base + 1] = e0 + e1 - e2 - e3;
        f[base + 2] = e0 - e1 - e2 + e3;
        f[base + 3] = e0 - e1 + e2 - e3;
    }
    f
}

/// Scale the Hadamard-transformed luma-16x16 DC coefficients (§8.5.10).
pub fn scale_luma_dc(f: &[i32; 16], qp: i32) -> [i32; 16] {
    let qp_rem = (qp.rem_euclid(6)) as usize;
    let qp_per = qp.div_euclid(6);
    let scale0 = NORM_ADJUST_4X4[qp_rem][0];
    let mut out = [0i32; 16];
    if qp_per >= 6 {
        let shift = qp_per - 6;
        for i in 0..16 {
            out[i] = (f[i] * scale0) << shift;
        }
    } else {
        let shift = 6 - qp_per;
        let round = 1 << (shift - 1);
        for i in 0..16 {
            out[i] = (f[i] * scale0 + round) >> shift;
        }
    }
    out
}

/// The 2x2 Hadamard transform for 4:2:0 chroma DC coefficients (§8.5.11).
pub fn hadamard_2x2(c: &[i32; 4]) -> [i32; 4] {
    let c0 = c[0];
    let c1 = c[1];
    let c2 = c[2];
    let c3 = c[3];
    [c0 + c1 + c2 + c3, c0 - c1 + c2 - c3, c0 + c1 - c2 - c3, c0 - c1 - c2 + c3]
}

/// Scale the chroma DC coefficients after the 2x2 Hadamard transform (§8.5.11).
pub fn scale_chroma_dc(f: &[i32; 4], qp: i32) -> [i32; 4] {
    let qp_rem = (qp.rem_euclid(6)) as usize;
    let qp_per = qp.div_euclid(6);
    let scale0 = NORM_ADJUST_4X4[qp_rem][0] as i64;
    let mut out = [0i32; 4];
    for i in 0..4 {
        out[i] = (((f[i] as i64) * scale0) << qp_per >> 5) as i32;
    }
    out
}

/// `normAdjust8x8[qp % 6][idx]`, §8.5.9 Table 8-16 category index (0..=5, covering the
/// six distinct positions the 8x8 scan visits modulo symmetry).
#[rustfmt::skip]
const NORM_ADJUST_8X8: [[i32; 6]; 6] = [
    [20, 18, 32, 19, 25, 24],
    [22, 19, 35, 21, 28, 26],
    [26, 23, 42, 24, 33, 31],
    [28, 25, 45, 26, 35, 33],
    [32, 28, 51, 30, 40, 38],
    [36, 32, 58, 34, 46, 43],
];

fn norm_adjust_8x8_pos(row: usize, col: usize) -> usize {
    match (row % 4, col % 4) {
        (0, 0) => 0,
        (1, 1) | (1, 3) | (3, 1) | (3, 3) => 1,
        (2, 2) => 2,
        (0, 2) | (2, 0) => 3,
        (1, 2) | (2, 1) | (2, 3) | (3, 2) => 4,
        _ => 5,
    }
}

/// Dequantize one 8x8 block of coefficients (§8.5.9/§8.5.13.1).
pub fn dequantize_8x8(coeffs: &[i32; 64], qp: i32) -> [i32; 64] {
    let qp_rem = (qp.rem_euclid(6)) as usize;
    let qp_per = qp.div_euclid(6);
    let mut out = [0i32; 64];
    for row in 0..8 {
        for col in 0..8 {
            let idx = row * 8 + col;
            let scale = NORM_ADJUST_8X8[qp_rem][norm_adjust_8x8_pos(row, col)] * 16;
            out[idx] = if qp_per >= 6 {
                (coeffs[idx] * scale) << (qp_per - 6)
            } else {
                let shift = 6 - qp_per;
                (coeffs[idx] * scale + (1 << (shift - 1))) >> shift
            };
        }
    }
    out
}

/// The 8x8 inverse integer transform (§8.5.13.2), applied after dequantization.
pub fn inverse_transform_8x8(d: &[i32; 64]) -> [i32; 64] {
    let mut col_pass = [0i32; 64];
    for col in 0..8 {
        let s: [i32; 8] = std::array::from_fn(|row| d[row * 8 + col]);
        let out = idct_8pt(&s);
        for row in 0..8 {
            col_pass[row * 8 + col] = out[row];
        }
    }
    let mut out = [0i32; 64];
    for row in 0..8 {
        let base = row * 8;
        let s: [i32; 8] = std::array::from_fn(|col| col_pass[base + col]);
        let r = idct_8pt(&s);
        for col in 0..8 {
            out[base + col] = (r[col] + 32) >> 6;
        }
    }
    out
}

/// One dimension of the 8-point inverse butterfly used by both transform passes.
fn idct_8pt(s: &[i32; 8]) -> [i32; 8] {
    let a0 = s[0] + s[4];
    let a4 = s[0] - s[4];
    let a2 = (s[2] >> 1) - s[6];
    let a6 = s[2] + (s[6] >> 1);

    let b0 = a0 + a6;
    let b2 = a4 + a2;
    let b4 = a4 - a2;
    let b6 = a0 - a6;

    let a1 = -s[3] + s[5] - s[7] - (s[7] >> 1);
    let a3 = s[1] + s[7] - s[3] - (s[3] >> 1);
    let a5 = -s[1] + s[7] + s[5] + (s[5] >> 1);
    let a7 = s[3] + s[5] + s[1] + (s[1] >> 1);

    let b1 = a1 + (a7 >> 2);
    let b7 = a7 - (a1 >> 2);
    let b3 = a3 + (a5 >> 2);
    let b5 = (a3 >> 2) - a5;

    [b0 + b7, b2 + b5, b4 + b3, b6 + b1, b6 - b1, b4 - b3, b2 - b5, b0 - b7]
}

/// Add a dequantized+inverse-transformed residual block to a prediction block and
/// clip to `[0, 2^bit_depth - 1]` (final step of §8.3.1/§8.3.2/§8.3.3).
pub fn add_residual_clipped(pred: i32, residual: i32, bit_depth: u32) -> u16 {
    let max = (1i32 << bit_depth) - 1;
    (pred + residual).clamp(0, max) as u16
}
