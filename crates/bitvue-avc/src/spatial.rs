//! Macroblock neighbour derivation (§6.4.9, spec §4.F "Macroblock neighbour derivation").
//!
//! Neighbour lookup is expressed as a pure function of the current address and
//! picture width rather than the pointer-chasing the original C decoder used — an
//! arena of macroblocks indexed by `mbAddr`, with `Option<usize>` standing in for
//! the "unavailable" sentinel.

/// The four spatial neighbours of a macroblock: left (A), above (B), above-right
/// (C) and above-left (D).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbours {
    pub a: Option<usize>,
    pub b: Option<usize>,
    pub c: Option<usize>,
    pub d: Option<usize>,
}

/// Derive the raw raster-order neighbour addresses for `mb_addr` in a picture
/// `pic_width_in_mbs` macroblocks wide, before availability filtering.
pub fn derive_neighbours(mb_addr: usize, pic_width_in_mbs: usize) -> Neighbours {
    let on_left_edge = pic_width_in_mbs != 0 && mb_addr % pic_width_in_mbs == 0;
    let on_right_edge =
        pic_width_in_mbs != 0 && (mb_addr + 1) % pic_width_in_mbs == 0;

    let a = if on_left_edge {
        None
    } else {
        mb_addr.checked_sub(1)
    };
    let b = mb_addr.checked_sub(pic_width_in_mbs);
    let c = if on_right_edge {
        None
    } else {
        mb_addr
            .checked_sub(pic_width_in_mbs)
            .and_then(|v| v.checked_add(1))
    };
    let d = if on_left_edge {
        None
    } else {
        mb_addr
            .checked_sub(pic_width_in_mbs)
            .and_then(|v| v.checked_sub(1))
    };

    Neighbours { a, b, c, d }
}

/// Marks a raw neighbour address unavailable when it falls outside the slice that
/// owns the current macroblock, has not been decoded yet, or — under constrained
/// intra prediction — is inter-coded.
pub fn filter_availability(
    raw: Neighbours,
    is_decoded: impl Fn(usize) -> bool,
    is_intra: impl Fn(usize) -> bool,
    constrained_intra_pred: bool,
) -> Neighbours {
    let check = |addr: Option<usize>| -> Option<usize> {
        let addr = addr?;
        if !is_decoded(addr) {
            return None;
        }
        if constrained_intra_pred && !is_intra(addr) {
            return None;
        }
        Some(addr)
    };

    Neighbours {
        a: check(raw.a),
        b: check(raw.b),
        c: check(raw.c),
        d: check(raw.d),
    }
}
