//! Word-level column primitives
//!
//! A column is a slice of `u64` words stacked vertically: bit `y & 63` of
//! word `y >> 6` holds cell `y`. Everything that moves cells along a column
//! (expansion, retraction, translation, flipping, zooming) goes through
//! [`shifted_word`], which threads the carry between adjacent words.
//!
//! # Tail invariant
//!
//! Bits that would represent `y >= height` must always be 0. Shifting toward
//! larger `y` can push cells into that padding, so every caller that shifts
//! must AND [`tail_mask`] into the last word of each column before returning.

/// Number of 64-bit words needed for a column of `height` cells.
#[inline]
pub fn words_for(height: usize) -> usize {
    height.div_ceil(64)
}

/// Mask for the last word of a column of `height` cells.
///
/// A height that is a multiple of 64 (including 0) gives all ones.
#[inline]
pub fn tail_mask(height: usize) -> u64 {
    match height % 64 {
        0 => u64::MAX,
        r => u64::MAX >> (64 - r),
    }
}

/// Bits `[start, end)` of a word, with `start <= end <= 64`.
#[inline]
pub fn span_mask(start: u32, end: u32) -> u64 {
    debug_assert!(start <= end && end <= 64);
    if start >= end {
        0
    } else {
        (u64::MAX >> (64 - (end - start))) << start
    }
}

/// Bits of word `index` that fall in cells `[y0, y1)` of a column.
#[inline]
pub fn column_span(index: usize, y0: usize, y1: usize) -> u64 {
    let base = index * 64;
    let lo = y0.clamp(base, base + 64) - base;
    let hi = y1.clamp(base, base + 64) - base;
    span_mask(lo as u32, hi as u32)
}

/// Word `i` of `column` after moving every cell by `dy` (positive toward
/// larger `y`).
///
/// Cells shifted in from outside the column are off. Cells pushed past the
/// last word are dropped, but cells landing in the padding of the last word
/// are not: re-apply the tail mask afterwards.
#[inline]
pub fn shifted_word(column: &[u64], i: usize, dy: isize) -> u64 {
    let n = dy.unsigned_abs();
    let q = n / 64;
    let r = (n % 64) as u32;
    if dy >= 0 {
        if i < q {
            return 0;
        }
        let j = i - q;
        let mut word = column[j] << r;
        if r != 0 && j > 0 {
            word |= column[j - 1] >> (64 - r);
        }
        word
    } else {
        let j = i.saturating_add(q);
        if j >= column.len() {
            return 0;
        }
        let mut word = column[j] >> r;
        if r != 0 && j + 1 < column.len() {
            word |= column[j + 1] << (64 - r);
        }
        word
    }
}

/// Shift a whole column by `dy` cells into `dst`.
///
/// `dst` may be shorter than `src` (the extra source words only contribute
/// carries). The tail of `dst` is left for the caller to mask.
pub fn shift_column(src: &[u64], dst: &mut [u64], dy: isize) {
    for (i, word) in dst.iter_mut().enumerate() {
        *word = shifted_word(src, i, dy);
    }
}

/// Word `i` of a column OR-ed with its vertical neighbors.
#[inline]
pub fn vertical_or(column: &[u64], i: usize) -> u64 {
    column[i] | shifted_word(column, i, 1) | shifted_word(column, i, -1)
}

/// Word `i` of a column AND-ed with its vertical neighbors.
///
/// Cells outside the column count as off, so the first and last cells of a
/// column never survive.
#[inline]
pub fn vertical_and(column: &[u64], i: usize) -> u64 {
    column[i] & shifted_word(column, i, 1) & shifted_word(column, i, -1)
}

/// Position of the `n`-th (0-based) set bit of `word`.
///
/// `word` must have more than `n` set bits.
#[inline]
pub fn nth_set_bit(mut word: u64, n: u32) -> u32 {
    debug_assert!(word.count_ones() > n);
    for _ in 0..n {
        word &= word - 1;
    }
    word.trailing_zeros()
}
