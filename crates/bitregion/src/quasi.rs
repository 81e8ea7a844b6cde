//! Low-discrepancy sequences for separated sampling
//!
//! The base-2 van der Corput sequence visits `[0, 1)` so that any prefix of
//! it is spread out: the first `n` points are at least `1 / (2n)` apart.
//! Scaling a prefix of length `n` onto `len` items therefore picks `n`
//! distinct items as long as `n <= len / 2`. Past that, neighboring points
//! can land on the same item.
//!
//! The sequence is a plain value; nothing is cached or shared between calls.

/// `index` with its bits mirrored around the binary point, in `[0, 1)`.
///
/// Exact for every index below 2^53.
#[inline]
pub fn radical_inverse(index: u64) -> f64 {
    const SCALE: f64 = 1.0 / (1u64 << 53) as f64;
    (index.reverse_bits() >> 11) as f64 * SCALE
}

/// Base-2 van der Corput sequence, optionally rotated.
///
/// A rotation (Cranley-Patterson shift) adds a constant offset modulo 1 to
/// every point. It keeps the spacing of the sequence while moving where it
/// starts, which turns the deterministic sequence into a randomized one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VanDerCorput {
    offset: f64,
}

impl VanDerCorput {
    /// The unrotated sequence, starting at 0.
    pub fn new() -> Self {
        Self { offset: 0.0 }
    }

    /// The sequence shifted by `offset` (taken modulo 1).
    pub fn rotated(offset: f64) -> Self {
        let offset = if offset.is_finite() {
            offset.rem_euclid(1.0)
        } else {
            0.0
        };
        Self { offset }
    }

    /// The `index`-th point, in `[0, 1)`.
    pub fn get(&self, index: u64) -> f64 {
        let v = radical_inverse(index) + self.offset;
        if v >= 1.0 { v - 1.0 } else { v }
    }

    /// The first `count` points scaled to item indices in `[0, len)`.
    ///
    /// Returned in sequence order, not sorted.
    pub fn indices(&self, count: usize, len: usize) -> Vec<usize> {
        if len == 0 {
            return Vec::new();
        }
        (0..count as u64)
            .map(|i| ((self.get(i) * len as f64) as usize).min(len - 1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_radical_inverse() {
        assert_eq!(radical_inverse(0), 0.0);
        assert_eq!(radical_inverse(1), 0.5);
        assert_eq!(radical_inverse(2), 0.25);
        assert_eq!(radical_inverse(3), 0.75);
        assert_eq!(radical_inverse(4), 0.125);
    }

    #[test]
    fn test_indices_distinct_up_to_half() {
        let seq = VanDerCorput::new();
        for len in [10usize, 64, 100, 257, 1000] {
            let idx = seq.indices(len / 2, len);
            let unique: HashSet<_> = idx.iter().collect();
            assert_eq!(unique.len(), idx.len(), "duplicates for len {}", len);
            assert!(idx.iter().all(|&i| i < len));
        }
    }

    #[test]
    fn test_rotation_wraps() {
        let seq = VanDerCorput::rotated(0.75);
        assert_eq!(seq.get(0), 0.75);
        assert_eq!(seq.get(1), 0.25);
        assert_eq!(VanDerCorput::rotated(1.5), VanDerCorput::rotated(0.5));
        assert_eq!(VanDerCorput::rotated(f64::NAN), VanDerCorput::new());
    }

    #[test]
    fn test_rotated_indices_stay_distinct() {
        let seq = VanDerCorput::rotated(0.3719);
        let idx = seq.indices(40, 100);
        let unique: HashSet<_> = idx.iter().collect();
        assert_eq!(unique.len(), 40);
    }
}
