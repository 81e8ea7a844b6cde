//! Set algebra
//!
//! Binary operations combine two regions word for word over their overlap:
//! the first `min(width)` columns and, within each, the first
//! `min(words_per_column)` words. Sizes never have to match.
//!
//! Outside the overlap the other region counts as all off, so:
//!
//! - [`Region::or`], [`Region::xor`] and [`Region::and_not`] leave those
//!   cells of `self` unchanged
//! - [`Region::and`] and [`Region::not_and`] clear them
//!
//! The result is always clipped back to this region's height, since the
//! other region's words may carry cells past it.

use super::Region;

impl Region {
    /// Combine the overlapping words with `op`, and apply `outside` to every
    /// word of `self` that has no counterpart in `other`.
    fn combine(
        &mut self,
        other: &Region,
        op: impl Fn(u64, u64) -> u64,
        outside: impl Fn(u64) -> u64,
    ) -> &mut Self {
        let wpc = self.words_per_column;
        let shared_words = wpc.min(other.words_per_column);
        for x in 0..self.width {
            let column = &mut self.data[x * wpc..(x + 1) * wpc];
            if x < other.width {
                let theirs = other.column(x);
                for i in 0..shared_words {
                    column[i] = op(column[i], theirs[i]);
                }
                for word in &mut column[shared_words..] {
                    *word = outside(*word);
                }
            } else {
                for word in column.iter_mut() {
                    *word = outside(*word);
                }
            }
        }
        self.mask_tails();
        self
    }

    /// Union: cells on in either region.
    pub fn or(&mut self, other: &Region) -> &mut Self {
        self.combine(other, |a, b| a | b, |a| a)
    }

    /// Intersection: cells on in both regions.
    pub fn and(&mut self, other: &Region) -> &mut Self {
        self.combine(other, |a, b| a & b, |_| 0)
    }

    /// Difference: cells on here but off in `other`.
    pub fn and_not(&mut self, other: &Region) -> &mut Self {
        self.combine(other, |a, b| a & !b, |a| a)
    }

    /// Reverse difference: cells on in `other` but off here.
    pub fn not_and(&mut self, other: &Region) -> &mut Self {
        self.combine(other, |a, b| !a & b, |_| 0)
    }

    /// Symmetric difference: cells on in exactly one region.
    pub fn xor(&mut self, other: &Region) -> &mut Self {
        self.combine(other, |a, b| a ^ b, |a| a)
    }

    /// Complement every cell.
    pub fn not(&mut self) -> &mut Self {
        for word in self.data.iter_mut() {
            *word = !*word;
        }
        self.mask_tails();
        self
    }

    /// Check whether any cell is on in both regions.
    pub fn intersects(&self, other: &Region) -> bool {
        let shared_words = self.words_per_column.min(other.words_per_column);
        (0..self.width.min(other.width)).any(|x| {
            self.column(x)[..shared_words]
                .iter()
                .zip(&other.column(x)[..shared_words])
                .any(|(a, b)| a & b != 0)
        })
    }
}
