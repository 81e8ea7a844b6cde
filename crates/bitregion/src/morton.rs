//! Morton (Z-order) codes
//!
//! Interleaves coordinate bits so that nearby cells get nearby codes. x takes
//! the even bit positions and y the odd ones. The same bit spreading doubles
//! every cell of a column when zooming.

/// Spread the 32 bits of `v` into the even bit positions of a `u64`.
#[inline]
pub fn spread_bits(v: u32) -> u64 {
    let mut x = u64::from(v);
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

/// Gather the even bit positions of `x` into a `u32`.
#[inline]
pub fn compact_bits(x: u64) -> u32 {
    let mut x = x & 0x5555_5555_5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x >> 4)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x >> 8)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x >> 16)) & 0x0000_0000_FFFF_FFFF;
    x as u32
}

/// Encode `(x, y)` into a Morton code.
#[inline]
pub fn encode(x: u32, y: u32) -> u64 {
    spread_bits(x) | (spread_bits(y) << 1)
}

/// Decode a Morton code into `(x, y)`.
#[inline]
pub fn decode(code: u64) -> (u32, u32) {
    (compact_bits(code), compact_bits(code >> 1))
}

/// Every bit of `v` repeated twice: bit `k` lands on bits `2k` and `2k + 1`.
#[inline]
pub fn double_bits(v: u32) -> u64 {
    let s = spread_bits(v);
    s | (s << 1)
}
