//! Bitmask tools for working with sets of digital lines

use bit_iter::BitIter;

/// Convert data lines into a bitmask
pub fn lines_to_mask(chs: &[u8]) -> u8 {
    let mut m = 0;
    for ch in chs {
        m |= 1 << (ch - 1);
    }
    return m;
}

/// Returns all lines in mask
pub fn mask_to_lines(m: u8) -> Vec<u8> {
    let mut chs = Vec::new();
    for b in BitIter::from(m) {
        // Lines are 1-indexed, bits are 0-indexed
        chs.push(1 + b as u8);
    }
    return chs;
}

/// Bitwise set/clear/toggle/check/change operations for the word register

use num_traits::{FromPrimitive, PrimInt, Unsigned};
use std::ops::{BitAndAssign, BitOrAssign, BitXorAssign};

pub trait BitOps:
    PrimInt
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + FromPrimitive
    + Unsigned
{
    fn set(&mut self, b: usize);
    fn clear(&mut self, b: usize);
    fn toggle(&mut self, b: usize);
    fn change(&mut self, b: usize, x: bool);
    fn check(self, b: usize) -> bool;
}

impl BitOps for u8 {
    #[inline]
    fn set(&mut self, b: usize) {
        *self |= 1 << b;
    }

    #[inline]
    fn clear(&mut self, b: usize) {
        *self &= !(1 << b);
    }

    #[inline]
    fn toggle(&mut self, b: usize) {
        *self ^= 1 << b;
    }

    #[inline]
    fn change(&mut self, b: usize, x: bool) {
        *self = (*self & !(1 << b)) | ((x as u8) << b);
    }

    #[inline]
    fn check(self, b: usize) -> bool {
        return self >> b & 1 == 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_masks() {
        assert_eq!(0b01, lines_to_mask(&[1]));
        assert_eq!(0b10, lines_to_mask(&[2]));
        assert_eq!(0b11, lines_to_mask(&[1, 2]));
        assert_eq!(0x7f, lines_to_mask(&[1, 2, 3, 4, 5, 6, 7]));
        assert_eq!(0x80, lines_to_mask(&[8]));
    }

    #[test]
    fn bijective_line_masks() {
        // Exhaustively check all u8s
        for pat in u8::MIN..=u8::MAX {
            let chs = mask_to_lines(pat);
            assert!(!chs.contains(&0));
            let pat2 = lines_to_mask(&chs);
            assert_eq!(pat, pat2);
        }
    }

    #[test]
    fn bit_ops() {
        // Exhaustively check all u8's
        for i in u8::MIN..=u8::MAX {
            for b in BitIter::from(u8::MAX) {
                let mut x = i;
                let i_set = i | 1 << b;
                let i_clr = i & !(1 << b);

                assert_eq!(i.check(b), i >> b & 1 == 1);
                x.set(b);
                assert_eq!(x, i_set);
                x.clear(b);
                assert_eq!(x, i_clr);
                x.toggle(b);
                assert_eq!(x, i_set);
                x.toggle(b);
                assert_eq!(x, i_clr);
                x.change(b, true);
                assert_eq!(x, i_set);
                x.change(b, false);
                assert_eq!(x, i_clr);
            }
        }
    }
}
