//! Binary morphological operations
//!
//! Erosion for 1-bpp images, performed a whole 32-bit word at a time:
//! for every hit in the SEL the source row is shifted by the hit offset
//! and ANDed into the destination row.

use crate::{MorphError, MorphResult, Sel};
use textmask_core::{Pix, PixMut, PixelDepth};

/// Erode a binary image
///
/// Output pixel `(x, y)` is set only if every hit `(dx, dy)` of the SEL
/// has `src(x + dx, y + dy)` set. Pixels outside the image count as
/// foreground, so the image edge itself never erodes anything.
pub fn erode(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    check_binary(pix)?;
    let mut out = PixMut::new(pix.width(), pix.height(), PixelDepth::Bit1)?;
    out.data_mut().fill(u32::MAX);
    let h = pix.height() as i32;
    let pad = pad_mask(pix.width());

    let mut row = Vec::with_capacity(pix.wpl() as usize);
    for (dx, dy) in sel.hit_offsets() {
        for y in 0..h {
            let src_y = y + dy;
            if src_y < 0 || src_y >= h {
                continue;
            }
            row.clear();
            row.extend_from_slice(pix.row_data(src_y as u32));
            if let Some(last) = row.last_mut() {
                *last |= pad;
            }
            combine_shifted(out.row_data_mut(y as u32), &row, -dx, |d, s| d & s);
        }
    }
    out.clear_pad_bits();
    Ok(out.into())
}

/// Erode with a brick (rectangular) structuring element
///
/// The origin is at the brick center, `(width / 2, height / 2)`.
pub fn erode_brick(pix: &Pix, width: u32, height: u32) -> MorphResult<Pix> {
    if width == 1 && height == 1 {
        check_binary(pix)?;
        return Ok(pix.clone());
    }
    erode(pix, &Sel::create_brick(width, height)?)
}

/// Combine `src`, shifted right by `shift` pixels, into `dst` word by word.
///
/// Negative shifts move content left. Positions shifted in from outside
/// the row read as set.
fn combine_shifted(dst: &mut [u32], src: &[u32], shift: i32, op: impl Fn(u32, u32) -> u32) {
    for (i, word) in dst.iter_mut().enumerate() {
        *word = op(*word, shifted_word(src, i as isize, shift));
    }
}

/// Word `i` of `src` after shifting the row right by `shift` pixels.
///
/// MSB-first bit ordering: pixel 0 is bit 31 of word 0, so moving
/// content right means shifting bits towards the LSB.
#[inline]
fn shifted_word(src: &[u32], i: isize, shift: i32) -> u32 {
    let word = |k: isize| -> u32 {
        if k < 0 || k as usize >= src.len() {
            u32::MAX
        } else {
            src[k as usize]
        }
    };
    let amount = shift.unsigned_abs() as isize;
    let (words, bits) = (amount / 32, (amount % 32) as u32);

    if shift >= 0 {
        let k = i - words;
        if bits == 0 {
            word(k)
        } else {
            (word(k) >> bits) | (word(k - 1) << (32 - bits))
        }
    } else {
        let k = i + words;
        if bits == 0 {
            word(k)
        } else {
            (word(k) << bits) | (word(k + 1) >> (32 - bits))
        }
    }
}

/// Bits of the last row word that lie past `width`.
#[inline]
fn pad_mask(width: u32) -> u32 {
    match width % 32 {
        0 => 0,
        used => u32::MAX >> used,
    }
}

/// Check that the image is binary (1-bpp)
fn check_binary(pix: &Pix) -> MorphResult<()> {
    if pix.depth() != PixelDepth::Bit1 {
        return Err(MorphError::UnsupportedDepth {
            expected: "1-bpp binary",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_binary_image(w: u32, h: u32, pixels: &[(u32, u32)]) -> Pix {
        let mut pm = PixMut::new(w, h, PixelDepth::Bit1).unwrap();
        for &(x, y) in pixels {
            pm.set_pixel(x, y, 1).unwrap();
        }
        pm.into()
    }

    fn make_filled_rect(w: u32, h: u32, x0: u32, y0: u32, rw: u32, rh: u32) -> Pix {
        let mut pixels = Vec::new();
        for y in y0..y0 + rh {
            for x in x0..x0 + rw {
                pixels.push((x, y));
            }
        }
        make_binary_image(w, h, &pixels)
    }

    fn count_set(pix: &Pix) -> usize {
        let mut n = 0;
        for y in 0..pix.height() {
            for x in 0..pix.width() {
                n += pix.get_pixel_unchecked(x, y) as usize;
            }
        }
        n
    }

    #[test]
    fn test_shifted_word() {
        let src = [0x0000_0001, 0x8000_0000];
        assert_eq!(shifted_word(&src, 1, 1), 0xC000_0000);
        assert_eq!(shifted_word(&src, 0, -1), 0x0000_0003);
        // shifted in from past the row end
        assert_eq!(shifted_word(&src, 1, -1), 0x0000_0001);
        assert_eq!(shifted_word(&src, 1, 32), 0x0000_0001);
        assert_eq!(shifted_word(&src, 0, 32), u32::MAX);
    }

    #[test]
    fn test_pad_mask() {
        assert_eq!(pad_mask(64), 0);
        assert_eq!(pad_mask(70), 0x03FF_FFFF);
        assert_eq!(pad_mask(1), 0x7FFF_FFFF);
    }

    #[test]
    fn test_erode_square_to_center() {
        let pix = make_filled_rect(5, 5, 1, 1, 3, 3);
        let sel = Sel::create_brick(3, 3).unwrap();
        let eroded = erode(&pix, &sel).unwrap();
        assert_eq!(count_set(&eroded), 1);
        assert_eq!(eroded.get_pixel(2, 2), Some(1));
    }

    #[test]
    fn test_erode_brick_5x3() {
        let pix = make_filled_rect(20, 10, 4, 2, 7, 5);
        let eroded = erode_brick(&pix, 5, 3).unwrap();
        // 7 - 4 wide, 5 - 2 high, starting 2 right and 1 down
        assert_eq!(count_set(&eroded), 9);
        for y in 3..6 {
            for x in 6..9 {
                assert_eq!(eroded.get_pixel(x, y), Some(1));
            }
        }
    }

    #[test]
    fn test_erode_across_word_boundary() {
        let pixels: Vec<_> = (10..60).map(|x| (x, 1)).collect();
        let pix = make_binary_image(70, 3, &pixels);
        let sel = Sel::create_brick(5, 1).unwrap();
        let eroded = erode(&pix, &sel).unwrap();
        assert_eq!(eroded.get_pixel(11, 1), Some(0));
        assert_eq!(eroded.get_pixel(12, 1), Some(1));
        assert_eq!(eroded.get_pixel(31, 1), Some(1));
        assert_eq!(eroded.get_pixel(32, 1), Some(1));
        assert_eq!(eroded.get_pixel(57, 1), Some(1));
        assert_eq!(eroded.get_pixel(58, 1), Some(0));
        assert_eq!(count_set(&eroded), 46);
    }

    #[test]
    fn test_erode_keeps_foreground_at_image_edge() {
        // Block touching the left edge: x 0..6, y 2..7
        let pix = make_filled_rect(20, 10, 0, 2, 6, 5);
        let eroded = erode_brick(&pix, 5, 3).unwrap();
        assert_eq!(count_set(&eroded), 4 * 3);
        for y in 3..6 {
            for x in 0..4 {
                assert_eq!(eroded.get_pixel(x, y), Some(1));
            }
        }
        assert_eq!(eroded.get_pixel(4, 4), Some(0));
    }

    #[test]
    fn test_erode_full_image_is_unchanged() {
        let mut pm = PixMut::new(70, 6, PixelDepth::Bit1).unwrap();
        pm.set_all_arbitrary(1).unwrap();
        let pix: Pix = pm.into();
        let eroded = erode_brick(&pix, 5, 3).unwrap();
        assert_eq!(count_set(&eroded), 70 * 6);
        assert_eq!(eroded.get_pixel(0, 0), Some(1));
        assert_eq!(eroded.get_pixel(69, 5), Some(1));
        // pad bits beyond width stay clear
        assert_eq!(eroded.row_data(0)[2] & 0x03FF_FFFF, 0);
    }

    #[test]
    fn test_identity_brick() {
        let pix = make_binary_image(4, 4, &[(0, 0), (3, 3)]);
        assert_eq!(erode_brick(&pix, 1, 1).unwrap(), pix);
    }

    #[test]
    fn test_rejects_non_binary() {
        let pix = Pix::new(4, 4, PixelDepth::Bit8).unwrap();
        assert!(matches!(
            erode_brick(&pix, 3, 3),
            Err(MorphError::UnsupportedDepth { actual: 8, .. })
        ));
        assert!(erode_brick(&pix, 1, 1).is_err());
    }
}
