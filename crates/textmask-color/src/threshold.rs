//! Binary thresholding
//!
//! Converts 8 bpp grayscale images to 1 bpp:
//! - Fixed threshold binarization, dark pixels as foreground
//! - Otsu's method (automatic threshold selection)

use crate::{ColorError, ColorResult};
use textmask_core::{Pix, PixMut, PixelDepth};

fn check_8bpp(pix: &Pix) -> ColorResult<()> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(ColorError::UnsupportedDepth {
            expected: "8 bpp grayscale",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

/// Convert a grayscale image to binary with inverted polarity
///
/// Pixels at or below `threshold` become foreground (1), so dark
/// content on a light background is marked.
pub fn threshold_to_binary_inverted(pix: &Pix, threshold: u8) -> ColorResult<Pix> {
    check_8bpp(pix)?;
    let (w, h) = (pix.width(), pix.height());
    let mut out = PixMut::new(w, h, PixelDepth::Bit1)?;
    for y in 0..h {
        for x in 0..w {
            if pix.get_pixel_unchecked(x, y) <= threshold as u32 {
                out.set_pixel_unchecked(x, y, 1);
            }
        }
    }
    Ok(out.into())
}

/// 256-bin histogram of an 8 bpp image.
pub fn gray_histogram(pix: &Pix) -> ColorResult<[u64; 256]> {
    check_8bpp(pix)?;
    let mut hist = [0u64; 256];
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            hist[pix.get_pixel_unchecked(x, y) as usize] += 1;
        }
    }
    Ok(hist)
}

/// Compute Otsu's threshold for a grayscale image
///
/// Returns the value `t` that maximizes the between-class variance of
/// the split `[0, t]` / `(t, 255]`. Ties keep the smallest `t`; an image
/// with a single intensity yields 0.
pub fn compute_otsu_threshold(pix: &Pix) -> ColorResult<u8> {
    let hist = gray_histogram(pix)?;
    let total: u64 = hist.iter().sum();
    let total_f = total as f64;
    let sum_all: f64 = hist
        .iter()
        .enumerate()
        .map(|(v, &n)| v as f64 * n as f64)
        .sum();

    let mut best_t = 0u8;
    let mut best_sigma = 0.0f64;
    let mut count_lo = 0u64;
    let mut sum_lo = 0.0f64;
    for (t, &n) in hist.iter().enumerate() {
        count_lo += n;
        sum_lo += t as f64 * n as f64;
        let count_hi = total - count_lo;
        if count_lo == 0 || count_hi == 0 {
            continue;
        }
        let q1 = count_lo as f64 / total_f;
        let q2 = 1.0 - q1;
        let mu1 = sum_lo / count_lo as f64;
        let mu2 = (sum_all - sum_lo) / count_hi as f64;
        let sigma = q1 * q2 * (mu1 - mu2) * (mu1 - mu2);
        if sigma > best_sigma {
            best_sigma = sigma;
            best_t = t as u8;
        }
    }
    Ok(best_t)
}

/// Binarize with Otsu's threshold, inverted polarity
///
/// # Returns
///
/// The threshold and the 1 bpp image in which pixels at or below it are
/// foreground.
pub fn threshold_otsu_inverted(pix: &Pix) -> ColorResult<(u8, Pix)> {
    let t = compute_otsu_threshold(pix)?;
    Ok((t, threshold_to_binary_inverted(pix, t)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_two_level(w: u32, h: u32, split: u32, lo: u32, hi: u32) -> Pix {
        let mut pm = PixMut::new(w, h, PixelDepth::Bit8).unwrap();
        for y in 0..h {
            for x in 0..w {
                pm.set_pixel_unchecked(x, y, if x < split { lo } else { hi });
            }
        }
        pm.into()
    }

    #[test]
    fn test_threshold_inverted() {
        let pix = create_two_level(4, 2, 2, 100, 101);
        let inverted = threshold_to_binary_inverted(&pix, 100).unwrap();
        assert_eq!(inverted.get_pixel(0, 0), Some(1));
        assert_eq!(inverted.get_pixel(3, 0), Some(0));
    }

    #[test]
    fn test_histogram() {
        let hist = gray_histogram(&create_two_level(5, 2, 3, 7, 250)).unwrap();
        assert_eq!(hist[7], 6);
        assert_eq!(hist[250], 4);
        assert_eq!(hist.iter().sum::<u64>(), 10);
    }

    #[test]
    fn test_otsu_two_levels() {
        let pix = create_two_level(10, 4, 5, 50, 200);
        assert_eq!(compute_otsu_threshold(&pix).unwrap(), 50);

        let (t, bin) = threshold_otsu_inverted(&pix).unwrap();
        assert_eq!(t, 50);
        assert_eq!(bin.get_pixel(4, 0), Some(1));
        assert_eq!(bin.get_pixel(5, 0), Some(0));
    }

    #[test]
    fn test_otsu_uniform() {
        let pix = create_two_level(4, 4, 0, 0, 90);
        assert_eq!(compute_otsu_threshold(&pix).unwrap(), 0);
    }

    #[test]
    fn test_otsu_three_levels_splits_largest_gap() {
        // 0 and 20 form one class against 240
        let mut pm = PixMut::new(30, 1, PixelDepth::Bit8).unwrap();
        for x in 0..30 {
            let v = match x {
                0..10 => 0,
                10..20 => 20,
                _ => 240,
            };
            pm.set_pixel_unchecked(x, 0, v);
        }
        let t = compute_otsu_threshold(&pm.into()).unwrap();
        assert!((20..240).contains(&t));
    }

    #[test]
    fn test_rejects_non_gray() {
        let pix = Pix::new(3, 3, PixelDepth::Bit32).unwrap();
        assert!(matches!(
            compute_otsu_threshold(&pix),
            Err(ColorError::UnsupportedDepth { actual: 32, .. })
        ));
    }
}
