//! Painting regions into the output mask

use super::{Region, ThresholdPair};
use crate::RecogResult;
use textmask_core::{Pix, PixMut, PixelDepth};

/// Paint every estimated region's box into a fresh mask.
///
/// The mask is 8 bpp, the size of `padded`, and starts at 255. Regions
/// without an estimate are skipped. Inside
/// each box (clipped to the image) a pixel whose luma in `padded` is
/// above the region's foreground level gets the region's background
/// color, any other pixel its foreground color. Regions are painted in
/// slice order, so later boxes overwrite earlier ones.
pub fn composite_mask(
    padded: &Pix,
    regions: &[(Region, Option<ThresholdPair>)],
) -> RecogResult<Pix> {
    let (w, h) = (padded.width(), padded.height());
    let mut mask = PixMut::new(w, h, PixelDepth::Bit8)?;
    mask.set_all_arbitrary(255)?;

    for (region, t) in regions {
        let Some(t) = t else {
            continue;
        };
        let Some(clip) = region.bbox.clip(w, h) else {
            continue;
        };
        for y in clip.y..clip.bottom() {
            for x in clip.x..clip.right() {
                let value = t.paint(padded.luma_at(x, y));
                mask.set_pixel_unchecked(x as u32, y as u32, value as u32);
            }
        }
    }
    Ok(mask.into())
}
