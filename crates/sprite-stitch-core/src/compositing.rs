use image::RgbaImage;

/// Blit a sub-rectangle from `src` into `canvas` at destination (dx, dy).
///
/// - (sx, sy, sw, sh): source rectangle within `src`
/// - (dx, dy): destination top-left in `canvas`
///
/// Pixels falling outside either image are skipped rather than panicking.
pub fn blit_rgba(
    src: &RgbaImage,
    canvas: &mut RgbaImage,
    dx: u32,
    dy: u32,
    sx: u32,
    sy: u32,
    sw: u32,
    sh: u32,
) {
    let (cw, ch) = canvas.dimensions();
    let (iw, ih) = src.dimensions();
    for yy in 0..sh {
        for xx in 0..sw {
            if sx + xx >= iw || sy + yy >= ih {
                continue;
            }
            if dx + xx < cw && dy + yy < ch {
                let px = *src.get_pixel(sx + xx, sy + yy);
                canvas.put_pixel(dx + xx, dy + yy, px);
            }
        }
    }
}
