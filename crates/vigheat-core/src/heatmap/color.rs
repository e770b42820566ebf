// crates/vigheat-core/src/heatmap/color.rs
//
// Diverging blue -> light grey -> red scale (matplotlib's "coolwarm" endpoints).

pub type Rgb = (u8, u8, u8);

pub const COOL: Rgb = (59, 76, 192);
pub const MID: Rgb = (221, 221, 221);
pub const WARM: Rgb = (180, 4, 38);

/// `t` in [0, 1]; values outside are clamped.
pub fn coolwarm(t: f64) -> Rgb {
    let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
    if t < 0.5 {
        lerp(COOL, MID, t * 2.0)
    } else {
        lerp(MID, WARM, (t - 0.5) * 2.0)
    }
}

/// Black on light cells, white on saturated ones.
pub fn label_color(bg: Rgb) -> Rgb {
    let (r, g, b) = bg;
    let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
    if luma > 140.0 {
        (0, 0, 0)
    } else {
        (255, 255, 255)
    }
}

fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}
