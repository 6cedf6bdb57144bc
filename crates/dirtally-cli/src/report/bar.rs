/// Text bar rendering for report rows.
///
/// Bars are built from a single repeated glyph. Three scalings are used:
/// linear with a cap, proportional to the largest value in a table, and
/// repeated icons with a cap.

/// Glyph used for solid bars.
pub const BAR_CHAR: char = '█';

/// Cap for linear bars (one glyph per item).
pub const LINEAR_BAR_CAP: usize = 50;

/// Width of a bar scaled against the table maximum.
pub const SCALED_BAR_WIDTH: usize = 40;

/// Cap for icon bars in the per-directory media table.
pub const ICON_BAR_CAP: usize = 20;

/// One glyph per item, capped at `cap`.
pub fn linear_bar(count: u64, cap: usize) -> String {
    let len = usize::try_from(count).unwrap_or(usize::MAX).min(cap);
    BAR_CHAR.to_string().repeat(len)
}

/// `floor(count / max * width)` glyphs. Empty when `max` is zero.
pub fn scaled_bar(count: u64, max: u64, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let fraction = (count as f64 / max as f64).clamp(0.0, 1.0);
    let len = (fraction * width as f64) as usize;
    BAR_CHAR.to_string().repeat(len)
}

/// `icon` repeated once per item, capped at `cap`.
pub fn icon_bar(icon: &str, count: u64, cap: usize) -> String {
    let len = usize::try_from(count).unwrap_or(usize::MAX).min(cap);
    icon.repeat(len)
}
