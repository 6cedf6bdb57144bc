/// Size formatting utilities — human-readable byte counts.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting boundary.

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;

/// Format a byte count with the most appropriate binary unit.
///
/// Used for scan totals where the magnitude is unknown in advance.
pub fn format_size(bytes: u64) -> String {
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else if b < GB {
        format!("{:.1} MB", b / MB)
    } else {
        format!("{:.2} GB", b / GB)
    }
}

/// Format a byte count in kilobytes with one decimal, e.g. `"12.5 KB"`.
///
/// Image listings always use KB regardless of magnitude.
pub fn format_kb(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / KB)
}

/// Format a byte count in megabytes with one decimal, e.g. `"3.2 MB"`.
///
/// Video listings always use MB regardless of magnitude.
pub fn format_mb(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / MB)
}

/// Format a count with thousand separators.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `part` as a percentage of `whole`, or 0.0 when `whole` is zero.
pub fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_scaled() {
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_576), "1.0 MB");
        assert_eq!(format_size(1_073_741_824), "1.00 GB");
    }

    #[test]
    fn test_format_kb_fixed_unit() {
        assert_eq!(format_kb(0), "0.0 KB");
        assert_eq!(format_kb(2048), "2.0 KB");
        assert_eq!(format_kb(5 * 1_048_576), "5120.0 KB");
    }

    #[test]
    fn test_format_mb_fixed_unit() {
        assert_eq!(format_mb(0), "0.0 MB");
        assert_eq!(format_mb(1_572_864), "1.5 MB");
        assert_eq!(format_mb(1024), "0.0 MB");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(1, 4), 25.0);
        assert_eq!(percent(3, 3), 100.0);
    }
}
