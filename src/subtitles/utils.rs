use std::time::Duration;

/// Format timestamp in SRT format
pub fn format_timestamp(seconds: f64) -> String {
    if seconds.is_nan() || seconds.is_infinite() || seconds < 0.0 {
        return "00:00:00,000".to_string();
    }

    let total_millis = (seconds * 1000.0).round() as u64;
    let millis = total_millis % 1000;
    let total_seconds = total_millis / 1000;
    let secs = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Build a duration from the captured fields of an SRT timestamp.
///
/// The fraction field is read as decimal digits after the separator, so `"5"` is
/// half a second and `"050"` is fifty milliseconds.
pub(crate) fn timestamp_from_parts(
    hours: &str,
    minutes: &str,
    seconds: &str,
    fraction: &str,
) -> Option<Duration> {
    let hours: u64 = hours.parse().ok()?;
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;
    if minutes > 59 || seconds > 59 || fraction.is_empty() || fraction.len() > 3 {
        return None;
    }
    let scale = 10u64.pow(3 - fraction.len() as u32);
    let millis: u64 = fraction.parse::<u64>().ok()? * scale;

    // Absurd hour fields overflow; treat them as an unparseable range.
    let total = hours
        .checked_mul(3600)?
        .checked_add(minutes * 60 + seconds)?
        .checked_mul(1000)?
        .checked_add(millis)?;
    Some(Duration::from_millis(total))
}

/// Relaxed single-byte decoding: every byte maps to the char with the same code point
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Strip a byte-order mark and fold CRLF / lone CR line endings into LF
pub(crate) fn normalize_text(raw: &str) -> String {
    let without_bom = raw
        .strip_prefix('\u{feff}')
        .or_else(|| raw.strip_prefix("\u{ef}\u{bb}\u{bf}"))
        .unwrap_or(raw);

    without_bom.replace("\r\n", "\n").replace('\r', "\n")
}

/// Whether a line is a bare cue index such as `42`
pub(crate) fn is_index_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit())
}
