//! Timestamp codec
//!
//! Per-format timestamp parsing and formatting over the canonical
//! millisecond model. Parsing is deliberately lenient: the separator may be
//! a comma (SRT) or a dot (WebVTT/ASS), the hour field and the fraction are
//! both optional, and anything unrecognizable parses to `0` rather than
//! erroring. A parseable-but-mistimed entry beats aborting a whole file;
//! zero/negative durations then surface through QC for manual review.

/// Output flavor for [`format_timestamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeVariant {
    /// `HH:MM:SS,mmm`
    Srt,
    /// `HH:MM:SS.mmm`
    WebVtt,
    /// `H:MM:SS.cc` — hours unpadded, centisecond precision
    Ass,
}

/// Parse a subtitle timestamp into milliseconds.
///
/// Accepts `H:MM:SS,mmm`, `H:MM:SS.mmm`, `MM:SS.mmm` (no hours) and
/// `H:MM:SS` (no fraction). Commas are normalized to dots before matching.
/// The fraction is read as a decimal fraction of a second, so two digits
/// mean centiseconds.
///
/// Unrecognized input returns `0` — a deliberate silent fallback, not an
/// error.
#[must_use]
pub fn parse_timestamp(s: &str) -> i64 {
    let s = s.trim().replace(',', ".");

    let (clock, fraction) = match s.split_once('.') {
        Some((clock, fraction)) => (clock, Some(fraction)),
        None => (s.as_str(), None),
    };

    let fields: Vec<&str> = clock.split(':').collect();
    let (hours, minutes, seconds) = match fields.as_slice() {
        [h, m, sec] => (h.trim(), m.trim(), sec.trim()),
        [m, sec] => ("0", m.trim(), sec.trim()),
        _ => return 0,
    };

    let Ok(hours) = hours.parse::<i64>() else {
        return 0;
    };
    let Ok(minutes) = minutes.parse::<i64>() else {
        return 0;
    };
    let Ok(seconds) = seconds.parse::<i64>() else {
        return 0;
    };

    let millis = match fraction {
        Some(fraction) => match parse_fraction_ms(fraction) {
            Some(ms) => ms,
            None => return 0,
        },
        None => 0,
    };

    // Absurd field values overflow i64 milliseconds; fall back like any
    // other unrecognizable input.
    hours
        .checked_mul(3_600_000)
        .and_then(|ms| ms.checked_add(minutes.checked_mul(60_000)?))
        .and_then(|ms| ms.checked_add(seconds.checked_mul(1_000)?))
        .and_then(|ms| ms.checked_add(millis))
        .unwrap_or(0)
}

/// Read a fraction-of-a-second field as milliseconds. `"2"` is 200ms,
/// `"25"` is 250ms, `"2503"` truncates to 250ms.
fn parse_fraction_ms(fraction: &str) -> Option<i64> {
    let fraction = fraction.trim();
    if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut padded = String::from(fraction);
    padded.truncate(3);
    while padded.len() < 3 {
        padded.push('0');
    }
    padded.parse().ok()
}

/// Format milliseconds as a timestamp in the given variant.
///
/// Negative input clamps to 0 before formatting. The ASS variant truncates
/// to centiseconds; sub-centisecond precision loss on round-trip is an
/// accepted non-goal.
#[must_use]
pub fn format_timestamp(ms: i64, variant: TimeVariant) -> String {
    let ms = ms.max(0);
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    match variant {
        TimeVariant::Srt => format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}"),
        TimeVariant::WebVtt => format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}"),
        TimeVariant::Ass => {
            let centis = millis / 10;
            format!("{hours}:{minutes:02}:{seconds:02}.{centis:02}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_srt_timestamp() {
        assert_eq!(parse_timestamp("01:02:03,456"), 3_723_456);
    }

    #[test]
    fn parses_dot_delimited_equivalently() {
        assert_eq!(parse_timestamp("01:02:03.456"), parse_timestamp("01:02:03,456"));
    }

    #[test]
    fn parses_hourless_timestamp() {
        assert_eq!(parse_timestamp("05:30.250"), 330_250);
    }

    #[test]
    fn parses_fractionless_timestamp() {
        assert_eq!(parse_timestamp("1:05:30"), 3_930_000);
    }

    #[test]
    fn parses_hour_minute_second_fraction() {
        assert_eq!(parse_timestamp("1:05:30.250"), 3_930_250);
    }

    #[test]
    fn centisecond_fraction_scales_to_millis() {
        assert_eq!(parse_timestamp("0:00:01.45"), 1_450);
    }

    #[test]
    fn garbage_falls_back_to_zero() {
        assert_eq!(parse_timestamp("not a time"), 0);
        assert_eq!(parse_timestamp(""), 0);
        assert_eq!(parse_timestamp("1:2:3:4"), 0);
        assert_eq!(parse_timestamp("01:xx:03,456"), 0);
        assert_eq!(parse_timestamp("01:02:03,45x"), 0);
    }

    #[test]
    fn overflowing_fields_fall_back_to_zero() {
        assert_eq!(parse_timestamp("9000000000000000000:00:00"), 0);
        assert_eq!(parse_timestamp("0:9223372036854775807:00"), 0);
        assert_eq!(parse_timestamp(&format!("{}:00:00,000", i64::MAX)), 0);
    }

    #[test]
    fn formats_srt_and_webvtt() {
        assert_eq!(format_timestamp(3_723_456, TimeVariant::Srt), "01:02:03,456");
        assert_eq!(format_timestamp(3_723_456, TimeVariant::WebVtt), "01:02:03.456");
    }

    #[test]
    fn formats_ass_with_unpadded_hours_and_centis() {
        assert_eq!(format_timestamp(3_723_456, TimeVariant::Ass), "1:02:03.45");
        assert_eq!(format_timestamp(0, TimeVariant::Ass), "0:00:00.00");
    }

    #[test]
    fn negative_input_clamps_to_zero() {
        assert_eq!(format_timestamp(-500, TimeVariant::Srt), "00:00:00,000");
    }

    #[test]
    fn normalization_is_stable() {
        for input in ["00:00:01,500", "00:00:01.500", "0:00:01.5"] {
            assert_eq!(
                format_timestamp(parse_timestamp(input), TimeVariant::Srt),
                "00:00:01,500"
            );
        }
    }
}
