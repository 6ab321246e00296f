//! Idle-time labels.

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Formats an elapsed duration as an idle-time label.
///
/// Bands are checked in order and every component is a floor division:
///
/// | duration        | compact   | detailed        |
/// |-----------------|-----------|-----------------|
/// | under a minute  | `{s}s`    | `idle {s}s`     |
/// | under an hour   | `{m}`     | `idle 0:{m:02}` |
/// | under a day     | `{h}:{m:02}` | `idle {h}:{m:02}` |
/// | a day or more   | `{d}d`    | `idle {d} days` |
///
/// Negative and non-finite durations are clamped to zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_interval(seconds: f64, detailed: bool) -> String {
    let whole = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    if whole < MINUTE {
        if detailed {
            format!("idle {whole}s")
        } else {
            format!("{whole}s")
        }
    } else if whole < HOUR {
        let minutes = whole / MINUTE;
        if detailed {
            format!("idle 0:{minutes:02}")
        } else {
            format!("{minutes}")
        }
    } else if whole < DAY {
        let hours = whole / HOUR;
        let minutes = (whole % HOUR) / MINUTE;
        if detailed {
            format!("idle {hours}:{minutes:02}")
        } else {
            format!("{hours}:{minutes:02}")
        }
    } else {
        let days = whole / DAY;
        if detailed {
            format!("idle {days} days")
        } else {
            format!("{days}d")
        }
    }
}
