//! Shared formatting utilities for money, ratios and console output

use console::Emoji;
use std::sync::atomic::{AtomicBool, Ordering};

static EMOJI_ENABLED: AtomicBool = AtomicBool::new(true);

/// Turn emoji output on or off for the whole process
pub fn set_emoji_enabled(enabled: bool) {
    EMOJI_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Emoji or its plain-text fallback, depending on [`set_emoji_enabled`]
pub fn icon(emoji: Emoji<'static, 'static>) -> &'static str {
    if EMOJI_ENABLED.load(Ordering::Relaxed) {
        emoji.0
    } else {
        emoji.1
    }
}

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Money emoji for financial figures
pub const MONEY: Emoji = Emoji("💰", "$");

/// Clock emoji for time-based figures
pub const CLOCK: Emoji = Emoji("⏱️", "t");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Format an amount with thousands separators and no decimals
///
/// # Examples
///
/// ```
/// use broker_roi::fmt::format_currency;
///
/// assert_eq!(format_currency(1_234_567.4), "$1,234,567");
/// assert_eq!(format_currency(-2_500.0), "-$2,500");
/// assert_eq!(format_currency(0.0), "$0");
/// ```
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}${}", sign, grouped)
}

/// Format a ratio as a multiple, `n/a` when undefined
///
/// ```
/// use broker_roi::fmt::format_ratio;
///
/// assert_eq!(format_ratio(Some(3.0)), "3.00x");
/// assert_eq!(format_ratio(None), "n/a");
/// ```
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.2}x", r),
        None => "n/a".to_string(),
    }
}

/// Format a percentage value, `n/a` when undefined
pub fn format_percent(pct: Option<f64>) -> String {
    match pct {
        Some(p) => format!("{:.1}%", p),
        None => "n/a".to_string(),
    }
}

/// Format an hour count
pub fn format_hours(hours: f64) -> String {
    format!("{:.0} h", hours)
}
