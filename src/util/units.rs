//! Time formatting utilities
//!
//! Provides functions for human-readable formatting of the session
//! clock and per-answer averages.

/// Format whole seconds as a `M:SS` clock
///
/// Minutes are not capped, so long sessions keep counting up instead
/// of rolling over into hours.
///
/// # Examples
/// ```
/// use crazycolors::util::units::format_clock;
///
/// assert_eq!(format_clock(0), "0:00");
/// assert_eq!(format_clock(90), "1:30");
/// assert_eq!(format_clock(3725), "62:05");
/// ```
pub fn format_clock(total_secs: u64) -> String {
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Format an average-seconds figure for the statistics panels
///
/// # Examples
/// ```
/// use crazycolors::util::units::format_average;
///
/// assert_eq!(format_average(0), "0s");
/// assert_eq!(format_average(12), "12s");
/// ```
pub fn format_average(secs: u64) -> String {
    format!("{}s", secs)
}
