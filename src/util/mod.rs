//
//  imodels-client
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Display helpers used by the CLI.
//!
//! - **Time Utilities**: [`format_time`], [`format_relative_time`]
//! - **String Utilities**: [`truncate`]
//! - **Size Utilities**: [`format_size`]
//!
//! ## Example
//!
//! ```rust
//! use imodels_client::util::{format_size, truncate};
//!
//! assert_eq!(format_size(1536), "1.5 KB");
//! assert_eq!(truncate("Added bridge pillars", 10), "Added b...");
//! ```

use chrono::{DateTime, Local, Utc};

/// Formats a timestamp in the local time zone, e.g. `2021-05-28 16:17`.
pub fn format_time(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Describes how long ago `time` was, relative to `now`.
pub fn format_relative_time(time: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(*time).num_seconds();

    if diff < 0 {
        return "in the future".to_string();
    }

    let diff = diff as u64;
    let plural = |n: u64| if n == 1 { "" } else { "s" };

    if diff < 60 {
        "just now".to_string()
    } else if diff < 3600 {
        let mins = diff / 60;
        format!("{} minute{} ago", mins, plural(mins))
    } else if diff < 86400 {
        let hours = diff / 3600;
        format!("{} hour{} ago", hours, plural(hours))
    } else if diff < 2592000 {
        let days = diff / 86400;
        format!("{} day{} ago", days, plural(days))
    } else if diff < 31536000 {
        let months = diff / 2592000;
        format!("{} month{} ago", months, plural(months))
    } else {
        let years = diff / 31536000;
        format!("{} year{} ago", years, plural(years))
    }
}

/// Shortens `s` to at most `max_len` characters, ending in `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Formats a byte count with binary units.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("ünïcödé", 5), "ün...");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn test_format_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();

        assert_eq!(format_relative_time(&now, &now), "just now");
        assert_eq!(format_relative_time(&(now - Duration::minutes(1)), &now), "1 minute ago");
        assert_eq!(format_relative_time(&(now - Duration::hours(3)), &now), "3 hours ago");
        assert_eq!(format_relative_time(&(now - Duration::days(2)), &now), "2 days ago");
        assert_eq!(format_relative_time(&(now + Duration::days(1)), &now), "in the future");
    }
}
