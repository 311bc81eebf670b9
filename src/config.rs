//! Compile-time site settings. Server settings (address, asset dir) come from
//! `[package.metadata.leptos]` and `LEPTOS_*` variables instead.

use std::time::Duration;

use chrono::{DateTime, Datelike, Utc};

pub const RESUME_PATH: &str = "/resume.pdf";
pub const PROFILE_IMAGE_PATH: &str = "/profile-image.jpg";

/// Stand-in for a real mail backend: how long a send "takes".
pub const SIMULATED_SEND_DELAY: Duration = Duration::from_millis(1000);

pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Google Analytics 4 measurement id, read from `GA_TRACKING_ID` at build time.
pub fn analytics_id() -> Option<&'static str> {
    option_env!("GA_TRACKING_ID").filter(|id| !id.trim().is_empty())
}

/// Year shown in the footer. Taken from the build so server and client agree.
pub fn copyright_year() -> i32 {
    build_year(BUILD_TIME).unwrap_or_else(|| Utc::now().year())
}

fn build_year(stamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(stamp).ok().map(|t| t.year())
}
