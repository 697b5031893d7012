// ABOUTME: Named constants for upstream endpoints, pagination, and formula parameters
// ABOUTME: Central place for the values the fetcher and enricher are calibrated with
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Upstream service endpoints and request shape.
pub mod upstream {
    /// Base URL of the StrengthLevel web application.
    pub const BASE_URL: &str = "https://my.strengthlevel.com";

    /// Path of the paginated workouts API, relative to the base URL.
    pub const WORKOUTS_API_PATH: &str = "/api/workouts";

    /// Browser-identifying user agent. The profile page serves bootstrap
    /// data only to clients that look like a browser.
    pub const USER_AGENT: &str = "Mozilla/5.0";

    /// Field selection sent with every workouts API page request.
    pub const WORKOUT_FIELDS: &str = "date,bodyweight,exercises";
    /// Per-exercise field selection.
    pub const EXERCISE_FIELDS: &str = "exercise_name,sets";
    /// Per-set field selection. `rir` is a service-provided passthrough
    /// consumed by the hard-set summary.
    pub const SET_FIELDS: &str = "weight,reps,notes,dropset,percentile,rir,time,distance";
}

/// Pagination and politeness limits.
pub mod fetch_limits {
    use std::time::Duration;

    /// Records requested per API page.
    pub const DEFAULT_PAGE_SIZE: usize = 200;

    /// Delay between consecutive page requests.
    pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(120);

    /// Timeout for the profile page request.
    pub const PROFILE_TIMEOUT: Duration = Duration::from_secs(15);

    /// Timeout for a single workouts API page request.
    pub const API_TIMEOUT: Duration = Duration::from_secs(20);

    /// Connection timeout shared by both clients.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Parameters of the rep-to-load estimation formula and derived thresholds.
pub mod formula {
    /// Additive rep offset of the inverted Epley-style formula.
    pub const REP_OFFSET: f64 = 29.0;

    /// Load multiplier of the inverted Epley-style formula.
    pub const LOAD_FACTOR: f64 = 3.33;

    /// Denominator scale of the formula.
    pub const SCALE: f64 = 100.0;

    /// Fraction of the best 1RM used as the relative-volume reference load.
    pub const RELATIVE_VOLUME_FRACTION: f64 = 0.8;

    /// Load threshold (fraction of total resistance) above which a set earns
    /// single heavy points.
    pub const HEAVY_THRESHOLD: f64 = 0.85;

    /// Load threshold above which a set earns double heavy points.
    pub const VERY_HEAVY_THRESHOLD: f64 = 0.93;

    /// Inclusive service-RIR range that counts as a hard set.
    pub const HARD_SET_RIR_RANGE: (f64, f64) = (1.0, 3.0);
}
