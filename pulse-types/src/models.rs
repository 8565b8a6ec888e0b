use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::platform::Platform;

// Custom serde module for DateTime to ensure RFC3339 string format
pub mod datetime_format {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = date.to_rfc3339();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<DateTime<Utc>>().map_err(serde::de::Error::custom)
    }
}

/// Account summary for one platform, built from the platform baseline at
/// generation time. Immutable until the next regeneration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformAccount {
    pub name: String,
    pub followers: i64,
    pub engagement_rate: f64,
    pub posts_today: u32,
    pub reach: i64,
    pub color: String,
}

/// One day of metrics for one platform. The generator emits exactly one
/// sample per (platform, day) pair over the trailing history window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSample {
    pub date: NaiveDate,
    pub platform: Platform,
    pub followers: i64,
    pub engagement: f64,
    pub reach: i64,
    pub posts: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub platform: Platform,
    pub content: String,
    #[serde(with = "datetime_format")]
    pub timestamp: DateTime<Utc>,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub engagement_rate: f64,
}

/// Chart-facing view of the trailing 7 days, one series per platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Shared date labels ("%m/%d"), oldest first.
    pub dates: Vec<String>,
    pub platforms: Vec<PlatformSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSeries {
    pub name: String,
    pub color: String,
    /// Engagement values aligned with `AnalyticsReport::dates`, oldest first.
    pub engagement: Vec<f64>,
    pub followers: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub message: String,
    #[serde(with = "datetime_format")]
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}
