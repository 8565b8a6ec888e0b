use pulse_types::{AnalyticsReport, PlatformSeries};

use crate::store::Dataset;

/// Width of the "recent" chart window, in days.
pub const TREND_WINDOW_DAYS: usize = 7;

/// Reshape the 30-day sample set into the chart view: per-platform engagement
/// series over the trailing window, oldest value first, plus shared date
/// labels. Labels and values come from the same sample dates, so they stay
/// aligned by construction.
pub fn build_report(data: &Dataset) -> AnalyticsReport {
    let mut dates: Vec<_> = data.samples.iter().map(|s| s.date).collect();
    dates.sort_unstable();
    dates.dedup();
    let window_start = dates.len().saturating_sub(TREND_WINDOW_DAYS);
    let dates: Vec<String> = dates[window_start..]
        .iter()
        .map(|d| d.format("%m/%d").to_string())
        .collect();

    let platforms = data
        .accounts
        .iter()
        .map(|account| {
            // Samples are stored in ascending date order, so the window is
            // the tail of the per-platform series.
            let engagement: Vec<f64> = data
                .samples
                .iter()
                .filter(|s| s.platform.name() == account.name)
                .map(|s| s.engagement)
                .collect();
            let window_start = engagement.len().saturating_sub(TREND_WINDOW_DAYS);
            PlatformSeries {
                name: account.name.clone(),
                color: account.color.clone(),
                engagement: engagement[window_start..].to_vec(),
                followers: account.followers,
            }
        })
        .collect();

    AnalyticsReport { dates, platforms }
}
