use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use pulse_types::{AnalyticsSample, Platform, PlatformAccount, Post};

use crate::store::Dataset;

/// Knobs for the mock data generator. A fixed `seed` together with a fixed
/// reference instant makes generation fully reproducible.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub seed: Option<u64>,
    pub history_days: u32,
    pub post_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            history_days: 30,
            post_count: 20,
        }
    }
}

/// Generate a fresh dataset anchored at the current instant.
pub fn generate(config: &GeneratorConfig) -> Dataset {
    generate_at(config, Utc::now())
}

/// Generate a dataset anchored at an explicit instant. Everything derives
/// from `config` and `now`, so a seeded call is deterministic.
pub fn generate_at(config: &GeneratorConfig, now: DateTime<Utc>) -> Dataset {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let accounts = Platform::ALL
        .iter()
        .map(|platform| {
            let baseline = platform.baseline();
            PlatformAccount {
                name: platform.name().to_string(),
                followers: baseline.followers,
                engagement_rate: baseline.engagement_rate,
                posts_today: baseline.posts_today,
                reach: baseline.reach,
                color: platform.color().to_string(),
            }
        })
        .collect();

    // One sample per (day, platform), oldest day first so per-platform
    // series are already in chronological order.
    let today = now.date_naive();
    let mut samples = Vec::with_capacity(config.history_days as usize * Platform::ALL.len());
    for day_offset in (0..config.history_days as i64).rev() {
        let date = today - Duration::days(day_offset);
        for platform in Platform::ALL {
            let baseline = platform.baseline();
            samples.push(AnalyticsSample {
                date,
                platform,
                followers: baseline.followers + rng.gen_range(-50..=100),
                engagement: rng.gen_range(1.0..10.0),
                reach: rng.gen_range(1000..=30000),
                posts: rng.gen_range(0..=5),
            });
        }
    }

    let mut posts = Vec::with_capacity(config.post_count);
    for i in 0..config.post_count {
        let platform = *Platform::ALL
            .choose(&mut rng)
            .unwrap_or(&Platform::Facebook);
        posts.push(Post {
            id: i as u64 + 1,
            platform,
            content: format!("Sample post content for {} #{}", platform.name(), i + 1),
            timestamp: now - Duration::hours(rng.gen_range(1..=48)),
            likes: rng.gen_range(10..=500),
            comments: rng.gen_range(2..=50),
            shares: rng.gen_range(1..=25),
            engagement_rate: rng.gen_range(2.0..8.0),
        });
    }
    posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    Dataset {
        generated_at: now,
        accounts,
        samples,
        posts,
    }
}
