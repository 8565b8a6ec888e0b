use serde::{Deserialize, Serialize};

/// The fixed set of social networks tracked by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Facebook,
    Instagram,
    Twitter,
    LinkedIn,
    TikTok,
}

/// Hard-coded starting figures for a platform account. Generated data
/// varies around these, it never replaces them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformBaseline {
    pub followers: i64,
    pub engagement_rate: f64,
    pub posts_today: u32,
    pub reach: i64,
}

impl Platform {
    /// Canonical ordering used everywhere a platform list is produced.
    pub const ALL: [Platform; 5] = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::Twitter,
        Platform::LinkedIn,
        Platform::TikTok,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter",
            Platform::LinkedIn => "LinkedIn",
            Platform::TikTok => "TikTok",
        }
    }

    /// Brand color used for cards and chart series.
    pub fn color(&self) -> &'static str {
        match self {
            Platform::Facebook => "#1877F2",
            Platform::Instagram => "#E4405F",
            Platform::Twitter => "#1DA1F2",
            Platform::LinkedIn => "#0A66C2",
            Platform::TikTok => "#000000",
        }
    }

    pub fn baseline(&self) -> PlatformBaseline {
        match self {
            Platform::Facebook => PlatformBaseline {
                followers: 15420,
                engagement_rate: 3.2,
                posts_today: 2,
                reach: 8500,
            },
            Platform::Instagram => PlatformBaseline {
                followers: 23150,
                engagement_rate: 4.8,
                posts_today: 3,
                reach: 12300,
            },
            Platform::Twitter => PlatformBaseline {
                followers: 8930,
                engagement_rate: 2.1,
                posts_today: 5,
                reach: 5200,
            },
            Platform::LinkedIn => PlatformBaseline {
                followers: 5670,
                engagement_rate: 5.2,
                posts_today: 1,
                reach: 3400,
            },
            Platform::TikTok => PlatformBaseline {
                followers: 45200,
                engagement_rate: 7.8,
                posts_today: 2,
                reach: 28900,
            },
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Facebook" => Some(Platform::Facebook),
            "Instagram" => Some(Platform::Instagram),
            "Twitter" => Some(Platform::Twitter),
            "LinkedIn" => Some(Platform::LinkedIn),
            "TikTok" => Some(Platform::TikTok),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_platforms_listed_once() {
        assert_eq!(Platform::ALL.len(), 5);
        for (i, a) in Platform::ALL.iter().enumerate() {
            for b in &Platform::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        for platform in Platform::ALL {
            assert_eq!(Platform::parse(platform.name()), Some(platform));
        }
        assert_eq!(Platform::parse("MySpace"), None);
    }

    #[test]
    fn test_serialized_form_matches_display_name() {
        for platform in Platform::ALL {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{}\"", platform.name()));
        }
    }

    #[test]
    fn test_instagram_baseline() {
        let baseline = Platform::Instagram.baseline();
        assert_eq!(baseline.followers, 23150);
        assert_eq!(baseline.engagement_rate, 4.8);
        assert_eq!(Platform::Instagram.color(), "#E4405F");
    }

    #[test]
    fn test_colors_are_hex() {
        for platform in Platform::ALL {
            let color = platform.color();
            assert!(color.starts_with('#'));
            assert_eq!(color.len(), 7);
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}
