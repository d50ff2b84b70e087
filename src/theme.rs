//! Presentation Rules
//!
//! Fixed lookup tables keyed by categorical fields. Every table has a
//! default arm: an unknown category renders with the fallback entry,
//! never an error.

/// Icon for an activity type
pub fn activity_icon(activity_type: &str) -> &'static str {
    match activity_type {
        "Running" => "🏃",
        "Cycling" => "🚴",
        "Swimming" => "🏊",
        "Walking" => "🚶",
        "Gym" => "💪",
        "Yoga" => "🧘",
        _ => "⚡",
    }
}

/// Background gradient for an activity type
pub fn activity_gradient(activity_type: &str) -> &'static str {
    match activity_type {
        "Running" => "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
        "Cycling" => "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
        "Swimming" => "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
        "Walking" => "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
        "Gym" => "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
        "Yoga" => "linear-gradient(135deg, #fccb90 0%, #d57eeb 100%)",
        _ => "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    }
}

/// Badge class for a workout difficulty
pub fn difficulty_badge_class(difficulty: &str) -> &'static str {
    match difficulty {
        "Easy" => "badge badge-success",
        "Medium" => "badge badge-warning",
        _ => "badge badge-danger",
    }
}

/// Medal gradient for a podium rank (1-based)
pub fn medal_gradient(rank: usize) -> &'static str {
    match rank {
        1 => "linear-gradient(135deg, #ffd700 0%, #ffed4e 100%)",
        2 => "linear-gradient(135deg, #c0c0c0 0%, #e8e8e8 100%)",
        _ => "linear-gradient(135deg, #cd7f32 0%, #e8a97c 100%)",
    }
}

/// Achievement badge tier awarded from accumulated points.
///
/// Thresholds are inclusive and cumulative: an athlete above a tier's
/// threshold also qualifies for every lower tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AchievementTier {
    Iron,
    Bronze,
    Silver,
    Gold,
}

impl AchievementTier {
    /// All tiers, highest first
    pub const ALL: [AchievementTier; 4] = [
        AchievementTier::Gold,
        AchievementTier::Silver,
        AchievementTier::Bronze,
        AchievementTier::Iron,
    ];

    /// Minimum points required for this tier
    pub fn threshold(self) -> u32 {
        match self {
            AchievementTier::Gold => 1000,
            AchievementTier::Silver => 500,
            AchievementTier::Bronze => 250,
            AchievementTier::Iron => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AchievementTier::Gold => "Gold",
            AchievementTier::Silver => "Silver",
            AchievementTier::Bronze => "Bronze",
            AchievementTier::Iron => "Iron",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AchievementTier::Gold => "🥇",
            AchievementTier::Silver => "🥈",
            AchievementTier::Bronze => "🥉",
            AchievementTier::Iron => "🏅",
        }
    }

    /// Highest tier earned at a point total, if any
    pub fn top_tier(points: u32) -> Option<AchievementTier> {
        Self::ALL.into_iter().find(|tier| points >= tier.threshold())
    }

    /// Every tier earned at a point total, highest first
    pub fn tiers_for(points: u32) -> Vec<AchievementTier> {
        Self::ALL
            .into_iter()
            .filter(|tier| points >= tier.threshold())
            .collect()
    }
}

/// Format an API timestamp for display, falling back to the raw string
/// if it does not parse
pub fn format_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_activity_lookups() {
        assert_eq!(activity_icon("Running"), "🏃");
        assert_eq!(activity_icon("Yoga"), "🧘");
        assert!(activity_gradient("Swimming").contains("#43e97b"));
    }

    #[test]
    fn test_unknown_categories_resolve_to_defaults() {
        assert_eq!(activity_icon("Parkour"), "⚡");
        assert_eq!(activity_icon(""), "⚡");
        assert_eq!(activity_gradient("Parkour"), activity_gradient("Gym"));
        assert_eq!(difficulty_badge_class("Extreme"), "badge badge-danger");
    }

    #[test]
    fn test_difficulty_badges() {
        assert_eq!(difficulty_badge_class("Easy"), "badge badge-success");
        assert_eq!(difficulty_badge_class("Medium"), "badge badge-warning");
        assert_eq!(difficulty_badge_class("Hard"), "badge badge-danger");
    }

    #[test]
    fn test_tier_thresholds_are_inclusive() {
        assert_eq!(AchievementTier::top_tier(99), None);
        assert_eq!(AchievementTier::top_tier(100), Some(AchievementTier::Iron));
        assert_eq!(AchievementTier::top_tier(250), Some(AchievementTier::Bronze));
        assert_eq!(AchievementTier::top_tier(500), Some(AchievementTier::Silver));
        assert_eq!(AchievementTier::top_tier(999), Some(AchievementTier::Silver));
        assert_eq!(AchievementTier::top_tier(1000), Some(AchievementTier::Gold));
    }

    #[test]
    fn test_tiers_are_cumulative_and_monotonic() {
        assert_eq!(
            AchievementTier::tiers_for(1200),
            vec![
                AchievementTier::Gold,
                AchievementTier::Silver,
                AchievementTier::Bronze,
                AchievementTier::Iron,
            ]
        );
        assert_eq!(
            AchievementTier::tiers_for(300),
            vec![AchievementTier::Bronze, AchievementTier::Iron]
        );
        assert!(AchievementTier::tiers_for(50).is_empty());

        // Earning a tier implies every lower tier is also earned
        for points in [100, 250, 500, 1000, 5000] {
            let tiers = AchievementTier::tiers_for(points);
            if let Some(top) = AchievementTier::top_tier(points) {
                assert!(tiers.iter().all(|t| *t <= top));
                assert_eq!(
                    tiers.len(),
                    AchievementTier::ALL
                        .iter()
                        .filter(|t| **t <= top)
                        .count()
                );
            }
        }
    }

    #[test]
    fn test_format_date_falls_back_to_raw() {
        assert_eq!(
            format_date("2025-06-01T12:00:00+00:00"),
            "Jun 01, 2025"
        );
        assert_eq!(format_date("not a date"), "not a date");
    }
}
