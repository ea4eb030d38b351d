//! Colour scales for engagement scores and statuses.

/// Colours offered by the team form, first one is the default
pub const TEAM_COLORS: [&str; 10] = [
    "#3B82F6", "#10B981", "#8B5CF6", "#F59E0B", "#EF4444", "#06B6D4", "#EC4899", "#6366F1",
    "#84CC16", "#F97316",
];

pub const NEUTRAL_GRAY: &str = "#6B7280";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementLevel {
    Excellent,
    Good,
    Average,
    BelowAverage,
    Poor,
}

impl EngagementLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => EngagementLevel::Excellent,
            80..=89 => EngagementLevel::Good,
            70..=79 => EngagementLevel::Average,
            60..=69 => EngagementLevel::BelowAverage,
            _ => EngagementLevel::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EngagementLevel::Excellent => "Excellent",
            EngagementLevel::Good => "Good",
            EngagementLevel::Average => "Average",
            EngagementLevel::BelowAverage => "Below Average",
            EngagementLevel::Poor => "Poor",
        }
    }

    /// Colour name, used for badge styling
    pub fn color_name(&self) -> &'static str {
        match self {
            EngagementLevel::Excellent => "green",
            EngagementLevel::Good => "blue",
            EngagementLevel::Average => "yellow",
            EngagementLevel::BelowAverage => "orange",
            EngagementLevel::Poor => "red",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            EngagementLevel::Excellent => "#10B981",
            EngagementLevel::Good => "#3B82F6",
            EngagementLevel::Average => "#F59E0B",
            EngagementLevel::BelowAverage => "#F97316",
            EngagementLevel::Poor => "#EF4444",
        }
    }
}

pub fn engagement_level(score: u32) -> EngagementLevel {
    EngagementLevel::from_score(score)
}

pub fn engagement_color(score: u32) -> &'static str {
    EngagementLevel::from_score(score).hex()
}

/// Colour for an employee or challenge status code, gray when unknown
pub fn status_color(status: &str) -> &'static str {
    match status {
        "active" => "#10B981",
        "inactive" => NEUTRAL_GRAY,
        "pending" | "paused" => "#F59E0B",
        "completed" => "#8B5CF6",
        "upcoming" => "#06B6D4",
        _ => NEUTRAL_GRAY,
    }
}

/// `#RRGGBB` to `rgba(r, g, b, alpha)`; `None` for anything else
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    let (r, g, b) = (channel(0..2)?, channel(2..4)?, channel(4..6)?);
    Some(format!("rgba({}, {}, {}, {})", r, g, b, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engagement_thresholds() {
        assert_eq!(engagement_level(95), EngagementLevel::Excellent);
        assert_eq!(engagement_level(90), EngagementLevel::Excellent);
        assert_eq!(engagement_level(89), EngagementLevel::Good);
        assert_eq!(engagement_level(70), EngagementLevel::Average);
        assert_eq!(engagement_level(60).label(), "Below Average");
        assert_eq!(engagement_level(59), EngagementLevel::Poor);
        assert_eq!(engagement_color(85), "#3B82F6");
    }

    #[test]
    fn test_status_color() {
        assert_eq!(status_color("active"), "#10B981");
        assert_eq!(status_color("completed"), "#8B5CF6");
        assert_eq!(status_color("archived"), NEUTRAL_GRAY);
    }

    #[test]
    fn test_hex_to_rgba() {
        assert_eq!(hex_to_rgba("#3B82F6", 0.1).as_deref(), Some("rgba(59, 130, 246, 0.1)"));
        assert_eq!(hex_to_rgba("#10B981", 1.0).as_deref(), Some("rgba(16, 185, 129, 1)"));
        assert_eq!(hex_to_rgba("3B82F6", 1.0), None);
        assert_eq!(hex_to_rgba("#ZZ0000", 1.0), None);
    }
}
