use serde::{Deserialize, Serialize, Serializer};

/// Closed set of icons a career field can display. Serializes as the
/// icon-set handle the frontend renders directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldIcon {
    Code,
    Heart,
    TrendingUp,
    GraduationCap,
    Megaphone,
    Cog,
}

impl FieldIcon {
    pub fn handle(self) -> &'static str {
        match self {
            FieldIcon::Code => "code",
            FieldIcon::Heart => "heart",
            FieldIcon::TrendingUp => "trending-up",
            FieldIcon::GraduationCap => "graduation-cap",
            FieldIcon::Megaphone => "megaphone",
            FieldIcon::Cog => "cog",
        }
    }
}

impl Serialize for FieldIcon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.handle())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

/// Direction of the job market. Shared by curated data and AI insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Growing,
    Stable,
    Declining,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobRole {
    pub title: &'static str,
    pub description: &'static str,
    pub experience_level: ExperienceLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub technical: Vec<&'static str>,
    pub soft: Vec<&'static str>,
}

/// Display strings such as "$130,000 - $180,000+", not numbers.
#[derive(Debug, Clone, Serialize)]
pub struct SalaryRange {
    pub entry: &'static str,
    pub mid: &'static str,
    pub senior: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct GrowthOutlook {
    pub trend: Trend,
    pub percentage: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerField {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: FieldIcon,
    pub short_description: &'static str,
    pub description: &'static str,
    pub job_roles: Vec<JobRole>,
    pub skills: SkillCategory,
    pub salary_ranges: SalaryRange,
    pub growth_outlook: GrowthOutlook,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_handles() {
        assert_eq!(FieldIcon::TrendingUp.handle(), "trending-up");
        assert_eq!(FieldIcon::GraduationCap.handle(), "graduation-cap");
    }

    #[test]
    fn test_icon_serializes_as_handle() {
        for icon in [
            FieldIcon::Code,
            FieldIcon::Heart,
            FieldIcon::TrendingUp,
            FieldIcon::GraduationCap,
            FieldIcon::Megaphone,
            FieldIcon::Cog,
        ] {
            let json = serde_json::to_value(icon).unwrap();
            assert_eq!(json, serde_json::Value::String(icon.handle().to_string()));
        }
    }

    #[test]
    fn test_trend_serde_matches_remote_vocabulary() {
        let trend: Trend = serde_json::from_str(r#""Declining""#).unwrap();
        assert_eq!(trend, Trend::Declining);
        assert!(serde_json::from_str::<Trend>(r#""Booming""#).is_err());
    }
}
