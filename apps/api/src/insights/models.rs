use serde::{de, Deserialize, Deserializer, Serialize};

use crate::catalog::Trend;

/// How strongly a skill is asked for in current listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightOutlook {
    pub trend: Trend,
    pub description: String,
}

/// Annual salary figures. Kept numeric; formatting happens at response time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryFigures {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleDemand {
    pub title: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub count: u64,
}

/// Opening counts arrive as JSON numbers of any shape (`1500`, `1500.0`,
/// `1.2e3`); they are rounded to a whole count.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() || raw < 0.0 {
        return Err(de::Error::custom(format!("invalid opening count {raw}")));
    }
    Ok(raw.round() as u64)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDemand {
    pub skill: String,
    pub importance: Importance,
}

/// AI-derived market snapshot for one career field. Mirrors the JSON schema
/// the model is asked to produce, so every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerInsights {
    pub growth_outlook: InsightOutlook,
    pub salary_ranges: SalaryFigures,
    pub job_roles: Vec<RoleDemand>,
    pub technical_skills: Vec<SkillDemand>,
    pub soft_skills: Vec<SkillDemand>,
    pub top_locations: Vec<String>,
    pub market_demand: String,
}
