// Insight LLM prompt templates.
// All prompts for the insights module are defined here.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

pub const INSIGHT_SYSTEM: &str = JSON_ONLY_SYSTEM;

pub const INSIGHT_PROMPT_TEMPLATE: &str = r#"Analyze the current job market for {career_field} in {location}.

Provide comprehensive, real-time insights including:
1. Growth outlook (trend as "Growing", "Stable", or "Declining" and detailed description)
2. Salary ranges in INR (minimum, average, maximum for professionals with 2-5 years experience)
3. Top 5 common job roles with approximate number of current openings
4. Top 8 technical skills required (with importance level: High/Medium/Low)
5. Top 5 soft skills required (with importance level: High/Medium/Low)
6. Top 3 hiring locations in {location}
7. Market demand description (2-3 sentences about current demand and future prospects)

Return JSON in this exact structure:
{
  "growthOutlook": {
    "trend": "Growing" | "Stable" | "Declining",
    "description": "string"
  },
  "salaryRanges": {
    "min": number,
    "avg": number,
    "max": number,
    "currency": "INR"
  },
  "jobRoles": [
    {"title": "string", "count": number}
  ],
  "technicalSkills": [
    {"skill": "string", "importance": "High" | "Medium" | "Low"}
  ],
  "softSkills": [
    {"skill": "string", "importance": "High" | "Medium" | "Low"}
  ],
  "topLocations": ["string"],
  "marketDemand": "string"
}

RULES:
1. Salary figures are plain annual numbers in INR, no symbols or separators.
2. Job-role counts are whole numbers.
3. Return ONLY the JSON object, nothing else, no code fences."#;

pub fn build_insight_prompt(career_field: &str, location: &str) -> String {
    render(
        INSIGHT_PROMPT_TEMPLATE,
        &[("{career_field}", career_field), ("{location}", location)],
    )
}

/// Single-pass substitution: text coming from a value is never rescanned,
/// so user input that happens to contain a placeholder stays literal.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    'scan: while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];
        for &(placeholder, value) in values {
            if let Some(after) = rest.strip_prefix(placeholder) {
                out.push_str(value);
                rest = after;
                continue 'scan;
            }
        }
        out.push('{');
        rest = &rest[1..];
    }
    out.push_str(rest);
    out
}
