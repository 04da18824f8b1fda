//! Wire schema for the audit fixture resources.
//!
//! Everything here decodes straight from the fixture JSON (camelCase field
//! names) into closed types, so shape problems surface as decode errors at
//! the data-access boundary instead of leaking into consumers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub industry: String,
    pub last_audit_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub value: f64,
    pub max_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_percentage: Option<f64>,
}

impl Score {
    pub fn percent(&self) -> f64 {
        if self.max_value > 0.0 {
            self.value / self.max_value * 100.0
        } else {
            0.0
        }
    }

    pub fn band(&self) -> ScoreBand {
        let percent = self.percent();
        if percent >= 80.0 {
            ScoreBand::Excellent
        } else if percent >= 65.0 {
            ScoreBand::Good
        } else if percent >= 50.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::NeedsWork
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Self {
            value: 0.0,
            max_value: 100.0,
            trend: Some(Trend::Stable),
            change_percentage: Some(0.0),
        }
    }
}

impl Validate for Score {
    fn validate(&self) -> Result<()> {
        validate_range("score.value", self.value, 0.0, self.max_value)
    }
}

/// Qualitative rating derived from the score value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl ScoreBand {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsWork => "Needs Work",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
}

/// Issue severity, most severe first so `sort_by_key` orders issues for
/// display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(format!("unknown severity: {}", other)),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(format!("unknown priority: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl FromStr for Effort {
    type Err = String;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown effort: {}", other)),
        }
    }
}

// Fixtures are inconsistent about case ("High" vs "high"); decode these
// fields case-insensitively and always serialize lowercase.
fn case_insensitive<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = String>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    #[serde(deserialize_with = "case_insensitive")]
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    #[serde(deserialize_with = "case_insensitive")]
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub expected_impact: String,
    #[serde(deserialize_with = "case_insensitive")]
    pub effort: Effort,
}

/// One audit dimension of a brand: a score plus the findings behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditModule {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub score: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub insights: Vec<Insight>,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<Recommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl AuditModule {
    /// Issues ordered most severe first.
    pub fn issues_by_severity(&self) -> Vec<&Issue> {
        let mut issues: Vec<&Issue> = self.issues.iter().collect();
        issues.sort_by_key(|issue| issue.severity);
        issues
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub ai_visibility_score: Score,
    pub trust_score: Score,
    pub keyword_coverage: Score,
    pub last_audit_timestamp: DateTime<Utc>,
}

impl DashboardMetrics {
    /// Zeroed placeholder for shells that render something while real data
    /// is unavailable.
    pub fn fallback() -> Self {
        Self {
            ai_visibility_score: Score::default(),
            trust_score: Score::default(),
            keyword_coverage: Score::default(),
            last_audit_timestamp: Utc::now(),
        }
    }
}

impl Validate for DashboardMetrics {
    fn validate(&self) -> Result<()> {
        self.ai_visibility_score.validate()?;
        self.trust_score.validate()?;
        self.keyword_coverage.validate()?;
        Ok(())
    }
}
