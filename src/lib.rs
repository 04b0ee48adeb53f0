pub mod logging;
pub mod matching;
pub mod normalize;
pub mod salary;

use serde::{Deserialize, Serialize};

// Commonly used data models for matching functions. Records arrive from an
// external data source as camelCase JSON; every non-identity field is
// optional and absent fields default rather than failing deserialization.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    pub id: i64,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub salary_range: Option<String>,
    pub experience_level: Option<String>,
    /// Required skills. Some sources name this field `requiredSkills`;
    /// both spellings are treated identically.
    #[serde(alias = "requiredSkills")]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidatePreferences {
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub salary_range: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    pub id: i64,
    pub name: Option<String>,
    pub skills: Vec<String>,
    pub experience_level: Option<String>,
    pub auto_apply: bool,
    pub preferences: CandidatePreferences,
}
