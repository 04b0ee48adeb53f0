use serde::{Deserialize, Serialize};

use super::{location::location_match, skills::skill_match, weights::Weights};
use super::weights::DEFAULT_WEIGHTS;
use crate::normalize::normalize_opt;
use crate::salary::{default_salary_separator, extract_salary_with_separator};
use crate::{Candidate, Job};

pub const REASON_SKILLS: &str = "Strong skill alignment";
pub const REASON_LOCATION: &str = "Location match";
pub const REASON_WORK_MODE: &str = "Preferred work mode";
pub const REASON_SALARY: &str = "Salary within range";
pub const REASON_EXPERIENCE: &str = "Experience level match";

#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub weights: Weights,
    /// Glyph separating the two sides of a salary-range string.
    pub salary_separator: char,
    /// Minimum skill points before the skill reason is reported.
    pub skill_reason_threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            salary_separator: default_salary_separator(),
            skill_reason_threshold: 25.0,
        }
    }
}

/// 単一ジョブ×単一候補者のスコアリング結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub job_id: i64,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    /// Aggregate score, 0–100 inclusive.
    pub score: u32,
    /// Explanations for contributing factors, in factor-evaluation order.
    pub reasons: Vec<String>,
}

struct FactorResult {
    points: f64,
    reason: Option<&'static str>,
}

pub struct MatchScorer {
    config: MatchingConfig,
}

impl MatchScorer {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn default() -> Self {
        Self::new(MatchingConfig::default())
    }

    /// 総合スコア計算（固定順で因子を評価し、理由を同順で付与する）
    ///
    /// Missing fields never abort scoring; they just contribute nothing.
    pub fn score(&self, job: &Job, candidate: &Candidate) -> MatchResult {
        let factors = [
            self.score_skills(job, candidate),
            self.score_location(job, candidate),
            self.score_work_mode(job, candidate),
            self.score_salary(job, candidate),
            self.score_experience(job, candidate),
        ];

        let mut total = 0.0;
        let mut reasons = Vec::new();
        for factor in factors {
            total += factor.points;
            if let Some(reason) = factor.reason {
                reasons.push(reason.to_string());
            }
        }

        MatchResult {
            job_id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            score: (total.round() as u32).min(100),
            reasons,
        }
    }

    fn score_skills(&self, job: &Job, candidate: &Candidate) -> FactorResult {
        let fraction = skill_match(&candidate.skills, &job.skills);
        let points = fraction * self.config.weights.skills;

        FactorResult {
            points,
            reason: (points > self.config.skill_reason_threshold).then_some(REASON_SKILLS),
        }
    }

    fn score_location(&self, job: &Job, candidate: &Candidate) -> FactorResult {
        let matched = location_match(
            job.location.as_deref().unwrap_or(""),
            candidate.preferences.location.as_deref().unwrap_or(""),
        );
        self.all_or_nothing(matched, self.config.weights.location, REASON_LOCATION)
    }

    fn score_work_mode(&self, job: &Job, candidate: &Candidate) -> FactorResult {
        let matched = normalize_opt(job.job_type.as_deref())
            == normalize_opt(candidate.preferences.job_type.as_deref());
        self.all_or_nothing(matched, self.config.weights.work_mode, REASON_WORK_MODE)
    }

    /// 給与判定：ジョブの下限が候補者の希望レンジに入るか（上限は見ない）
    fn score_salary(&self, job: &Job, candidate: &Candidate) -> FactorResult {
        let separator = self.config.salary_separator;
        let (job_min, _job_max) =
            extract_salary_with_separator(job.salary_range.as_deref().unwrap_or(""), separator);
        let (pref_min, pref_max) = extract_salary_with_separator(
            candidate.preferences.salary_range.as_deref().unwrap_or(""),
            separator,
        );

        let matched = pref_min <= job_min && job_min <= pref_max;
        self.all_or_nothing(matched, self.config.weights.salary, REASON_SALARY)
    }

    fn score_experience(&self, job: &Job, candidate: &Candidate) -> FactorResult {
        let matched = normalize_opt(job.experience_level.as_deref())
            == normalize_opt(candidate.experience_level.as_deref());
        self.all_or_nothing(matched, self.config.weights.experience, REASON_EXPERIENCE)
    }

    fn all_or_nothing(&self, matched: bool, weight: f64, reason: &'static str) -> FactorResult {
        FactorResult {
            points: if matched { weight } else { 0.0 },
            reason: matched.then_some(reason),
        }
    }
}

/// デフォルト設定でのスコア計算
pub fn match_job_to_candidate(job: &Job, candidate: &Candidate) -> MatchResult {
    MatchScorer::default().score(job, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CandidatePreferences;

    fn base_job() -> Job {
        Job {
            id: 1,
            title: Some("Backend Engineer".into()),
            company: Some("Acme".into()),
            location: Some("Remote - US".into()),
            job_type: Some("Remote".into()),
            salary_range: Some("70000–85000".into()),
            experience_level: Some("Mid".into()),
            skills: vec!["Python".into()],
        }
    }

    fn base_candidate() -> Candidate {
        Candidate {
            id: 10,
            name: Some("Sam".into()),
            skills: vec!["Python".into(), "SQL".into()],
            experience_level: Some("Mid".into()),
            auto_apply: true,
            preferences: CandidatePreferences {
                location: Some("Remote".into()),
                job_type: Some("Remote".into()),
                salary_range: Some("60000–90000".into()),
            },
        }
    }

    #[test]
    fn full_match_scores_hundred_with_all_reasons_in_order() {
        let result = match_job_to_candidate(&base_job(), &base_candidate());

        assert_eq!(result.score, 100);
        assert_eq!(
            result.reasons,
            vec![
                REASON_SKILLS.to_string(),
                REASON_LOCATION.to_string(),
                REASON_WORK_MODE.to_string(),
                REASON_SALARY.to_string(),
                REASON_EXPERIENCE.to_string(),
            ]
        );
        assert_eq!(result.job_id, 1);
        assert_eq!(result.title.as_deref(), Some("Backend Engineer"));
        assert_eq!(result.company.as_deref(), Some("Acme"));
        assert_eq!(result.location.as_deref(), Some("Remote - US"));
    }

    #[test]
    fn half_skill_match_contributes_points_but_no_reason() {
        let mut job = base_job();
        job.skills = vec!["Python".into(), "Kubernetes".into()];

        let result = match_job_to_candidate(&job, &base_candidate());

        // 20 skill points is below the 25-point reason threshold.
        assert_eq!(result.score, 80);
        assert!(!result.reasons.contains(&REASON_SKILLS.to_string()));
        assert!(result.reasons.contains(&REASON_LOCATION.to_string()));
    }

    #[test]
    fn salary_check_ignores_job_maximum() {
        let mut job = base_job();
        job.salary_range = Some("70000–200000".into());

        let result = match_job_to_candidate(&job, &base_candidate());
        assert!(result.reasons.contains(&REASON_SALARY.to_string()));
    }

    #[test]
    fn job_minimum_below_preference_window_fails_salary_factor() {
        let mut job = base_job();
        job.salary_range = Some("50000–85000".into());

        let result = match_job_to_candidate(&job, &base_candidate());
        assert_eq!(result.score, 85);
        assert!(!result.reasons.contains(&REASON_SALARY.to_string()));
    }

    #[test]
    fn both_job_types_missing_counts_as_work_mode_match() {
        let mut job = base_job();
        job.job_type = None;
        let mut candidate = base_candidate();
        candidate.preferences.job_type = None;

        let result = match_job_to_candidate(&job, &candidate);
        assert!(result.reasons.contains(&REASON_WORK_MODE.to_string()));
    }

    #[test]
    fn empty_records_still_produce_a_result() {
        let result = match_job_to_candidate(&Job::default(), &Candidate::default());

        // Vacuous skill match (40), empty locations match (20), empty work
        // modes match (15), (0,0) salary windows match (15), empty
        // experience levels match (10).
        assert_eq!(result.score, 100);
    }

    #[test]
    fn missing_candidate_preferences_reduce_score_without_error() {
        let mut candidate = base_candidate();
        candidate.preferences = CandidatePreferences::default();
        candidate.experience_level = None;

        let result = match_job_to_candidate(&base_job(), &candidate);

        // Skills 40 + vacuous-location 20; the job's concrete work mode,
        // salary minimum and experience level no longer line up.
        assert_eq!(result.score, 60);
        assert_eq!(
            result.reasons,
            vec![REASON_SKILLS.to_string(), REASON_LOCATION.to_string()]
        );
    }

    #[test]
    fn inflated_custom_weights_are_clamped_to_hundred() {
        let config = MatchingConfig {
            weights: Weights {
                skills: 90.0,
                location: 30.0,
                work_mode: 15.0,
                salary: 15.0,
                experience: 10.0,
            },
            ..MatchingConfig::default()
        };
        let scorer = MatchScorer::new(config);

        let result = scorer.score(&base_job(), &base_candidate());
        assert_eq!(result.score, 100);
    }

    #[test]
    fn custom_separator_flows_into_salary_factor() {
        let mut job = base_job();
        job.salary_range = Some("70000-85000".into());
        let mut candidate = base_candidate();
        candidate.preferences.salary_range = Some("60000-90000".into());

        let config = MatchingConfig {
            salary_separator: '-',
            ..MatchingConfig::default()
        };
        let result = MatchScorer::new(config).score(&job, &candidate);
        assert!(result.reasons.contains(&REASON_SALARY.to_string()));
    }

    #[test]
    fn score_is_always_within_bounds() {
        let jobs = [base_job(), Job::default(), {
            let mut j = base_job();
            j.skills = vec!["Go".into(), "Scala".into(), "C".into()];
            j.location = Some("Berlin".into());
            j
        }];
        let candidates = [base_candidate(), Candidate::default()];

        for job in &jobs {
            for candidate in &candidates {
                let result = match_job_to_candidate(job, candidate);
                assert!(result.score <= 100);
            }
        }
    }
}
