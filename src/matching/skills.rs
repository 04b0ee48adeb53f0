use std::collections::HashSet;

use crate::normalize::normalize;

/// 正規化済みスキル集合（O(1) ルックアップ）
pub fn normalize_skill_set(skills: &[String]) -> HashSet<String> {
    skills.iter().map(|s| normalize(s)).collect()
}

/// 必須スキルの充足率を返す（0.0〜1.0）
///
/// An empty requirement list is vacuously satisfied: a job that lists no
/// required skills is skill-compatible with everyone. Otherwise the fraction
/// of required entries whose normalized form appears in the candidate's
/// normalized skill set; duplicate required entries each count toward the
/// denominator.
pub fn skill_match(candidate_skills: &[String], required_skills: &[String]) -> f64 {
    if required_skills.is_empty() {
        return 1.0;
    }

    let candidate_set = normalize_skill_set(candidate_skills);
    let matched = required_skills
        .iter()
        .filter(|skill| candidate_set.contains(&normalize(skill)))
        .count();

    matched as f64 / required_skills.len() as f64
}
