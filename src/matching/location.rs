use crate::normalize::normalize;

/// 勤務地の部分一致判定（双方向）
///
/// True when either normalized location contains the other as a substring,
/// so "Remote - US" matches a "remote" preference and vice versa. An empty
/// side matches everything (`contains("")` is always true): a candidate with
/// no location preference matches every job location.
pub fn location_match(job_location: &str, candidate_location: &str) -> bool {
    let job = normalize(job_location);
    let candidate = normalize(candidate_location);
    job.contains(&candidate) || candidate.contains(&job)
}
