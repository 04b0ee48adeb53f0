use serde::{Deserialize, Serialize};

use super::scoring::{MatchResult, MatchScorer, MatchingConfig};
use crate::{Candidate, Job};

/// 1候補者分のバッチ結果（上位マッチのみ）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateMatchSummary {
    pub candidate_id: i64,
    pub candidate_name: Option<String>,
    pub top_matches: Vec<MatchResult>,
}

#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// 通過させる最小スコア。これ未満は除外。
    pub min_score: u32,
    /// 候補者ごとに返すマッチの最大数（スコア降順で切り詰め）
    pub max_matches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            min_score: 40,
            max_matches: 5,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchingEngineConfig {
    pub scoring: MatchingConfig,
    pub batch: BatchConfig,
}

pub struct MatchingEngine {
    scorer: MatchScorer,
    batch: BatchConfig,
}

impl MatchingEngine {
    pub fn new(config: MatchingEngineConfig) -> Self {
        Self {
            scorer: MatchScorer::new(config.scoring),
            batch: config.batch,
        }
    }

    pub fn default() -> Self {
        Self::new(MatchingEngineConfig::default())
    }

    /// 全ジョブをスコアリングし、閾値以上を降順で返す（同点はジョブ順維持）
    pub fn rank_jobs(&self, candidate: &Candidate, jobs: &[Job]) -> Vec<MatchResult> {
        let mut ranked: Vec<_> = jobs
            .iter()
            .map(|job| self.scorer.score(job, candidate))
            .filter(|result| result.score >= self.batch.min_score)
            .collect();

        // Stable sort: ties keep original job iteration order.
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(self.batch.max_matches);
        ranked
    }

    /// auto_apply 有効な候補者のみを入力順に処理する
    ///
    /// Skipped candidates produce no summary at all, not an empty one.
    pub fn run_batch(&self, jobs: &[Job], candidates: &[Candidate]) -> Vec<CandidateMatchSummary> {
        let mut summaries = Vec::new();

        for candidate in candidates {
            if !candidate.auto_apply {
                continue;
            }

            let top_matches = self.rank_jobs(candidate, jobs);
            tracing::debug!(
                candidate_id = candidate.id,
                matches = top_matches.len(),
                "ranked top matches"
            );

            summaries.push(CandidateMatchSummary {
                candidate_id: candidate.id,
                candidate_name: candidate.name.clone(),
                top_matches,
            });
        }

        tracing::info!(
            jobs = jobs.len(),
            candidates = candidates.len(),
            summaries = summaries.len(),
            "matching complete"
        );

        summaries
    }
}

/// デフォルト設定でバッチ全体を実行するエントリポイント
pub fn run_matching_engine(jobs: &[Job], candidates: &[Candidate]) -> Vec<CandidateMatchSummary> {
    MatchingEngine::default().run_batch(jobs, candidates)
}
