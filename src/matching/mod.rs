pub mod location;
pub mod pipeline;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use location::location_match;
pub use pipeline::{
    run_matching_engine, BatchConfig, CandidateMatchSummary, MatchingEngine, MatchingEngineConfig,
};
pub use scoring::{match_job_to_candidate, MatchResult, MatchScorer, MatchingConfig};
pub use skills::skill_match;
pub use weights::{Weights, DEFAULT_WEIGHTS};
