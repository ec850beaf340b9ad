//! The retrieval fuser.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use loanassist_protocols::{
    Arm, EmbeddingProvider, FuseError, IndexError, KeywordFilter, KeywordStore, QaRecord,
    QueryRequest, RankedAnswer, Source, VectorIndex,
};

use crate::keywords::query_tokens;
use crate::merge::{keyword_confidence, merge_ranked};

/// What to do when one retrieval arm fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArmFailurePolicy {
    /// Fail the whole request (default).
    #[default]
    Fail,
    /// Return the healthy arm's results and report the failed arm.
    Degrade,
}

impl std::str::FromStr for ArmFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fail" => Ok(ArmFailurePolicy::Fail),
            "degrade" => Ok(ArmFailurePolicy::Degrade),
            other => Err(format!("unknown arm failure policy: {}", other)),
        }
    }
}

/// Configuration for the fuser.
#[derive(Debug, Clone)]
pub struct FuserConfig {
    /// Cap on fused results.
    pub max_results: usize,
    /// Nearest neighbors fetched from the vector index. Must be at least
    /// `max_results` for the vector arm to be able to fill the cap.
    pub top_k: usize,
    /// Cap on keyword store lookups.
    pub keyword_limit: usize,
    /// Bound on each retrieval arm.
    pub arm_timeout: Duration,
    /// Per-arm failure policy.
    pub on_arm_failure: ArmFailurePolicy,
}

impl Default for FuserConfig {
    fn default() -> Self {
        Self {
            max_results: 3,
            top_k: 3,
            keyword_limit: 10,
            arm_timeout: Duration::from_secs(10),
            on_arm_failure: ArmFailurePolicy::Fail,
        }
    }
}

/// Diagnostic for a failed arm in degraded mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmFailure {
    pub arm: Arm,
    pub message: String,
}

/// The fused response: ranked answers plus per-arm diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuseOutcome {
    pub answers: Vec<RankedAnswer>,

    /// Arms that failed under the degrade policy. Empty on a fully
    /// healthy response.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degraded: Vec<ArmFailure>,
}

/// Fuses keyword and vector retrieval into one ranked answer list.
///
/// Stateless across calls: every request constructs its candidates from
/// scratch and nothing outlives the response. Collaborator handles are
/// long-lived and shared read-only.
pub struct Fuser {
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndex>,
    store: Arc<dyn KeywordStore>,
    config: FuserConfig,
}

impl Fuser {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn VectorIndex>,
        store: Arc<dyn KeywordStore>,
        config: FuserConfig,
    ) -> Self {
        Self {
            embedder,
            index,
            store,
            config,
        }
    }

    /// Answer a query by fusing both retrieval arms.
    ///
    /// Rejects empty query text before contacting any collaborator. The two
    /// arms run concurrently and are joined before the merge; the merged
    /// order is always vector-first.
    pub async fn fuse(&self, request: &QueryRequest) -> Result<FuseOutcome, FuseError> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(FuseError::EmptyQuery);
        }
        let user = request.user.as_deref();

        let (vector_arm, keyword_arm) =
            tokio::join!(self.vector_arm(text, user), self.keyword_arm(text, user));

        let mut degraded = Vec::new();
        let vector = self.resolve_arm(Arm::Vector, vector_arm, &mut degraded)?;
        let keyword = self.resolve_arm(Arm::Keyword, keyword_arm, &mut degraded)?;

        debug!(
            vector = vector.len(),
            keyword = keyword.len(),
            "merging retrieval arms"
        );

        let answers = merge_ranked(vector, keyword, self.config.max_results);
        Ok(FuseOutcome { answers, degraded })
    }

    fn resolve_arm(
        &self,
        arm: Arm,
        outcome: Result<Vec<RankedAnswer>, FuseError>,
        degraded: &mut Vec<ArmFailure>,
    ) -> Result<Vec<RankedAnswer>, FuseError> {
        match outcome {
            Ok(answers) => Ok(answers),
            Err(err) => match self.config.on_arm_failure {
                ArmFailurePolicy::Fail => Err(err),
                ArmFailurePolicy::Degrade => {
                    warn!(%arm, error = %err, "retrieval arm failed, degrading");
                    degraded.push(ArmFailure {
                        arm,
                        message: err.to_string(),
                    });
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Semantic arm: embed the verbatim text and query the index.
    async fn vector_arm(
        &self,
        text: &str,
        user: Option<&str>,
    ) -> Result<Vec<RankedAnswer>, FuseError> {
        let work = async {
            let embedding = self.embedder.embed(text).await?;

            let expected = self.index.dimension();
            if embedding.dimension != expected {
                return Err(FuseError::Index(IndexError::DimensionMismatch {
                    expected,
                    actual: embedding.dimension,
                }));
            }

            let matches = self
                .index
                .query(&embedding.vector, self.config.top_k, true)
                .await?;

            let mut answers = Vec::with_capacity(matches.len());
            for scored in matches {
                let Some(metadata) = scored.metadata else {
                    warn!(id = %scored.id, "index match missing metadata echo, skipping");
                    continue;
                };
                let record = match QaRecord::from_metadata(scored.id, &metadata) {
                    Ok(record) => record,
                    Err(err) => {
                        warn!(error = %err, "quarantining invalid index match");
                        continue;
                    }
                };
                // The index cannot filter by user natively; post-filter.
                if let Some(user) = user {
                    if record.user != user {
                        continue;
                    }
                }
                answers.push(RankedAnswer {
                    question: record.question,
                    answer: record.answer,
                    user: record.user,
                    metadata: record.metadata,
                    score: scored.score,
                    source: Source::Vector,
                });
            }
            Ok(answers)
        };

        self.bounded(Arm::Vector, work).await
    }

    /// Keyword arm: token filter over the store's question field.
    async fn keyword_arm(
        &self,
        text: &str,
        user: Option<&str>,
    ) -> Result<Vec<RankedAnswer>, FuseError> {
        let tokens = query_tokens(text);
        if tokens.is_empty() {
            // No usable tokens: the arm yields nothing rather than
            // matching every record.
            return Ok(Vec::new());
        }

        let mut filter = KeywordFilter::new(tokens).with_limit(self.config.keyword_limit);
        if let Some(user) = user {
            filter = filter.with_user(user);
        }

        let work = async {
            let records = self.store.find(&filter).await?;
            Ok(records
                .into_iter()
                .map(|record| RankedAnswer {
                    score: keyword_confidence(&record.question, text),
                    question: record.question,
                    answer: record.answer,
                    user: record.user,
                    metadata: record.metadata,
                    source: Source::Keyword,
                })
                .collect())
        };

        self.bounded(Arm::Keyword, work).await
    }

    async fn bounded(
        &self,
        arm: Arm,
        work: impl std::future::Future<Output = Result<Vec<RankedAnswer>, FuseError>>,
    ) -> Result<Vec<RankedAnswer>, FuseError> {
        tokio::time::timeout(self.config.arm_timeout, work)
            .await
            .map_err(|_| FuseError::ArmTimeout {
                arm,
                seconds: self.config.arm_timeout.as_secs(),
            })?
    }
}

#[cfg(test)]
#[path = "fuser_tests.rs"]
mod tests;
