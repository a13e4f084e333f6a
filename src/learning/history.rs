//! External collaborators: historical outcomes in, learned weights out.

use async_trait::async_trait;

use crate::scoring::WeightTable;

use super::error::LearningError;
use super::types::TrainingSample;

/// Source of historical (signals, ranking) pairs for one workspace.
#[async_trait]
pub trait PerformanceHistory: Send + Sync {
    async fn fetch_samples(&self, workspace_id: &str)
    -> Result<Vec<TrainingSample>, LearningError>;
}

/// Sink for a successfully learned weight table. Invoked only after training
/// succeeds; no failure path writes anything.
#[async_trait]
pub trait WeightStore: Send + Sync {
    async fn apply_weights(
        &self,
        workspace_id: &str,
        weights: &WeightTable,
    ) -> Result<(), LearningError>;
}

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockPerformanceHistory, MockWeightStore};

#[cfg(any(test, feature = "mock"))]
mod mock {
    use parking_lot::Mutex;

    use super::*;

    /// Serves a fixed set of samples, or a configured failure.
    #[derive(Debug, Default)]
    pub struct MockPerformanceHistory {
        samples: Vec<TrainingSample>,
        fail: bool,
    }

    impl MockPerformanceHistory {
        pub fn with_samples(samples: Vec<TrainingSample>) -> Self {
            Self {
                samples,
                fail: false,
            }
        }

        /// A history whose fetch always fails.
        pub fn failing() -> Self {
            Self {
                samples: Vec::new(),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl PerformanceHistory for MockPerformanceHistory {
        async fn fetch_samples(
            &self,
            workspace_id: &str,
        ) -> Result<Vec<TrainingSample>, LearningError> {
            if self.fail {
                return Err(LearningError::FetchFailed {
                    workspace_id: workspace_id.to_string(),
                    reason: "mock outage".to_string(),
                });
            }
            Ok(self.samples.clone())
        }
    }

    /// Records applied weight tables instead of persisting them.
    #[derive(Debug, Default)]
    pub struct MockWeightStore {
        applied: Mutex<Vec<(String, WeightTable)>>,
    }

    impl MockWeightStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Everything applied so far, in order.
        pub fn applied(&self) -> Vec<(String, WeightTable)> {
            self.applied.lock().clone()
        }
    }

    #[async_trait]
    impl WeightStore for MockWeightStore {
        async fn apply_weights(
            &self,
            workspace_id: &str,
            weights: &WeightTable,
        ) -> Result<(), LearningError> {
            self.applied
                .lock()
                .push((workspace_id.to_string(), weights.clone()));
            Ok(())
        }
    }
}
