//! Weight learning: historical (signals, ranking) pairs → a new weight table
//! and a ranking-probability predictor.

pub mod classifier;
pub mod error;
pub mod history;
pub mod learner;
pub mod types;

#[cfg(test)]
mod tests;

pub use classifier::{BinaryClassifier, LogisticRegression, StandardScaler};
pub use error::LearningError;
#[cfg(any(test, feature = "mock"))]
pub use history::{MockPerformanceHistory, MockWeightStore};
pub use history::{PerformanceHistory, WeightStore};
pub use learner::WeightLearner;
pub use types::{
    OutcomeClass, TrainedModel, TrainingOutcome, TrainingSample, TrainingSummary,
};
