//! Feature standardization and the swappable binary classifier.

use serde::{Deserialize, Serialize};

/// Per-feature standardization: zero mean, unit variance, parameters taken
/// from the training set only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub means: Vec<f64>,
    pub std_devs: Vec<f64>,
}

impl StandardScaler {
    /// Fits means and standard deviations over `rows` (population variance).
    /// Constant features get a standard deviation of 1 so they transform to
    /// zero rather than dividing by zero.
    pub fn fit(rows: &[Vec<f64>]) -> Self {
        let feature_count = rows.first().map_or(0, Vec::len);
        let n = rows.len().max(1) as f64;

        let mut means = vec![0.0; feature_count];
        for row in rows {
            for (i, &value) in row.iter().enumerate() {
                means[i] += value;
            }
        }
        for mean in &mut means {
            *mean /= n;
        }

        let mut std_devs = vec![0.0; feature_count];
        for row in rows {
            for (i, &value) in row.iter().enumerate() {
                std_devs[i] += (value - means[i]).powi(2);
            }
        }
        for sd in &mut std_devs {
            *sd = (*sd / n).sqrt();
            if *sd < 1e-12 {
                *sd = 1.0;
            }
        }

        Self { means, std_devs }
    }

    /// Standardizes one row with the fitted parameters.
    pub fn transform(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .enumerate()
            .map(|(i, &value)| (value - self.means[i]) / self.std_devs[i])
            .collect()
    }

    /// Fits on `rows` and returns the transformed set alongside the scaler.
    pub fn fit_transform(rows: &[Vec<f64>]) -> (Self, Vec<Vec<f64>>) {
        let scaler = Self::fit(rows);
        let transformed = rows.iter().map(|r| scaler.transform(r)).collect();
        (scaler, transformed)
    }
}

/// Seam for the learned model: anything that can fit weighted binary labels
/// and emit a probability is usable by the weight learner.
pub trait BinaryClassifier: Send + Sync {
    /// Fits on standardized feature rows. `labels` are 0.0/1.0 and
    /// `sample_weights` are parallel to `rows`.
    fn fit(&mut self, rows: &[Vec<f64>], labels: &[f64], sample_weights: &[f64]);

    /// Probability of the positive class for one standardized row.
    fn predict_proba(&self, row: &[f64]) -> f64;
}

/// L2-regularized logistic regression fitted by full-batch gradient descent.
///
/// Deterministic: zero initialization and a fixed epoch count, so identical
/// inputs always produce identical models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    learning_rate: f64,
    epochs: usize,
    l2: f64,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LogisticRegression {
    pub fn new() -> Self {
        Self {
            learning_rate: 0.1,
            epochs: 500,
            l2: 1e-4,
            coefficients: Vec::new(),
            intercept: 0.0,
        }
    }

    /// Rebuilds a fitted model from stored parameters (for prediction from a
    /// persisted [`crate::learning::TrainedModel`]).
    pub fn from_parameters(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
            ..Self::new()
        }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl BinaryClassifier for LogisticRegression {
    fn fit(&mut self, rows: &[Vec<f64>], labels: &[f64], sample_weights: &[f64]) {
        let feature_count = rows.first().map_or(0, Vec::len);
        self.coefficients = vec![0.0; feature_count];
        self.intercept = 0.0;

        if rows.is_empty() {
            return;
        }

        let weight_total: f64 = sample_weights.iter().sum();
        if weight_total <= 0.0 {
            return;
        }

        for _ in 0..self.epochs {
            let mut grad = vec![0.0; feature_count];
            let mut grad_intercept = 0.0;

            for ((row, &label), &weight) in rows.iter().zip(labels).zip(sample_weights) {
                let p = self.predict_proba(row);
                let err = (p - label) * weight;
                for (g, &x) in grad.iter_mut().zip(row) {
                    *g += err * x;
                }
                grad_intercept += err;
            }

            for (c, g) in self.coefficients.iter_mut().zip(&grad) {
                *c -= self.learning_rate * (g / weight_total + self.l2 * *c);
            }
            self.intercept -= self.learning_rate * grad_intercept / weight_total;
        }
    }

    fn predict_proba(&self, row: &[f64]) -> f64 {
        let z: f64 = self
            .coefficients
            .iter()
            .zip(row)
            .map(|(c, x)| c * x)
            .sum::<f64>()
            + self.intercept;
        sigmoid(z)
    }
}

#[inline]
fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaler_zero_mean_unit_variance() {
        let rows = vec![vec![1.0, 10.0], vec![3.0, 10.0], vec![5.0, 10.0]];
        let (scaler, transformed) = StandardScaler::fit_transform(&rows);

        assert_eq!(scaler.means, vec![3.0, 10.0]);
        // Second feature is constant: transforms to zero, no division by zero.
        for row in &transformed {
            assert_eq!(row[1], 0.0);
        }
        let mean: f64 = transformed.iter().map(|r| r[0]).sum::<f64>() / 3.0;
        assert!(mean.abs() < 1e-9);
    }

    #[test]
    fn test_logistic_regression_separates_trivial_data() {
        // Positive class sits at x=1, negative at x=-1.
        let rows = vec![vec![1.0], vec![1.0], vec![-1.0], vec![-1.0]];
        let labels = vec![1.0, 1.0, 0.0, 0.0];
        let weights = vec![1.0; 4];

        let mut model = LogisticRegression::new();
        model.fit(&rows, &labels, &weights);

        assert!(model.predict_proba(&[1.0]) > 0.8);
        assert!(model.predict_proba(&[-1.0]) < 0.2);
        assert!(model.coefficients()[0] > 0.0);
    }

    #[test]
    fn test_uninformative_features_leave_zero_coefficients() {
        // Identical rows with mixed labels: no gradient direction exists.
        let rows = vec![vec![0.0]; 4];
        let labels = vec![1.0, 0.0, 1.0, 0.0];
        let weights = vec![1.0; 4];

        let mut model = LogisticRegression::new();
        model.fit(&rows, &labels, &weights);

        assert!(model.coefficients()[0].abs() < 1e-9);
        let p = model.predict_proba(&[0.0]);
        assert!((p - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_from_parameters_round_trip() {
        let model = LogisticRegression::from_parameters(vec![2.0, -1.0], 0.5);
        let p = model.predict_proba(&[1.0, 1.0]);
        // sigmoid(2 - 1 + 0.5) = sigmoid(1.5)
        assert!((p - 1.0 / (1.0 + (-1.5f64).exp())).abs() < 1e-12);
    }
}
