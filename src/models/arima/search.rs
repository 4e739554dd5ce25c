//! Per-column ARIMA order search by held-out error.

use crate::core::Frame;
use crate::error::{EconometricsError, Result};
use crate::models::arima::model::{ArimaOrder, FittedModel};
use rayon::prelude::*;
use tracing::{debug, trace, warn};

/// Largest differencing order the search accepts.
pub const MAX_DIFFERENCING: usize = 2;

/// Configuration for the ARIMA order search.
#[derive(Debug, Clone, PartialEq)]
pub struct ArimaConfig {
    /// Fraction of each column used for estimation; the rest is held out.
    pub train_size: f64,
    /// Sampling frequency label, kept as metadata on the fit result.
    pub frequency: String,
    /// Candidate MA orders.
    pub q_values: Vec<usize>,
    /// Maximum AR order to consider.
    pub max_p: usize,
    /// Maximum differencing order to consider.
    pub max_d: usize,
    /// Evaluate candidates on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ArimaConfig {
    fn default() -> Self {
        Self {
            train_size: 0.75,
            frequency: "B".to_string(),
            q_values: vec![0],
            max_p: 2,
            max_d: 2,
            parallel: true,
        }
    }
}

impl ArimaConfig {
    /// Set the training fraction.
    pub fn with_train_size(mut self, train_size: f64) -> Self {
        self.train_size = train_size;
        self
    }

    /// Set the frequency label.
    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = frequency.into();
        self
    }

    /// Set the candidate MA orders.
    pub fn with_q_values(mut self, q_values: Vec<usize>) -> Self {
        self.q_values = q_values;
        self
    }

    /// Set the maximum AR and differencing orders.
    pub fn with_max_orders(mut self, max_p: usize, max_d: usize) -> Self {
        self.max_p = max_p;
        self.max_d = max_d;
        self
    }

    /// Evaluate candidates sequentially.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    fn validate(&self) -> Result<()> {
        if !(self.train_size > 0.0 && self.train_size < 1.0) {
            return Err(EconometricsError::invalid(format!(
                "train_size must lie strictly between 0 and 1, got {}",
                self.train_size
            )));
        }
        if self.max_d > MAX_DIFFERENCING {
            return Err(EconometricsError::invalid(format!(
                "max_d must be at most {}, got {}",
                MAX_DIFFERENCING, self.max_d
            )));
        }
        if self.q_values.is_empty() {
            return Err(EconometricsError::invalid("q_values must not be empty"));
        }
        Ok(())
    }

    /// Every candidate order, in ascending lexicographic order.
    pub fn candidate_orders(&self) -> Vec<ArimaOrder> {
        let mut q_values = self.q_values.clone();
        q_values.sort_unstable();
        q_values.dedup();

        let mut orders = Vec::with_capacity((self.max_p + 1) * (self.max_d + 1) * q_values.len());
        for p in 0..=self.max_p {
            for d in 0..=self.max_d {
                for &q in &q_values {
                    orders.push(ArimaOrder::new(p, d, q));
                }
            }
        }
        orders
    }
}

/// Best model per column, in frame column order.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    models: Vec<(String, FittedModel)>,
    frequency: String,
}

impl FitResult {
    /// Model selected for `column`.
    pub fn get(&self, column: &str) -> Option<&FittedModel> {
        self.models
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, model)| model)
    }

    /// Frequency label supplied at fit time.
    pub fn frequency(&self) -> &str {
        &self.frequency
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Iterate over `(column, model)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FittedModel)> + '_ {
        self.models.iter().map(|(name, model)| (name.as_str(), model))
    }
}

/// ARIMA fitting engine with automatic order selection.
///
/// Each column of a frame gets its own order, chosen by one-step-ahead
/// MSE on a held-out suffix. A successful [`fit`](Arima::fit) replaces
/// the previous result wholesale; a failed one leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct Arima {
    config: ArimaConfig,
    result: Option<FitResult>,
}

impl Arima {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: ArimaConfig) -> Self {
        Self {
            config,
            result: None,
        }
    }

    pub fn config(&self) -> &ArimaConfig {
        &self.config
    }

    /// Result of the last successful fit.
    pub fn best_params(&self) -> Option<&FitResult> {
        self.result.as_ref()
    }

    pub fn is_fitted(&self) -> bool {
        self.result.is_some()
    }

    /// Select and estimate the best order for every column of `frame`.
    ///
    /// # Arguments
    /// * `frame` - Columns to model; each is searched independently
    ///
    /// # Returns
    /// The per-column fit, also kept for [`Arima::transform`]. On error the
    /// previous fit is left in place.
    #[tracing::instrument(level = "debug", skip_all, fields(columns = frame.width(), rows = frame.len()))]
    pub fn fit(&mut self, frame: &Frame) -> Result<&FitResult> {
        self.config.validate()?;

        let orders = self.config.candidate_orders();
        let n_train = (frame.len() as f64 * self.config.train_size).floor() as usize;

        let models = frame
            .columns()
            .map(|(name, values)| {
                self.select(name, values, n_train, &orders)
                    .map(|model| (name.to_string(), model))
            })
            .collect::<Result<Vec<_>>>()?;

        let result = self.result.insert(FitResult {
            models,
            frequency: self.config.frequency.clone(),
        });
        Ok(&*result)
    }

    /// Evaluate every candidate on one column and keep the best.
    fn select(
        &self,
        column: &str,
        values: &[f64],
        n_train: usize,
        orders: &[ArimaOrder],
    ) -> Result<FittedModel> {
        let evaluate = |order: &ArimaOrder| FittedModel::estimate(values, n_train, *order);
        let outcomes: Vec<Result<FittedModel>> = if self.config.parallel {
            orders.par_iter().map(evaluate).collect()
        } else {
            orders.iter().map(evaluate).collect()
        };

        let best = orders
            .iter()
            .zip(outcomes)
            .filter_map(|(order, outcome)| match outcome {
                Ok(model) => Some(model),
                Err(e) => {
                    trace!(column, order = %order, error = %e, "skipping candidate");
                    None
                }
            })
            .min_by(|a, b| {
                a.score()
                    .total_cmp(&b.score())
                    .then_with(|| a.order().cmp(&b.order()))
            });

        match best {
            Some(model) => {
                debug!(column, order = %model.order(), score = model.score(), "selected model");
                Ok(model)
            }
            None => {
                warn!(column, candidates = orders.len(), "no viable ARIMA model");
                Err(EconometricsError::NoViableModel {
                    column: column.to_string(),
                })
            }
        }
    }

    /// One-step-ahead fitted values of each column on its differenced scale.
    ///
    /// Every column of `frame` must have a fitted model. The output shares
    /// the frame's index and column order.
    pub fn transform(&self, frame: &Frame) -> Result<Frame> {
        let columns = frame
            .columns()
            .map(|(name, values)| {
                let model = self
                    .result
                    .as_ref()
                    .and_then(|result| result.get(name))
                    .ok_or_else(|| EconometricsError::NotFitted {
                        column: name.to_string(),
                    })?;
                Ok((name.to_string(), model.fitted_values(values)))
            })
            .collect::<Result<Vec<_>>>()?;

        Frame::new(frame.timestamps().to_vec(), columns)
    }
}
