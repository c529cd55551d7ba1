use crate::distance::DeltaE;
use crate::threshold::ThresholdPolicy;
use tracing::warn;

// Defaults for parameters
const DELTA_E_DEFAULT: DeltaE = DeltaE::Ciede2000;
const THRESHOLD_POLICY_DEFAULT: ThresholdPolicy = ThresholdPolicy::MstMaximum;

// Valid minimum of threshold values
const THRESHOLD_MINIMUM: f64 = 0.0;

/// A wrapper around the parameters used when building a similarity graph.
/// Only use if you want to change them. Otherwise use `SimilarityGraph::default_params()` to
/// build the graph with CIEDE2000 distances and the spanning tree threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphParams {
    pub(crate) metric: DeltaE,
    pub(crate) threshold_policy: ThresholdPolicy,
}

/// Builder object to set custom graph parameters.
pub struct GraphParamBuilder {
    metric: Option<DeltaE>,
    threshold_policy: Option<ThresholdPolicy>,
}

impl Default for GraphParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GraphParams {
    /// Enters the builder pattern, allowing custom parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the graph parameter builder
    pub fn builder() -> GraphParamBuilder {
        GraphParamBuilder {
            metric: None,
            threshold_policy: None,
        }
    }

    pub fn metric(&self) -> DeltaE {
        self.metric
    }

    pub fn threshold_policy(&self) -> ThresholdPolicy {
        self.threshold_policy
    }
}

impl GraphParamBuilder {

    /// Sets the color difference formula used for the distance matrix. Defaults to CIEDE2000.
    ///
    /// # Parameters
    /// * metric - the color difference formula
    ///
    /// # Returns
    /// * the graph parameter builder
    pub fn metric(mut self, metric: DeltaE) -> GraphParamBuilder {
        self.metric = Some(metric);
        self
    }

    /// Sets how the pruning threshold is derived. Defaults to the largest edge of the
    /// minimum spanning tree.
    ///
    /// # Parameters
    /// * threshold_policy - the threshold policy
    ///
    /// # Returns
    /// * the graph parameter builder
    pub fn threshold_policy(mut self, threshold_policy: ThresholdPolicy) -> GraphParamBuilder {
        let valid_policy = match threshold_policy {
            ThresholdPolicy::MstMaximum => ThresholdPolicy::MstMaximum,
            ThresholdPolicy::Floor(floor) => {
                ThresholdPolicy::Floor(GraphParamBuilder::validate_threshold(floor, "floor"))
            }
            ThresholdPolicy::Fixed(threshold) => ThresholdPolicy::Fixed(
                GraphParamBuilder::validate_threshold(threshold, "fixed threshold"),
            ),
        };
        self.threshold_policy = Some(valid_policy);
        self
    }

    /// Keeps the spanning tree threshold but never lets it drop below `floor`. Palettes of
    /// very close colors otherwise end up with almost no links.
    ///
    /// # Parameters
    /// * floor - the smallest threshold to use
    ///
    /// # Returns
    /// * the graph parameter builder
    pub fn threshold_floor(self, floor: f64) -> GraphParamBuilder {
        self.threshold_policy(ThresholdPolicy::Floor(floor))
    }

    /// Uses a fixed threshold instead of the spanning tree one.
    ///
    /// # Parameters
    /// * threshold - the threshold to prune at
    ///
    /// # Returns
    /// * the graph parameter builder
    pub fn fixed_threshold(self, threshold: f64) -> GraphParamBuilder {
        self.threshold_policy(ThresholdPolicy::Fixed(threshold))
    }

    /// Finishes the building of the graph parameters.
    ///
    /// # Returns
    /// * The completed graph parameters.
    pub fn build(self) -> GraphParams {
        GraphParams {
            metric: self.metric.unwrap_or(DELTA_E_DEFAULT),
            threshold_policy: self.threshold_policy.unwrap_or(THRESHOLD_POLICY_DEFAULT),
        }
    }

    fn validate_threshold(threshold: f64, param: &str) -> f64 {
        if threshold.is_finite() && threshold >= THRESHOLD_MINIMUM {
            threshold
        } else {
            warn!(
                "{param} ({threshold}) must be a finite distance of at least \
                {THRESHOLD_MINIMUM}. Set to {THRESHOLD_MINIMUM}."
            );
            THRESHOLD_MINIMUM
        }
    }

}
