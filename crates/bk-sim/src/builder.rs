//! Fluent builder for constructing a [`Simulation`].

use std::sync::Arc;

use bk_model::Instance;
use bk_policy::{DecisionPolicy, PolicyKind};

use crate::{SimConfig, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`Instance`] — vessels, barges, and port constants
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                        |
/// |-----------------|--------------------------------|
/// | `.config(c)`    | [`SimConfig::default()`]       |
/// | `.policy(k)`    | `PolicyKind::Greedy`           |
/// | `.seed(s)`      | `0`                            |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(instance)
///     .policy(PolicyKind::Random)
///     .seed(7)
///     .build()?;
/// let history = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    instance: Arc<Instance>,
    config:   SimConfig,
}

impl SimBuilder {
    pub fn new(instance: impl Into<Arc<Instance>>) -> Self {
        Self {
            instance: instance.into(),
            config:   SimConfig::default(),
        }
    }

    /// Replace the whole run configuration.
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn policy(mut self, policy: PolicyKind) -> Self {
        self.config.policy = policy;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validate the configuration and build the configured built-in policy.
    pub fn build(self) -> SimResult<Simulation<Box<dyn DecisionPolicy + Send>>> {
        self.config.validate()?;
        let policy = self.config.policy.build(self.config.seed);
        Simulation::new(self.instance, policy)
    }

    /// Validate the configuration but drive the run with a caller-supplied
    /// policy; `config.policy` and `config.seed` are ignored.
    pub fn build_with<P: DecisionPolicy>(self, policy: P) -> SimResult<Simulation<P>> {
        self.config.validate()?;
        Simulation::new(self.instance, policy)
    }
}
