#[cfg(test)]
#[path = "../../tests/unit/models/stochastic_test.rs"]
mod stochastic_test;

use super::{Postcode, ProblemInstance};
use crate::utils::Float;
use rand::Rng;
use rand_distr::{Distribution, LogNormal};
use serde::Serialize;

/// Parameters of log-normal distribution which models stochastic productivity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LogNormalParams {
    /// Mean of the underlying normal distribution.
    pub mu: Float,
    /// Standard deviation of the underlying normal distribution.
    pub sigma: Float,
}

impl LogNormalParams {
    /// Estimates parameters from the expected productivity and its scaled deviation.
    /// Returns `None` when productivity is not positive or deviation is negative.
    pub fn from_moments(productivity: Float, deviation: Float) -> Option<Self> {
        if !(productivity > 0.) || !(deviation >= 0.) {
            return None;
        }

        let variance = deviation * productivity;
        let squared = productivity * productivity;
        let phi = (variance + squared).sqrt();

        let mu = (squared / phi).ln();
        let sigma = (phi * phi / squared).ln().max(0.).sqrt();

        Some(Self { mu, sigma })
    }

    /// Returns the expected value of the distribution.
    pub fn mean(&self) -> Float {
        (self.mu + self.sigma * self.sigma / 2.).exp()
    }
}

impl ProblemInstance {
    /// Returns log-normal parameters of the fleet productivity in the postcode.
    pub fn productivity_distribution(&self, postcode: Postcode, fleet_id: &str) -> Option<LogNormalParams> {
        let productivity = self.productivity().get(&postcode)?.get(fleet_id)?;
        let deviation = self.deviation().get(&postcode)?.get(fleet_id)?;

        LogNormalParams::from_moments(*productivity, *deviation)
    }

    /// Samples stochastic productivity of the fleet in the postcode.
    pub fn sample_productivity<R: Rng + ?Sized>(
        &self,
        postcode: Postcode,
        fleet_id: &str,
        rng: &mut R,
    ) -> Option<Float> {
        let params = self.productivity_distribution(postcode, fleet_id)?;
        let distribution = LogNormal::new(params.mu, params.sigma).ok()?;

        Some(distribution.sample(rng))
    }
}
