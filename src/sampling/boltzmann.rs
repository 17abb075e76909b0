use crate::error::{IsingError, Result};

/// Accept only positive, finite temperatures.
pub(crate) fn validate_temperature(temperature: f64) -> Result<f64> {
    if temperature.is_finite() && temperature > 0.0 {
        Ok(temperature)
    } else {
        Err(IsingError::InvalidTemperature(temperature))
    }
}

/// Precomputed Metropolis acceptance weights at a fixed temperature.
///
/// On the square lattice a flip can only raise the energy by 4 or 8, so two
/// weights `exp(-4/T)` and `exp(-8/T)` cover every uphill move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoltzmannTable {
    temperature: f64,
    weights: [f64; 2],
}

impl BoltzmannTable {
    pub fn new(temperature: f64) -> Result<Self> {
        let temperature = validate_temperature(temperature)?;
        let beta = 1.0 / temperature;
        Ok(Self {
            temperature,
            weights: [(-4.0 * beta).exp(), (-8.0 * beta).exp()],
        })
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// The two weights, indexed by `dE / 4 - 1`.
    pub fn weights(&self) -> [f64; 2] {
        self.weights
    }

    /// Acceptance probability `min(1, exp(-dE/T))` for an energy change `dE`.
    ///
    /// Downhill and neutral moves are always accepted. The lattice only
    /// produces uphill changes of 4 and 8, which come from the table; any
    /// other value is evaluated directly.
    #[inline]
    pub fn acceptance(&self, delta_energy: i32) -> f64 {
        match delta_energy {
            de if de <= 0 => 1.0,
            4 => self.weights[0],
            8 => self.weights[1],
            de => (-(de as f64) / self.temperature).exp(),
        }
    }

    /// Weight of the smallest uphill move, `exp(-4/T)`.
    #[inline]
    pub fn noise_floor(&self) -> f64 {
        self.weights[0]
    }
}
