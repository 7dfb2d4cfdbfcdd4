//! Annealing configuration and cooling schedules.

/// Temperature reduction applied once per generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoolingSchedule {
    /// Linear cooling: `T_{k+1} = T_k - step`.
    Linear {
        /// Amount subtracted per generation.
        step: f64,
    },

    /// Geometric cooling: `T_{k+1} = alpha * T_k`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Linear { step: 0.1 }
    }
}

/// Configuration for the annealing acceptor.
///
/// # Examples
///
/// ```
/// use tsp_anneal::anneal::{AnnealConfig, CoolingSchedule};
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(1000.0)
///     .with_cooling(CoolingSchedule::Linear { step: 0.5 });
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Starting temperature. Higher values accept more worsening children.
    pub initial_temperature: f64,

    /// Floor the temperature is clamped to.
    ///
    /// Linear cooling reaches zero after `initial / step` generations; the
    /// floor keeps the acceptance exponent finite and of the right sign.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 5_000_000.0,
            min_temperature: 1e-6,
            cooling: CoolingSchedule::default(),
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive and finite".into());
        }
        if !self.min_temperature.is_finite() || self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive and finite".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        match self.cooling {
            CoolingSchedule::Linear { step } => {
                if !step.is_finite() || step <= 0.0 {
                    return Err(format!("linear cooling step must be positive, got {step}"));
                }
            }
            CoolingSchedule::Geometric { alpha } => {
                if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
                    return Err(format!("geometric alpha must be in (0, 1), got {alpha}"));
                }
            }
        }
        Ok(())
    }
}
