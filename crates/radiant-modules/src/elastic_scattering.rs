//! Elastic scattering of background photons on cosmic-ray nuclei.
//!
//! A nucleus with Lorentz factor γ sees the photon background boosted into
//! its rest frame; elastic scattering re-emits a photon and leaves the
//! nucleus intact. The interaction rate and the distribution of the
//! background photon energy are tabulated as functions of `log10(γ)` per
//! photon field, and the rate is scaled with the Thomas–Reiche–Kuhn factor
//! `Z·N/A`.
//!
//! # Out-of-range Lorentz factors
//!
//! Outside the tabulated `log10(γ)` range of either table the module does
//! nothing: no interaction is sampled and the next step is not limited.
//! Rate and CDF lookups therefore share one policy, the same "outside the
//! grid means no contribution" rule as
//! [`interpolate_2d`](radiant_interp::interpolate_2d).
//!
//! # Several interactions in one step
//!
//! The Lorentz factor and the rate are re-evaluated after every
//! interaction, so each draw sees the energy left by the previous one.
//! Anti-nuclei scatter like their matter counterparts.

use std::fmt;
use std::sync::Arc;

use radiant_core::id::PHOTON;
use radiant_core::{Candidate, DataPaths, ModuleError, ParticleState};
use radiant_interp::{CdfTable, RateTable};
use radiant_module::Module;
use rand::Rng;

use crate::config::ConfigError;
use crate::tables::{read_cdf_table, read_rate_table};

/// Directory below the data root holding this module's tables.
pub const TABLE_DIR: &str = "ElasticScattering";

/// Background photon field a nucleus scatters on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhotonField {
    /// Cosmic microwave background.
    Cmb,
    /// Infrared background.
    Irb,
}

impl PhotonField {
    /// Tag used in table file names.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Cmb => "CMB",
            Self::Irb => "IRB",
        }
    }
}

impl fmt::Display for PhotonField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Rate and photon-energy CDF for one photon field.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionTables {
    rate: RateTable,
    cdf: CdfTable,
}

impl InteractionTables {
    /// Pair already validated tables.
    pub fn new(rate: RateTable, cdf: CdfTable) -> Self {
        Self { rate, cdf }
    }

    /// Load `rate_<FIELD>.txt` and `cdf_<FIELD>.txt` from
    /// [`TABLE_DIR`] below the data root.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Table`] if either file is missing or malformed.
    pub fn load(field: PhotonField, paths: &DataPaths) -> Result<Self, ConfigError> {
        let dir = paths.file(TABLE_DIR);
        let rate = read_rate_table(&dir.join(format!("rate_{}.txt", field.tag())))?;
        let cdf = read_cdf_table(&dir.join(format!("cdf_{}.txt", field.tag())))?;
        log::debug!(
            "loaded elastic scattering tables for {field} from {}",
            dir.display()
        );
        Ok(Self { rate, cdf })
    }

    /// The interaction rate table \[1/m\].
    pub fn rate_table(&self) -> &RateTable {
        &self.rate
    }

    /// The background photon energy CDF.
    pub fn cdf_table(&self) -> &CdfTable {
        &self.cdf
    }

    /// Whether both tables cover `lg = log10(γ)`.
    pub fn covers(&self, lg: f64) -> bool {
        let axis = self.cdf.lg_axis();
        self.rate.contains(lg) && lg >= axis[0] && lg <= axis[axis.len() - 1]
    }
}

/// Interaction-stage module sampling elastic photon scattering on nuclei.
///
/// Tables are shared behind an `Arc`, so cloning the module is cheap.
#[derive(Clone, Debug)]
pub struct ElasticScattering {
    photon_field: PhotonField,
    tables: Arc<InteractionTables>,
    have_photons: bool,
}

impl ElasticScattering {
    /// Module for `photon_field` using `tables`. Photon secondaries are off.
    pub fn new(photon_field: PhotonField, tables: InteractionTables) -> Self {
        Self {
            photon_field,
            tables: Arc::new(tables),
            have_photons: false,
        }
    }

    /// Load the tables for `photon_field` from the data root.
    ///
    /// # Errors
    ///
    /// See [`InteractionTables::load`].
    pub fn from_data_dir(photon_field: PhotonField, paths: &DataPaths) -> Result<Self, ConfigError> {
        Ok(Self::new(photon_field, InteractionTables::load(photon_field, paths)?))
    }

    /// Builder-style [`set_have_photons`](Self::set_have_photons).
    pub fn with_photons(mut self, have_photons: bool) -> Self {
        self.have_photons = have_photons;
        self
    }

    /// The photon field in use.
    pub fn photon_field(&self) -> PhotonField {
        self.photon_field
    }

    /// The tables in use.
    pub fn tables(&self) -> &InteractionTables {
        &self.tables
    }

    /// Whether scattered photons are spawned as secondaries.
    pub fn have_photons(&self) -> bool {
        self.have_photons
    }

    /// Enable or disable photon secondaries.
    pub fn set_have_photons(&mut self, have_photons: bool) {
        self.have_photons = have_photons;
    }

    /// Switch to another photon field, loading its tables.
    ///
    /// On error the module keeps its current field and tables.
    ///
    /// # Errors
    ///
    /// See [`InteractionTables::load`].
    pub fn set_photon_field(
        &mut self,
        photon_field: PhotonField,
        paths: &DataPaths,
    ) -> Result<(), ConfigError> {
        let tables = InteractionTables::load(photon_field, paths)?;
        self.photon_field = photon_field;
        self.tables = Arc::new(tables);
        Ok(())
    }

    /// Interaction rate \[1/m\] for `state`; zero for non-nuclei and
    /// Lorentz factors outside the tables.
    pub fn interaction_rate(&self, state: &ParticleState) -> f64 {
        let a = state.mass_number();
        let z = state.charge_number().abs();
        if a <= 0 || !radiant_core::is_nucleus(state.id()) {
            return 0.0;
        }
        let lg = state.lorentz_factor().log10();
        if !self.tables.covers(lg) {
            return 0.0;
        }
        let n = a - z;
        self.tables.rate.rate(lg) * f64::from(z * n) / f64::from(a)
    }
}

impl Module for ElasticScattering {
    fn name(&self) -> &str {
        "ElasticScattering"
    }

    fn description(&self) -> String {
        let photons = if self.have_photons { ", photons" } else { "" };
        format!("ElasticScattering ({}{photons})", self.photon_field)
    }

    fn process(&self, candidate: &mut Candidate) -> Result<(), ModuleError> {
        if !candidate.is_active() {
            return Ok(());
        }
        let mut step = candidate.current_step();
        loop {
            let rate = self.interaction_rate(&candidate.current);
            if rate <= 0.0 {
                break;
            }
            let gamma = candidate.current.lorentz_factor();
            let lg = gamma.log10();

            // 1 - u lies in (0, 1], so the distance is finite.
            let u: f64 = candidate.rng().random();
            let distance = -(1.0 - u).ln() / rate;
            candidate.limit_next_step(distance);
            if step < distance {
                break;
            }

            let lgeps = self.tables.cdf.invert(lg, candidate.rng().random());
            let cos_theta = 2.0 * candidate.rng().random::<f64>() - 1.0;
            let e_photon = 10f64.powf(lgeps) * gamma * (1.0 - cos_theta);

            let remaining = candidate.current.energy() - e_photon;
            if e_photon > 0.0 && remaining > 0.0 {
                candidate.current.set_energy(remaining)?;
                if self.have_photons {
                    let photon = ParticleState::new(
                        PHOTON,
                        e_photon,
                        candidate.current.position(),
                        candidate.current.direction(),
                    )?;
                    candidate.add_secondary(photon);
                }
            }
            step -= distance;
        }
        Ok(())
    }
}
