//! Conversion between physical and lattice unit systems.

use crate::LatticeError;
use std::f64::consts::PI;
use tracing::debug;

/// BGK stability bound on the lattice viscosity.
const MAX_LATTICE_VISCOSITY: f64 = 1.0 / 6.0;

/// Physical reference scales for a simulation.
///
/// Exactly one of viscosity/length/velocity may be left unset when the
/// Reynolds number is supplied; [`UnitConverter::new`] derives it.
///
/// # Example
///
/// ```
/// use lattice_units::PhysicalScales;
///
/// let scales = PhysicalScales::new()
///     .reynolds(100.0)
///     .length(2.0)
///     .velocity(1.0);
/// assert_eq!(scales.viscosity, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalScales {
    /// Kinematic viscosity.
    pub viscosity: Option<f64>,
    /// Reference length.
    pub length: Option<f64>,
    /// Reference velocity.
    pub velocity: Option<f64>,
    /// Reynolds number, when one of the scales is to be derived.
    pub reynolds: Option<f64>,
    /// Characteristic frequency [Hz].
    pub frequency: Option<f64>,
}

impl PhysicalScales {
    /// Starts an empty scale set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the kinematic viscosity.
    #[must_use]
    pub const fn viscosity(mut self, viscosity: f64) -> Self {
        self.viscosity = Some(viscosity);
        self
    }

    /// Sets the reference length.
    #[must_use]
    pub const fn length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets the reference velocity.
    #[must_use]
    pub const fn velocity(mut self, velocity: f64) -> Self {
        self.velocity = Some(velocity);
        self
    }

    /// Sets the Reynolds number.
    #[must_use]
    pub const fn reynolds(mut self, reynolds: f64) -> Self {
        self.reynolds = Some(reynolds);
        self
    }

    /// Sets the characteristic frequency.
    #[must_use]
    pub const fn frequency(mut self, frequency: f64) -> Self {
        self.frequency = Some(frequency);
        self
    }
}

/// Lattice-side scales for [`UnitConverter::set_lattice`].
///
/// Unset fields keep whatever the converter already knows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeScales {
    /// Lattice viscosity.
    pub viscosity: Option<f64>,
    /// Lattice reference length, in nodes.
    pub length: Option<f64>,
    /// Lattice reference velocity.
    pub velocity: Option<f64>,
}

impl LatticeScales {
    /// Starts an empty scale set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lattice viscosity.
    #[must_use]
    pub const fn viscosity(mut self, viscosity: f64) -> Self {
        self.viscosity = Some(viscosity);
        self
    }

    /// Sets the lattice reference length.
    #[must_use]
    pub const fn length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets the lattice reference velocity.
    #[must_use]
    pub const fn velocity(mut self, velocity: f64) -> Self {
        self.velocity = Some(velocity);
        self
    }
}

/// Converts between physical and lattice units.
///
/// Construction resolves the physical reference scales, deriving a missing
/// one from the Reynolds number when possible. The lattice side arrives
/// later, usually once the domain has been voxelized, via
/// [`UnitConverter::set_lattice`]; whichever single lattice scale is still
/// missing is then derived by matching the lattice Reynolds number to the
/// physical one.
///
/// # Example
///
/// ```
/// use lattice_units::{LatticeScales, PhysicalScales, UnitConverter};
///
/// let mut units = UnitConverter::new(
///     PhysicalScales::new().reynolds(100.0).length(2.0).velocity(1.0),
/// )?;
/// assert!((units.reynolds() - 100.0).abs() < 1e-12);
///
/// units.set_lattice(LatticeScales::new().viscosity(0.05).length(100.0))?;
/// assert!((units.lattice_velocity().unwrap() - 0.05).abs() < 1e-12);
/// # Ok::<(), lattice_units::LatticeError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UnitConverter {
    phys_viscosity: f64,
    phys_length: f64,
    phys_velocity: f64,
    phys_frequency: Option<f64>,
    lattice_viscosity: Option<f64>,
    lattice_length: Option<f64>,
    lattice_velocity: Option<f64>,
}

impl UnitConverter {
    /// Resolves the physical scales and builds a converter.
    ///
    /// # Errors
    ///
    /// [`LatticeError::MissingScale`] when viscosity/length/velocity cannot
    /// all be resolved, [`LatticeError::InvalidScale`] for non-finite or
    /// non-positive values.
    pub fn new(scales: PhysicalScales) -> crate::Result<Self> {
        let PhysicalScales {
            mut viscosity,
            mut length,
            mut velocity,
            reynolds,
            frequency,
        } = scales;

        if let Some(reynolds) = reynolds {
            check_scale("Reynolds number", reynolds)?;
            match (viscosity, length, velocity) {
                (None, Some(length), Some(velocity)) => {
                    viscosity = Some(length * velocity / reynolds);
                }
                (Some(viscosity), None, Some(velocity)) => {
                    length = Some(reynolds * viscosity / velocity);
                }
                (Some(viscosity), Some(length), None) => {
                    velocity = Some(reynolds * viscosity / length);
                }
                _ => {}
            }
        }

        let viscosity = resolve("viscosity", viscosity)?;
        let length = resolve("length", length)?;
        let velocity = resolve("velocity", velocity)?;
        if let Some(frequency) = frequency {
            check_scale("frequency", frequency)?;
        }

        Ok(Self {
            phys_viscosity: viscosity,
            phys_length: length,
            phys_velocity: velocity,
            phys_frequency: frequency,
            lattice_viscosity: None,
            lattice_length: None,
            lattice_velocity: None,
        })
    }

    /// Supplies lattice scales, then derives whichever single scale is
    /// still missing by matching the physical Reynolds number.
    ///
    /// May be called repeatedly to fill scales incrementally; fields left
    /// unset keep their current values.
    ///
    /// # Errors
    ///
    /// [`LatticeError::InvalidScale`] for non-finite or non-positive
    /// values, [`LatticeError::UnstableViscosity`] when the derived lattice
    /// viscosity exceeds the stability bound.
    pub fn set_lattice(&mut self, scales: LatticeScales) -> crate::Result<()> {
        if let Some(viscosity) = scales.viscosity {
            check_scale("lattice viscosity", viscosity)?;
            self.lattice_viscosity = Some(viscosity);
        }
        if let Some(length) = scales.length {
            check_scale("lattice length", length)?;
            self.lattice_length = Some(length);
        }
        if let Some(velocity) = scales.velocity {
            check_scale("lattice velocity", velocity)?;
            self.lattice_velocity = Some(velocity);
        }

        self.derive_missing_lattice_scale()
    }

    fn derive_missing_lattice_scale(&mut self) -> crate::Result<()> {
        let reynolds = self.reynolds();
        match (
            self.lattice_viscosity,
            self.lattice_length,
            self.lattice_velocity,
        ) {
            (None, Some(length), Some(velocity)) => {
                let viscosity = length * velocity / reynolds;
                if viscosity > MAX_LATTICE_VISCOSITY {
                    return Err(LatticeError::UnstableViscosity { viscosity });
                }
                self.lattice_viscosity = Some(viscosity);
                debug!(viscosity, "Derived lattice viscosity");
            }
            (Some(viscosity), None, Some(velocity)) => {
                let length = reynolds * viscosity / velocity;
                self.lattice_length = Some(length);
                debug!(length, "Derived lattice length");
            }
            (Some(viscosity), Some(length), None) => {
                let velocity = reynolds * viscosity / length;
                self.lattice_velocity = Some(velocity);
                debug!(velocity, "Derived lattice velocity");
            }
            _ => {}
        }
        Ok(())
    }

    /// Physical Reynolds number.
    #[must_use]
    pub fn reynolds(&self) -> f64 {
        self.phys_length * self.phys_velocity / self.phys_viscosity
    }

    /// Physical Womersley number, when a frequency was supplied.
    #[must_use]
    pub fn womersley(&self) -> Option<f64> {
        self.phys_frequency.map(|frequency| {
            (2.0 * PI * frequency * self.phys_length * self.phys_length / self.phys_viscosity)
                .sqrt()
        })
    }

    /// Lattice viscosity, once supplied or derived.
    #[must_use]
    pub const fn lattice_viscosity(&self) -> Option<f64> {
        self.lattice_viscosity
    }

    /// Lattice reference length, once supplied or derived.
    #[must_use]
    pub const fn lattice_length(&self) -> Option<f64> {
        self.lattice_length
    }

    /// Lattice reference velocity, once supplied or derived.
    #[must_use]
    pub const fn lattice_velocity(&self) -> Option<f64> {
        self.lattice_velocity
    }

    /// Lattice Reynolds number, once all lattice scales are known.
    #[must_use]
    pub fn lattice_reynolds(&self) -> Option<f64> {
        match (
            self.lattice_viscosity,
            self.lattice_length,
            self.lattice_velocity,
        ) {
            (Some(viscosity), Some(length), Some(velocity)) => Some(length * velocity / viscosity),
            _ => None,
        }
    }

    /// The physical frequency expressed in timesteps, or 1.0 when no
    /// physical frequency was supplied.
    #[must_use]
    pub fn lattice_frequency(&self) -> f64 {
        self.phys_frequency
            .map_or(1.0, |frequency| frequency * self.dt())
    }

    /// Lattice Womersley number, once viscosity and length are known.
    #[must_use]
    pub fn lattice_womersley(&self) -> Option<f64> {
        match (self.lattice_viscosity, self.lattice_length) {
            (Some(viscosity), Some(length)) => {
                Some((2.0 * PI * self.lattice_frequency() * length * length / viscosity).sqrt())
            }
            _ => None,
        }
    }

    /// Physical size of one lattice spacing, or 0.0 until the lattice
    /// length is known.
    #[must_use]
    pub fn dx(&self) -> f64 {
        self.lattice_length
            .map_or(0.0, |length| self.phys_length / length)
    }

    /// Physical duration of one timestep, or 0.0 until the lattice
    /// viscosity is known.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.lattice_viscosity
            .map_or(0.0, |viscosity| {
                viscosity / self.phys_viscosity * self.dx() * self.dx()
            })
    }

    /// One-line summary of the resolved lattice parameters, for logging at
    /// simulation setup. `None` until the lattice scales are complete.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // period in whole timesteps
    pub fn lattice_summary(&self) -> Option<String> {
        let reynolds = self.lattice_reynolds()?;
        let womersley = self.lattice_womersley()?;
        let viscosity = self.lattice_viscosity?;
        let velocity = self.lattice_velocity?;
        let length = self.lattice_length?;
        let period = (1.0 / self.lattice_frequency()) as i64;

        Some(format!(
            "Re:{reynolds:.2}  Wo:{womersley:.2}  visc:{viscosity:.3e}  vel:{velocity:.3e}  \
             len:{length:.3e}  T:{period}  dx:{:.4e}  dt:{:.4e}",
            self.dx(),
            self.dt()
        ))
    }
}

fn resolve(name: &'static str, value: Option<f64>) -> crate::Result<f64> {
    let value = value.ok_or(LatticeError::MissingScale { name })?;
    check_scale(name, value)?;
    Ok(value)
}

fn check_scale(name: &'static str, value: f64) -> crate::Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LatticeError::InvalidScale { name, value });
    }
    Ok(())
}
