use super::SettingsError;
use crate::algebra::*;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Settings for the [`IterativeSolver`](super::IterativeSolver)

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IterativeSettings<T: FloatT> {
    ///maximum number of iterations
    #[builder(default = "1000")]
    pub max_iter: u32,

    ///maximum run time (seconds)
    #[builder(default = "f64::INFINITY")]
    pub time_limit: f64,

    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,

    ///gradient norm tolerance for steepest descent
    #[builder(default = "(1e-10).as_T()")]
    pub tol_steepest_descent: T,

    ///search direction and step length tolerance for conjugate gradient
    #[builder(default = "(1e-10).as_T()")]
    pub tol_conjugate_gradient: T,
}

impl<T> Default for IterativeSettings<T>
where
    T: FloatT,
{
    fn default() -> IterativeSettings<T> {
        IterativeSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> IterativeSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid, i.e. that the iteration limit
    /// is positive, the tolerances are finite and positive and the time
    /// limit is non-negative.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_max_iter(self.max_iter)?;
        validate_time_limit(self.time_limit)?;
        validate_tolerance("tol_steepest_descent", self.tol_steepest_descent)?;
        validate_tolerance("tol_conjugate_gradient", self.tol_conjugate_gradient)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for IterativeSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        IterativeSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> IterativeSettingsBuilder<T>
where
    T: FloatT,
{
    /// check any fields that have been set explicitly
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(max_iter) = self.max_iter {
            validate_max_iter(max_iter)?;
        }
        if let Some(time_limit) = self.time_limit {
            validate_time_limit(time_limit)?;
        }
        if let Some(tol) = self.tol_steepest_descent {
            validate_tolerance("tol_steepest_descent", tol)?;
        }
        if let Some(tol) = self.tol_conjugate_gradient {
            validate_tolerance("tol_conjugate_gradient", tol)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_max_iter(max_iter: u32) -> Result<(), SettingsError> {
    if max_iter == 0 {
        return Err(SettingsError::BadFieldValue("max_iter"));
    }
    Ok(())
}

fn validate_time_limit(time_limit: f64) -> Result<(), SettingsError> {
    // NaN fails here too
    if !(time_limit >= 0.0) {
        return Err(SettingsError::BadFieldValue("time_limit"));
    }
    Ok(())
}

fn validate_tolerance<T: FloatT>(field: &'static str, tol: T) -> Result<(), SettingsError> {
    if !(tol.is_finite() && tol > T::zero()) {
        return Err(SettingsError::BadFieldValue(field));
    }
    Ok(())
}

#[test]
fn test_settings_validate() {
    // all standard settings
    IterativeSettingsBuilder::<f64>::default().build().unwrap();

    // fail on bad iteration limit
    assert!(IterativeSettingsBuilder::<f64>::default()
        .max_iter(0)
        .build()
        .is_err());

    // fail on negative or NaN time limit
    assert!(IterativeSettingsBuilder::<f64>::default()
        .time_limit(-1.0)
        .build()
        .is_err());
    assert!(IterativeSettingsBuilder::<f64>::default()
        .time_limit(f64::NAN)
        .build()
        .is_err());

    // fail on bad tolerances
    assert!(IterativeSettingsBuilder::<f64>::default()
        .tol_steepest_descent(0.0)
        .build()
        .is_err());
    assert!(IterativeSettingsBuilder::<f64>::default()
        .tol_conjugate_gradient(f64::INFINITY)
        .build()
        .is_err());

    // a valid non-default configuration
    let settings = IterativeSettingsBuilder::<f64>::default()
        .max_iter(10)
        .time_limit(0.0)
        .tol_conjugate_gradient(1e-6)
        .build()
        .unwrap();
    assert!(settings.validate().is_ok());
    assert_eq!(settings.tol_steepest_descent, 1e-10);

    // direct modification bypasses the builder
    let mut settings = IterativeSettings::<f64>::default();
    settings.tol_steepest_descent = -1.0;
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("tol_steepest_descent"))
    );
}

#[test]
fn test_settings_defaults() {
    let settings = IterativeSettings::<f64>::default();
    assert_eq!(settings.max_iter, 1000);
    assert_eq!(settings.time_limit, f64::INFINITY);
    assert!(!settings.verbose);
    assert_eq!(settings.tol_steepest_descent, 1e-10);
    assert_eq!(settings.tol_conjugate_gradient, 1e-10);
}
