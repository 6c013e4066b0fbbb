use crate::algebra::*;
use crate::nlp::core::SettingsError;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Declared structure of the constraint Jacobian
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JacobianStructure {
    /// Every (constraint, variable) pair is declared, and values are
    /// not provided.  A solver can query the structure but cannot
    /// evaluate the Jacobian in this configuration.
    #[default]
    Dense,
    /// Three entries per constraint with analytic values.
    Sparse,
}

impl std::fmt::Display for JacobianStructure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            JacobianStructure::Dense => write!(f, "dense (values unavailable)"),
            JacobianStructure::Sparse => write!(f, "sparse (analytic values)"),
        }
    }
}

/// Settings for the [`TutorialProblem`](super::TutorialProblem)

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TutorialSettings<T: FloatT> {
    ///print the problem configuration
    #[builder(default = "true")]
    pub verbose: bool,

    ///print the final solution when the solver reports it
    #[builder(default = "true")]
    pub print_solution: bool,

    ///declared structure of the constraint Jacobian
    #[builder(default = "JacobianStructure::Dense")]
    pub jacobian_structure: JacobianStructure,

    ///Hessian approximation requested from the solver.  Only
    ///"limited-memory" is available since no exact Hessian is provided.
    #[builder(default = r#""limited-memory".to_string()"#)]
    pub hessian_approximation: String,

    ///finite difference step for the derivative test
    #[builder(default = "(1e-8).as_T()")]
    pub derivative_test_perturbation: T,

    ///relative error threshold for the derivative test
    #[builder(default = "(1e-4).as_T()")]
    pub derivative_test_tol: T,

    ///print every compared derivative entry, not only mismatches
    #[builder(default = "false")]
    pub derivative_test_print_all: bool,

    ///maximum number of solver iterations
    #[builder(default = "3000")]
    pub max_iter: u32,

    ///solver convergence tolerance
    #[builder(default = "(1e-8).as_T()")]
    pub tol: T,

    ///solver output verbosity (0-12)
    #[builder(default = "5")]
    pub print_level: i32,
}

impl<T> Default for TutorialSettings<T>
where
    T: FloatT,
{
    fn default() -> TutorialSettings<T> {
        TutorialSettings {
            verbose: true,
            print_solution: true,
            jacobian_structure: JacobianStructure::Dense,
            hessian_approximation: "limited-memory".to_string(),
            derivative_test_perturbation: (1e-8).as_T(),
            derivative_test_tol: (1e-4).as_T(),
            derivative_test_print_all: false,
            max_iter: 3000,
            tol: (1e-8).as_T(),
            print_level: 5,
        }
    }
}

impl<T> TutorialSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_hessian_approximation(&self.hessian_approximation)?;
        validate_positive(self.derivative_test_perturbation, "derivative_test_perturbation")?;
        validate_positive(self.derivative_test_tol, "derivative_test_tol")?;
        validate_positive(self.tol, "tol")?;
        validate_print_level(self.print_level)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for TutorialSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        TutorialSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> TutorialSettingsBuilder<T>
where
    T: FloatT,
{
    /// check any fields that have been explicitly set
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(ref method) = self.hessian_approximation {
            validate_hessian_approximation(method)?;
        }
        if let Some(v) = self.derivative_test_perturbation {
            validate_positive(v, "derivative_test_perturbation")?;
        }
        if let Some(v) = self.derivative_test_tol {
            validate_positive(v, "derivative_test_tol")?;
        }
        if let Some(v) = self.tol {
            validate_positive(v, "tol")?;
        }
        if let Some(v) = self.print_level {
            validate_print_level(v)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_hessian_approximation(method: &str) -> Result<(), SettingsError> {
    match method {
        "limited-memory" => Ok(()),
        _ => Err(SettingsError::BadFieldValue("hessian_approximation")),
    }
}

fn validate_positive<T: FloatT>(v: T, field: &'static str) -> Result<(), SettingsError> {
    if v > T::zero() && v.is_finite() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue(field))
    }
}

fn validate_print_level(level: i32) -> Result<(), SettingsError> {
    if (0..=12).contains(&level) {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("print_level"))
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = TutorialSettingsBuilder::<f64>::default().build().unwrap();
    assert_eq!(settings, TutorialSettings::default());

    // exact Hessians are not available
    assert!(TutorialSettingsBuilder::<f64>::default()
        .hessian_approximation("exact".to_string())
        .build()
        .is_err());

    // nonpositive tolerances
    assert!(TutorialSettingsBuilder::<f64>::default()
        .derivative_test_tol(0.0)
        .build()
        .is_err());
    assert!(TutorialSettingsBuilder::<f64>::default()
        .derivative_test_perturbation(-1e-8)
        .build()
        .is_err());
    assert!(TutorialSettingsBuilder::<f64>::default()
        .tol(f64::NAN)
        .build()
        .is_err());

    // print level out of range
    assert!(TutorialSettingsBuilder::<f64>::default()
        .print_level(13)
        .build()
        .is_err());

    // directly construct a bad TutorialSettings and manually check
    let settings = TutorialSettings::<f64> {
        print_level: -1,
        ..TutorialSettings::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("print_level"))
    );

    let settings = TutorialSettingsBuilder::<f32>::default()
        .jacobian_structure(JacobianStructure::Sparse)
        .verbose(false)
        .build()
        .unwrap();
    assert_eq!(settings.jacobian_structure, JacobianStructure::Sparse);
    assert!(!settings.verbose);
}
