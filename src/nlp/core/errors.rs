use thiserror::Error;

/// Optional parts of the callback interface that a problem may decline
/// to provide.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Capability {
    /// numerical values of the constraint Jacobian
    JacobianValues,
    /// sparsity structure of the Lagrangian Hessian
    HessianStructure,
    /// numerical values of the Lagrangian Hessian
    HessianValues,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Capability::JacobianValues => write!(f, "constraint Jacobian values"),
            Capability::HessianStructure => write!(f, "Lagrangian Hessian structure"),
            Capability::HessianValues => write!(f, "Lagrangian Hessian values"),
        }
    }
}

/// Error type returned by the problem callback interface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NlpError {
    /// Problem data supplied at construction is malformed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A caller broke a precondition of the callback contract
    #[error("Callback contract violation: {0}")]
    ContractViolation(String),
    /// The problem does not provide this part of the interface.  Not transient.
    #[error("Unsupported capability: {0}")]
    UnsupportedCapability(Capability),
}

impl NlpError {
    /// True for errors that signal a capability gap rather than a failure
    pub fn is_unsupported(&self) -> bool {
        matches!(self, NlpError::UnsupportedCapability(_))
    }
}

/// Check that a vector passed into a callback has the expected length
pub(crate) fn check_length(name: &str, got: usize, expected: usize) -> Result<(), NlpError> {
    if got != expected {
        return Err(NlpError::ContractViolation(format!(
            "{} has length {}, expected {}",
            name, got, expected
        )));
    }
    Ok(())
}

#[test]
fn test_error_messages() {
    let e = NlpError::UnsupportedCapability(Capability::HessianValues);
    assert!(e.is_unsupported());
    assert_eq!(
        e.to_string(),
        "Unsupported capability: Lagrangian Hessian values"
    );

    let e = check_length("x", 3, 4).unwrap_err();
    assert!(!e.is_unsupported());
    assert_eq!(
        e.to_string(),
        "Callback contract violation: x has length 3, expected 4"
    );
    assert!(check_length("x", 4, 4).is_ok());
}
