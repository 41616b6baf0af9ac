//! Parameters shared by the committer and the verifier.

use crate::utils::encoded_len;
use std::fmt;

/// Bit length of freshly drawn secrets when nothing else is requested.
pub const DEFAULT_SECURITY_PARAMETER: u32 = 512;
/// Width of a string commitment when nothing else is requested.
pub const DEFAULT_NUM_BITS: usize = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
    /// Bit length of the random value a secret is derived from.
    pub security_parameter: u32,
    /// Number of independent bit commitments, i.e. the widest encoded
    /// message a string commitment can carry.
    pub num_bits: usize,
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Parameters(λ={} (security parameter), n={} (committed bits))",
            self.security_parameter, self.num_bits,
        )
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            security_parameter: DEFAULT_SECURITY_PARAMETER,
            num_bits: DEFAULT_NUM_BITS,
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum ParametersError {
        InvalidSecurityParameter {
            display("security parameter must be positive")
        }
        InvalidNumBits {
            display("number of committed bits must be positive")
        }
    }
}

impl Parameters {
    pub fn new(security_parameter: u32, num_bits: usize) -> Result<Parameters, ParametersError> {
        let parameters = Parameters {
            security_parameter,
            num_bits,
        };

        parameters.is_valid()?;
        Ok(parameters)
    }

    /// Parameters wide enough to commit to `message` without truncation.
    pub fn for_message(
        security_parameter: u32,
        message: &str,
    ) -> Result<Parameters, ParametersError> {
        Parameters::new(security_parameter, encoded_len(message))
    }

    pub fn is_valid(&self) -> Result<(), ParametersError> {
        if self.security_parameter == 0 {
            return Err(ParametersError::InvalidSecurityParameter);
        }
        if self.num_bits == 0 {
            return Err(ParametersError::InvalidNumBits);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{Parameters, ParametersError};

    #[test]
    fn test_default_is_valid() {
        let params = Parameters::default();
        params.is_valid().unwrap();
        assert_eq!(params.security_parameter, 512);
        assert_eq!(params.num_bits, 100);
    }

    #[test]
    fn test_rejects_zero() {
        match Parameters::new(0, 8) {
            Err(ParametersError::InvalidSecurityParameter) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        match Parameters::new(10, 0) {
            Err(ParametersError::InvalidNumBits) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_sized_for_message() {
        let params = Parameters::for_message(10, "hi").unwrap();
        assert_eq!(params.num_bits, 16);
        Parameters::for_message(10, "").unwrap_err();
    }

    #[test]
    fn test_display() {
        let params = Parameters::new(10, 16).unwrap();
        assert_eq!(
            params.to_string(),
            "Parameters(λ=10 (security parameter), n=16 (committed bits))"
        );
    }
}
