//! Implements bit commitments and their composition into string commitments.
//!
//! A bit commitment publishes `(f(s), b(s) ^ m)` for a secret `s`, a one-way
//! permutation `f` and its hardcore predicate `b`. Opening reveals `s`.

use crate::parameters::ParametersError;
use rug::rand::MutRandState;
use rug::Integer;
use std::convert::TryFrom;
use std::fmt;

pub mod bit;
pub mod string;

quick_error! {
    #[derive(Debug)]
    pub enum CommitmentError {
        InvalidBit(bit: u8) {
            display("expected a bit (0 or 1), got {}", bit)
        }
        InvalidParameters(err: ParametersError) {
            from()
            display("invalid parameters: {}", err)
        }
    }
}

pub(crate) fn check_bit(bit: u8) -> Result<u8, CommitmentError> {
    if bit > 1 {
        Err(CommitmentError::InvalidBit(bit))
    } else {
        Ok(bit)
    }
}

/// A published commitment to a single bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitCommitment {
    value: Integer,
    masked_bit: u8,
}

impl BitCommitment {
    pub fn new(value: Integer, masked_bit: u8) -> Result<BitCommitment, CommitmentError> {
        Ok(BitCommitment {
            value,
            masked_bit: check_bit(masked_bit)?,
        })
    }

    /// The permuted secret.
    pub fn value(&self) -> &Integer {
        &self.value
    }

    /// The message bit masked by the hardcore predicate of the secret.
    pub fn masked_bit(&self) -> u8 {
        self.masked_bit
    }

    pub fn to_pair(&self) -> (Integer, u8) {
        (self.value.clone(), self.masked_bit)
    }
}

impl TryFrom<(Integer, u8)> for BitCommitment {
    type Error = CommitmentError;

    fn try_from((value, masked_bit): (Integer, u8)) -> Result<Self, Self::Error> {
        BitCommitment::new(value, masked_bit)
    }
}

impl fmt::Display for BitCommitment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.value, self.masked_bit)
    }
}

pub trait CommitmentScheme {
    type Secret: Clone;
    type Message: ?Sized;
    type Instance;

    /// Produces the secret the next commitment is opened with, stores it and
    /// returns it.
    fn generate_secret<R: MutRandState>(&mut self, rng: &mut R) -> Self::Secret;
    fn commit(&self, message: &Self::Message) -> Result<Self::Instance, CommitmentError>;
    fn secret(&self) -> &Self::Secret;

    /// Opens the commitment.
    fn reveal(&self) -> Self::Secret {
        self.secret().clone()
    }
}

pub trait CommitmentVerifier {
    type Secret: ?Sized;
    type Instance: ?Sized;
    type Decoded;

    fn decode(&self, secret: &Self::Secret, commitment: &Self::Instance) -> Self::Decoded;
    fn verify(&self, secret: &Self::Secret, commitment: &Self::Instance) -> bool;
}
