use crate::{
    parameters::ParametersError,
    commitments::{check_bit, BitCommitment, CommitmentError, CommitmentScheme, CommitmentVerifier},
    primitives::{HardcorePredicate, OneWayPermutation},
    utils::random_bits,
};
use rug::rand::MutRandState;
use rug::Integer;

#[derive(Clone, Debug)]
pub struct BitCommitmentScheme<P: OneWayPermutation, H: HardcorePredicate> {
    permutation: P,
    predicate: H,
    security_parameter: u32,
    secret: Integer,
}

impl<P: OneWayPermutation, H: HardcorePredicate> BitCommitmentScheme<P, H> {
    pub fn setup<R: MutRandState>(
        permutation: P,
        predicate: H,
        security_parameter: u32,
        rng: &mut R,
    ) -> Result<BitCommitmentScheme<P, H>, CommitmentError> {
        if security_parameter == 0 {
            return Err(ParametersError::InvalidSecurityParameter.into());
        }
        let mut scheme = BitCommitmentScheme {
            permutation,
            predicate,
            security_parameter,
            secret: Integer::new(),
        };
        scheme.generate_secret(rng);
        Ok(scheme)
    }

    /// Builds a scheme around a secret that was generated earlier.
    pub fn from_secret(
        permutation: P,
        predicate: H,
        security_parameter: u32,
        secret: Integer,
    ) -> BitCommitmentScheme<P, H> {
        BitCommitmentScheme {
            permutation,
            predicate,
            security_parameter,
            secret,
        }
    }

    pub fn security_parameter(&self) -> u32 {
        self.security_parameter
    }
}

impl<P: OneWayPermutation, H: HardcorePredicate> CommitmentScheme for BitCommitmentScheme<P, H> {
    type Secret = Integer;
    type Message = u8;
    type Instance = BitCommitment;

    // The random draw is projected through the permutation so the secret is
    // an element the verifier can permute again.
    fn generate_secret<R: MutRandState>(&mut self, rng: &mut R) -> Integer {
        let drawn = random_bits(rng, self.security_parameter);
        self.secret = self.permutation.permute(&drawn);
        self.secret.clone()
    }

    fn commit(&self, bit: &u8) -> Result<BitCommitment, CommitmentError> {
        let bit = check_bit(*bit)?;
        let unguessable_bit = self.predicate.predicate(&self.secret) as u8;
        Ok(BitCommitment {
            value: self.permutation.permute(&self.secret),
            masked_bit: unguessable_bit ^ bit,
        })
    }

    fn secret(&self) -> &Integer {
        &self.secret
    }
}

#[derive(Clone, Debug)]
pub struct BitCommitmentVerifier<P: OneWayPermutation, H: HardcorePredicate> {
    permutation: P,
    predicate: H,
}

impl<P: OneWayPermutation, H: HardcorePredicate> BitCommitmentVerifier<P, H> {
    pub fn new(permutation: P, predicate: H) -> BitCommitmentVerifier<P, H> {
        BitCommitmentVerifier {
            permutation,
            predicate,
        }
    }
}

impl<P: OneWayPermutation, H: HardcorePredicate> CommitmentVerifier
    for BitCommitmentVerifier<P, H>
{
    type Secret = Integer;
    type Instance = BitCommitment;
    type Decoded = u8;

    fn decode(&self, secret: &Integer, commitment: &BitCommitment) -> u8 {
        let unguessable_bit = self.predicate.predicate(secret) as u8;
        commitment.masked_bit ^ unguessable_bit
    }

    /// Accepts iff `secret` permutes to the committed value. The bit is
    /// recomputed from the opening and compared as well, which always holds.
    fn verify(&self, secret: &Integer, commitment: &BitCommitment) -> bool {
        let true_bit = self.decode(secret, commitment);
        let unguessable_bit = self.predicate.predicate(secret) as u8;
        let expected = BitCommitment {
            value: self.permutation.permute(secret),
            masked_bit: unguessable_bit ^ true_bit,
        };
        *commitment == expected
    }
}
