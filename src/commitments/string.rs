//! Commits to a message of a prespecified width by committing to each bit of
//! its encoding with an independent bit commitment.
//!
//! Inputs of different lengths are paired up to the shortest one: an encoding
//! wider than the scheme is cut to `num_bits`, and verifier inputs are
//! compared only where secrets, commitments and bit verifiers all line up.
//!
//! Decoding regroups the opened bits into 8-bit characters, which is not the
//! inverse of the committing encoding (a `0` bit followed by the unpadded
//! codepoint). The two agree for 7-bit ASCII only.
use crate::{
    commitments::{
        bit::{BitCommitmentScheme, BitCommitmentVerifier},
        BitCommitment, CommitmentError, CommitmentScheme, CommitmentVerifier,
    },
    parameters::Parameters,
    primitives::{HardcorePredicate, OneWayPermutation},
    utils::{bits_to_string, encode_message_bits},
};
use rug::rand::MutRandState;
use rug::Integer;

#[derive(Clone, Debug)]
pub struct StringCommitmentScheme<P: OneWayPermutation, H: HardcorePredicate> {
    schemes: Vec<BitCommitmentScheme<P, H>>,
    secret: Vec<Integer>,
}

impl<P, H> StringCommitmentScheme<P, H>
where
    P: OneWayPermutation + Clone,
    H: HardcorePredicate + Clone,
{
    pub fn setup<R: MutRandState>(
        parameters: &Parameters,
        permutation: &P,
        predicate: &H,
        rng: &mut R,
    ) -> Result<StringCommitmentScheme<P, H>, CommitmentError> {
        parameters.is_valid()?;
        let schemes = (0..parameters.num_bits)
            .map(|_| {
                BitCommitmentScheme::setup(
                    permutation.clone(),
                    predicate.clone(),
                    parameters.security_parameter,
                    &mut *rng,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        let secret = schemes.iter().map(|s| s.reveal()).collect();
        log::debug!("string commitment scheme set up with {}", parameters);

        Ok(StringCommitmentScheme { schemes, secret })
    }

    /// Builds a scheme around secrets that were generated earlier, one bit
    /// commitment per secret.
    pub fn from_secrets(
        permutation: &P,
        predicate: &H,
        security_parameter: u32,
        secrets: &[Integer],
    ) -> StringCommitmentScheme<P, H> {
        let schemes = secrets
            .iter()
            .map(|secret| {
                BitCommitmentScheme::from_secret(
                    permutation.clone(),
                    predicate.clone(),
                    security_parameter,
                    secret.clone(),
                )
            })
            .collect();

        StringCommitmentScheme {
            schemes,
            secret: secrets.to_vec(),
        }
    }
}

impl<P: OneWayPermutation, H: HardcorePredicate> StringCommitmentScheme<P, H> {
    pub fn num_bits(&self) -> usize {
        self.schemes.len()
    }

    /// Draws a fresh secret for every bit commitment. Commitments made before
    /// the refresh can no longer be opened.
    pub fn refresh_secrets<R: MutRandState>(&mut self, rng: &mut R) -> Vec<Integer> {
        self.secret = self
            .schemes
            .iter_mut()
            .map(|scheme| scheme.generate_secret(&mut *rng))
            .collect();
        log::debug!("refreshed {} secrets", self.secret.len());
        self.secret.clone()
    }

    /// Commits to the decimal representation of `value`.
    pub fn commit_integer(&self, value: &Integer) -> Result<Vec<BitCommitment>, CommitmentError> {
        self.commit(value.to_string().as_str())
    }
}

impl<P: OneWayPermutation, H: HardcorePredicate> CommitmentScheme
    for StringCommitmentScheme<P, H>
{
    type Secret = Vec<Integer>;
    type Message = str;
    type Instance = Vec<BitCommitment>;

    /// Collects the secrets the bit commitments already hold, in order. No
    /// randomness is drawn; see `refresh_secrets` for that.
    fn generate_secret<R: MutRandState>(&mut self, _rng: &mut R) -> Vec<Integer> {
        self.secret = self.schemes.iter().map(|scheme| scheme.reveal()).collect();
        self.secret.clone()
    }

    fn commit(&self, message: &str) -> Result<Vec<BitCommitment>, CommitmentError> {
        let bits = encode_message_bits(message);
        if bits.len() > self.schemes.len() {
            log::warn!(
                "message encodes to {} bits, truncating to {}",
                bits.len(),
                self.schemes.len()
            );
        }
        self.schemes
            .iter()
            .zip(bits.iter())
            .map(|(scheme, bit)| scheme.commit(bit))
            .collect()
    }

    fn secret(&self) -> &Vec<Integer> {
        &self.secret
    }
}

#[derive(Clone, Debug)]
pub struct StringCommitmentVerifier<P: OneWayPermutation, H: HardcorePredicate> {
    verifiers: Vec<BitCommitmentVerifier<P, H>>,
}

impl<P, H> StringCommitmentVerifier<P, H>
where
    P: OneWayPermutation + Clone,
    H: HardcorePredicate + Clone,
{
    pub fn new(num_bits: usize, permutation: &P, predicate: &H) -> StringCommitmentVerifier<P, H> {
        StringCommitmentVerifier {
            verifiers: (0..num_bits)
                .map(|_| BitCommitmentVerifier::new(permutation.clone(), predicate.clone()))
                .collect(),
        }
    }

    pub fn from_parameters(
        parameters: &Parameters,
        permutation: &P,
        predicate: &H,
    ) -> StringCommitmentVerifier<P, H> {
        StringCommitmentVerifier::new(parameters.num_bits, permutation, predicate)
    }
}

impl<P: OneWayPermutation, H: HardcorePredicate> StringCommitmentVerifier<P, H> {
    pub fn num_bits(&self) -> usize {
        self.verifiers.len()
    }

    fn check_alignment(&self, secrets: &[Integer], commitments: &[BitCommitment]) {
        if secrets.len() != commitments.len() || commitments.len() > self.verifiers.len() {
            log::debug!(
                "misaligned opening: {} verifiers, {} secrets, {} commitments",
                self.verifiers.len(),
                secrets.len(),
                commitments.len()
            );
        }
    }

    pub fn decode_bits(&self, secrets: &[Integer], commitments: &[BitCommitment]) -> Vec<u8> {
        self.check_alignment(secrets, commitments);
        self.verifiers
            .iter()
            .zip(secrets.iter())
            .zip(commitments.iter())
            .map(|((verifier, secret), commitment)| verifier.decode(secret, commitment))
            .collect()
    }
}

impl<P: OneWayPermutation, H: HardcorePredicate> CommitmentVerifier
    for StringCommitmentVerifier<P, H>
{
    type Secret = [Integer];
    type Instance = [BitCommitment];
    type Decoded = String;

    fn decode(&self, secrets: &[Integer], commitments: &[BitCommitment]) -> String {
        bits_to_string(&self.decode_bits(secrets, commitments))
    }

    fn verify(&self, secrets: &[Integer], commitments: &[BitCommitment]) -> bool {
        self.check_alignment(secrets, commitments);
        self.verifiers
            .iter()
            .zip(secrets.iter())
            .zip(commitments.iter())
            .all(|((verifier, secret), commitment)| verifier.verify(secret, commitment))
    }
}
