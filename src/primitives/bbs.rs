//! Blum-Blum-Shub squaring modulo a Blum integer.
//!
//! Squaring is a permutation of the quadratic residues modulo `N = p * q`
//! when `p` and `q` are distinct primes congruent to 3 mod 4, and inverting it
//! is as hard as factoring `N`.
use super::OneWayPermutation;
use crate::utils::random_bits;
use rug::integer::IsPrime;
use rug::rand::MutRandState;
use rug::Integer;

const PRIMALITY_REPS: u32 = 30;
const MIN_MODULUS_BITS: u32 = 8;

quick_error! {
    #[derive(Debug)]
    pub enum BBSError {
        NotBlumPrime(p: Integer) {
            display("{} is not a prime congruent to 3 mod 4", p)
        }
        EqualPrimes {
            display("the two Blum primes must differ")
        }
        ModulusTooSmall {
            display("the modulus must have at least {} bits", MIN_MODULUS_BITS)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlumBlumShub {
    modulus: Integer,
}

fn is_blum_prime(p: &Integer) -> bool {
    *p > 2 && p.mod_u(4) == 3 && p.is_probably_prime(PRIMALITY_REPS) != IsPrime::No
}

fn random_blum_prime<R: MutRandState>(bits: u32, rng: &mut R) -> Integer {
    let mut candidate = random_bits(rng, bits);
    candidate.set_bit(bits - 1, true);
    loop {
        candidate.next_prime_mut();
        if candidate.mod_u(4) == 3 {
            return candidate;
        }
    }
}

impl BlumBlumShub {
    /// Uses a modulus whose factorization is already trusted. Only its size
    /// is checked.
    pub fn new(modulus: &Integer) -> Result<BlumBlumShub, BBSError> {
        if *modulus < 0 || modulus.significant_bits() < MIN_MODULUS_BITS {
            return Err(BBSError::ModulusTooSmall);
        }
        Ok(BlumBlumShub {
            modulus: modulus.clone(),
        })
    }

    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    pub fn from_primes(p: &Integer, q: &Integer) -> Result<BlumBlumShub, BBSError> {
        if !is_blum_prime(p) {
            return Err(BBSError::NotBlumPrime(p.clone()));
        }
        if !is_blum_prime(q) {
            return Err(BBSError::NotBlumPrime(q.clone()));
        }
        if p == q {
            return Err(BBSError::EqualPrimes);
        }
        Ok(BlumBlumShub {
            modulus: Integer::from(p * q),
        })
    }

    /// Generates a random Blum integer of roughly `modulus_bits` bits.
    pub fn generate<R: MutRandState>(
        modulus_bits: u32,
        rng: &mut R,
    ) -> Result<BlumBlumShub, BBSError> {
        if modulus_bits < MIN_MODULUS_BITS {
            return Err(BBSError::ModulusTooSmall);
        }
        let p_bits = modulus_bits / 2;
        let p = random_blum_prime(p_bits, rng);
        let mut q = random_blum_prime(modulus_bits - p_bits, rng);
        while q == p {
            q = random_blum_prime(modulus_bits - p_bits, rng);
        }
        let bbs = BlumBlumShub::from_primes(&p, &q)?;
        log::debug!(
            "generated BBS modulus of {} bits",
            bbs.modulus.significant_bits()
        );
        Ok(bbs)
    }
}

impl OneWayPermutation for BlumBlumShub {
    fn permute(&self, x: &Integer) -> Integer {
        let square = Integer::from(x * x);
        square % &self.modulus
    }
}

#[cfg(test)]
mod test {
    use super::{BBSError, BlumBlumShub};
    use crate::primitives::OneWayPermutation;
    use rug::rand::RandState;
    use rug::Integer;

    #[test]
    fn test_published_modulus() {
        let bbs = BlumBlumShub::from_primes(&Integer::from(67), &Integer::from(727)).unwrap();
        assert_eq!(*bbs.modulus(), 48709);
        assert_eq!(bbs.permute(&Integer::from(45782)), 43254);
        assert_eq!(bbs.permute(&Integer::from(34856)), 40858);
    }

    #[test]
    fn test_known_modulus() {
        let bbs = BlumBlumShub::new(&Integer::from(48709)).unwrap();
        assert_eq!(bbs.permute(&Integer::from(45782)), 43254);

        for modulus in &[0, 1, 77, -48709] {
            match BlumBlumShub::new(&Integer::from(*modulus)) {
                Err(BBSError::ModulusTooSmall) => {}
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn test_rejects_bad_primes() {
        match BlumBlumShub::from_primes(&Integer::from(5), &Integer::from(7)) {
            Err(BBSError::NotBlumPrime(p)) => assert_eq!(p, 5),
            other => panic!("unexpected result: {:?}", other),
        }
        // 15 is 3 mod 4 but composite
        BlumBlumShub::from_primes(&Integer::from(15), &Integer::from(7)).unwrap_err();
        match BlumBlumShub::from_primes(&Integer::from(7), &Integer::from(7)) {
            Err(BBSError::EqualPrimes) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_generate() {
        let mut rng = RandState::new();
        rng.seed(&Integer::from(13));

        let bbs = BlumBlumShub::generate(64, &mut rng).unwrap();
        assert!(bbs.modulus().significant_bits() >= 63);
        // N = p * q with p, q = 3 mod 4 gives N = 1 mod 4
        assert_eq!(bbs.modulus().mod_u(4), 1);

        BlumBlumShub::generate(4, &mut rng).unwrap_err();
    }
}
