use rand::RngCore;
use rug::rand::{MutRandState, RandGen};
use rug::Integer;

/// Draws a uniformly random integer of at most `bits` bits.
pub fn random_bits<R: MutRandState>(rng: &mut R, bits: u32) -> Integer {
    Integer::from(Integer::random_bits(bits, rng))
}

fn codepoint_width(codepoint: u32) -> u32 {
    // zero still takes one digit
    (32 - codepoint.leading_zeros()).max(1)
}

/// Number of bits `encode_message_bits` produces for `message`.
pub fn encoded_len(message: &str) -> usize {
    message
        .chars()
        .map(|c| 1 + codepoint_width(c as u32) as usize)
        .sum()
}

/// Encodes every character as a `0` bit followed by its codepoint in binary,
/// most significant bit first and without zero padding.
pub fn encode_message_bits(message: &str) -> Vec<u8> {
    let mut bits = Vec::with_capacity(encoded_len(message));
    for c in message.chars() {
        let codepoint = c as u32;
        bits.push(0);
        for i in (0..codepoint_width(codepoint)).rev() {
            bits.push(((codepoint >> i) & 1) as u8);
        }
    }
    bits
}

/// Regroups a flat bit sequence into 8-bit windows, most significant bit
/// first, and reads each window as one character. A trailing partial window
/// is dropped.
pub fn bits_to_string(bits: &[u8]) -> String {
    bits.chunks_exact(8)
        .map(|window| {
            let byte = window.iter().fold(0u8, |acc, bit| (acc << 1) | (bit & 1));
            char::from(byte)
        })
        .collect()
}

/// Lets a `rand` generator feed `rug`'s random state, so secrets can be drawn
/// from e.g. `OsRng` instead of the default Mersenne Twister.
pub struct RandGenAdapter<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RandGenAdapter<R> {
    pub fn new(rng: R) -> RandGenAdapter<R> {
        RandGenAdapter { rng }
    }
}

impl<R: RngCore + Send + Sync> RandGen for RandGenAdapter<R> {
    fn gen(&mut self) -> u32 {
        self.rng.next_u32()
    }
}

#[cfg(test)]
mod test {
    use super::{bits_to_string, encode_message_bits, encoded_len, random_bits, RandGenAdapter};
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;
    use rug::rand::RandState;
    use rug::Integer;

    #[test]
    fn test_encode_ascii() {
        assert_eq!(
            encode_message_bits("hi"),
            vec![0, 1, 1, 0, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1]
        );
        assert_eq!(encoded_len("hi"), 16);
    }

    #[test]
    fn test_encode_variable_width() {
        // '0' is 0b110000, '\0' is a single zero digit
        assert_eq!(encode_message_bits("0"), vec![0, 1, 1, 0, 0, 0, 0]);
        assert_eq!(encode_message_bits("\0"), vec![0, 0]);
        assert_eq!(encoded_len("é"), 9);
        assert!(encode_message_bits("").is_empty());
    }

    #[test]
    fn test_regroup_drops_partial_window() {
        let mut bits = encode_message_bits("hi");
        bits.extend_from_slice(&[1, 0, 1]);
        assert_eq!(bits_to_string(&bits), "hi");
        assert_eq!(bits_to_string(&[1, 1, 0]), "");
    }

    #[test]
    fn test_regroup_is_not_inverse_for_other_widths() {
        // "10" encodes to 7 + 7 bits, so the windows straddle characters
        let bits = encode_message_bits("10");
        assert_eq!(bits.len(), 14);
        assert_eq!(bits_to_string(&bits), "b");
    }

    #[test]
    fn test_rand_adapter_is_deterministic() {
        let mut first = RandGenAdapter::new(XorShiftRng::seed_from_u64(1231275789u64));
        let mut second = RandGenAdapter::new(XorShiftRng::seed_from_u64(1231275789u64));
        let mut rng1 = RandState::new_custom(&mut first);
        let mut rng2 = RandState::new_custom(&mut second);

        let a = random_bits(&mut rng1, 128);
        let b = random_bits(&mut rng2, 128);
        assert_eq!(a, b);
        assert!(a.significant_bits() <= 128);
        assert!(a >= Integer::new());
    }
}
