//! Core traits
//!
//! This module defines the seam between the bank and its source of randomness,
//! so id generation can be driven deterministically in tests.

use rand::Rng;

/// Source of candidate ids
///
/// Implementations only produce candidates; the bank checks them for
/// uniqueness and asks again on collision.
pub trait IdSource {
    /// Produce a string of exactly `len` decimal digits
    fn next_digits(&mut self, len: usize) -> String;
}

/// Uniformly random digits from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_digits(&mut self, len: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..len)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::user(6)]
    #[case::account(10)]
    #[case::single(1)]
    fn test_random_ids_have_requested_length(#[case] len: usize) {
        let mut ids = RandomIds;
        for _ in 0..50 {
            let id = ids.next_digits(len);
            assert_eq!(id.len(), len);
            assert!(id.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
