//! Property-based tests for the fairness guarantees

use fairdice_core::crypto::{self, HmacDigest, OsRandom, SecretKey, KEY_LEN};
use fairdice_core::protocol::FairRound;
use fairdice_core::{Die, ProbabilityMatrix};
use proptest::prelude::*;
use std::num::NonZeroUsize;

/// Range plus a human value inside it
fn arb_range_and_value() -> impl Strategy<Value = (usize, usize)> {
    (1usize..64).prop_flat_map(|range| (Just(range), 0..range))
}

/// Three to five dice sharing one face count
fn arb_dice() -> impl Strategy<Value = Vec<Die>> {
    (1usize..8, 3usize..6).prop_flat_map(|(faces, count)| {
        prop::collection::vec(
            prop::collection::vec(-20i64..20, faces).prop_map(|f| Die::new(f).unwrap()),
            count,
        )
    })
}

proptest! {
    #[test]
    fn prop_result_in_range_and_reconstructible((range, human) in arb_range_and_value()) {
        let committed = FairRound::commit(NonZeroUsize::new(range).unwrap(), &mut OsRandom);
        let revealed = committed.reveal(human).unwrap();

        prop_assert!(revealed.result() < range);
        prop_assert_eq!(revealed.result(), (revealed.computer_value() + human) % range);
        prop_assert!(revealed.receipt().verify());
    }

    #[test]
    fn prop_single_bit_mutation_breaks_commitment(
        value in 0usize..1000,
        key_bit in 0usize..KEY_LEN * 8,
        digest_bit in 0usize..256,
        value_bit in 0u32..usize::BITS,
    ) {
        let commitment = crypto::commit(value, &mut OsRandom);
        prop_assert!(crypto::verify(commitment.key(), value, commitment.digest()));

        let mut key = *commitment.key().as_bytes();
        key[key_bit / 8] ^= 1 << (key_bit % 8);
        prop_assert!(!crypto::verify(&SecretKey::from_bytes(key), value, commitment.digest()));

        let mut digest = *commitment.digest().as_bytes();
        digest[digest_bit / 8] ^= 1 << (digest_bit % 8);
        prop_assert!(!crypto::verify(commitment.key(), value, &HmacDigest::from_bytes(digest)));

        prop_assert!(!crypto::verify(commitment.key(), value ^ (1 << value_bit), commitment.digest()));
    }

    #[test]
    fn prop_win_lose_tie_sum_to_one(dice in arb_dice()) {
        let m = ProbabilityMatrix::compute(&dice);

        for i in 0..m.size() {
            for j in 0..m.size() {
                let tie = m.tie_probability(i, j);
                prop_assert!((m.win_probability(i, j) + m.win_probability(j, i) + tie - 1.0).abs() < 1e-9);
                prop_assert!((m.win_probability(i, j) - (1.0 - m.win_probability(j, i) - tie)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn prop_matrix_is_deterministic(dice in arb_dice()) {
        let first = ProbabilityMatrix::compute(&dice);
        let second = ProbabilityMatrix::compute(&dice);

        for (a, b) in first.rows().iter().flatten().zip(second.rows().iter().flatten()) {
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}
