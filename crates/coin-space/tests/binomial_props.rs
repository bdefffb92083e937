use coin_space::{
    binomial_coefficient, binomial_sample_space, generate_coin_sample_space, OutcomeSequences,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn weights_sum_to_power_of_two(num_flips in 0u32..14) {
        let space = generate_coin_sample_space(i64::from(num_flips)).unwrap();
        prop_assert_eq!(space.total(), 1u64 << num_flips);
        prop_assert_eq!(space.len() as u32, num_flips + 1);
    }

    #[test]
    fn weights_equal_binomial_coefficients(num_flips in 0u32..14) {
        let space = generate_coin_sample_space(i64::from(num_flips)).unwrap();
        for k in 0..=num_flips {
            prop_assert_eq!(space.weight(k), binomial_coefficient(num_flips, k));
        }
    }

    #[test]
    fn strategies_agree(num_flips in 0u32..14) {
        let enumerated = generate_coin_sample_space(i64::from(num_flips)).unwrap();
        let closed = binomial_sample_space(i64::from(num_flips)).unwrap();
        prop_assert_eq!(enumerated, closed);
    }

    #[test]
    fn sequences_are_distinct_and_complete(num_flips in 0u32..10) {
        let sequences: Vec<_> = OutcomeSequences::new(num_flips).unwrap().collect();
        prop_assert_eq!(sequences.len(), 1usize << num_flips);
        prop_assert!(sequences.iter().all(|seq| seq.len() == num_flips as usize));
        let unique: std::collections::HashSet<_> = sequences.iter().collect();
        prop_assert_eq!(unique.len(), sequences.len());
    }

    #[test]
    fn pascal_rule_holds(n in 1u32..60, k in 1u32..60) {
        prop_assume!(k <= n);
        let lhs = binomial_coefficient(n, k).unwrap();
        let rhs = binomial_coefficient(n - 1, k - 1).unwrap() + binomial_coefficient(n - 1, k).unwrap();
        prop_assert_eq!(lhs, rhs);
    }
}
