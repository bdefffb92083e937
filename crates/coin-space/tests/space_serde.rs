use coin_core::CoinError;
use coin_space::{
    binomial_sample_space, generate_coin_sample_space, OutcomeSequence, TrialOutcome,
    WeightedSampleSpace,
};

fn decode(json: &str) -> Result<WeightedSampleSpace, serde_json::Error> {
    serde_json::from_str(json)
}

#[test]
fn generated_space_round_trips() {
    let space = generate_coin_sample_space(5).expect("five flips");
    let json = serde_json::to_string(&space).expect("serialize");
    assert_eq!(decode(&json).expect("deserialize"), space);
}

#[test]
fn keys_beyond_num_flips_are_rejected() {
    let err = decode(r#"{"num_flips":2,"weights":{"5":7}}"#).unwrap_err();
    assert!(err.to_string().contains("space_key_out_of_range"));
}

#[test]
fn totals_must_equal_power_of_two() {
    let err = decode(r#"{"num_flips":2,"weights":{"0":1,"1":1,"2":1}}"#).unwrap_err();
    assert!(err.to_string().contains("space_total_mismatch"));
}

#[test]
fn overflowing_weights_are_rejected() {
    let json = format!(
        r#"{{"num_flips":1,"weights":{{"0":{},"1":2}}}}"#,
        u64::MAX
    );
    let err = decode(&json).unwrap_err();
    assert!(err.to_string().contains("space_total_mismatch"));
}

#[test]
fn oversized_num_flips_is_rejected() {
    let err = decode(r#"{"num_flips":64,"weights":{}}"#).unwrap_err();
    assert!(err.to_string().contains("space_num_flips_too_large"));
}

#[test]
fn closed_form_weights_decode_with_shuffled_keys() {
    let space = decode(r#"{"num_flips":3,"weights":{"3":1,"0":1,"2":3,"1":3}}"#).expect("valid");
    assert_eq!(space, binomial_sample_space(3).expect("three flips"));
}

#[test]
fn outcome_sequences_decode_through_length_check() {
    let seq: OutcomeSequence = serde_json::from_str(r#"["heads","tails"]"#).expect("valid");
    assert_eq!(seq.outcomes(), &[TrialOutcome::Heads, TrialOutcome::Tails]);

    let too_long = serde_json::to_string(&vec!["tails"; 64]).expect("serialize");
    let err = serde_json::from_str::<OutcomeSequence>(&too_long).unwrap_err();
    assert!(err.to_string().contains("num_flips_too_large"));

    let direct = OutcomeSequence::new(vec![TrialOutcome::Tails; 64]).unwrap_err();
    assert!(matches!(direct, CoinError::InvalidArgument(_)));
}
