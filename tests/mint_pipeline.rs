//! End-to-end pipeline tests: identifier in, reproducible artifact out.

use proptest::prelude::*;

use pixelmint::{
    allocate_serial, build_attributes, hash_identifier, message_for, AttributeValue, ColorSet,
    MintArtifact, PixelPattern, RarityTier, MAX_SUPPLY,
};

#[test]
fn full_pipeline_is_reproducible_for_seed_12345() {
    let seed = 12345u64;
    let tier = RarityTier::from_seed(seed);

    let first = (
        PixelPattern::generate(seed, tier),
        ColorSet::generate(seed, tier),
        allocate_serial(seed),
        build_attributes(tier, seed),
        message_for(tier, seed),
    );
    let second = (
        PixelPattern::generate(seed, tier),
        ColorSet::generate(seed, tier),
        allocate_serial(seed),
        build_attributes(tier, seed),
        message_for(tier, seed),
    );
    assert_eq!(first, second);
}

#[test]
fn identifier_to_metadata_is_stable_across_invocations() {
    let a = MintArtifact::from_identifier("0x7a3bF59c1D4e8A2b9c0D1e2F3a4B5c6D7e8F9a0B").unwrap();
    let b = MintArtifact::from_identifier("0x7a3bF59c1D4e8A2b9c0D1e2F3a4B5c6D7e8F9a0B").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.metadata("Pixelmint"), b.metadata("Pixelmint"));
}

#[test]
fn classifier_is_total_over_the_random_span() {
    // Every seed the random source can produce must classify cleanly.
    let mut seen_common = false;
    for seed in (0..1_000_000u64).step_by(7) {
        let tier = RarityTier::from_seed(seed);
        if tier == RarityTier::Common {
            seen_common = true;
        }
    }
    assert!(seen_common);
    // Boundary cases called out by contract.
    let _ = RarityTier::from_seed(0);
    let _ = RarityTier::from_seed(999_999);
    let _ = RarityTier::from_seed(u64::MAX);
}

#[test]
fn metadata_json_has_the_expected_shape() {
    let artifact = MintArtifact::from_seed(990_500); // Gold bucket
    assert_eq!(artifact.tier, RarityTier::Gold);

    let meta = artifact.metadata("Pixelmint");
    let json = serde_json::to_value(&meta).unwrap();

    let attrs = json["attributes"].as_array().unwrap();
    let rarity = attrs
        .iter()
        .find(|a| a["trait_type"] == "Rarity")
        .expect("Rarity attribute");
    assert_eq!(rarity["value"], "Gold");

    let seed = attrs
        .iter()
        .find(|a| a["trait_type"] == "Seed")
        .expect("Seed attribute");
    assert_eq!(seed["value"].as_u64(), Some(990_500));
}

#[test]
fn attribute_values_keep_their_types() {
    let artifact = MintArtifact::from_seed(3);
    for attr in &artifact.attributes {
        match (&attr.trait_type[..], &attr.value) {
            ("Seed", AttributeValue::Number(_)) => {}
            ("Seed", other) => panic!("Seed must be numeric, got {other:?}"),
            (_, _) => {}
        }
    }
}

proptest! {
    #[test]
    fn hash_identifier_never_panics(raw in ".*") {
        // Errors are allowed (bare 0x prefix), panics are not.
        let _ = hash_identifier(&raw);
    }

    #[test]
    fn hash_identifier_is_deterministic(raw in ".*") {
        prop_assert_eq!(hash_identifier(&raw), hash_identifier(&raw));
    }

    #[test]
    fn classifier_total_for_any_seed(seed: u64) {
        let tier = RarityTier::from_seed(seed);
        prop_assert!(RarityTier::all().contains(&tier));
    }

    #[test]
    fn serial_always_in_range(seed: u64) {
        let serial = allocate_serial(seed);
        let body = serial.strip_prefix('#').unwrap();
        let (num, supply) = body.split_once('/').unwrap();
        prop_assert_eq!(num.len(), 5);
        prop_assert_eq!(supply, "10000");
        let n: u64 = num.parse().unwrap();
        prop_assert!((1..=MAX_SUPPLY).contains(&n));
    }

    #[test]
    fn artifact_derivation_total_for_any_seed(seed: u64) {
        let artifact = MintArtifact::from_seed(seed);
        prop_assert_eq!(artifact.pattern.side(), PixelPattern::side_for(artifact.tier));
        prop_assert!(!artifact.fortune.is_empty());
    }
}
