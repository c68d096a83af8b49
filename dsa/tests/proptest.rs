//! Property-based tests.

mod common;

use asn1der::{tag, unsigned_integer, Node};
use dsa::signature::hazmat::PrehashVerifier;
use dsa::{BigInt, Signature, SigningKey, VerifyingKey};
use proptest::prelude::*;

prop_compose! {
    /// Key pair over the fixed test group with a seed-derived private
    /// component in [1, q-1].
    fn private_key()(seed in any::<[u8; 20]>()) -> SigningKey {
        let components = common::components();
        let q = components.q().clone();
        let x = &(&BigInt::from_be_bytes(&seed) % &(&q - &BigInt::one())) + &BigInt::one();
        let y = components.g().modpow(&x, components.p());
        let verifying_key = VerifyingKey::from_components(components, y).unwrap();
        SigningKey::from_components(verifying_key, x).unwrap()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn pkcs8_round_trip(signing_key in private_key()) {
        let der = signing_key.to_pkcs8_der().unwrap();
        let decoded = SigningKey::from_pkcs8_der(&der).unwrap();
        prop_assert_eq!(signing_key, decoded);
    }

    #[test]
    fn public_key_round_trip(signing_key in private_key()) {
        let verifying_key = signing_key.verifying_key();
        let der = verifying_key.to_public_key_der().unwrap();
        let decoded = VerifyingKey::from_public_key_der(&der).unwrap();
        prop_assert_eq!(verifying_key, &decoded);
    }

    #[test]
    fn dsa_signature_verification(r in any::<Vec<u8>>(), s in any::<Vec<u8>>()) {
        let verifying_key = common::verifying_key();

        let asn1 = Node::constructed(
            tag::SEQUENCE,
            vec![unsigned_integer(&r), unsigned_integer(&s)],
        )
        .to_der()
        .expect("Failed to serialize signature");

        let Ok(signature) = Signature::from_der(&asn1) else {
            return Ok(());
        };

        prop_assert!(verifying_key.verify_prehash(&[0u8; 20], &signature).is_err());
    }
}
