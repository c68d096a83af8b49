mod common;

use dsa::signature::{DigestVerifier, RandomizedDigestSigner};
use dsa::{BigInt, Error, SigningKey};
use sha1::{Digest, Sha1};

fn generate_keypair() -> SigningKey {
    let mut rng = rand::thread_rng();
    SigningKey::generate(&mut rng, common::components())
}

#[test]
fn encode_decode_signing_key() {
    let signing_key = common::signing_key();
    let encoded = signing_key.to_pkcs8_der().unwrap();
    let decoded = SigningKey::from_pkcs8_der(&encoded).unwrap();
    assert_eq!(signing_key, decoded);
}

#[test]
fn decoded_key_recovers_public_component() {
    // The container stores no y; decoding must recompute g^x mod p, which
    // for the RFC 6979 key pair is the published Y value.
    let encoded = common::signing_key().to_pkcs8_der().unwrap();
    let decoded = SigningKey::from_pkcs8_der(&encoded).unwrap();
    assert_eq!(
        decoded.verifying_key().y(),
        &BigInt::from_hex(common::Y_HEX).unwrap()
    );
}

#[test]
fn sign_and_verify() {
    const DATA: &[u8] = b"SIGN AND VERIFY THOSE BYTES";

    let signing_key = generate_keypair();
    let verifying_key = signing_key.verifying_key();

    let signature =
        signing_key.sign_digest_with_rng(&mut rand::thread_rng(), Sha1::new().chain_update(DATA));

    assert!(verifying_key
        .verify_digest(Sha1::new().chain_update(DATA), &signature)
        .is_ok());
}

#[test]
fn verify_validity() {
    let signing_key = generate_keypair();
    let components = signing_key.verifying_key().components();

    assert!(
        BigInt::zero() < *signing_key.x() && signing_key.x() < components.q(),
        "Requirement 0<x<q not met"
    );
    assert_eq!(
        *signing_key.verifying_key().y(),
        components.g().modpow(signing_key.x(), components.p()),
        "Requirement y=(g^x)%p not met"
    );
}

#[test]
fn wrong_digest_length_is_rejected() {
    let signing_key = common::signing_key();
    let result = signing_key.sign_prehashed(&mut rand::thread_rng(), &[0u8; 19]);
    assert_eq!(result, Err(Error::InvalidDigestLength(19)));
}

#[test]
fn zero_private_component_is_rejected() {
    let result = SigningKey::from_components(common::verifying_key(), BigInt::zero());
    assert_eq!(result, Err(Error::MalformedKey));
}
