//! tests/vector_tests.rs
//! Known-answer tests against published AES-128 ECB vectors (FIPS-197, SP 800-38A)

use aesecb_rs::consts::BLOCK_SIZE;
use aesecb_rs::{
    decrypt_parallel, decrypt_sequential, encrypt_parallel, encrypt_sequential, key_from_bytes,
    key_schedule,
};
use hex::decode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct EcbVector {
    source: String,
    key_hex: String,
    plaintext_hex: String,
    ciphertext_hex: String,
}

fn load_vectors() -> Vec<EcbVector> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("test_data")
        .join("ecb_aes128_vectors.json");
    let data = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&data).expect("vector file is valid JSON")
}

#[test]
fn sequential_encrypt_matches_vectors() {
    for v in load_vectors() {
        let key = key_schedule(&key_from_bytes(&decode(&v.key_hex).unwrap()).unwrap());
        let plaintext = decode(&v.plaintext_hex).unwrap();
        let expected = decode(&v.ciphertext_hex).unwrap();

        assert_eq!(encrypt_sequential(&plaintext, &key).unwrap(), expected, "{}", v.source);
    }
}

#[test]
fn parallel_encrypt_matches_vectors() {
    for v in load_vectors() {
        let key = key_schedule(&key_from_bytes(&decode(&v.key_hex).unwrap()).unwrap());
        let plaintext = decode(&v.plaintext_hex).unwrap();
        let expected = decode(&v.ciphertext_hex).unwrap();
        let total = plaintext.len() / BLOCK_SIZE;

        for workers in 1..=6 {
            let actual = encrypt_parallel(&plaintext, &key, total, workers).unwrap();
            assert_eq!(actual, expected, "{} workers={workers}", v.source);
        }
    }
}

#[test]
fn decrypt_matches_vectors() {
    for v in load_vectors() {
        let key = key_schedule(&key_from_bytes(&decode(&v.key_hex).unwrap()).unwrap());
        let plaintext = decode(&v.plaintext_hex).unwrap();
        let ciphertext = decode(&v.ciphertext_hex).unwrap();
        let total = ciphertext.len() / BLOCK_SIZE;

        assert_eq!(decrypt_sequential(&ciphertext, &key).unwrap(), plaintext, "{}", v.source);
        assert_eq!(
            decrypt_parallel(&ciphertext, &key, total, 3).unwrap(),
            plaintext,
            "{}",
            v.source
        );
    }
}
