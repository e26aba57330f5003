// The only crypto surface the core touches. Hashing delegates to sp-core and
// is total; signature verification reports malformed input as a plain false.
use sp_core::{ed25519, Pair};

use jam_types::{Ed25519Public, Ed25519Signature, OpaqueHash};

pub fn blake2b_256(input: &[u8]) -> OpaqueHash {
    sp_core::blake2_256(input)
}

pub fn keccak_256(input: &[u8]) -> OpaqueHash {
    sp_core::keccak_256(input)
}

pub fn ed25519_verify(public_key: &Ed25519Public, message: &[u8], signature: &Ed25519Signature) -> bool {
    let signature = ed25519::Signature::from_raw(*signature);
    let public_key = ed25519::Public::from_raw(*public_key);

    ed25519::Pair::verify(&signature, message, &public_key)
}
