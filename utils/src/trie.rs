use constants::chain::TRIE_KEY_SIZE;
use jam_types::{MerkleError, StateRoot};

use crate::crypto::blake2b_256;

// State merklization commits to the serialized keyval mapping through a
// binary Patricia Merkle trie. Keys descend bit by bit, most significant
// first; runs of agreeing bits are skipped so every branch separates its
// two sides.

fn bit(key: &[u8], i: usize) -> bool {
    (key[i >> 3] & (1 << (7 - (i & 7)))) != 0
}

/// A leaf node before hashing: a zero discriminant octet, the full key and
/// the hash of the value.
pub fn leaf_node(key: &[u8], value: &[u8]) -> [u8; 64] {
    let mut node = [0u8; 64];
    node[0] = 0x00;
    node[1..1 + TRIE_KEY_SIZE].copy_from_slice(key);
    node[1 + TRIE_KEY_SIZE..].copy_from_slice(&blake2b_256(value));
    node
}

/// A branch node before hashing: a one discriminant octet, then the 0-bit and
/// 1-bit sub-trie identities.
pub fn branch_node(left: &StateRoot, right: &StateRoot) -> [u8; 65] {
    let mut node = [0u8; 65];
    node[0] = 0x01;
    node[1..33].copy_from_slice(left);
    node[33..].copy_from_slice(right);
    node
}

/// The state root over a keyval set. The input may arrive in any order; it is
/// sorted here, so the root is a function of the set alone. Keys must be
/// unique and exactly TRIE_KEY_SIZE octets.
pub fn merkle_root(kvs: &[(Vec<u8>, Vec<u8>)]) -> Result<StateRoot, MerkleError> {
    for (key, _) in kvs {
        if key.len() != TRIE_KEY_SIZE {
            return Err(MerkleError::KeyLength(key.len()));
        }
    }

    let mut sorted: Vec<(&[u8], &[u8])> = kvs
        .iter()
        .map(|(key, value)| (key.as_slice(), value.as_slice()))
        .collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    for pair in sorted.windows(2) {
        if pair[0].0 == pair[1].0 {
            return Err(MerkleError::DuplicateKey);
        }
    }

    let root = merkle(&sorted, 0);
    crate::log::trace!("state root {}", crate::print_hash!(root));

    Ok(root)
}

// kvs is sorted and duplicate free; every key agrees on the bits before
// from_bit. Recursion depth is bounded by the key width in bits.
fn merkle(kvs: &[(&[u8], &[u8])], from_bit: usize) -> StateRoot {
    // An empty (sub-)trie is the zero hash
    if kvs.is_empty() {
        return [0u8; 32];
    }

    if kvs.len() == 1 {
        let (key, value) = kvs[0];
        return blake2b_256(&leaf_node(key, value));
    }

    // The first bit the keys disagree on; distinct fixed-width keys
    // guarantee one exists
    let mut split = from_bit;
    let first = kvs[0].0;
    while kvs.iter().all(|(key, _)| bit(key, split) == bit(first, split)) {
        split += 1;
    }

    // Lexicographic order puts every 0-bit key before every 1-bit key once
    // the earlier bits agree, so the partition is a single cut
    let pivot = kvs.partition_point(|(key, _)| !bit(key, split));

    let left_hash = merkle(&kvs[..pivot], split + 1);
    let right_hash = merkle(&kvs[pivot..], split + 1);

    blake2b_256(&branch_node(&left_hash, &right_hash))
}
