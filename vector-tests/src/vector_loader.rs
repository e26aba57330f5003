// JSON vector parsing. Trie vectors use the jamtestvectors schema: a list of
// cases, each a hex keyval map plus the expected root. State vectors are a
// flat keyval list of discriminator and hex value.
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use jam_types::OpaqueHash;

#[derive(Debug, Deserialize)]
pub struct TrieVector {
    pub input: HashMap<String, String>,
    pub output: String,
}

#[derive(Debug, Deserialize)]
pub struct StateKeyval {
    pub disc: u8,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct StateVector {
    pub keyvals: Vec<StateKeyval>,
}

pub fn load_trie_vectors(path: &Path) -> Result<Vec<TrieVector>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&content).map_err(|e| format!("bad trie vector json: {e}"))
}

pub fn load_state_vector(path: &Path) -> Result<StateVector, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&content).map_err(|e| format!("bad state vector json: {e}"))
}

impl TrieVector {
    /// The case's keyvals, hex decoded, ready for the trie.
    pub fn keyvals(&self) -> Result<Vec<(Vec<u8>, Vec<u8>)>, String> {
        let mut kvs = Vec::with_capacity(self.input.len());

        for (key_hex, value_hex) in &self.input {
            let key = hex::decode(strip_prefix(key_hex)).map_err(|e| format!("bad key hex: {e}"))?;
            let value = hex::decode(strip_prefix(value_hex)).map_err(|e| format!("bad value hex: {e}"))?;
            kvs.push((key, value));
        }

        Ok(kvs)
    }

    pub fn expected_root(&self) -> Result<OpaqueHash, String> {
        let bytes = hex::decode(strip_prefix(&self.output)).map_err(|e| format!("bad root hex: {e}"))?;
        OpaqueHash::try_from(bytes.as_slice()).map_err(|_| "root must be 32 bytes".to_string())
    }
}

impl StateVector {
    /// The discriminator-addressed slots, hex decoded, ready for the
    /// assembler.
    pub fn pairs(&self) -> Result<Vec<(u8, Vec<u8>)>, String> {
        self.keyvals
            .iter()
            .map(|kv| {
                let value = hex::decode(strip_prefix(&kv.value)).map_err(|e| format!("bad value hex: {e}"))?;
                Ok((kv.disc, value))
            })
            .collect()
    }
}

fn strip_prefix(s: &str) -> &str {
    s.strip_prefix("0x").unwrap_or(s)
}
