pub mod crypto;
pub mod log;
pub mod state;
pub mod trie;

#[macro_export] macro_rules! print_hash {
    ($hash:expr) => {{
        let hash_str = $hash.iter().map(|byte| format!("{:02x}", byte)).collect::<String>();
        format!("{}...{}", &hash_str[..4], &hash_str[hash_str.len()-4..])
    }};
}
