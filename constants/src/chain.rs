/*
    TINY CONFIG
*/
#[cfg(not(feature = "full"))]
mod profile {
    // Total number of validators
    pub const VALIDATORS_COUNT: usize = 6;
    // The length of an epoch in timeslots
    pub const EPOCH_LENGTH: usize = 12;
    // Total number of cores
    pub const CORES_COUNT: usize = 2;
}

/*
    FULL CONFIG
*/
#[cfg(feature = "full")]
mod profile {
    pub const VALIDATORS_COUNT: usize = 1023;
    pub const EPOCH_LENGTH: usize = 600;
    pub const CORES_COUNT: usize = 341;
}

pub use profile::*;

// The size of the on-chain entropy pool
pub const ENTROPY_POOL_SIZE: usize = 4;
// The number of validator slots in an activity statistics era. Fixed by the
// statistics sub-schema independently of the validator set size.
pub const STATISTICS_SLOTS: usize = 252;
// One validator key record: bandersnatch(32) + ed25519(32) + bls(144) + metadata(48)
pub const VALIDATOR_KEY_SIZE: usize = 256;
// Width of the bandersnatch component of a validator key
pub const BANDERSNATCH_KEY_SIZE: usize = 32;
// Width of the ed25519 component of a validator key
pub const ED25519_KEY_SIZE: usize = 32;
// Width of the bls component of a validator key
pub const BLS_KEY_SIZE: usize = 144;
// Width of the opaque metadata tail of a validator key
pub const VALIDATOR_METADATA_SIZE: usize = 48;
// Every authorization pool/queue entry occupies this many octets, zero padded
pub const AUTH_ENTRY_SIZE: usize = 305;
// Trie keys are 31-octet identifiers
pub const TRIE_KEY_SIZE: usize = 31;

// JAM global state discriminators
pub const CURR_VALIDATORS: u8 = 0x01;
pub const PREV_VALIDATORS: u8 = 0x02;
pub const RECENT_HISTORY: u8 = 0x03;
pub const SAFROLE: u8 = 0x04;
pub const PAST_JUDGEMENTS: u8 = 0x05;
pub const OFFENDERS: u8 = 0x06;
pub const CURR_STATISTICS: u8 = 0x07;
pub const PREV_STATISTICS: u8 = 0x08;
pub const NEXT_VALIDATORS: u8 = 0x09;
pub const ENTROPY: u8 = 0x0A;
pub const TIME: u8 = 0x0B;
pub const WORK_REPORTS: u8 = 0x0C;
pub const AUTHORIZATIONS: u8 = 0x0D;
pub const PRIVILEGES: u8 = 0x0E;
pub const READY_QUEUE: u8 = 0x0F;
pub const ACCUMULATION_HISTORY: u8 = 0x10;
pub const SERVICES: u8 = 0x11;
pub const RECENT_ACC_OUTPUTS: u8 = 0x12;
pub const CORE_STATISTICS: u8 = 0x13;

// The closed set of state discriminators, in emission order. Anything outside
// this list is reserved and rejected on decode.
pub const STATE_DISCRIMINATORS: [u8; 19] = [
    CURR_VALIDATORS,
    PREV_VALIDATORS,
    RECENT_HISTORY,
    SAFROLE,
    PAST_JUDGEMENTS,
    OFFENDERS,
    CURR_STATISTICS,
    PREV_STATISTICS,
    NEXT_VALIDATORS,
    ENTROPY,
    TIME,
    WORK_REPORTS,
    AUTHORIZATIONS,
    PRIVILEGES,
    READY_QUEUE,
    ACCUMULATION_HISTORY,
    SERVICES,
    RECENT_ACC_OUTPUTS,
    CORE_STATISTICS,
];
