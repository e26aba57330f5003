mod default;
// JAM state types for the codec and state-root core
use constants::chain::{AUTH_ENTRY_SIZE, CORES_COUNT, ENTROPY_POOL_SIZE, STATISTICS_SLOTS, TRIE_KEY_SIZE, VALIDATORS_COUNT};

// ----------------------------------------------------------------------------------------------------------
// Crypto
// ----------------------------------------------------------------------------------------------------------
pub type Ed25519Public = [u8; 32];
pub type Ed25519Signature = [u8; 64];
pub type BandersnatchPublic = [u8; 32];
pub type BlsPublic = [u8; 144];
pub type ValidatorMetadata = [u8; 48];

// ----------------------------------------------------------------------------------------------------------
// Application Specific Core
// ----------------------------------------------------------------------------------------------------------
pub type OpaqueHash = [u8; 32];

pub type Hash = OpaqueHash;
pub type HeaderHash = OpaqueHash;
pub type StateRoot = OpaqueHash;
pub type WorkReportHash = OpaqueHash;
pub type ExportsRoot = OpaqueHash;

pub type TimeSlot = u32;
pub type ServiceId = u32;
pub type Gas = u64;
pub type Balance = u64;

// ----------------------------------------------------------------------------------------------------------
// Validators
// ----------------------------------------------------------------------------------------------------------
/// One validator key record: a bandersnatch key, an ed25519 key, a BLS key and
/// an opaque metadata tail, 256 octets in total. The metadata is not
/// interpreted anywhere in the core but must survive the roundtrip verbatim.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ValidatorKey {
    pub bandersnatch: BandersnatchPublic,
    pub ed25519: Ed25519Public,
    pub bls: BlsPublic,
    pub metadata: ValidatorMetadata,
}

/// The current validator set (0x01). The wire carries a u16 count before the
/// key records; the count is rewritten from the actual length on encode.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentValidators {
    pub keys: Vec<ValidatorKey>,
}

/// A countless validator set (0x02 previous, 0x09 next). The number of records
/// is inferred from the size of the value slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorList {
    pub keys: Vec<ValidatorKey>,
}

// ----------------------------------------------------------------------------------------------------------
// Recent history
// ----------------------------------------------------------------------------------------------------------
pub type MmrPeak = Option<OpaqueHash>;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportedPackage {
    pub hash: WorkReportHash,
    pub exports_root: ExportsRoot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    // Block's header hash
    pub header_hash: HeaderHash,
    // Accumulation-result MMR peaks
    pub mmr_peaks: Vec<MmrPeak>,
    // Block's posterior state root
    pub state_root: StateRoot,
    // Work packages reported in the block
    pub reported: Vec<ReportedPackage>,
}

/// Recent history (0x03): a compact-prefixed entry list closed by one 0x00
/// terminator octet.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentHistory {
    pub entries: Vec<HistoryEntry>,
}

// ----------------------------------------------------------------------------------------------------------
// Judgements
// ----------------------------------------------------------------------------------------------------------
/// Past judgements (0x05): the good, bad and wonky report-hash sets, in that
/// order on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Judgements {
    pub good: Vec<WorkReportHash>,
    pub bad: Vec<WorkReportHash>,
    pub wonky: Vec<WorkReportHash>,
}

/// Offending validator keys (0x06).
#[derive(Debug, Clone, PartialEq)]
pub struct Offenders {
    pub keys: Vec<Ed25519Public>,
}

// ----------------------------------------------------------------------------------------------------------
// Statistics
// ----------------------------------------------------------------------------------------------------------
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ActivityRecord {
    pub blocks: u32,
    pub tickets: u32,
    pub preimages: u32,
    pub preimages_size: u32,
    pub guarantees: u32,
    pub assurances: u32,
}

/// One era of validator activity statistics (0x07 current, 0x08 previous).
/// Always STATISTICS_SLOTS records, decoded iteratively with no prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecords {
    pub records: Box<[ActivityRecord; STATISTICS_SLOTS]>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoreActivityRecord {
    // Gas consumed by the core for reported work
    pub gas_used: u64,
    // Segments imported from DA
    pub imports: u16,
    // Extrinsics used in computing the workload
    pub extrinsic_count: u16,
    // Total size of those extrinsics in octets
    pub extrinsic_size: u32,
    // Segments exported into DA
    pub exports: u16,
    // The work-bundle size
    pub bundle_size: u32,
    // Octets placed into Audits or Segments DA
    pub da_load: u32,
    // Validators which formed the assurance super-majority
    pub popularity: u16,
}

/// Per-core activity statistics (0x13), one record per core of the built
/// profile.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreStatistics {
    pub records: Box<[CoreActivityRecord; CORES_COUNT]>,
}

// ----------------------------------------------------------------------------------------------------------
// Entropy
// ----------------------------------------------------------------------------------------------------------
/// The entropy accumulator (0x0A): four hashes, or a single hash in the
/// genesis stub variant. The two are told apart by the slot length alone.
#[derive(Debug, Clone, PartialEq)]
pub enum EntropyPool {
    Full(Box<[OpaqueHash; ENTROPY_POOL_SIZE]>),
    Genesis(OpaqueHash),
}

// ----------------------------------------------------------------------------------------------------------
// Opaque roundtrip fields
// ----------------------------------------------------------------------------------------------------------
/// Safrole state (0x04). Tickets and markers are the sealing STF's concern;
/// the core carries the slot verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct SafroleState {
    pub raw: Vec<u8>,
}

/// Work reports per core (0x0C), carried verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkReports {
    pub raw: Vec<u8>,
}

/// The accumulation ready queue (0x0F). Its interior is work reports, so it is
/// carried verbatim like 0x0C.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadyQueue {
    pub raw: Vec<u8>,
}

// ----------------------------------------------------------------------------------------------------------
// Authorizations
// ----------------------------------------------------------------------------------------------------------
/// One authorization entry, zero padded to AUTH_ENTRY_SIZE octets. The padding
/// is preserved verbatim across the roundtrip.
pub type AuthEntry = Box<[u8; AUTH_ENTRY_SIZE]>;

/// Authorizations (0x0D): the pools followed by the queues, each a
/// compact-prefixed run of fixed-width entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Authorizations {
    pub pools: Vec<AuthEntry>,
    pub queues: Vec<AuthEntry>,
}

// ----------------------------------------------------------------------------------------------------------
// Privileges
// ----------------------------------------------------------------------------------------------------------
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AlwaysAccItem {
    pub service: ServiceId,
    pub gas: Gas,
}

/// Privileged service indices (0x0E).
#[derive(Debug, Clone, PartialEq)]
pub struct Privileges {
    // Service able to alter the privileges themselves
    pub bless: ServiceId,
    // Service able to alter the authorizer queue
    pub assign: ServiceId,
    // Service able to alter the next validator set
    pub designate: ServiceId,
    // Services which accumulate in every block, with their basic gas
    pub always_acc: Vec<AlwaysAccItem>,
}

// ----------------------------------------------------------------------------------------------------------
// Accumulation
// ----------------------------------------------------------------------------------------------------------
/// Accumulation history (0x10): per-epoch-slot lists of accumulated
/// work-package hashes.
#[derive(Debug, Clone, PartialEq)]
pub struct AccumulationHistory {
    pub epochs: Vec<Vec<WorkReportHash>>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AccOutputItem {
    pub service: ServiceId,
    pub output: OpaqueHash,
}

/// Recent accumulation outputs (0x12).
#[derive(Debug, Clone, PartialEq)]
pub struct RecentAccOutputs {
    pub items: Vec<AccOutputItem>,
}

// ----------------------------------------------------------------------------------------------------------
// Services
// ----------------------------------------------------------------------------------------------------------
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ServiceInfo {
    // Code hash
    pub code_hash: OpaqueHash,
    // Account balance
    pub balance: Balance,
    // Minimum gas for the accumulate entry point
    pub acc_min_gas: Gas,
    // Minimum gas for the on-transfer entry point
    pub xfer_min_gas: Gas,
    // Octets in the service's storage
    pub bytes: u64,
    // Items in the service's storage
    pub items: u32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ServiceItem {
    pub id: ServiceId,
    pub info: ServiceInfo,
}

/// Service account summaries (0x11).
#[derive(Debug, Clone, PartialEq)]
pub struct Services {
    pub items: Vec<ServiceItem>,
}

// ----------------------------------------------------------------------------------------------------------
// State
// ----------------------------------------------------------------------------------------------------------
/// The typed chain state. One optional field per discriminator; a field left
/// `None` was simply absent from the keyval input and is skipped on emission.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub current_validators: Option<CurrentValidators>,
    pub previous_validators: Option<ValidatorList>,
    pub recent_history: Option<RecentHistory>,
    pub safrole: Option<SafroleState>,
    pub past_judgements: Option<Judgements>,
    pub offenders: Option<Offenders>,
    pub curr_statistics: Option<ActivityRecords>,
    pub prev_statistics: Option<ActivityRecords>,
    pub next_validators: Option<ValidatorList>,
    pub entropy: Option<EntropyPool>,
    pub timeslot: Option<TimeSlot>,
    pub work_reports: Option<WorkReports>,
    pub authorizations: Option<Authorizations>,
    pub privileges: Option<Privileges>,
    pub ready_queue: Option<ReadyQueue>,
    pub accumulation_history: Option<AccumulationHistory>,
    pub services: Option<Services>,
    pub recent_acc_outputs: Option<RecentAccOutputs>,
    pub core_statistics: Option<CoreStatistics>,
}

// ----------------------------------------------------------------------------------------------------------
// Chain spec
// ----------------------------------------------------------------------------------------------------------
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Profile {
    Tiny,
    Full,
}

impl Profile {
    /// The profile this workspace was built with.
    pub fn current() -> Self {
        match constants::BUILD_PROFILE {
            "full" => Profile::Full,
            _ => Profile::Tiny,
        }
    }
}

/// The chain-spec record. `profile` reports the compile-time size profile,
/// `strict_compact` selects canonical-only compact decoding, and
/// `validator_count` is informational: the statistics eras always carry the
/// fixed STATISTICS_SLOTS records.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChainSpec {
    pub profile: Profile,
    pub strict_compact: bool,
    pub validator_count: u32,
}

impl Default for ChainSpec {
    fn default() -> Self {
        ChainSpec {
            profile: Profile::current(),
            strict_compact: false,
            validator_count: VALIDATORS_COUNT as u32,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------
// Errors
// ----------------------------------------------------------------------------------------------------------
#[derive(Debug, PartialEq)]
pub enum ReadError {
    /// The decoder needed more bytes than the slot held.
    NotEnoughData { position: usize, needed: usize },
    /// A compact decode met the reserved 1110xxxx prefix.
    ReservedPrefix { position: usize },
    /// A compact decode met a longer-than-necessary encoding in strict mode.
    NonCanonical { position: usize },
    /// A field-specific structural violation.
    Shape(&'static str),
    /// A tag or enum payload outside its admitted values.
    InvalidData,
    /// A decoded size does not fit the platform's usize.
    ConversionError,
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::NotEnoughData { position, needed } => {
                write!(f, "not enough data at offset {position}, needed {needed} more")
            }
            ReadError::ReservedPrefix { position } => {
                write!(f, "reserved compact prefix at offset {position}")
            }
            ReadError::NonCanonical { position } => {
                write!(f, "non-canonical compact encoding at offset {position}")
            }
            ReadError::Shape(reason) => write!(f, "malformed field: {reason}"),
            ReadError::InvalidData => write!(f, "invalid data encountered during decoding"),
            ReadError::ConversionError => write!(f, "decoded size exceeds the platform limits"),
        }
    }
}

impl std::error::Error for ReadError {}

#[derive(Debug, PartialEq)]
pub enum StateError {
    /// A discriminator outside the known 0x01..=0x13 set.
    UnknownDiscriminator(u8),
    /// The same discriminator appeared twice in the keyval input.
    DuplicateDiscriminator(u8),
    /// A field decoder failed; the field is named.
    Field { field: &'static str, source: ReadError },
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::UnknownDiscriminator(disc) => {
                write!(f, "unknown state discriminator {disc:#04x}")
            }
            StateError::DuplicateDiscriminator(disc) => {
                write!(f, "duplicate state discriminator {disc:#04x}")
            }
            StateError::Field { field, source } => {
                write!(f, "failed to decode state field {field}: {source}")
            }
        }
    }
}

impl std::error::Error for StateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StateError::Field { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum MerkleError {
    /// Two equal keys in the trie input.
    DuplicateKey,
    /// A key whose length is not the trie key width.
    KeyLength(usize),
}

impl std::fmt::Display for MerkleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MerkleError::DuplicateKey => write!(f, "duplicate key in trie input"),
            MerkleError::KeyLength(len) => {
                write!(f, "trie key of {len} octets, expected {TRIE_KEY_SIZE}")
            }
        }
    }
}

impl std::error::Error for MerkleError {}
