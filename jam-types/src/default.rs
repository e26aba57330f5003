use std::array::from_fn;

use crate::{
    AccumulationHistory, ActivityRecord, ActivityRecords, Authorizations, CoreActivityRecord, CoreStatistics, CurrentValidators, EntropyPool, Judgements,
    Offenders, OpaqueHash, Privileges, ReadyQueue, RecentAccOutputs, RecentHistory, SafroleState, ServiceInfo, Services, State, ValidatorKey,
    ValidatorList, WorkReports,
};

impl Default for State {
    fn default() -> Self {
        State {
            current_validators: None,
            previous_validators: None,
            recent_history: None,
            safrole: None,
            past_judgements: None,
            offenders: None,
            curr_statistics: None,
            prev_statistics: None,
            next_validators: None,
            entropy: None,
            timeslot: None,
            work_reports: None,
            authorizations: None,
            privileges: None,
            ready_queue: None,
            accumulation_history: None,
            services: None,
            recent_acc_outputs: None,
            core_statistics: None,
        }
    }
}

impl Default for ValidatorKey {
    fn default() -> Self {
        ValidatorKey {
            bandersnatch: [0u8; 32],
            ed25519: [0u8; 32],
            bls: [0u8; 144],
            metadata: [0u8; 48],
        }
    }
}

impl Default for CurrentValidators {
    fn default() -> Self {
        CurrentValidators { keys: Vec::new() }
    }
}

impl Default for ValidatorList {
    fn default() -> Self {
        ValidatorList { keys: Vec::new() }
    }
}

impl Default for RecentHistory {
    fn default() -> Self {
        RecentHistory { entries: Vec::new() }
    }
}

impl Default for Judgements {
    fn default() -> Self {
        Judgements {
            good: Vec::new(),
            bad: Vec::new(),
            wonky: Vec::new(),
        }
    }
}

impl Default for Offenders {
    fn default() -> Self {
        Offenders { keys: Vec::new() }
    }
}

impl Default for ActivityRecord {
    fn default() -> Self {
        ActivityRecord {
            blocks: 0,
            tickets: 0,
            preimages: 0,
            preimages_size: 0,
            guarantees: 0,
            assurances: 0,
        }
    }
}

impl Default for ActivityRecords {
    fn default() -> Self {
        ActivityRecords {
            records: Box::new(from_fn(|_| ActivityRecord::default())),
        }
    }
}

impl Default for CoreActivityRecord {
    fn default() -> Self {
        CoreActivityRecord {
            gas_used: 0,
            imports: 0,
            extrinsic_count: 0,
            extrinsic_size: 0,
            exports: 0,
            bundle_size: 0,
            da_load: 0,
            popularity: 0,
        }
    }
}

impl Default for CoreStatistics {
    fn default() -> Self {
        CoreStatistics {
            records: Box::new(from_fn(|_| CoreActivityRecord::default())),
        }
    }
}

impl Default for EntropyPool {
    fn default() -> Self {
        EntropyPool::Full(Box::new(from_fn(|_| OpaqueHash::default())))
    }
}

impl Default for SafroleState {
    fn default() -> Self {
        SafroleState { raw: Vec::new() }
    }
}

impl Default for WorkReports {
    fn default() -> Self {
        WorkReports { raw: Vec::new() }
    }
}

impl Default for ReadyQueue {
    fn default() -> Self {
        ReadyQueue { raw: Vec::new() }
    }
}

impl Default for Authorizations {
    fn default() -> Self {
        Authorizations {
            pools: Vec::new(),
            queues: Vec::new(),
        }
    }
}

impl Default for Privileges {
    fn default() -> Self {
        Privileges {
            bless: 0,
            assign: 0,
            designate: 0,
            always_acc: Vec::new(),
        }
    }
}

impl Default for AccumulationHistory {
    fn default() -> Self {
        AccumulationHistory { epochs: Vec::new() }
    }
}

impl Default for RecentAccOutputs {
    fn default() -> Self {
        RecentAccOutputs { items: Vec::new() }
    }
}

impl Default for ServiceInfo {
    fn default() -> Self {
        ServiceInfo {
            code_hash: OpaqueHash::default(),
            balance: 0,
            acc_min_gas: 0,
            xfer_min_gas: 0,
            bytes: 0,
            items: 0,
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Services { items: Vec::new() }
    }
}

