// Every field codec must reproduce its wire image exactly. Values are
// generated typed, pushed through encode, and read back; since the encoders
// are canonical this pins byte-identity both ways.
#[cfg(test)]
mod tests {

    use codec::{BytesReader, Decode, Encode};
    use jam_types::{
        AccOutputItem, AccumulationHistory, ActivityRecord, ActivityRecords, AlwaysAccItem, Authorizations, CoreActivityRecord, CoreStatistics,
        CurrentValidators, EntropyPool, HistoryEntry, Judgements, Offenders, Privileges, RecentAccOutputs, RecentHistory, ReportedPackage, ServiceInfo,
        ServiceItem, Services, ValidatorKey, ValidatorList,
    };
    use proptest::prelude::*;

    fn roundtrip<T: Encode + Decode + PartialEq + std::fmt::Debug>(value: &T) {
        let encoded = value.encode();
        let mut reader = BytesReader::new(&encoded);
        let decoded = T::decode(&mut reader).expect("canonical image should decode");
        assert!(reader.is_exhausted(), "decode must consume the whole image");
        assert_eq!(value, &decoded);
        assert_eq!(encoded, decoded.encode());
    }

    fn hash() -> impl Strategy<Value = [u8; 32]> {
        any::<[u8; 32]>()
    }

    fn validator_key() -> impl Strategy<Value = ValidatorKey> {
        (hash(), hash(), any::<u8>(), any::<[u8; 48]>()).prop_map(|(bandersnatch, ed25519, bls_fill, metadata)| {
            ValidatorKey {
                bandersnatch,
                ed25519,
                bls: [bls_fill; 144],
                metadata,
            }
        })
    }

    fn history_entry() -> impl Strategy<Value = HistoryEntry> {
        (
            hash(),
            proptest::collection::vec(proptest::option::of(hash()), 0..4),
            hash(),
            proptest::collection::vec((hash(), hash()), 0..3),
        )
            .prop_map(|(header_hash, mmr_peaks, state_root, reported)| HistoryEntry {
                header_hash,
                mmr_peaks,
                state_root,
                reported: reported
                    .into_iter()
                    .map(|(hash, exports_root)| ReportedPackage { hash, exports_root })
                    .collect(),
            })
    }

    proptest! {
        #[test]
        fn current_validators(keys in proptest::collection::vec(validator_key(), 0..4)) {
            roundtrip(&CurrentValidators { keys });
        }

        #[test]
        fn validator_list(keys in proptest::collection::vec(validator_key(), 0..4)) {
            roundtrip(&ValidatorList { keys });
        }

        #[test]
        fn recent_history(entries in proptest::collection::vec(history_entry(), 0..4)) {
            roundtrip(&RecentHistory { entries });
        }

        #[test]
        fn judgements(
            good in proptest::collection::vec(hash(), 0..4),
            bad in proptest::collection::vec(hash(), 0..4),
            wonky in proptest::collection::vec(hash(), 0..4),
        ) {
            roundtrip(&Judgements { good, bad, wonky });
        }

        #[test]
        fn offenders(keys in proptest::collection::vec(hash(), 0..6)) {
            roundtrip(&Offenders { keys });
        }

        #[test]
        fn activity_records(seed in proptest::collection::vec(any::<u32>(), 6)) {
            let mut records = ActivityRecords::default();
            records.records[0] = ActivityRecord {
                blocks: seed[0],
                tickets: seed[1],
                preimages: seed[2],
                preimages_size: seed[3],
                guarantees: seed[4],
                assurances: seed[5],
            };
            let last = records.records.len() - 1;
            records.records[last] = records.records[0];
            roundtrip(&records);
        }

        #[test]
        fn core_statistics(gas in any::<u64>(), imports in any::<u16>(), size in any::<u32>()) {
            let mut cores = CoreStatistics::default();
            cores.records[0] = CoreActivityRecord {
                gas_used: gas,
                imports,
                extrinsic_count: imports,
                extrinsic_size: size,
                exports: imports,
                bundle_size: size,
                da_load: size,
                popularity: imports,
            };
            roundtrip(&cores);
        }

        #[test]
        fn entropy_pool(hashes in proptest::collection::vec(hash(), 4)) {
            let mut pool = Box::new([[0u8; 32]; 4]);
            pool.copy_from_slice(&hashes);
            roundtrip(&EntropyPool::Full(pool));
        }

        #[test]
        fn entropy_genesis(stub in hash()) {
            roundtrip(&EntropyPool::Genesis(stub));
        }

        #[test]
        fn authorizations(
            pools in proptest::collection::vec(any::<[u8; 32]>(), 0..3),
            queues in proptest::collection::vec(any::<[u8; 32]>(), 0..3),
        ) {
            let expand = |entries: Vec<[u8; 32]>| {
                entries
                    .into_iter()
                    .map(|seed| {
                        let mut entry = Box::new([0u8; 305]);
                        entry[..32].copy_from_slice(&seed);
                        entry
                    })
                    .collect::<Vec<_>>()
            };
            roundtrip(&Authorizations { pools: expand(pools), queues: expand(queues) });
        }

        #[test]
        fn privileges(
            bless in any::<u32>(),
            assign in any::<u32>(),
            designate in any::<u32>(),
            always in proptest::collection::vec((any::<u32>(), any::<u64>()), 0..4),
        ) {
            roundtrip(&Privileges {
                bless,
                assign,
                designate,
                always_acc: always
                    .into_iter()
                    .map(|(service, gas)| AlwaysAccItem { service, gas })
                    .collect(),
            });
        }

        #[test]
        fn accumulation_history(epochs in proptest::collection::vec(proptest::collection::vec(hash(), 0..3), 0..4)) {
            roundtrip(&AccumulationHistory { epochs });
        }

        #[test]
        fn services(items in proptest::collection::vec((any::<u32>(), hash(), any::<u64>(), any::<u64>()), 0..4)) {
            roundtrip(&Services {
                items: items
                    .into_iter()
                    .map(|(id, code_hash, balance, gas)| ServiceItem {
                        id,
                        info: ServiceInfo {
                            code_hash,
                            balance,
                            acc_min_gas: gas,
                            xfer_min_gas: gas,
                            bytes: balance,
                            items: id,
                        },
                    })
                    .collect(),
            });
        }

        #[test]
        fn recent_acc_outputs(items in proptest::collection::vec((any::<u32>(), hash()), 0..4)) {
            roundtrip(&RecentAccOutputs {
                items: items
                    .into_iter()
                    .map(|(service, output)| AccOutputItem { service, output })
                    .collect(),
            });
        }
    }
}
