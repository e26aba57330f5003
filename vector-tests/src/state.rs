#[cfg(test)]
mod tests {

    use constants::chain::{AUTH_ENTRY_SIZE, CORES_COUNT, CURR_VALIDATORS, STATISTICS_SLOTS};
    use jam_types::{ChainSpec, EntropyPool, ReadError, StateError};
    use utils::state::{emit_keyvals, parse_keyvals};
    use utils::trie::merkle_root;

    fn validator_key_bytes() -> Vec<u8> {
        let mut bytes = Vec::with_capacity(256);
        bytes.extend_from_slice(&[0x01; 32]); // bandersnatch
        bytes.extend_from_slice(&[0x02; 32]); // ed25519
        bytes.extend_from_slice(&[0x03; 144]); // bls
        bytes.extend_from_slice(&[0x04; 48]); // metadata
        bytes
    }

    fn auth_entry_bytes(fill: u8) -> Vec<u8> {
        let mut entry = vec![0u8; AUTH_ENTRY_SIZE];
        entry[0] = 0x01;
        entry[1..33].copy_from_slice(&[fill; 32]);
        entry
    }

    // A hand-framed 19-field genesis snapshot, one slot per discriminator in
    // ascending order
    fn genesis_keyvals() -> Vec<(u8, Vec<u8>)> {
        let mut keyvals: Vec<(u8, Vec<u8>)> = Vec::new();

        // 0x01 current validators: u16 count then the key records
        let mut current = vec![0x01, 0x00];
        current.extend_from_slice(&validator_key_bytes());
        keyvals.push((0x01, current));

        // 0x02 previous validators: records only
        keyvals.push((0x02, validator_key_bytes()));

        // 0x03 recent history: one entry then the terminator
        let mut history = vec![0x01];
        history.extend_from_slice(&[0xAA; 32]); // header hash
        history.extend_from_slice(&[0x01, 0x01]); // one peak, present
        history.extend_from_slice(&[0xBB; 32]);
        history.extend_from_slice(&[0xCC; 32]); // state root
        history.push(0x00); // no reported packages
        history.push(0x00); // terminator
        keyvals.push((0x03, history));

        // 0x04 safrole, opaque
        keyvals.push((0x04, vec![0xDE, 0xAD, 0xBE, 0xEF]));

        // 0x05 judgements: one good report, nothing bad or wonky
        let mut judgements = vec![0x01];
        judgements.extend_from_slice(&[0x11; 32]);
        judgements.extend_from_slice(&[0x00, 0x00]);
        keyvals.push((0x05, judgements));

        // 0x06 offenders
        let mut offenders = vec![0x01];
        offenders.extend_from_slice(&[0x22; 32]);
        keyvals.push((0x06, offenders));

        // 0x07 / 0x08 statistics eras, fixed slot count, no prefix
        keyvals.push((0x07, vec![0u8; STATISTICS_SLOTS * 24]));
        let mut prev_stats = vec![0u8; STATISTICS_SLOTS * 24];
        prev_stats[0] = 0x01; // one block authored in slot zero
        keyvals.push((0x08, prev_stats));

        // 0x09 next validators: an empty slot is an empty set
        keyvals.push((0x09, Vec::new()));

        // 0x0A entropy, genesis stub variant
        keyvals.push((0x0A, vec![0x99; 32]));

        // 0x0B timeslot
        keyvals.push((0x0B, vec![0x2A, 0x00, 0x00, 0x00]));

        // 0x0C work reports, opaque
        keyvals.push((0x0C, vec![0x01, 0x02, 0x03]));

        // 0x0D authorizations: one pool entry, no queue entries
        let mut auths = vec![0x01];
        auths.extend_from_slice(&auth_entry_bytes(0x77));
        auths.push(0x00);
        keyvals.push((0x0D, auths));

        // 0x0E privileges
        let mut privileges = Vec::new();
        privileges.extend_from_slice(&1u32.to_le_bytes());
        privileges.extend_from_slice(&2u32.to_le_bytes());
        privileges.extend_from_slice(&3u32.to_le_bytes());
        privileges.push(0x01);
        privileges.extend_from_slice(&4u32.to_le_bytes());
        privileges.extend_from_slice(&100u64.to_le_bytes());
        keyvals.push((0x0E, privileges));

        // 0x0F ready queue, opaque
        keyvals.push((0x0F, vec![0x10, 0x20]));

        // 0x10 accumulation history: one epoch slot with one package hash
        let mut acc_history = vec![0x01, 0x01];
        acc_history.extend_from_slice(&[0x44; 32]);
        keyvals.push((0x10, acc_history));

        // 0x11 services: one account summary
        let mut services = vec![0x01];
        services.extend_from_slice(&7u32.to_le_bytes());
        services.extend_from_slice(&[0x66; 32]); // code hash
        services.extend_from_slice(&1000u64.to_le_bytes()); // balance
        services.extend_from_slice(&10u64.to_le_bytes()); // acc min gas
        services.extend_from_slice(&20u64.to_le_bytes()); // xfer min gas
        services.extend_from_slice(&5000u64.to_le_bytes()); // bytes
        services.extend_from_slice(&3u32.to_le_bytes()); // items
        keyvals.push((0x11, services));

        // 0x12 recent accumulation outputs
        let mut outputs = vec![0x01];
        outputs.extend_from_slice(&8u32.to_le_bytes());
        outputs.extend_from_slice(&[0x55; 32]);
        keyvals.push((0x12, outputs));

        // 0x13 core statistics: all-zero compact records per core
        keyvals.push((0x13, vec![0u8; CORES_COUNT * 8]));

        keyvals
    }

    // Parse the 19-field genesis snapshot, re-emit, observe
    // byte-equal output for every discriminator
    #[test]
    fn genesis_roundtrips_byte_equal() {
        utils::log::Builder::new().filter_level(utils::log::LevelFilter::Off).init();

        let keyvals = genesis_keyvals();
        assert_eq!(19, keyvals.len());

        let state = parse_keyvals(&keyvals, &ChainSpec::default()).unwrap();
        let emitted = emit_keyvals(&state);

        assert_eq!(keyvals.len(), emitted.len());
        for ((disc_in, value_in), (disc_out, value_out)) in keyvals.iter().zip(emitted.iter()) {
            assert_eq!(disc_in, disc_out);
            assert_eq!(value_in, value_out, "payload mismatch for {disc_in:#04x}");
        }

        assert!(matches!(state.entropy, Some(EntropyPool::Genesis(_))));
        assert_eq!(Some(42), state.timeslot);
        assert_eq!(1, state.current_validators.as_ref().unwrap().keys.len());
        assert_eq!([0x04; 48], state.current_validators.as_ref().unwrap().keys[0].metadata);
    }

    #[test]
    fn missing_fields_stay_unset() {
        let keyvals = vec![(0x0B, vec![0x07, 0x00, 0x00, 0x00])];
        let state = parse_keyvals(&keyvals, &ChainSpec::default()).unwrap();

        assert_eq!(Some(7), state.timeslot);
        assert!(state.current_validators.is_none());
        assert!(state.entropy.is_none());

        // Only the set field comes back
        assert_eq!(vec![(0x0B, vec![0x07, 0x00, 0x00, 0x00])], emit_keyvals(&state));
    }

    #[test]
    fn unknown_discriminators_are_rejected() {
        for disc in [0x00u8, 0x14, 0x80, 0xFF] {
            let keyvals = vec![(disc, Vec::new())];
            assert_eq!(
                Err(StateError::UnknownDiscriminator(disc)),
                parse_keyvals(&keyvals, &ChainSpec::default())
            );
        }
    }

    #[test]
    fn duplicate_discriminators_are_rejected() {
        let keyvals = vec![
            (0x0B, vec![0x01, 0x00, 0x00, 0x00]),
            (0x0B, vec![0x02, 0x00, 0x00, 0x00]),
        ];
        assert_eq!(
            Err(StateError::DuplicateDiscriminator(0x0B)),
            parse_keyvals(&keyvals, &ChainSpec::default())
        );
    }

    #[test]
    fn validator_count_mismatch_is_a_shape_error() {
        // Count says none, yet a key record follows
        let mut slot = vec![0x00, 0x00];
        slot.extend_from_slice(&validator_key_bytes());

        let result = parse_keyvals(&[(CURR_VALIDATORS, slot)], &ChainSpec::default());
        assert_eq!(
            Err(StateError::Field {
                field: "current_validators",
                source: ReadError::Shape("trailing bytes in field slot"),
            }),
            result
        );

        // Count says one, yet the record is truncated
        let slot = vec![0x01, 0x00, 0xAB];
        let result = parse_keyvals(&[(CURR_VALIDATORS, slot)], &ChainSpec::default());
        assert!(matches!(
            result,
            Err(StateError::Field { field: "current_validators", source: ReadError::NotEnoughData { .. } })
        ));
    }

    #[test]
    fn strict_compact_is_threaded_through_fields() {
        // An empty history with its count stretched over two bytes
        let slot = vec![0x80, 0x00, 0x00];

        let lenient = parse_keyvals(&[(0x03, slot.clone())], &ChainSpec::default()).unwrap();
        assert!(lenient.recent_history.unwrap().entries.is_empty());

        let spec = ChainSpec { strict_compact: true, ..ChainSpec::default() };
        assert_eq!(
            Err(StateError::Field {
                field: "recent_history",
                source: ReadError::NonCanonical { position: 0 },
            }),
            parse_keyvals(&[(0x03, slot)], &spec)
        );
    }

    // The emitted keyvals feed the trie through upstream-derived 31-octet
    // keys; the root only depends on the keyval set
    #[test]
    fn emitted_keyvals_merklize_deterministically() {
        let state = parse_keyvals(&genesis_keyvals(), &ChainSpec::default()).unwrap();

        let trie_input: Vec<(Vec<u8>, Vec<u8>)> = emit_keyvals(&state)
            .into_iter()
            .map(|(disc, value)| {
                let mut key = vec![0u8; 31];
                key[0] = disc;
                (key, value)
            })
            .collect();

        let root = merkle_root(&trie_input).unwrap();

        let mut reversed = trie_input.clone();
        reversed.reverse();
        assert_eq!(root, merkle_root(&reversed).unwrap());

        let mut altered = trie_input;
        altered[0].1.push(0xFF);
        assert_ne!(root, merkle_root(&altered).unwrap());
    }
}
