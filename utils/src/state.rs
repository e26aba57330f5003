// The state assembler: between discriminator-addressed value slots and the
// typed State. It only marshals the keyval view; root computation is the
// trie's job and state mutation is the STF's.
use codec::{BytesReader, Decode, Encode};
use jam_types::{ChainSpec, ReadError, State, StateError};
use constants::chain::{
    ACCUMULATION_HISTORY, AUTHORIZATIONS, CORE_STATISTICS, CURR_STATISTICS, CURR_VALIDATORS, ENTROPY, NEXT_VALIDATORS, OFFENDERS, PAST_JUDGEMENTS,
    PREV_STATISTICS, PREV_VALIDATORS, PRIVILEGES, READY_QUEUE, RECENT_ACC_OUTPUTS, RECENT_HISTORY, SAFROLE, SERVICES, STATE_DISCRIMINATORS, TIME,
    WORK_REPORTS,
};

fn decode_field<T: Decode>(
    slot: &mut Option<T>,
    reader: &mut BytesReader,
    field: &'static str,
    disc: u8,
) -> Result<(), StateError> {
    if slot.is_some() {
        return Err(StateError::DuplicateDiscriminator(disc));
    }

    let value = T::decode(reader).map_err(|source| StateError::Field { field, source })?;

    // Every field owns its whole slot; leftovers mean the framing lied
    // (a short validator count, an oversized entry, ...)
    if !reader.is_exhausted() {
        return Err(StateError::Field {
            field,
            source: ReadError::Shape("trailing bytes in field slot"),
        });
    }

    *slot = Some(value);
    Ok(())
}

/// Build the typed state from discriminator-addressed slots. Every
/// discriminator must come from the known set and appear at most once;
/// absent discriminators leave their field unset.
pub fn parse_keyvals(keyvals: &[(u8, Vec<u8>)], spec: &ChainSpec) -> Result<State, StateError> {
    let mut state = State::default();

    for (disc, value) in keyvals {
        crate::log::trace!("state field {:#04x}: {} bytes", disc, value.len());
        let reader = &mut BytesReader::with_strictness(value, spec.strict_compact);

        match *disc {
            CURR_VALIDATORS => decode_field(&mut state.current_validators, reader, "current_validators", *disc)?,
            PREV_VALIDATORS => decode_field(&mut state.previous_validators, reader, "previous_validators", *disc)?,
            RECENT_HISTORY => decode_field(&mut state.recent_history, reader, "recent_history", *disc)?,
            SAFROLE => decode_field(&mut state.safrole, reader, "safrole", *disc)?,
            PAST_JUDGEMENTS => decode_field(&mut state.past_judgements, reader, "past_judgements", *disc)?,
            OFFENDERS => decode_field(&mut state.offenders, reader, "offenders", *disc)?,
            CURR_STATISTICS => decode_field(&mut state.curr_statistics, reader, "curr_statistics", *disc)?,
            PREV_STATISTICS => decode_field(&mut state.prev_statistics, reader, "prev_statistics", *disc)?,
            NEXT_VALIDATORS => decode_field(&mut state.next_validators, reader, "next_validators", *disc)?,
            ENTROPY => decode_field(&mut state.entropy, reader, "entropy", *disc)?,
            TIME => decode_field(&mut state.timeslot, reader, "timeslot", *disc)?,
            WORK_REPORTS => decode_field(&mut state.work_reports, reader, "work_reports", *disc)?,
            AUTHORIZATIONS => decode_field(&mut state.authorizations, reader, "authorizations", *disc)?,
            PRIVILEGES => decode_field(&mut state.privileges, reader, "privileges", *disc)?,
            READY_QUEUE => decode_field(&mut state.ready_queue, reader, "ready_queue", *disc)?,
            ACCUMULATION_HISTORY => decode_field(&mut state.accumulation_history, reader, "accumulation_history", *disc)?,
            SERVICES => decode_field(&mut state.services, reader, "services", *disc)?,
            RECENT_ACC_OUTPUTS => decode_field(&mut state.recent_acc_outputs, reader, "recent_acc_outputs", *disc)?,
            CORE_STATISTICS => decode_field(&mut state.core_statistics, reader, "core_statistics", *disc)?,
            unknown => return Err(StateError::UnknownDiscriminator(unknown)),
        }
    }

    Ok(state)
}

/// Emit one slot per set field, in ascending discriminator order. Feeding the
/// result back through `parse_keyvals` yields an equal state.
pub fn emit_keyvals(state: &State) -> Vec<(u8, Vec<u8>)> {
    let mut keyvals: Vec<(u8, Vec<u8>)> = Vec::new();

    for disc in STATE_DISCRIMINATORS {
        let slot = match disc {
            CURR_VALIDATORS => state.current_validators.as_ref().map(Encode::encode),
            PREV_VALIDATORS => state.previous_validators.as_ref().map(Encode::encode),
            RECENT_HISTORY => state.recent_history.as_ref().map(Encode::encode),
            SAFROLE => state.safrole.as_ref().map(Encode::encode),
            PAST_JUDGEMENTS => state.past_judgements.as_ref().map(Encode::encode),
            OFFENDERS => state.offenders.as_ref().map(Encode::encode),
            CURR_STATISTICS => state.curr_statistics.as_ref().map(Encode::encode),
            PREV_STATISTICS => state.prev_statistics.as_ref().map(Encode::encode),
            NEXT_VALIDATORS => state.next_validators.as_ref().map(Encode::encode),
            ENTROPY => state.entropy.as_ref().map(Encode::encode),
            TIME => state.timeslot.as_ref().map(Encode::encode),
            WORK_REPORTS => state.work_reports.as_ref().map(Encode::encode),
            AUTHORIZATIONS => state.authorizations.as_ref().map(Encode::encode),
            PRIVILEGES => state.privileges.as_ref().map(Encode::encode),
            READY_QUEUE => state.ready_queue.as_ref().map(Encode::encode),
            ACCUMULATION_HISTORY => state.accumulation_history.as_ref().map(Encode::encode),
            SERVICES => state.services.as_ref().map(Encode::encode),
            RECENT_ACC_OUTPUTS => state.recent_acc_outputs.as_ref().map(Encode::encode),
            CORE_STATISTICS => state.core_statistics.as_ref().map(Encode::encode),
            _ => None,
        };

        if let Some(value) = slot {
            keyvals.push((disc, value));
        }
    }

    keyvals
}
