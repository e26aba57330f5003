use jam_types::{ActivityRecord, ActivityRecords, CoreActivityRecord, CoreStatistics};
use crate::generic_codec::{decode_unsigned, encode_unsigned};
use crate::{BytesReader, Decode, Encode, ReadError};

impl Encode for ActivityRecord {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::with_capacity(std::mem::size_of::<Self>());

        self.blocks.encode_to(&mut blob);
        self.tickets.encode_to(&mut blob);
        self.preimages.encode_to(&mut blob);
        self.preimages_size.encode_to(&mut blob);
        self.guarantees.encode_to(&mut blob);
        self.assurances.encode_to(&mut blob);

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for ActivityRecord {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        Ok(ActivityRecord {
            blocks: u32::decode(reader)?,
            tickets: u32::decode(reader)?,
            preimages: u32::decode(reader)?,
            preimages_size: u32::decode(reader)?,
            guarantees: u32::decode(reader)?,
            assurances: u32::decode(reader)?,
        })
    }
}

impl Encode for ActivityRecords {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::with_capacity(std::mem::size_of::<ActivityRecord>() * self.records.len());

        for record in self.records.iter() {
            record.encode_to(&mut blob);
        }

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for ActivityRecords {

    // One era is always the fixed number of validator slots, filled
    // iteratively with no prefix.
    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        let mut records = ActivityRecords::default();

        for record in records.records.iter_mut() {
            *record = ActivityRecord::decode(reader)?;
        }

        Ok(records)
    }
}

impl Encode for CoreActivityRecord {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::with_capacity(std::mem::size_of::<Self>());

        encode_unsigned(self.gas_used as u128).encode_to(&mut blob);
        encode_unsigned(self.imports as u128).encode_to(&mut blob);
        encode_unsigned(self.extrinsic_count as u128).encode_to(&mut blob);
        encode_unsigned(self.extrinsic_size as u128).encode_to(&mut blob);
        encode_unsigned(self.exports as u128).encode_to(&mut blob);
        encode_unsigned(self.bundle_size as u128).encode_to(&mut blob);
        encode_unsigned(self.da_load as u128).encode_to(&mut blob);
        encode_unsigned(self.popularity as u128).encode_to(&mut blob);

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for CoreActivityRecord {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        Ok(CoreActivityRecord {
            gas_used: decode_unsigned(reader)? as u64,
            imports: decode_unsigned(reader)? as u16,
            extrinsic_count: decode_unsigned(reader)? as u16,
            extrinsic_size: decode_unsigned(reader)? as u32,
            exports: decode_unsigned(reader)? as u16,
            bundle_size: decode_unsigned(reader)? as u32,
            da_load: decode_unsigned(reader)? as u32,
            popularity: decode_unsigned(reader)? as u16,
        })
    }
}

impl Encode for CoreStatistics {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::new();

        for record in self.records.iter() {
            record.encode_to(&mut blob);
        }

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for CoreStatistics {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        let mut cores = CoreStatistics::default();

        for record in cores.records.iter_mut() {
            *record = CoreActivityRecord::decode(reader)?;
        }

        Ok(cores)
    }
}
