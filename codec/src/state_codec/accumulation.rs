use jam_types::{AccOutputItem, AccumulationHistory, OpaqueHash, ReadyQueue, RecentAccOutputs, ServiceId, WorkReportHash};
use crate::generic_codec::{decode_length, encode_unsigned};
use crate::{BytesReader, Decode, DecodeLen, Encode, EncodeLen, ReadError};

// The ready queue holds not-yet-accumulated work reports, which the core only
// carries verbatim.
impl Encode for ReadyQueue {

    fn encode(&self) -> Vec<u8> {
        self.raw.clone()
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.raw);
    }
}

impl Decode for ReadyQueue {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {
        let raw = reader.read_bytes(reader.remaining())?.to_vec();
        Ok(ReadyQueue { raw })
    }
}

impl Encode for AccumulationHistory {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::new();

        encode_unsigned(self.epochs.len() as u128).encode_to(&mut blob);

        for epoch in self.epochs.iter() {
            epoch.encode_len().encode_to(&mut blob);
        }

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for AccumulationHistory {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        let len = decode_length(reader)?;
        let mut epochs = Vec::with_capacity(len.min(1024));

        for _ in 0..len {
            epochs.push(Vec::<WorkReportHash>::decode_len(reader)?);
        }

        Ok(AccumulationHistory { epochs })
    }
}

impl Encode for AccOutputItem {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::with_capacity(std::mem::size_of::<Self>());

        self.service.encode_to(&mut blob);
        self.output.encode_to(&mut blob);

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for AccOutputItem {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        Ok(AccOutputItem {
            service: ServiceId::decode(reader)?,
            output: OpaqueHash::decode(reader)?,
        })
    }
}

impl Encode for RecentAccOutputs {

    fn encode(&self) -> Vec<u8> {
        self.items.encode_len()
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for RecentAccOutputs {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        Ok(RecentAccOutputs {
            items: Vec::<AccOutputItem>::decode_len(reader)?,
        })
    }
}
