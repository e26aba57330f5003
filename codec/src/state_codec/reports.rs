use jam_types::WorkReports;
use crate::{BytesReader, Decode, Encode, ReadError};

// Per-core work reports are decoded for roundtrip only; their interior is the
// STF's concern.
impl Encode for WorkReports {

    fn encode(&self) -> Vec<u8> {
        self.raw.clone()
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.raw);
    }
}

impl Decode for WorkReports {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {
        let raw = reader.read_bytes(reader.remaining())?.to_vec();
        Ok(WorkReports { raw })
    }
}
