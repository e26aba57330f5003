use jam_types::SafroleState;
use crate::{BytesReader, Decode, Encode, ReadError};

// The sealing-key contest internals (tickets, epoch markers) belong to the
// STF; until vectors exercise the interior the slot is carried verbatim.
impl Encode for SafroleState {

    fn encode(&self) -> Vec<u8> {
        self.raw.clone()
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.raw);
    }
}

impl Decode for SafroleState {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {
        let raw = reader.read_bytes(reader.remaining())?.to_vec();
        Ok(SafroleState { raw })
    }
}
