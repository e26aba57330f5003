use jam_types::{BandersnatchPublic, BlsPublic, CurrentValidators, Ed25519Public, ValidatorKey, ValidatorList, ValidatorMetadata};
use crate::{BytesReader, Decode, Encode, ReadError};

impl Encode for ValidatorKey {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::with_capacity(std::mem::size_of::<Self>());

        self.bandersnatch.encode_to(&mut blob);
        self.ed25519.encode_to(&mut blob);
        self.bls.encode_to(&mut blob);
        self.metadata.encode_to(&mut blob);

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for ValidatorKey {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        Ok(ValidatorKey {
            bandersnatch: BandersnatchPublic::decode(reader)?,
            ed25519: Ed25519Public::decode(reader)?,
            bls: BlsPublic::decode(reader)?,
            metadata: ValidatorMetadata::decode(reader)?,
        })
    }
}

impl Encode for CurrentValidators {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::with_capacity(2 + std::mem::size_of::<ValidatorKey>() * self.keys.len());

        // The count is always taken from the actual key list
        (self.keys.len() as u16).encode_to(&mut blob);

        for key in self.keys.iter() {
            key.encode_to(&mut blob);
        }

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for CurrentValidators {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        // The wire count is authoritative for sizing, whatever the configured
        // validator set size says
        let expected = u16::decode(reader)? as usize;
        let mut keys = Vec::with_capacity(expected);

        for _ in 0..expected {
            keys.push(ValidatorKey::decode(reader)?);
        }

        Ok(CurrentValidators { keys })
    }
}

impl Encode for ValidatorList {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::with_capacity(std::mem::size_of::<ValidatorKey>() * self.keys.len());

        for key in self.keys.iter() {
            key.encode_to(&mut blob);
        }

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for ValidatorList {

    // No count on the wire; key records fill the remainder of the slot.
    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        let mut keys = Vec::new();

        while !reader.is_exhausted() {
            keys.push(ValidatorKey::decode(reader)?);
        }

        Ok(ValidatorList { keys })
    }
}
