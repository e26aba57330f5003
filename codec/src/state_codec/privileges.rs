use jam_types::{AlwaysAccItem, Gas, Privileges, ServiceId};
use crate::{BytesReader, Decode, DecodeLen, Encode, EncodeLen, ReadError};

impl Encode for AlwaysAccItem {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::with_capacity(std::mem::size_of::<Self>());

        self.service.encode_to(&mut blob);
        self.gas.encode_to(&mut blob);

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for AlwaysAccItem {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        Ok(AlwaysAccItem {
            service: ServiceId::decode(reader)?,
            gas: Gas::decode(reader)?,
        })
    }
}

impl Encode for Privileges {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::with_capacity(std::mem::size_of::<Self>());

        self.bless.encode_to(&mut blob);
        self.assign.encode_to(&mut blob);
        self.designate.encode_to(&mut blob);
        self.always_acc.encode_len().encode_to(&mut blob);

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for Privileges {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        Ok(Privileges {
            bless: ServiceId::decode(reader)?,
            assign: ServiceId::decode(reader)?,
            designate: ServiceId::decode(reader)?,
            always_acc: Vec::<AlwaysAccItem>::decode_len(reader)?,
        })
    }
}
