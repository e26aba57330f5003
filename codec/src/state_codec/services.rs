use jam_types::{Gas, OpaqueHash, ServiceId, ServiceInfo, ServiceItem, Services};
use crate::{BytesReader, Decode, DecodeLen, Encode, EncodeLen, ReadError};

impl Encode for ServiceInfo {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::with_capacity(std::mem::size_of::<Self>());

        self.code_hash.encode_to(&mut blob);
        self.balance.encode_to(&mut blob);
        self.acc_min_gas.encode_to(&mut blob);
        self.xfer_min_gas.encode_to(&mut blob);
        self.bytes.encode_to(&mut blob);
        self.items.encode_to(&mut blob);

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for ServiceInfo {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        Ok(ServiceInfo {
            code_hash: OpaqueHash::decode(reader)?,
            balance: u64::decode(reader)?,
            acc_min_gas: Gas::decode(reader)?,
            xfer_min_gas: Gas::decode(reader)?,
            bytes: u64::decode(reader)?,
            items: u32::decode(reader)?,
        })
    }
}

impl Encode for ServiceItem {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::with_capacity(std::mem::size_of::<Self>());

        self.id.encode_to(&mut blob);
        self.info.encode_to(&mut blob);

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for ServiceItem {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        Ok(ServiceItem {
            id: ServiceId::decode(reader)?,
            info: ServiceInfo::decode(reader)?,
        })
    }
}

impl Encode for Services {

    fn encode(&self) -> Vec<u8> {
        self.items.encode_len()
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for Services {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        Ok(Services {
            items: Vec::<ServiceItem>::decode_len(reader)?,
        })
    }
}
