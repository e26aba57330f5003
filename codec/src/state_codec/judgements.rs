use jam_types::{Ed25519Public, Judgements, Offenders, WorkReportHash};
use crate::{BytesReader, Decode, DecodeLen, Encode, EncodeLen, ReadError};

impl Encode for Judgements {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::new();

        // Always good, bad, wonky, in that order
        self.good.encode_len().encode_to(&mut blob);
        self.bad.encode_len().encode_to(&mut blob);
        self.wonky.encode_len().encode_to(&mut blob);

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for Judgements {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        Ok(Judgements {
            good: Vec::<WorkReportHash>::decode_len(reader)?,
            bad: Vec::<WorkReportHash>::decode_len(reader)?,
            wonky: Vec::<WorkReportHash>::decode_len(reader)?,
        })
    }
}

impl Encode for Offenders {

    fn encode(&self) -> Vec<u8> {
        self.keys.encode_len()
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for Offenders {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        Ok(Offenders {
            keys: Vec::<Ed25519Public>::decode_len(reader)?,
        })
    }
}
