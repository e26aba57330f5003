use jam_types::{ExportsRoot, Hash, HistoryEntry, MmrPeak, RecentHistory, ReportedPackage, WorkReportHash};
use crate::generic_codec::{decode_length, encode_unsigned};
use crate::{BytesReader, Decode, DecodeLen, Encode, EncodeLen, ReadError};

impl Encode for ReportedPackage {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::with_capacity(std::mem::size_of::<Self>());

        self.hash.encode_to(&mut blob);
        self.exports_root.encode_to(&mut blob);

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for ReportedPackage {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        Ok(ReportedPackage {
            hash: WorkReportHash::decode(reader)?,
            exports_root: ExportsRoot::decode(reader)?,
        })
    }
}

impl Encode for HistoryEntry {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::with_capacity(std::mem::size_of::<Self>());

        self.header_hash.encode_to(&mut blob);
        self.mmr_peaks.encode_len().encode_to(&mut blob);
        self.state_root.encode_to(&mut blob);
        self.reported.encode_len().encode_to(&mut blob);

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for HistoryEntry {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        Ok(HistoryEntry {
            header_hash: Hash::decode(reader)?,
            mmr_peaks: Vec::<MmrPeak>::decode_len(reader)?,
            state_root: Hash::decode(reader)?,
            reported: Vec::<ReportedPackage>::decode_len(reader)?,
        })
    }
}

impl Encode for RecentHistory {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::new();

        encode_unsigned(self.entries.len() as u128).encode_to(&mut blob);

        for entry in self.entries.iter() {
            entry.encode_to(&mut blob);
        }

        // The entry list is closed by one padding octet, empty history included
        blob.push(0x00);

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for RecentHistory {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        let len = decode_length(reader)?;
        let mut entries = Vec::with_capacity(len);

        for _ in 0..len {
            entries.push(HistoryEntry::decode(reader)?);
        }

        match reader.read_byte() {
            Ok(0x00) => {}
            Ok(_) => return Err(ReadError::Shape("recent history terminator is not 0x00")),
            Err(_) => return Err(ReadError::Shape("recent history terminator missing")),
        }

        Ok(RecentHistory { entries })
    }
}
