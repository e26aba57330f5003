use constants::chain::AUTH_ENTRY_SIZE;
use jam_types::{AuthEntry, Authorizations};
use crate::generic_codec::{decode_length, encode_unsigned};
use crate::{BytesReader, Decode, Encode, ReadError};

fn encode_entries(entries: &[AuthEntry], into: &mut Vec<u8>) {
    encode_unsigned(entries.len() as u128).encode_to(into);

    for entry in entries {
        // Entries go out verbatim, padding octets included
        into.extend_from_slice(entry.as_ref());
    }
}

fn decode_entries(reader: &mut BytesReader) -> Result<Vec<AuthEntry>, ReadError> {
    let len = decode_length(reader)?;
    let mut entries = Vec::with_capacity(len.min(1024));

    for _ in 0..len {
        entries.push(AuthEntry::decode(reader)?);
    }

    Ok(entries)
}

impl Encode for Authorizations {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::with_capacity((self.pools.len() + self.queues.len()) * AUTH_ENTRY_SIZE + 2);

        encode_entries(&self.pools, &mut blob);
        encode_entries(&self.queues, &mut blob);

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for Authorizations {

    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        Ok(Authorizations {
            pools: decode_entries(reader)?,
            queues: decode_entries(reader)?,
        })
    }
}

/// Pack a list of hashes into one authorization entry: a compact count, the
/// hashes, then zero padding out to the fixed entry width.
pub fn auth_entry_from_hashes(hashes: &[[u8; 32]]) -> Result<AuthEntry, ReadError> {
    let mut blob = Vec::with_capacity(AUTH_ENTRY_SIZE);

    encode_unsigned(hashes.len() as u128).encode_to(&mut blob);
    for hash in hashes {
        blob.extend_from_slice(hash);
    }

    if blob.len() > AUTH_ENTRY_SIZE {
        return Err(ReadError::Shape("too many hashes for one authorization entry"));
    }
    blob.resize(AUTH_ENTRY_SIZE, 0);

    let mut entry = Box::new([0u8; AUTH_ENTRY_SIZE]);
    entry.copy_from_slice(&blob);
    Ok(entry)
}
