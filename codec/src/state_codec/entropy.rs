use constants::chain::ENTROPY_POOL_SIZE;
use jam_types::{EntropyPool, OpaqueHash};
use crate::{BytesReader, Decode, Encode, ReadError};

impl Encode for EntropyPool {

    fn encode(&self) -> Vec<u8> {

        let mut blob = Vec::with_capacity(std::mem::size_of::<OpaqueHash>() * ENTROPY_POOL_SIZE);

        match self {
            EntropyPool::Full(pool) => {
                for entropy in pool.iter() {
                    entropy.encode_to(&mut blob);
                }
            }
            EntropyPool::Genesis(entropy) => {
                entropy.encode_to(&mut blob);
            }
        }

        return blob;
    }

    fn encode_to(&self, into: &mut Vec<u8>) {
        into.extend_from_slice(&self.encode());
    }
}

impl Decode for EntropyPool {

    // The genesis stub carries a single hash; the accumulator proper carries
    // ENTROPY_POOL_SIZE of them. The slot length is the only discriminant.
    fn decode(reader: &mut BytesReader) -> Result<Self, ReadError> {

        let hash_size = std::mem::size_of::<OpaqueHash>();

        if reader.remaining() == hash_size {
            return Ok(EntropyPool::Genesis(OpaqueHash::decode(reader)?));
        }

        if reader.remaining() == hash_size * ENTROPY_POOL_SIZE {
            let mut pool = Box::new([OpaqueHash::default(); ENTROPY_POOL_SIZE]);
            for entropy in pool.iter_mut() {
                *entropy = OpaqueHash::decode(reader)?;
            }
            return Ok(EntropyPool::Full(pool));
        }

        Err(ReadError::Shape("entropy slot is neither one hash nor the full pool"))
    }
}
