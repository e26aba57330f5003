pub mod encode;
pub mod decode;

pub use encode::{encode_integer, encode_unsigned};
pub use decode::{decode_integer, decode_length, decode_unsigned};
