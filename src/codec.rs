pub(crate) mod frame;

pub(crate) mod decode;
pub(crate) mod encode;

pub use {decode::decode_to_bytes, encode::encode_to_bits};
