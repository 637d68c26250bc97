pub mod base64;

pub use base64::{base64_decode_bytes, base64_encode_bytes, DecodeBase64Error};
