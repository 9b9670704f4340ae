//! Text and interchange formats
//!
//! Pure format definitions: the line-oriented text codec, its decode
//! configuration, and the triplet form used for serde. No I/O.

pub mod constants;
pub mod config;
pub mod coo;
pub mod text;

pub use config::{DecodeConfig, DuplicatePolicy, ZeroPolicy};
pub use coo::CooTriplets;
pub use text::{decode_str, decode_str_with_config, TextDecoder, TextEncoder};
