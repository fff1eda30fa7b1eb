//! Status description codec
//!
//! This module contains:
//! - `codec` - Embeds and recovers a base commit SHA in a bounded-length description
//! - `error` - Codec configuration errors

pub mod codec;
pub mod error;

pub use codec::{
    append_base_sha, is_commit_sha, parse_base_sha, CodecConfig, DescriptionCodec, COMMIT_SHA_LEN,
    DEFAULT_ELLIPSIS, DEFAULT_MARKER, DEFAULT_MAX_LENGTH,
};
pub use error::CodecError;
