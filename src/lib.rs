//! Deterministic fingerprint-to-string generator.
//!
//! The same input, length and flags always produce the same output. The
//! output is not a secret and must not be used as a key.

pub mod cmd;
pub mod error;
pub mod generate;
pub mod utils;

pub use error::{Error, Result};
pub use generate::{generate, Generation};
pub use utils::charset::{Charset, Flags};
