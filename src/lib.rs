pub mod cli;
pub mod logging;

pub use fsencoding::{EncodeFlags, Encoder, MultiEncoder, STANDARD};
