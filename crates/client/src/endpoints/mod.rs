//! HTTP plumbing shared by all client operations.

pub(crate) mod request;
pub mod url_encoding;

pub(crate) use request::{execute, execute_empty};
pub use url_encoding::encode_path_segment;
