//! Pieces shared by the binaries and the HTTP crate: logging setup and the
//! small response types that carry no domain data.

pub mod types;
pub mod utils;
