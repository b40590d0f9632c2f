//! Service layer: the read queries behind the HTTP routes, scoped
//! transactions, and the sample-data seed.
//! - Query functions take the pool by reference; none of them hold state.
//! - Entity definitions and constraint mapping live in the `models` crate.

pub mod errors;
pub mod session;
pub mod business_service;
pub mod user_service;
pub mod seed;
#[cfg(test)]
pub mod test_support;
