//! Account service module
//!
//! Registration, login, the ranked listing and score replacement, all
//! behind one validation policy and one storage port.

mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use service::AccountService;
