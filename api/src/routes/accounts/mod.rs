//! Account listing and score routes

pub mod list;
pub mod score;

pub use list::list_accounts;
pub use score::update_score;
