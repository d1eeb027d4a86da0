//! Activity ledger for store mutations and generation attempts

mod ledger;
pub mod types;

pub use ledger::ActivityLog;
pub use types::{ActivityEntry, ActivityEntryBuilder, ActivityKind, ActivityLevel};
