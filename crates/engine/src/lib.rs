//! Storage and aggregation core of the finance ledger.
//!
//! [`Ledger`] persists [`Entry`] records to a flat comma-separated file and
//! [`summarize`] derives expense totals from them. Neither knows about HTTP.

pub use entry::{Amount, DATE_FORMAT, Entry, HEADER, Kind};
pub use error::LedgerError;
pub use ledger::{DEFAULT_PATH, Ledger, LedgerBuilder};
pub use summary::{Summary, Totals, summarize};

mod entry;
mod error;
mod ledger;
mod summary;

pub type ResultLedger<T> = Result<T, LedgerError>;
