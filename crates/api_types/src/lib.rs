//! Bodies and query strings sent by the browser forms.
//!
//! Values are kept as submitted; the server turns them into engine types.

use serde::{Deserialize, Serialize};

pub mod entry {
    use super::*;

    /// Body of `POST /submit`.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct EntryNew {
        pub date: String,
        /// `Income` or `Expense`, any case.
        #[serde(rename = "type")]
        pub kind: String,
        pub category: String,
        /// Whole number, parsed by the server.
        pub amount: String,
        pub description: String,
    }

    /// Body of `POST /update`.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct EntryUpdate {
        /// Position of the entry in the ledger file.
        pub index: usize,
        pub date: String,
        #[serde(rename = "type")]
        pub kind: String,
        pub category: String,
        pub amount: String,
        pub description: String,
    }

    impl EntryUpdate {
        /// Split into the target position and the replacement fields.
        pub fn into_parts(self) -> (usize, EntryNew) {
            (
                self.index,
                EntryNew {
                    date: self.date,
                    kind: self.kind,
                    category: self.category,
                    amount: self.amount,
                    description: self.description,
                },
            )
        }
    }

    /// Query string of `GET /edit`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct EntryIndex {
        pub index: usize,
    }
}
