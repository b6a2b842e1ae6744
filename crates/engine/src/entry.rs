//! The module contains the `Entry` type, one line of the ledger file.
//!
//! Both expenses and income are represented by `Entry`, tagged by [`Kind`].
//!
//! Reading never rejects a row for its `Type` or `Amount` value: anything
//! that is not understood is kept verbatim ([`Kind::Other`],
//! [`Amount::Unparsed`]) and written back unchanged. Strict parsing happens
//! on form input ([`Kind::parse`], [`Amount::parse`]) and in the summary.
use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use crate::{LedgerError, ResultLedger};

/// Pattern of the `date` column (day-month-year, e.g. `05-03-2024`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Column names of the ledger file, in storage order.
pub const HEADER: [&str; 5] = ["Date", "Type", "Category", "Amount", "Description"];

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Kind {
    Income,
    Expense,
    /// Stored label that is neither income nor expense.
    Other(String),
}

impl Kind {
    /// Strict parse of user input: only income or expense, any case.
    pub fn parse(value: &str) -> ResultLedger<Self> {
        match Kind::from(value.to_string()) {
            Kind::Other(other) => Err(LedgerError::Parse(format!(
                "invalid entry type: {}",
                other.trim()
            ))),
            kind => Ok(kind),
        }
    }

    /// Label written to storage and shown in pages.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Other(other) => other,
        }
    }

    pub fn is_expense(&self) -> bool {
        *self == Self::Expense
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Kind {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("income") {
            Self::Income
        } else if trimmed.eq_ignore_ascii_case("expense") {
            Self::Expense
        } else {
            Self::Other(value)
        }
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Value of the `Amount` column.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Amount {
    Whole(u64),
    /// Stored text that is not a whole number, e.g. `12.50`.
    Unparsed(String),
}

impl Amount {
    /// Strict parse of user input.
    pub fn parse(value: &str) -> ResultLedger<Self> {
        Amount::from(value.to_string()).value().map(Amount::Whole)
    }

    /// The whole number, or [`LedgerError::Parse`] for unparsed text.
    pub fn value(&self) -> ResultLedger<u64> {
        match self {
            Self::Whole(value) => Ok(*value),
            Self::Unparsed(raw) => Err(LedgerError::Parse(format!("invalid amount \"{raw}\""))),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whole(value) => write!(f, "{value}"),
            Self::Unparsed(raw) => f.write_str(raw),
        }
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self::Whole(value)
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        match value.trim().parse::<u64>() {
            Ok(whole) if !value.trim().starts_with('+') => Self::Whole(whole),
            _ => Self::Unparsed(value),
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Represent a movement, a record of the ledger.
///
/// Entries have no id: they are addressed by their position in the file.
/// Field names match [`HEADER`] so the same struct reads and writes rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Entry {
    pub date: String,
    #[serde(rename = "Type")]
    pub kind: Kind,
    pub category: String,
    pub amount: Amount,
    pub description: String,
}

impl Entry {
    pub fn new(
        date: impl Into<String>,
        kind: Kind,
        category: impl Into<String>,
        amount: u64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            kind,
            category: category.into(),
            amount: Amount::Whole(amount),
            description: description.into(),
        }
    }

    /// Parse `date` with [`DATE_FORMAT`].
    pub fn parsed_date(&self) -> ResultLedger<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|err| LedgerError::Parse(format!("invalid date \"{}\": {err}", self.date)))
    }

    /// Full English name of the entry month, e.g. `March`.
    pub fn month_name(&self) -> ResultLedger<String> {
        Ok(self.parsed_date()?.format("%B").to_string())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.date, self.kind, self.amount, self.category, self.description
        )
    }
}
