//! Expense aggregation by category and by month.

use crate::{Entry, LedgerError, ResultLedger};

/// Running totals keyed by label, kept in order of first insertion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Totals(Vec<(String, u64)>);

impl Totals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the bucket `key`, creating it at the end if missing.
    pub fn add(&mut self, key: &str, amount: u64) -> ResultLedger<()> {
        let overflow = || LedgerError::Parse(format!("total overflow for \"{key}\""));
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some((_, total)) => *total = total.checked_add(amount).ok_or_else(overflow)?,
            None => self.0.push((key.to_string(), amount)),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, total)| (k.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub by_category: Totals,
    pub by_month: Totals,
}

/// Sum expense amounts by category and by month name.
///
/// Only expense entries are read, so an income row with an unparsed amount
/// or date is ignored. Months of different years share a bucket.
pub fn summarize(entries: &[Entry]) -> ResultLedger<Summary> {
    entries
        .iter()
        .filter(|entry| entry.kind.is_expense())
        .try_fold(Summary::default(), |mut summary, entry| {
            let amount = entry.amount.value()?;
            summary.by_category.add(&entry.category, amount)?;
            summary.by_month.add(&entry.month_name()?, amount)?;
            Ok(summary)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Amount, Kind};

    #[test]
    fn totals_keep_first_insertion_order() {
        let mut totals = Totals::new();
        totals.add("Rent", 700).unwrap();
        totals.add("Food", 20).unwrap();
        totals.add("Rent", 5).unwrap();

        assert_eq!(
            totals.iter().collect::<Vec<_>>(),
            vec![("Rent", 705), ("Food", 20)]
        );
        assert_eq!(totals.get("Food"), Some(20));
        assert_eq!(totals.get("Fun"), None);
    }

    #[test]
    fn totals_report_overflow() {
        let mut totals = Totals::new();
        totals.add("Food", u64::MAX).unwrap();
        assert!(matches!(totals.add("Food", 1), Err(LedgerError::Parse(_))));
    }

    #[test]
    fn categories_are_case_sensitive() {
        let entries = vec![
            Entry::new("01-01-2024", Kind::Expense, "food", 1, ""),
            Entry::new("02-01-2024", Kind::Expense, "Food", 2, ""),
        ];
        let summary = summarize(&entries).unwrap();
        assert_eq!(summary.by_category.len(), 2);
        assert_eq!(summary.by_month.get("January"), Some(3));
    }

    #[test]
    fn months_merge_across_years() {
        let entries = vec![
            Entry::new("10-06-2023", Kind::Expense, "Travel", 100, ""),
            Entry::new("10-06-2024", Kind::Expense, "Travel", 40, ""),
        ];
        let summary = summarize(&entries).unwrap();
        assert_eq!(summary.by_month.iter().collect::<Vec<_>>(), vec![("June", 140)]);
    }

    #[test]
    fn bad_income_dates_are_ignored() {
        let entries = vec![Entry::new("not a date", Kind::Income, "Salary", 100, "")];
        assert_eq!(summarize(&entries).unwrap(), Summary::default());
    }

    #[test]
    fn unparsed_expense_amount_fails() {
        let mut entry = Entry::new("01-03-2024", Kind::Expense, "Food", 0, "");
        entry.amount = Amount::Unparsed("12.50".to_string());

        assert!(matches!(summarize(&[entry]), Err(LedgerError::Parse(_))));
    }

    #[test]
    fn unparsed_rows_outside_expenses_are_skipped() {
        let mut income = Entry::new("01-03-2024", Kind::Income, "Salary", 0, "");
        income.amount = Amount::Unparsed("lots".to_string());
        let transfer = Entry::new(
            "01-03-2024",
            Kind::Other("Transfer".to_string()),
            "Savings",
            40,
            "",
        );
        let food = Entry::new("02-03-2024", Kind::Expense, "Food", 7, "");

        let summary = summarize(&[income, transfer, food]).unwrap();
        assert_eq!(summary.by_category.iter().collect::<Vec<_>>(), vec![("Food", 7)]);
    }

    #[test]
    fn bad_expense_date_fails() {
        let entries = vec![Entry::new("2024/03/01", Kind::Expense, "Food", 100, "")];
        assert!(matches!(summarize(&entries), Err(LedgerError::Parse(_))));
    }
}
