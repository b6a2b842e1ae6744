//! Entry pages and form endpoints

use api_types::entry::{EntryIndex, EntryNew, EntryUpdate};
use axum::{
    Form,
    extract::{Query, State},
    response::{Html, Redirect},
};
use engine::{Amount, Entry, Kind, LedgerError};

use crate::{ServerError, html, server::ServerState};

fn map_entry(form: EntryNew) -> Result<Entry, LedgerError> {
    let kind = Kind::parse(&form.kind)?;
    let amount = Amount::parse(&form.amount)?;

    Ok(Entry {
        date: form.date,
        kind,
        category: form.category,
        amount,
        description: form.description,
    })
}

pub async fn home(State(state): State<ServerState>) -> Result<Html<String>, ServerError> {
    let entries = state.read(|ledger| ledger.list_all()).await?;
    Ok(Html(html::home(&entries, &state.currency_symbol)))
}

pub async fn add_form() -> Html<String> {
    Html(html::add_form())
}

pub async fn submit(
    State(state): State<ServerState>,
    Form(payload): Form<EntryNew>,
) -> Result<Redirect, ServerError> {
    let entry = map_entry(payload)?;
    let line = entry.to_string();
    state.write(move |ledger| ledger.append(&entry)).await?;
    tracing::info!("appended entry: {line}");

    Ok(Redirect::to("/"))
}

pub async fn edit_form(
    State(state): State<ServerState>,
    Query(query): Query<EntryIndex>,
) -> Result<Html<String>, ServerError> {
    let index = query.index;
    let entry = state.read(move |ledger| ledger.get(index)).await?;
    Ok(Html(html::edit_form(index, &entry)))
}

pub async fn update(
    State(state): State<ServerState>,
    Form(payload): Form<EntryUpdate>,
) -> Result<Redirect, ServerError> {
    let (index, fields) = payload.into_parts();
    let entry = map_entry(fields)?;
    state
        .write(move |ledger| ledger.update(index, entry))
        .await?;
    tracing::info!("updated entry {index}");

    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(kind: &str, amount: &str) -> EntryNew {
        EntryNew {
            date: "05-03-2024".to_string(),
            kind: kind.to_string(),
            category: "Groceries".to_string(),
            amount: amount.to_string(),
            description: "weekly shop".to_string(),
        }
    }

    #[test]
    fn map_entry_keeps_fields() {
        let entry = map_entry(form("expense", " 42 ")).unwrap();
        assert_eq!(
            entry,
            Entry::new("05-03-2024", Kind::Expense, "Groceries", 42, "weekly shop")
        );
    }

    #[test]
    fn map_entry_rejects_bad_amount() {
        assert!(matches!(
            map_entry(form("Income", "12.50")),
            Err(LedgerError::Parse(_))
        ));
        assert!(matches!(
            map_entry(form("Income", "-3")),
            Err(LedgerError::Parse(_))
        ));
    }

    #[test]
    fn map_entry_rejects_unknown_kind() {
        assert!(matches!(
            map_entry(form("Transfer", "1")),
            Err(LedgerError::Parse(_))
        ));
    }
}
