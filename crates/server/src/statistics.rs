//! Summary page

use axum::{extract::State, response::Html};

use crate::{ServerError, html, server::ServerState};

/// Expense totals by category and month
pub async fn get_summary(State(state): State<ServerState>) -> Result<Html<String>, ServerError> {
    let summary = state
        .read(|ledger| engine::summarize(&ledger.list_all()?))
        .await?;

    Ok(Html(html::summary(&summary, &state.currency_symbol)))
}
