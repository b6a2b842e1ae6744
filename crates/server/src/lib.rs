use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use engine::LedgerError;

pub use server::{ServerState, router, run_with_listener};

mod assets;
mod entry;
mod html;
mod server;
mod statistics;

#[derive(Debug)]
pub enum ServerError {
    Ledger(LedgerError),
}

fn status_for_ledger_error(err: &LedgerError) -> StatusCode {
    match err {
        LedgerError::IndexOutOfRange { .. } => StatusCode::NOT_FOUND,
        LedgerError::Parse(_) => StatusCode::UNPROCESSABLE_ENTITY,
        LedgerError::Storage(_) | LedgerError::Io(_) | LedgerError::Csv(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn message_for_ledger_error(err: LedgerError) -> String {
    if err.is_storage() {
        tracing::error!("ledger storage error: {err}");
        return "internal server error".to_string();
    }
    err.to_string()
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Ledger(err) => (status_for_ledger_error(&err), message_for_ledger_error(err)),
        };

        (status, Html(html::error_page(status, &error))).into_response()
    }
}

impl From<LedgerError> for ServerError {
    fn from(value: LedgerError) -> Self {
        Self::Ledger(value)
    }
}
