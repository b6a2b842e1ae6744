use axum::{
    Router,
    extract::{Request, State},
    http::Method,
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tokio::{sync::RwLock, task};

use std::sync::Arc;

use crate::{ServerError, assets, entry, statistics};
use engine::{Ledger, LedgerError, ResultLedger};

/// Shared by every handler.
///
/// Reads take the lock shared; `append` and `update` take it exclusively so
/// the read-modify-write of an update is never interleaved with another write.
#[derive(Clone)]
pub struct ServerState {
    pub ledger: Arc<RwLock<Ledger>>,
    pub currency_symbol: Arc<str>,
}

impl ServerState {
    pub fn new(ledger: Ledger, currency_symbol: &str) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
            currency_symbol: Arc::from(currency_symbol),
        }
    }

    /// Run `op` on the blocking pool under the shared lock.
    pub(crate) async fn read<T, F>(&self, op: F) -> Result<T, ServerError>
    where
        F: FnOnce(&Ledger) -> ResultLedger<T> + Send + 'static,
        T: Send + 'static,
    {
        let ledger = self.ledger.clone().read_owned().await;
        let result = task::spawn_blocking(move || op(&*ledger))
            .await
            .map_err(joined)?;
        Ok(result?)
    }

    /// Run `op` on the blocking pool under the exclusive lock.
    pub(crate) async fn write<T, F>(&self, op: F) -> Result<T, ServerError>
    where
        F: FnOnce(&Ledger) -> ResultLedger<T> + Send + 'static,
        T: Send + 'static,
    {
        let ledger = self.ledger.clone().write_owned().await;
        let result = task::spawn_blocking(move || op(&*ledger))
            .await
            .map_err(joined)?;
        Ok(result?)
    }
}

fn joined(err: task::JoinError) -> LedgerError {
    LedgerError::Storage(format!("ledger task failed: {err}"))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;
    tracing::debug!("{method} {uri} -> {}", response.status());
    response
}

/// Unknown paths show the entry list for reads and bounce writes home.
async fn fallback(
    method: Method,
    state: State<ServerState>,
) -> Result<Response, ServerError> {
    if method == Method::GET || method == Method::HEAD {
        return Ok(entry::home(state).await?.into_response());
    }
    Ok(Redirect::to("/").into_response())
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(entry::home))
        .route("/add", get(entry::add_form))
        .route("/submit", post(entry::submit))
        .route("/edit", get(entry::edit_form))
        .route("/update", post(entry::update))
        .route("/summary", get(statistics::get_summary))
        .route("/style.css", get(assets::stylesheet))
        .fallback(fallback)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

pub async fn run_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, router(state)).await
}
