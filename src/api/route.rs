use crate::{
    api::{
        error::ApiError,
        response::{with_total_count, ApiResponse},
        view::{transaction_views, BalanceView, DashboardView, PaymentRequestView},
    },
    payment::build_payment_request_with_scheme,
    service::ServiceError,
    state::AppState,
    validation::{validate_amount, validate_limit, validate_solana_address, ValidationError},
};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use backon::{ExponentialBuilder, Retryable};
use serde::Deserialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};

// GET /balance query parameters
#[derive(Deserialize, Default)]
pub struct BalanceQuery {
    pub address: Option<String>,
}

// GET /transactions and GET /dashboard query parameters
#[derive(Deserialize, Default)]
pub struct HistoryQuery {
    pub address: Option<String>,
    pub limit: Option<String>,
}

// GET /payment-request query parameters
#[derive(Deserialize, Default)]
pub struct PaymentRequestQuery {
    pub address: Option<String>,
    pub amount: Option<String>,
}

// Create router with all routes
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/balance", get(get_balance))
        .route("/transactions", get(get_transactions))
        .route("/dashboard", get(get_dashboard))
        .route("/payment-request", get(get_payment_request))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Retry upstream outages `retries` times with exponential backoff.
pub(crate) async fn with_retries<T, F, Fut>(retries: usize, op: F) -> Result<T, ServiceError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ServiceError>>,
{
    op.retry(ExponentialBuilder::default().with_max_times(retries))
        .when(ServiceError::is_retryable)
        .notify(|err: &ServiceError, after: Duration| {
            warn!("Ledger request failed, retrying in {:?}: {}", after, err);
        })
        .await
}

/// Run `work` unless `shutdown` fires first, including during retry backoff.
pub(crate) async fn until_shutdown<T, Fut>(
    shutdown: &CancellationToken,
    work: Fut,
) -> Result<T, ServiceError>
where
    Fut: Future<Output = Result<T, ServiceError>>,
{
    tokio::select! {
        biased;
        _ = shutdown.cancelled() => {
            debug!("Request abandoned on shutdown");
            Err(ServiceError::Cancelled)
        }
        result = work => result,
    }
}

// Presence only; the service checks the format before any query
fn required_address(address: Option<String>) -> Result<String, ApiError> {
    match address {
        Some(address) if !address.trim().is_empty() => Ok(address),
        _ => Err(ValidationError::MissingParameter("address".to_string()).into()),
    }
}

// GET /balance handler
pub(crate) async fn get_balance(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BalanceQuery>,
) -> Result<Response, ApiError> {
    let address = required_address(params.address)?;

    let dashboard = &state.dashboard;
    let address_ref = address.as_str();
    let balance = until_shutdown(
        &state.shutdown,
        with_retries(state.config.load_retries, move || {
            dashboard.fetch_balance(address_ref)
        }),
    )
    .await?;

    let view = BalanceView::new(&address, balance, state.config.display_decimals);
    Ok(ApiResponse::new(view).into_response())
}

// GET /transactions handler
pub(crate) async fn get_transactions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryQuery>,
) -> Result<Response, ApiError> {
    let address = required_address(params.address)?;
    let limit = validate_limit(params.limit.as_deref(), state.config.history_limit)?;

    info!("Fetching {} transactions for address: {}", limit, address);

    let dashboard = &state.dashboard;
    let address_ref = address.as_str();
    let transactions = until_shutdown(
        &state.shutdown,
        with_retries(state.config.load_retries, move || {
            dashboard.fetch_history(address_ref, limit)
        }),
    )
    .await?;

    let views = transaction_views(&transactions, state.config.display_decimals);
    Ok(with_total_count(views, transactions.len()))
}

// GET /dashboard handler
pub(crate) async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryQuery>,
) -> Result<Response, ApiError> {
    let address = required_address(params.address)?;
    let limit = validate_limit(params.limit.as_deref(), state.config.history_limit)?;

    info!("Loading dashboard for address: {}", address);

    let dashboard = &state.dashboard;
    let address_ref = address.as_str();
    let cancel = state.shutdown.child_token();
    let cancel = &cancel;
    let loaded = until_shutdown(
        &state.shutdown,
        with_retries(state.config.load_retries, move || {
            dashboard.load_dashboard(address_ref, limit, cancel)
        }),
    )
    .await?;

    let payment_request =
        build_payment_request_with_scheme(&state.config.payment_scheme, &address, None);
    let view = DashboardView::new(&loaded, state.config.display_decimals, payment_request);
    Ok(ApiResponse::new(view).into_response())
}

// GET /payment-request handler
pub(crate) async fn get_payment_request(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaymentRequestQuery>,
) -> Result<Response, ApiError> {
    let address = required_address(params.address)?;
    validate_solana_address(&address)?;
    let amount = validate_amount(params.amount.as_deref())?;

    let uri = build_payment_request_with_scheme(&state.config.payment_scheme, &address, amount);
    Ok(ApiResponse::new(PaymentRequestView { uri }).into_response())
}
