//! Rate-lookup proxy.
//!
//! The app never talks to the metals-pricing provider directly; this
//! service holds the credential and exposes one endpoint:
//!
//! ```text
//! GET /api/metal-rates?basis={gold|silver}&currency={ISO-4217}
//! ```
//!
//! Missing credential answers `400`; upstream failure answers `502`. Errors
//! pass straight through to the caller with no local recovery.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use pillars_core::NisabBasis;
use pillars_rates::{MetalPriceApiProvider, RateError, RateProvider, RateQuote};

struct AppState {
    provider: Option<MetalPriceApiProvider>,
}

#[derive(Debug, Deserialize)]
struct RatesQuery {
    basis: NisabBasis,
    currency: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RatesResponse {
    success: bool,
    basis: NisabBasis,
    metal: &'static str,
    currency: String,
    per_gram: Decimal,
    timestamp: i64,
    source: &'static str,
}

impl From<RateQuote> for RatesResponse {
    fn from(quote: RateQuote) -> Self {
        Self {
            success: true,
            basis: quote.basis,
            metal: quote.metal,
            currency: quote.currency,
            per_gram: quote.per_gram,
            timestamp: quote.timestamp,
            source: quote.source,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let provider = match MetalPriceApiProvider::from_env() {
        Ok(provider) => Some(provider),
        Err(_) => {
            warn!("METALPRICE_API_KEY not set; /api/metal-rates will answer 400");
            None
        }
    };

    let state = Arc::new(AppState { provider });

    let app = Router::new()
        .route("/api/metal-rates", get(metal_rates))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(3000u16);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn metal_rates(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RatesQuery>,
) -> impl IntoResponse {
    let Some(provider) = &state.provider else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "metal price API credential is not configured".to_string(),
                status: None,
            }),
        )
            .into_response();
    };

    match provider.per_gram(query.basis, &query.currency).await {
        Ok(quote) => (StatusCode::OK, Json(RatesResponse::from(quote))).into_response(),
        Err(RateError::Upstream { status }) => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorBody {
                error: format!("rate provider returned status {status}"),
                status: Some(status),
            }),
        )
            .into_response(),
        Err(err) => {
            warn!("rate lookup failed: {err}");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody {
                    error: err.to_string(),
                    status: None,
                }),
            )
                .into_response()
        }
    }
}
