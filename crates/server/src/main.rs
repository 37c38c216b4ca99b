// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions, clippy::unused_async)]

mod live;
mod page;

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use maud::Markup;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tourism_dash::SelectorOptions;
use tourism_dash_api::{
    ApiError, DashboardRequest, DashboardResponse, OptionsResponse, SelectorInfo,
    describe_selectors, list_options, update_dashboard,
};
use tourism_dash_dataset::Dataset;
use tourism_dash_domain::SelectionState;
use tracing::{error, info};

/// Tourism Insights Dashboard - interactive charts over regional visit records
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the CSV file with the visit records.
    #[arg(short, long, default_value = "data/tourism_india.csv")]
    data: PathBuf,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 8051)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,
}

/// Application state shared across handlers.
///
/// Built once before the listener starts and never modified afterwards, so
/// handlers and sessions read it without locking.
#[derive(Debug, Clone)]
struct AppState {
    /// The loaded visit records.
    dataset: Arc<Dataset>,
    /// Selector option lists derived from `dataset`.
    options: Arc<SelectorOptions>,
}

impl AppState {
    fn new(dataset: Dataset) -> Self {
        let options: SelectorOptions = SelectorOptions::from_records(dataset.records());
        Self {
            dataset: Arc::new(dataset),
            options: Arc::new(options),
        }
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::UnknownSelection { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::NoData => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Rendering { .. } => {
                error!(error = %err, "Rendering error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for GET `/` endpoint.
///
/// Renders the dashboard layout with the default selection pre-selected.
async fn handle_index(AxumState(app_state): AxumState<AppState>) -> Markup {
    info!("Handling index request");

    let selection: Option<SelectionState> = app_state.options.default_selection();
    let selectors: Vec<SelectorInfo> = describe_selectors(&app_state.options, selection.as_ref());

    page::dashboard_page(&selectors)
}

/// Handler for GET `/api/options` endpoint.
///
/// Lists the option values for the three selectors.
async fn handle_options(AxumState(app_state): AxumState<AppState>) -> Json<OptionsResponse> {
    info!("Handling options request");

    Json(list_options(&app_state.options))
}

/// Handler for GET `/api/dashboard` endpoint.
///
/// Computes the three charts for the selection given in the query string.
async fn handle_dashboard(
    AxumState(app_state): AxumState<AppState>,
    Query(request): Query<DashboardRequest>,
) -> Result<Json<DashboardResponse>, HttpError> {
    info!(
        year = request.year,
        region = %request.region,
        purpose = %request.purpose,
        "Handling dashboard request"
    );

    let response: DashboardResponse =
        update_dashboard(app_state.dataset.records(), &app_state.options, &request)?;

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/api/options", get(handle_options))
        .route("/api/dashboard", get(handle_dashboard))
        .route("/live", get(live::live_session_handler))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Tourism Insights Dashboard");

    // Load the dataset once; any failure here stops startup
    let dataset: Dataset = Dataset::from_path(&args.data).inspect_err(|e| {
        error!(error = %e, "Failed to load dataset");
    })?;

    let app_state: AppState = AppState::new(dataset);
    info!(
        years = app_state.options.years.len(),
        regions = app_state.options.regions.len(),
        purposes = app_state.options.purposes.len(),
        "Selector options ready"
    );

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on http://{addr}");

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    const TEST_CSV: &str = "\
Year,Month,State/UT,Purpose of Visit,Revenue (INR),Tourist Count,Tourism Category
2023,January,Goa,Leisure,1000,50,Beach
2023,January,Goa,Leisure,500,20,Beach
2023,February,Goa,Leisure,300,10,Adventure
2022,June,Kerala,Business,800,30,Backwaters
";

    /// Helper to create test app state over a small in-memory table.
    pub fn create_test_app_state() -> AppState {
        let dataset: Dataset =
            Dataset::from_reader(TEST_CSV.as_bytes()).expect("Failed to load test dataset");
        AppState::new(dataset)
    }

    async fn get_request(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> axum::body::Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_layout() {
        let app: Router = build_router(create_test_app_state());

        let response = get_request(app, "/").await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body = body_bytes(response).await;
        let html: &str = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("Tourism Insights in India Dashboard"));
        assert!(html.contains(r#"<option value="2022" selected>2022</option>"#));
        assert!(html.contains(r#"<option value="Business" selected>Business</option>"#));
        assert!(html.contains(r#"id="tourism-category-pie""#));
    }

    #[tokio::test]
    async fn test_options_endpoint() {
        let app: Router = build_router(create_test_app_state());

        let response = get_request(app, "/api/options").await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let options: OptionsResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(options.years, vec![2022, 2023]);
        assert_eq!(options.regions, vec!["Goa", "Kerala"]);
        assert_eq!(
            options.default_selection,
            Some(SelectionState::new(2022, "Goa", "Business"))
        );
    }

    #[tokio::test]
    async fn test_dashboard_endpoint_returns_figures() {
        let app: Router = build_router(create_test_app_state());

        let response = get_request(app, "/api/dashboard?year=2023&region=Goa&purpose=Leisure").await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let dashboard: DashboardResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(dashboard.row_count, 3);
        assert_eq!(
            dashboard.selection,
            SelectionState::new(2023, "Goa", "Leisure")
        );
        assert!(!dashboard.figures.category_distribution.is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_endpoint_with_no_matching_rows() {
        let app: Router = build_router(create_test_app_state());

        let response = get_request(app, "/api/dashboard?year=2022&region=Goa&purpose=Leisure").await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let dashboard: DashboardResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(dashboard.row_count, 0);
        assert!(dashboard.figures.revenue_growth.is_empty());
        assert!(dashboard.figures.tourist_arrival.is_empty());
        assert!(dashboard.figures.category_distribution.is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_endpoint_reports_out_of_range_totals() {
        let records: Vec<tourism_dash_domain::VisitRecord> = [u64::MAX, 1]
            .into_iter()
            .map(|visitors| {
                tourism_dash_domain::VisitRecord::new(
                    2023,
                    tourism_dash_domain::Month::January,
                    "Goa",
                    "Leisure",
                    10.0,
                    visitors,
                    "Beach",
                )
                .unwrap()
            })
            .collect();
        let app: Router = build_router(AppState::new(Dataset::from_records(records)));

        let response = get_request(app, "/api/dashboard?year=2023&region=Goa&purpose=Leisure").await;
        assert_eq!(response.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);

        let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(error.error);
        assert!(error.message.contains("out of range"));
    }

    #[tokio::test]
    async fn test_dashboard_endpoint_rejects_unknown_region() {
        let app: Router = build_router(create_test_app_state());

        let response = get_request(
            app,
            "/api/dashboard?year=2023&region=Atlantis&purpose=Leisure",
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);

        let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(error.error);
        assert!(error.message.contains("Atlantis"));
    }

    #[tokio::test]
    async fn test_dashboard_endpoint_rejects_malformed_query() {
        let app: Router = build_router(create_test_app_state());

        let response = get_request(
            app.clone(),
            "/api/dashboard?year=soon&region=Goa&purpose=Leisure",
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);

        let response = get_request(app, "/api/dashboard?year=2023&region=Goa").await;
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_dataset_still_serves_layout() {
        let app: Router = build_router(AppState::new(Dataset::default()));

        let response = get_request(app.clone(), "/").await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = body_bytes(response).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("No tourism data is loaded."));

        let response = get_request(app, "/api/options").await;
        let options: OptionsResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(options.default_selection, None);
    }

    #[test]
    fn test_http_error_status_mapping() {
        let err: HttpError = ApiError::NoData.into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err: HttpError = ApiError::InvalidInput {
            field: String::from("year"),
            message: String::from("bad"),
        }
        .into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err: HttpError = ApiError::Rendering {
            message: String::from("boom"),
        }
        .into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_args_defaults() {
        let args: Args = Args::parse_from(["tourism-dash-server"]);
        assert_eq!(args.data, PathBuf::from("data/tourism_india.csv"));
        assert_eq!(args.port, 8051);
        assert_eq!(args.bind, "127.0.0.1");
    }
}
