mod analytics;
mod auth;
mod db;
mod directory;
mod reservations;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use analytics::AnalyticsEngine;
use directory::{HotelCatalog, UserDirectory};
use reservations::{
    analytics_handler, create_reservation_handler, delete_reservation_handler,
    get_reservation_handler, list_all_reservations_handler, my_reservations_handler,
    reservation_count_handler, update_reservation_handler, ReservationService,
    ReservationsRepository,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        reservations::handlers::create_reservation_handler,
        reservations::handlers::list_all_reservations_handler,
        reservations::handlers::my_reservations_handler,
        reservations::handlers::get_reservation_handler,
        reservations::handlers::update_reservation_handler,
        reservations::handlers::delete_reservation_handler,
        reservations::handlers::reservation_count_handler,
        reservations::handlers::analytics_handler,
    ),
    components(
        schemas(
            reservations::Reservation,
            reservations::ReservationDetail,
            reservations::CreateReservationRequest,
            reservations::UpdateReservationRequest,
            reservations::CountResponse,
            reservations::MonthlyCount,
            reservations::MonthlyRevenue,
            reservations::HotelBookings,
            reservations::HotelRevenue,
            reservations::ActiveUser,
            analytics::ReservationAnalytics,
            analytics::HotelPerformance,
            analytics::UserBookingPatterns,
            analytics::AnalyticsReport,
        )
    ),
    tags(
        (name = "reservations", description = "Hotel reservation management endpoints")
    ),
    info(
        title = "Hotel Reservation API",
        version = "1.0.0",
        description = "RESTful API for hotel reservations, pricing, and booking analytics"
    )
)]
struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub reservation_service: ReservationService,
    pub analytics: AnalyticsEngine,
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS middleware
fn create_router(db: PgPool) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    let reservations_repo = ReservationsRepository::new(db.clone());
    let reservation_service = ReservationService::new(
        reservations_repo.clone(),
        UserDirectory::new(db.clone()),
        HotelCatalog::new(db),
    );
    let analytics = AnalyticsEngine::new(reservations_repo);

    let state = AppState {
        reservation_service,
        analytics,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Admin surface; registered before the :id route so the literal
        // segments match first
        .route("/api/reservations/admin/count", get(reservation_count_handler))
        .route("/api/reservations/admin/analytics", get(analytics_handler))
        // Reservation lifecycle
        .route("/api/reservations", post(create_reservation_handler))
        .route("/api/reservations", get(list_all_reservations_handler))
        .route(
            "/api/reservations/my-reservations",
            get(my_reservations_handler),
        )
        .route("/api/reservations/:id", get(get_reservation_handler))
        .route("/api/reservations/:id", put(update_reservation_handler))
        .route("/api/reservations/:id", delete(delete_reservation_handler))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Hotel Reservation API - Starting...");

    // Get configuration from environment variables
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");
    std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in environment");
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&database_url)
        .await
        .expect("Failed to create database pool");

    // Run SQLx migrations on startup
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    // Create the application router
    let app = create_router(db_pool);

    // Start the Axum server
    let addr = format!("{}:{}", host, port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Hotel Reservation API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await.expect("Server error");
}

#[cfg(test)]
mod tests;
