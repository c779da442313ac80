use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeFile, trace::TraceLayer};

use escolar_api::config;
use escolar_api::database;
use escolar_api::handlers::{grades, login, status, students, subjects, users};
use escolar_api::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("starting escolar api in {:?} mode", config.environment);

    let pool = database::connect(&config.database)
        .unwrap_or_else(|e| panic!("failed to build database pool: {}", e));

    let app = app(AppState::new(pool));

    let bind_addr = format!("{}:{}", config.server.bind, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 escolar api listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/api", get(status::status))
        // Authentication
        .route("/api/login", post(login::login))
        // System users
        .route("/api/users", post(users::register).get(users::list))
        .route("/api/users/:id", delete(users::remove))
        // Subjects
        .route("/api/subjects", get(subjects::list).post(subjects::create))
        .route(
            "/api/subjects/:id",
            put(subjects::update).delete(subjects::remove),
        )
        // Students
        .route("/api/students", get(students::list).post(students::create))
        .route(
            "/api/students/:id",
            put(students::update).delete(students::remove),
        )
        // Grades
        .route("/api/grades", get(grades::list).post(grades::create))
        .route(
            "/api/grades/:id",
            put(grades::update).delete(grades::remove),
        )
        // Everything outside /api belongs to the single-page frontend
        .fallback_service(ServeFile::new(&config::config().frontend.index_file))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
