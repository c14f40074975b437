mod core;
mod features;
mod shared;

use crate::core::config::{Config, StoreBackend};
use crate::core::content::MunicipalContent;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::complaints::store::{
    ComplaintStore, InMemoryComplaintStore, PgComplaintStore,
};
use crate::features::complaints::{
    routes as complaints_routes, ComplaintService, GeocodingService,
};
use crate::features::dashboard::{routes as dashboard_routes, DashboardService};
use crate::features::directory::{routes as directory_routes, DirectoryService};
use crate::features::faq::{routes as faq_routes, FaqService};
use crate::features::notices::{routes as notices_routes, NoticeService};
use crate::features::taxes::{routes as taxes_routes, TaxService};
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Log system info
    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    // Select the complaint store backend
    let store: Arc<dyn ComplaintStore> = match config.store.backend {
        StoreBackend::Postgres => {
            let db_config = config
                .database
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("Postgres backend selected without DATABASE_URL"))?;

            let pg_store = PgComplaintStore::connect(db_config).await?;
            tracing::info!("Database connection pool created");

            // Run migrations automatically
            tracing::info!("Running database migrations...");
            pg_store
                .run_migrations()
                .await
                .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
            tracing::info!("Database migrations completed successfully");

            Arc::new(pg_store)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory complaint store; records will not survive restart");
            Arc::new(InMemoryComplaintStore::new())
        }
    };

    // Load municipal content bundle (categories, directory, notices, FAQs, taxes)
    let content = MunicipalContent::load(config.content.path.as_deref())
        .map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        "Municipal content loaded: {} categories, {} departments, {} notices",
        content.categories.len(),
        content.departments.len(),
        content.notices.len()
    );

    let categories = Arc::new(content.categories);

    // Initialize Geocoding Service (best-effort address enrichment)
    let geocoding_service = Arc::new(GeocodingService::new(config.geocoding.clone()));
    tracing::info!(
        "Geocoding service initialized (enabled: {})",
        config.geocoding.enabled
    );

    // Initialize Complaint Lifecycle Service
    let complaint_service = Arc::new(ComplaintService::new(
        Arc::clone(&store),
        geocoding_service,
        Arc::clone(&categories),
    ));
    tracing::info!("Complaint lifecycle service initialized");

    // Initialize content services
    let category_service = Arc::new(CategoryService::new(Arc::clone(&categories)));
    let directory_service = Arc::new(DirectoryService::new(
        Arc::new(content.departments),
        Arc::new(content.wards),
    ));
    let notice_service = Arc::new(NoticeService::new(Arc::new(content.notices)));
    let faq_service = Arc::new(FaqService::new(Arc::new(content.faqs)));
    let tax_service = Arc::new(TaxService::new(Arc::new(content.taxes)));
    tracing::info!("Content services initialized");

    // Initialize Dashboard Service
    let dashboard_service = Arc::new(DashboardService::new(Arc::clone(&store)));
    tracing::info!("Dashboard service initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    // Build swagger router
    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(
                Arc::new(credentials),
                "Swagger UI",
            )))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Administrative routes (status advancement), basic-auth guarded when
    // credentials are configured
    let admin_routes = if let Some(credentials) = config.admin.credentials() {
        tracing::info!("Admin basic auth enabled");
        complaints_routes::admin_routes(Arc::clone(&complaint_service)).layer(from_fn(
            middleware::basic_auth_middleware(Arc::new(credentials), "CivicTrack Admin"),
        ))
    } else {
        tracing::warn!("Admin basic auth disabled (no credentials configured)");
        complaints_routes::admin_routes(Arc::clone(&complaint_service))
    };

    // Simple health check endpoint (no auth required)
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(complaints_routes::public_routes(Arc::clone(
            &complaint_service,
        )))
        .merge(categories_routes::routes(category_service))
        .merge(directory_routes::routes(directory_service))
        .merge(notices_routes::routes(notice_service))
        .merge(faq_routes::routes(faq_service))
        .merge(taxes_routes::routes(tax_service))
        .merge(dashboard_routes::routes(dashboard_service));

    let app = Router::new()
        .merge(swagger)
        .merge(admin_routes)
        .merge(public_routes)
        .merge(health_route)
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(65535)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
