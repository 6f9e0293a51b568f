#![recursion_limit = "512"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use buildhouse::app::*;
    use buildhouse::core::config::Config;
    use buildhouse::core::leads::{LeadApiState, LeadService, LeadSink, leads_router};
    use buildhouse::core::site::LEADS_ENDPOINT;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load application config from environment variables
    let config = Config::from_env();

    // Log config status (without revealing the webhook address)
    tracing::info!("Config loaded: lead_webhook={}", config.has_lead_webhook());

    let sink = LeadSink::from_config(&config)?;
    tracing::info!("Lead sink: {}", sink.name());
    let lead_state = LeadApiState {
        lead_service: LeadService::new(sink),
    };

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Serve pre-compressed .br and .gz files from /pkg when present
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let app = Router::new()
        // REST API for lead intake
        .merge(leads_router(lead_state))
        // Leptos routes (nested to avoid state conflicts)
        .merge(leptos_router)
        // Brotli first, gzip as fallback
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);
    log!("Lead API: http://{}{}", &addr, LEADS_ENDPOINT);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
