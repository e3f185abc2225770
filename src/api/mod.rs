// src/api/mod.rs
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;

// Shared, read-only server state. Built once at startup and handed to every worker.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn into_data(self) -> web::Data<AppState> {
        web::Data::new(self)
    }
}

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_password,
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::StrengthRequest,
            crate::api::types::StrengthResponse,
            crate::models::Strength,
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength endpoints")
    ),
    info(
        title = "rust_passgen API",
        version = "0.1.0",
        description = "Random password generator with a coarse strength rating",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    let addr = config.bind_addr();
    log::info!("Starting password generator on http://{}:{}", addr.0, addr.1);

    let state = AppState::new(config).into_data();

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::new("%a \"%r\" %s %b %Dms"))
            .app_data(state.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(routes::configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}

pub mod error;
pub mod handlers;
pub mod routes;
pub mod template;
pub mod types;
pub mod utils;
