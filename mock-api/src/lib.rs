pub mod routes;
pub mod store;
pub mod telemetry;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use std::net::TcpListener;

use crate::store::EventStore;

/// Path segment the real API scopes its data under.
pub const DEFAULT_COHORT: &str = "2509-FTB-CT-WEB-PT";

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(config: &mut Config, store: EventStore) -> std::io::Result<Server> {
    let store = web::Data::new(store);
    let allowed_origins = config.allowed_origins.clone();
    let cohort = config.cohort.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        let cors = if allowed_origins.iter().any(|origin| origin == "*") {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
        } else {
            allowed_origins.iter().fold(
                Cors::default().allow_any_method().allow_any_header(),
                |cors, origin| cors.allowed_origin(origin),
            )
        };

        App::new()
            .wrap(cors)
            .service(routes::health_check)
            .service(routes::api_services(&cohort))
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin.
    pub allowed_origins: Vec<String>,
    /// Path segment the events are served under, `/api/{cohort}/events`.
    pub cohort: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip: "127.0.0.1".into(),
            port: 8000,
            allowed_origins: vec!["*".into()],
            cohort: DEFAULT_COHORT.into(),
        }
    }
}

impl Config {
    /// Read the config from the environment, falling back to the defaults
    /// for anything unset.
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let defaults = Self::default();
        let port = match var("PORT") {
            Ok(port) => port
                .parse()
                .with_context(|| format!("PORT is not a valid port: {port}"))?,
            Err(_) => defaults.port,
        };
        let allowed_origins = match var("ALLOWED_ORIGINS") {
            Ok(origins) => origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Err(_) => defaults.allowed_origins,
        };

        Ok(Config {
            ip: var("IP_ADDRESS").unwrap_or(defaults.ip),
            port,
            allowed_origins,
            cohort: var("API_COHORT").unwrap_or(defaults.cohort),
        })
    }

    /// Base URL a client should use to reach the events endpoints.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}/api/{}", self.ip, self.port, self.cohort)
    }
}
