pub mod routes;
pub mod store;
pub mod telemetry;

use actix_cors::Cors;
use actix_web::dev::{Server, Service};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{App, HttpServer, web};
use std::net::TcpListener;

pub use store::{Endpoint, Store};

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(config: &mut Config, store: Store) -> std::io::Result<Server> {
    let allowed_origins = config.allowed_origins.clone();

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
            let mut cors =
                Cors::default().allow_any_method().allow_any_header();
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        // Every request is recorded so tests can inspect what the client
        // actually sent.
        let recorder = store.clone();

        App::new()
            .wrap_fn(move |req, srv| {
                let authorization = req
                    .headers()
                    .get(AUTHORIZATION)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string);
                recorder.record_request(req.method().as_str(), req.path(), authorization);
                srv.call(req)
            })
            .wrap(cors)
            .service(routes::api_services())
            .app_data(web::Data::new(store.clone()))
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
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            ip: var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".into()),
            port: match var("PORT") {
                Ok(port) => port.parse()?,
                Err(_) => 1728,
            },
            allowed_origins,
        })
    }
}
