//! Server module.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};
use ghook_config::Config;
use tracing::info;

use crate::{
    webhook::{configure_webhook_handlers, pong_handler},
    Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
}

impl AppContext {
    /// Create new app context.
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(context)
        .wrap(Logger::default())
        .route("/ping", web::post().to(pong_handler))
        .service(web::scope("").configure(configure_webhook_handlers))
}

/// Run webhook server.
pub async fn run_webhook_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        message = "Starting webhook server",
    );

    run_webhook_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_webhook_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let context = Data::new(context);
    let cloned_context = context.clone();

    let mut server = HttpServer::new(move || build_actix_app(context.clone()));

    if let Some(workers) = cloned_context.config.server.workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}

#[cfg(test)]
mod tests {
    use ghook_config::Config;
    use pretty_assertions::assert_eq;

    use super::get_bind_address;

    #[test]
    fn bind_address() {
        let mut config = Config::from_env_no_version();
        config.server.bind_ip = "0.0.0.0".into();
        config.server.bind_port = 9889;

        assert_eq!(get_bind_address(&config), "0.0.0.0:9889");
    }
}
