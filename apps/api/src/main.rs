use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod config;
pub mod extractors;
pub mod handlers;
mod middleware;

use config::Config;
use handlers::{accounts, chat, directory, health, reviews};
use middleware::auth::AuthMiddleware;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,api=debug,actix_web=info".into());

    let is_json = std::env::var("LOG_FORMAT").unwrap_or_default() == "json";

    if is_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    }

    let config = Config::from_env()?;
    let config_data = web::Data::new(config.clone());
    tracing::info!("Starting kasbyar API server...");

    let db = infrastructure::database::init_database(&config.database_url).await?;

    let server_addr = format!("{}:{}", config.server_host, config.server_port);
    tracing::info!("Server listening on {}", server_addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(AuthMiddleware)
            .app_data(web::Data::new(db.clone()))
            .app_data(config_data.clone())
            // Health
            .service(health::health_check)
            // Accounts
            .service(accounts::register)
            .service(accounts::login)
            .service(accounts::get_profile)
            .service(accounts::update_profile)
            // Directory ("mine" before the slug route so it matches first)
            .service(directory::register_business)
            .service(directory::list_businesses)
            .service(directory::my_businesses)
            .service(directory::business_detail)
            .service(directory::list_categories)
            // Reviews
            .service(reviews::add_review)
            .service(reviews::edit_review)
            .service(reviews::delete_review)
            // Chat
            .service(chat::open_chat)
            .service(chat::inbox)
            .service(chat::send_message)
            .service(chat::get_messages)
    })
    .bind(&server_addr)?
    .run()
    .await?;

    Ok(())
}
