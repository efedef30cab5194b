use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use employee_store_backend::config::AppConfig;
use employee_store_backend::handlers;
use employee_store_backend::store::EmployeeStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env()?;

    let store = if config.seed_employees {
        EmployeeStore::seeded()
    } else {
        EmployeeStore::default()
    };
    let store = web::Data::new(store);

    let (host, port) = config.bind_address();
    info!("Starting server at {}:{}", host, port);
    if !config.response_delay.is_zero() {
        info!("Simulating {:?} of latency per request", config.response_delay);
    }

    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .app_data(config.clone())
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
