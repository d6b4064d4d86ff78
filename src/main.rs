pub mod config;
pub mod constants;
pub mod conversion;
pub mod drink_order;
pub mod errors;
pub mod routes;
pub mod screens;
pub mod server;

use config::Config;
use conversion::FactorTable;
use log::{debug, info};
use simple_logger::SimpleLogger;

use server::start_server;

#[tokio::main]
async fn main() {
    let config = Config::load();
    SimpleLogger::new()
        .with_level(config.log_level())
        .init()
        .expect("Failed to initialize the logger");
    debug!("[KIOSK] Loaded configuration {:?}", config);

    // A bad pump registry must fail at boot, not at dispense time
    let factors = match &config.pump_registry {
        Some(path) => FactorTable::from_pump_registry(path).expect("Invalid pump registry"),
        None => FactorTable::new(),
    };
    info!("[KIOSK] {} pumps registered", factors.registered_pumps());

    start_server(config).await;
}
