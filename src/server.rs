//! HTTP substrate of the kiosk GUI

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use log::info;
use signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::routes::{
    complete_screen, customize_drink_screen, main_screen, phone_dialer_screen, waiting_screen,
    welcome_screen,
};
use crate::screens::Screen;

pub async fn start_server(config: Config) {
    let address = format!("{}:{}", config.host, config.port);
    let config = Arc::new(config);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route(Screen::Main.route(), get(main_screen))
        .route(Screen::Welcome.route(), get(welcome_screen))
        .route(Screen::PhoneDialer.route(), get(phone_dialer_screen))
        .route(Screen::CustomizeDrink.route(), get(customize_drink_screen))
        .route(Screen::Waiting.route(), get(waiting_screen))
        .route(Screen::Complete.route(), get(complete_screen))
        .layer(cors)
        .with_state(config);

    info!("[KIOSK] Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .expect("Failed to bind the kiosk address");
    info!("[KIOSK] GUI running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Kiosk server error");

    info!("[KIOSK] Server shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("[KIOSK] Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("[KIOSK] Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
