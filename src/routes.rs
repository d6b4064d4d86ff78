//! HTTP handlers of the kiosk screens. Each one serves a fixed template,
//! no business decision is made here.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};
use log::{debug, info};
use serde::Deserialize;
use tokio::fs::read_to_string;

use crate::config::Config;
use crate::errors::AppError;
use crate::screens::Screen;

/// Selection forwarded from the previous screen, if the user made one
#[derive(Deserialize)]
pub struct ScreenQuery {
    userselection: Option<String>,
}

pub async fn main_screen(State(config): State<Arc<Config>>) -> Result<Html<String>, AppError> {
    render(&config, Screen::Main).await
}

pub async fn welcome_screen(State(config): State<Arc<Config>>) -> Result<Html<String>, AppError> {
    render(&config, Screen::Welcome).await
}

/// Screen to enter a cell phone number and find a returning user account
pub async fn phone_dialer_screen(
    State(config): State<Arc<Config>>,
    Query(query): Query<ScreenQuery>,
) -> Result<Html<String>, AppError> {
    log_selection(Screen::PhoneDialer, &query);
    render(&config, Screen::PhoneDialer).await
}

/// Screen with the drink, add-on and branding options for this order
pub async fn customize_drink_screen(
    State(config): State<Arc<Config>>,
    Query(query): Query<ScreenQuery>,
) -> Result<Html<String>, AppError> {
    log_selection(Screen::CustomizeDrink, &query);
    render(&config, Screen::CustomizeDrink).await
}

/// Screen shown while the unit prepares the order
pub async fn waiting_screen(
    State(config): State<Arc<Config>>,
    Query(query): Query<ScreenQuery>,
) -> Result<Html<String>, AppError> {
    log_selection(Screen::Waiting, &query);
    render(&config, Screen::Waiting).await
}

pub async fn complete_screen(State(config): State<Arc<Config>>) -> Result<Html<String>, AppError> {
    render(&config, Screen::Complete).await
}

fn log_selection(screen: Screen, query: &ScreenQuery) {
    if let Some(selection) = &query.userselection {
        info!("[ROUTER] {:?} received selection {}", screen, selection);
    }
}

async fn render(config: &Config, screen: Screen) -> Result<Html<String>, AppError> {
    let path = Path::new(&config.templates_dir).join(screen.template());
    debug!("[ROUTER] Serving {:?} from {:?}", screen, path);
    match read_to_string(&path).await {
        Ok(contents) => Ok(Html(contents)),
        Err(error) if error.kind() == ErrorKind::NotFound => {
            Err(AppError::MissingTemplate(screen.template().to_string()))
        }
        Err(error) => Err(AppError::InternalError(error)),
    }
}
