mod errors;
mod logging;
mod initialization;
mod handlers;
mod manager_db;
mod manager_owm;
mod forecast;
mod units;
mod aggregation;
mod alerts;
mod summary;

use actix_web::{web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::initialization::config;
use crate::manager_db::DB;
use crate::manager_owm::OWM;

pub struct AppState {
    pub db: DB,
    pub owm: OWM,
    pub cities: Vec<String>,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;

    let db = DB::new(&config.db.db_path)?;
    let owm = OWM::new(&config.owm.api_key)?;

    let state = web::Data::new(AppState {
        db,
        owm,
        cities: config.owm.cities.clone(),
    });

    info!("starting on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(handlers::weather)
            .service(handlers::humidity_wind)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
