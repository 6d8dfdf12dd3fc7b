#[macro_use]
extern crate rocket;

#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate backend_test;

use rocket::{Build, Rocket};

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;

pub use config::Config;

use crate::{
    config::{ConfigFairing, DatabaseFairing},
    logging::LoggerFairing,
};

/// Path prefix for every route in the service.
pub const MOUNT_POINT: &str = "/admin";

/// Build a server instance, configured from `Rocket.toml` and `ROCKET_*`
/// environment variables.
pub fn build() -> Rocket<Build> {
    rocket::build()
        .attach(LoggerFairing)
        .attach(ConfigFairing)
        .attach(DatabaseFairing)
        .mount(MOUNT_POINT, api::routes())
        .register("/", api::catchers())
}

/// A server instance managing the example config but no database.
/// Routes that reach the store will fail with 500.
#[cfg(test)]
pub(crate) fn rocket_without_db() -> Rocket<Build> {
    rocket::build()
        .manage(Config::example())
        .mount(MOUNT_POINT, api::routes())
        .register("/", api::catchers())
}

/// A server instance managing the example config and the given database.
#[cfg(test)]
pub(crate) fn rocket_for_db(db_client: mongodb::Client, db_name: &str) -> Rocket<Build> {
    let db = db_client.database(db_name);
    rocket_without_db().manage(db_client).manage(db)
}

/// Connect to the test database server, at `ROCKET_DB_URI` if set.
#[cfg(test)]
pub(crate) async fn db_client() -> mongodb::Client {
    let db_uri =
        std::env::var("ROCKET_DB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    mongodb::Client::with_uri_str(&db_uri).await.unwrap()
}

/// Use a random database name to avoid collisions between tests.
#[cfg(test)]
pub(crate) fn database() -> String {
    let random: u32 = rand::random();
    format!("test{random}")
}
