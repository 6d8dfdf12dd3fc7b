use rocket::{serde::json::Json, Route, State};

use crate::{
    error::{Error, Result},
    model::{
        api::{AdminCredentials, IssuedToken},
        auth::Claims,
    },
    Config,
};

pub fn routes() -> Vec<Route> {
    routes![login]
}

/// Sign the configured administrator in, issuing a bearer token.
#[post("/login", data = "<credentials>", format = "json")]
async fn login(
    credentials: Json<AdminCredentials>,
    config: &State<Config>,
) -> Result<Json<IssuedToken>> {
    if !config.verify_admin(&credentials.email, &credentials.password) {
        warn!("Failed admin sign-in for {}", credentials.email);
        return Err(Error::Credentials);
    }

    let token = Claims::admin(credentials.email.trim(), config).encode(config.jwt_secret())?;
    info!("Admin {} signed in", credentials.email.trim());
    Ok(Json(IssuedToken { token }))
}
