use rocket::{
    http::Status,
    serde::json::{serde_json::json, Json, Value},
    Catcher, Request, Route,
};

use crate::model::auth::AdminToken;

mod auth;
mod elections;
mod results;
mod voters;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(auth::routes());
    routes.extend(elections::routes());
    routes.extend(results::routes());
    routes.extend(voters::routes());
    routes
}

pub fn catchers() -> Vec<Catcher> {
    catchers![
        bad_request,
        unauthorized,
        forbidden,
        not_found,
        unprocessable,
        internal_error
    ]
}

/// Guard failures (the authorization gate above all) end up here rather than
/// in a handler, so they get their JSON body from a catcher.
#[catch(403)]
fn forbidden(req: &Request<'_>) -> Json<Value> {
    let message = match AdminToken::rejection(req) {
        Some(err) => err.to_string(),
        None => "Forbidden".to_string(),
    };
    Json(json!({ "message": message }))
}

#[catch(400)]
fn bad_request() -> Json<Value> {
    Json(json!({ "message": "Malformed request body" }))
}

#[catch(401)]
fn unauthorized() -> Json<Value> {
    Json(json!({ "message": "Unauthorized" }))
}

#[catch(404)]
fn not_found(req: &Request<'_>) -> Json<Value> {
    Json(json!({ "message": format!("No route for {}", req.uri().path()) }))
}

#[catch(422)]
fn unprocessable() -> Json<Value> {
    Json(json!({ "message": "Request body has the wrong shape" }))
}

#[catch(500)]
fn internal_error() -> Json<Value> {
    Json(json!({ "message": "Internal server error" }))
}

#[cfg(test)]
mod tests {
    use rocket::{http::ContentType, local::asynchronous::Client};

    use super::*;
    use crate::MOUNT_POINT;

    const ADMIN_GETS: [&str; 2] = ["elections", "pending_voters"];
    const ADMIN_POSTS: [&str; 7] = [
        "approve_voter",
        "approve_voter_by_email",
        "reject_voter",
        "reject_voter_by_email",
        "create_election",
        "add_candidate",
        "declare_results",
    ];

    async fn client() -> Client {
        Client::tracked(crate::rocket_without_db()).await.unwrap()
    }

    #[rocket::async_test]
    async fn admin_routes_need_a_token() {
        let client = client().await;
        for path in ADMIN_GETS {
            let response = client
                .get(format!("{MOUNT_POINT}/{path}"))
                .dispatch()
                .await;
            assert_eq!(response.status(), Status::Forbidden, "GET {path}");
            let body: Value = response.into_json().await.unwrap();
            assert_eq!(body["message"], "Token missing");
        }
        for path in ADMIN_POSTS {
            let response = client
                .post(format!("{MOUNT_POINT}/{path}"))
                .header(ContentType::JSON)
                .body("{}")
                .dispatch()
                .await;
            assert_eq!(response.status(), Status::Forbidden, "POST {path}");
        }
    }

    #[rocket::async_test]
    async fn gate_runs_without_content_type() {
        let client = client().await;
        for path in ADMIN_POSTS {
            let response = client
                .post(format!("{MOUNT_POINT}/{path}"))
                .body("{}")
                .dispatch()
                .await;
            assert_eq!(response.status(), Status::Forbidden, "POST {path}");
            let body: Value = response.into_json().await.unwrap();
            assert_eq!(body["message"], "Token missing");
        }
    }

    #[rocket::async_test]
    async fn voters_are_turned_away() {
        let client = client().await;
        for path in ADMIN_POSTS {
            let response = client
                .post(format!("{MOUNT_POINT}/{path}"))
                .header(ContentType::JSON)
                .header(AdminToken::example_voter_header())
                .body("{}")
                .dispatch()
                .await;
            assert_eq!(response.status(), Status::Forbidden, "POST {path}");
            let body: Value = response.into_json().await.unwrap();
            assert_eq!(body["message"], "Unauthorized");
        }
    }

    #[rocket::async_test]
    async fn results_are_public() {
        let client = client().await;
        let response = client
            .get(format!("{MOUNT_POINT}/view_results"))
            .dispatch()
            .await;
        // No store is attached, so this fails, but not at the gate.
        assert_ne!(response.status(), Status::Forbidden);
    }

    #[rocket::async_test]
    async fn unknown_routes_get_json() {
        let client = client().await;
        let response = client.get("/admin/nowhere").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body["message"], "No route for /admin/nowhere");
    }
}
