use mongodb::{
    bson::{doc, Document},
    options::FindOptions,
};
use rocket::{futures::TryStreamExt, serde::json::Json, Route};

use crate::{
    error::{Error, Result},
    model::{
        api::{Message, PendingVoter, PendingVoterList, VoterEmailRequest, VoterIdRequest},
        auth::AdminToken,
        db::User,
        mongodb::Coll,
    },
};

pub fn routes() -> Vec<Route> {
    routes![
        pending_voters,
        approve_voter,
        approve_voter_by_email,
        reject_voter,
        reject_voter_by_email,
    ]
}

#[get("/pending_voters")]
async fn pending_voters(
    _token: AdminToken,
    voters: Coll<PendingVoter>,
) -> Result<Json<PendingVoterList>> {
    let filter = doc! { "is_approved": false };
    let options = FindOptions::builder()
        .projection(doc! { "_id": 1, "name": 1, "email": 1 })
        .build();
    let pending_voters = voters.find(filter, options).await?.try_collect().await?;
    Ok(Json(PendingVoterList { pending_voters }))
}

#[post("/approve_voter", data = "<request>")]
async fn approve_voter(
    token: AdminToken,
    users: Coll<User>,
    request: Json<VoterIdRequest>,
) -> Result<Json<Message>> {
    let voter_id = request.voter_id()?;
    approve(&users, voter_id.as_doc(), &voter_id.to_string(), &token).await
}

/// Deprecated: use `/approve_voter` with a `voterId`.
#[post("/approve_voter_by_email", data = "<request>")]
async fn approve_voter_by_email(
    token: AdminToken,
    users: Coll<User>,
    request: Json<VoterEmailRequest>,
) -> Result<Json<Message>> {
    let email = request.email()?;
    warn!("Deprecated approve_voter_by_email used by {}", token.claims.sub);
    approve(&users, doc! { "email": email }, email, &token).await
}

#[post("/reject_voter", data = "<request>")]
async fn reject_voter(
    token: AdminToken,
    users: Coll<User>,
    request: Json<VoterIdRequest>,
) -> Result<Json<Message>> {
    let voter_id = request.voter_id()?;
    reject(&users, voter_id.as_doc(), &voter_id.to_string(), &token).await
}

/// Deprecated: use `/reject_voter` with a `voterId`.
#[post("/reject_voter_by_email", data = "<request>")]
async fn reject_voter_by_email(
    token: AdminToken,
    users: Coll<User>,
    request: Json<VoterEmailRequest>,
) -> Result<Json<Message>> {
    let email = request.email()?;
    warn!("Deprecated reject_voter_by_email used by {}", token.claims.sub);
    reject(&users, doc! { "email": email }, email, &token).await
}

/// Mark the matching voter approved. A single update, so there is no window
/// between finding the voter and flagging them.
async fn approve(
    users: &Coll<User>,
    filter: Document,
    voter: &str,
    token: &AdminToken,
) -> Result<Json<Message>> {
    let update = doc! {
        "$set": { "is_approved": true },
    };
    let result = users.update_one(filter, update, None).await?;
    if result.matched_count == 0 {
        return Err(Error::not_found(format!("Voter {voter}")));
    }
    info!("Admin {} approved voter {voter}", token.claims.sub);
    Ok(Json(Message::new("Voter approved successfully")))
}

/// Remove the matching voter outright. Rejecting a voter who is already gone
/// is not an error.
async fn reject(
    users: &Coll<User>,
    filter: Document,
    voter: &str,
    token: &AdminToken,
) -> Result<Json<Message>> {
    let result = users.delete_one(filter, None).await?;
    if result.deleted_count == 0 {
        debug!("Voter {voter} was already absent");
    } else {
        info!("Admin {} rejected and removed voter {voter}", token.claims.sub);
    }
    Ok(Json(Message::new("Voter rejected and removed")))
}
