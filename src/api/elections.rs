use mongodb::{
    bson::{doc, to_bson},
    options::FindOptions,
};
use rocket::{
    futures::TryStreamExt,
    http::Status,
    response::status::Custom,
    serde::json::Json,
    Route,
};

use crate::{
    error::{Error, Result},
    model::{
        api::{
            CandidateSpec, Created, DeclareRequest, Declared, ElectionList, ElectionSpec,
            ElectionSummary, Message,
        },
        auth::AdminToken,
        common::election::ElectionStatus,
        db::{declare_results as declare, DeclarationError, Election, NewElection},
        mongodb::{Coll, Id},
    },
};

pub fn routes() -> Vec<Route> {
    routes![
        list_elections,
        create_election,
        add_candidate,
        declare_results
    ]
}

#[get("/elections")]
async fn list_elections(
    _token: AdminToken,
    elections: Coll<ElectionSummary>,
) -> Result<Json<ElectionList>> {
    let options = FindOptions::builder()
        .projection(ElectionSummary::projection())
        .build();
    let elections = elections.find(None, options).await?.try_collect().await?;
    Ok(Json(ElectionList { elections }))
}

#[post("/create_election", data = "<spec>")]
async fn create_election(
    token: AdminToken,
    new_elections: Coll<NewElection>,
    spec: Json<ElectionSpec>,
) -> Result<Custom<Json<Created>>> {
    // Validate everything before touching the store.
    let election = NewElection::try_from(spec.into_inner())?;

    let id: Id = new_elections
        .insert_one(&election, None)
        .await?
        .inserted_id
        .as_object_id()
        .unwrap() // Valid because the ID comes directly from the DB
        .into();
    info!(
        "Admin {} created election {id} '{}' in {}",
        token.claims.sub, election.title, election.district
    );

    Ok(Custom(
        Status::Created,
        Json(Created {
            message: "Election created successfully".to_string(),
            id: id.into(),
        }),
    ))
}

#[post("/add_candidate", data = "<spec>")]
async fn add_candidate(
    token: AdminToken,
    elections: Coll<Election>,
    spec: Json<CandidateSpec>,
) -> Result<Json<Message>> {
    let (election_id, candidate) = spec.validate()?;

    // Same-name candidates are allowed; each push is one atomic append.
    let filter = doc! {
        "_id": election_id,
        "status": ElectionStatus::Ongoing,
    };
    let update = doc! {
        "$push": { "candidates": to_bson(&candidate)? },
    };
    let result = elections.update_one(filter, update, None).await?;
    if result.matched_count == 0 {
        // Either there is no such election, or its results are already fixed.
        return match elections.find_one(election_id.as_doc(), None).await? {
            Some(_) => Err(Error::Validation(
                "Election results already declared".to_string(),
            )),
            None => Err(Error::not_found(format!("Election {election_id}"))),
        };
    }

    info!(
        "Admin {} added candidate '{}' ({}) to election {election_id}",
        token.claims.sub, candidate.name, candidate.party
    );
    Ok(Json(Message::new("Candidate added successfully")))
}

#[post("/declare_results", data = "<request>")]
async fn declare_results(
    token: AdminToken,
    elections: Coll<Election>,
    request: Option<Json<DeclareRequest>>,
) -> Result<Json<Declared>> {
    // Every refusal of this route is reported as a declaration error.
    let election_id = request
        .and_then(|request| request.election_id().ok())
        .ok_or(DeclarationError::InvalidRequest)?;
    let winner = declare(&elections, election_id).await?;
    debug!("Results of {election_id} declared by {}", token.claims.sub);
    Ok(Json(Declared {
        message: "Results declared".to_string(),
        winner,
    }))
}
