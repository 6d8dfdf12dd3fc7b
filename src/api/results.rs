use mongodb::{bson::doc, options::FindOptions};
use rocket::{futures::TryStreamExt, serde::json::Json, Route};

use crate::{
    error::Result,
    model::{
        api::{ElectionResult, ResultList},
        common::election::ElectionStatus,
        mongodb::Coll,
    },
};

pub fn routes() -> Vec<Route> {
    routes![view_results]
}

/// Results of every completed election. Open to anyone.
#[get("/view_results")]
async fn view_results(elections: Coll<ElectionResult>) -> Result<Json<ResultList>> {
    let filter = doc! { "status": ElectionStatus::Completed };
    let options = FindOptions::builder()
        .projection(ElectionResult::projection())
        .build();
    let results = elections.find(filter, options).await?.try_collect().await?;
    Ok(Json(ResultList { results }))
}
