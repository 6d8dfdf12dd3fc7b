use mongodb::{
    bson::{doc, to_bson},
    options::{FindOneAndUpdateOptions, ReturnDocument},
};
use thiserror::Error;

use crate::{
    error::Result,
    model::{
        common::election::{select_winner, Candidate, ElectionStatus},
        mongodb::{Coll, Id},
    },
};

use super::Election;

/// Reasons a results declaration is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeclarationError {
    #[error("A valid election_id is required")]
    InvalidRequest,
    #[error("Election not found")]
    UnknownElection,
    #[error("Results already declared")]
    AlreadyDeclared,
    #[error("Election has no candidates")]
    NoCandidates,
    #[error("Election changed during declaration, try again")]
    Conflict,
}

/// Declare the results of an election, returning the winner.
///
/// The `ongoing -> completed` transition is a single conditional update, so of
/// several concurrent declarations exactly one succeeds; the rest see
/// [`DeclarationError::AlreadyDeclared`]. The winner is computed from the
/// candidate list as it stood at that transition, and written only if no
/// winner is recorded yet. A completed election that somehow lacks a winner
/// (the second write failed) is finished off by the next declaration, which
/// recomputes from the same frozen counts.
pub async fn declare_results(elections: &Coll<Election>, election_id: Id) -> Result<Candidate> {
    let transition = doc! {
        "_id": election_id,
        "status": ElectionStatus::Ongoing,
        "candidates.0": { "$exists": true },
    };
    let update = doc! {
        "$set": { "status": ElectionStatus::Completed },
    };
    let options = FindOneAndUpdateOptions::builder()
        .return_document(ReturnDocument::After)
        .build();

    let election = match elections
        .find_one_and_update(transition, update, options)
        .await?
    {
        Some(election) => election,
        None => {
            // Work out why the transition didn't match.
            let existing = elections
                .find_one(election_id.as_doc(), None)
                .await?
                .ok_or(DeclarationError::UnknownElection)?;
            match existing.status {
                ElectionStatus::Completed if existing.winner.is_some() => {
                    return Err(DeclarationError::AlreadyDeclared.into())
                }
                ElectionStatus::Completed => {
                    warn!("Election {election_id} completed without a winner; recomputing");
                    existing
                }
                ElectionStatus::Ongoing if existing.candidates.is_empty() => {
                    return Err(DeclarationError::NoCandidates.into())
                }
                // A candidate was added between the two reads.
                ElectionStatus::Ongoing => return Err(DeclarationError::Conflict.into()),
            }
        }
    };

    let winner = select_winner(&election.candidates)
        .cloned()
        .ok_or(DeclarationError::NoCandidates)?;

    let filter = doc! {
        "_id": election_id,
        "winner": { "$exists": false },
    };
    let update = doc! {
        "$set": { "winner": to_bson(&winner)? },
    };
    let result = elections.update_one(filter, update, None).await?;
    if result.modified_count != 1 {
        // Someone else recorded the winner first.
        return Err(DeclarationError::AlreadyDeclared.into());
    }

    info!(
        "Declared results of election {election_id}: {} ({}) with {} votes",
        winner.name, winner.party, winner.votes
    );
    Ok(winner)
}
