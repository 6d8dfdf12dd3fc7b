use std::cmp::Ordering;

use super::Candidate;

/// Pick the winner of an election.
///
/// The candidate with the most votes wins. Exact ties go to the candidate whose
/// name sorts first (byte-wise); if name and votes both match, the one listed
/// first wins. Returns `None` only when there are no candidates.
pub fn select_winner(candidates: &[Candidate]) -> Option<&Candidate> {
    // `min_by` keeps the first of several equal elements.
    candidates.iter().min_by(|a, b| rank(a, b))
}

fn rank(a: &Candidate, b: &Candidate) -> Ordering {
    b.votes.cmp(&a.votes).then_with(|| a.name.cmp(&b.name))
}
