//! Dependency-honoring candidate ordering
//!
//! Computes a build order over a candidate set such that every dependency
//! and parent is built before its dependents, rejecting duplicate
//! coordinates and cyclic relationships.

use std::collections::HashMap;

use crate::core::candidate::BuildCandidate;
use crate::error::OrderError;

#[derive(Debug, Clone, Copy, PartialEq)]
enum VisitState {
    Visiting,
    Done,
}

/// Order candidates so every prerequisite precedes its dependents.
///
/// Dependency and parent references pointing outside the candidate set are
/// ignored: those projects are assumed to be satisfied already. The result
/// is deterministic for a fixed input; candidates are visited in input
/// order and each candidate's prerequisites in declaration order
/// (dependencies first, then the parent).
pub fn order_candidates(candidates: &[BuildCandidate]) -> Result<Vec<BuildCandidate>, OrderError> {
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    // Index by versionless key; the same group:artifact appearing twice is a
    // configuration error, not a cycle.
    let mut index: HashMap<String, usize> = HashMap::new();
    for (ix, candidate) in candidates.iter().enumerate() {
        if index.insert(candidate.versionless_key(), ix).is_some() {
            return Err(OrderError::Duplicated {
                key: candidate.versionless_key(),
            });
        }
    }

    let mut states: HashMap<usize, VisitState> = HashMap::new();
    let mut ordered: Vec<usize> = Vec::with_capacity(candidates.len());

    for ix in 0..candidates.len() {
        if !states.contains_key(&ix) {
            visit(ix, candidates, &index, &mut states, &mut ordered)?;
        }
    }

    Ok(ordered.into_iter().map(|ix| candidates[ix].clone()).collect())
}

fn visit(
    ix: usize,
    candidates: &[BuildCandidate],
    index: &HashMap<String, usize>,
    states: &mut HashMap<usize, VisitState>,
    ordered: &mut Vec<usize>,
) -> Result<(), OrderError> {
    states.insert(ix, VisitState::Visiting);

    let candidate = &candidates[ix];
    let prerequisites = candidate.dependencies.iter().chain(candidate.parent.as_ref());

    for prerequisite in prerequisites {
        let Some(&target) = index.get(&prerequisite.versionless_key()) else {
            // Not among the candidates: assumed already satisfied.
            continue;
        };

        match states.get(&target) {
            Some(VisitState::Done) => {}
            Some(VisitState::Visiting) => {
                return Err(OrderError::CycleDetected {
                    prerequisite: prerequisite.versionless_key(),
                    dependent: candidate.versionless_key(),
                });
            }
            None => visit(target, candidates, index, states, ordered)?,
        }
    }

    states.insert(ix, VisitState::Done);
    ordered.push(ix);

    Ok(())
}
