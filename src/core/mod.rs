//! Core module - the collaboration-overlap engine
//!
//! records -> resolve dates -> group by project -> pairwise overlap -> aggregate -> top pair

mod aggregator;
mod engine;
mod grouper;
mod overlap;
mod types;

pub(crate) use engine::compute;
pub(crate) use types::{
    Collaboration, CollaborationEntry, CollaborationMap, PairCollaboration, Record, RunStats,
    TopPairResult,
};

#[cfg(test)]
pub(crate) use types::PairKey;
