//! Pairwise aggregation and top-pair selection
//!
//! Turns project groups into a per-pair, per-project map of overlap days.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::core::grouper::ProjectGroup;
use crate::core::overlap::overlap_days;
use crate::core::types::{
    CollaborationEntry, CollaborationMap, PairCollaboration, PairKey, TopPairResult,
};

/// Accumulator for a map under construction; frozen by `build`
#[derive(Debug, Default)]
struct CollaborationBuilder {
    pairs: Vec<PairCollaboration>,
    index: HashMap<PairKey, usize>,
}

impl CollaborationBuilder {
    /// Add overlap days for a pair on a project. Repeat contributions for the
    /// same project are summed into its existing entry.
    fn add(&mut self, pair: PairKey, project: &str, days: i64) {
        let slot = match self.index.get(&pair) {
            Some(&slot) => slot,
            None => {
                self.pairs.push(PairCollaboration {
                    pair: pair.clone(),
                    entries: Vec::new(),
                });
                self.index.insert(pair, self.pairs.len() - 1);
                self.pairs.len() - 1
            }
        };

        let entries = &mut self.pairs[slot].entries;
        match entries.iter_mut().find(|e| e.project == project) {
            Some(existing) => existing.days += days,
            None => entries.push(CollaborationEntry {
                project: project.to_string(),
                days,
            }),
        }
    }

    fn build(self) -> CollaborationMap {
        CollaborationMap::from_pairs(self.pairs)
    }
}

/// Compare every unordered pair of assignments inside each project group
pub(crate) fn aggregate(groups: &[ProjectGroup<'_>], today: NaiveDate) -> CollaborationMap {
    let mut builder = CollaborationBuilder::default();

    for group in groups {
        accumulate_group(&mut builder, group, today);
    }

    builder.build()
}

fn accumulate_group(builder: &mut CollaborationBuilder, group: &ProjectGroup<'_>, today: NaiveDate) {
    let members = &group.members;
    for (i, first) in members.iter().enumerate() {
        for second in &members[i + 1..] {
            let Some(pair) = PairKey::new(&first.employee_id, &second.employee_id) else {
                continue;
            };
            let days = overlap_days(first, second, today);
            if days > 0 {
                builder.add(pair, group.project_id, days);
            }
        }
    }
}

/// Pick the pair with the largest total. A later pair must be strictly
/// greater to take the lead, so ties go to the first pair inserted.
pub(crate) fn select_top(map: &CollaborationMap) -> TopPairResult {
    let mut best: Option<(&PairCollaboration, i64)> = None;

    for collab in map.iter() {
        let total = collab.total_days();
        let leading = best.map_or(0, |(_, days)| days);
        if total > leading {
            best = Some((collab, total));
        }
    }

    match best {
        Some((collab, total_days)) => TopPairResult {
            pair: Some(collab.pair.clone()),
            total_days,
            entries: collab.entries.clone(),
        },
        None => TopPairResult::default(),
    }
}
