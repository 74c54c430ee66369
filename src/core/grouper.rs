use std::collections::HashMap;

use crate::core::types::Assignment;

/// Assignments sharing one project, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProjectGroup<'a> {
    pub(crate) project_id: &'a str,
    pub(crate) members: Vec<&'a Assignment>,
}

/// Partition assignments by project. Groups come out in first-seen project
/// order and nothing is deduplicated.
pub(crate) fn group_by_project(assignments: &[Assignment]) -> Vec<ProjectGroup<'_>> {
    let mut groups: Vec<ProjectGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for assignment in assignments {
        let slot = *index
            .entry(assignment.project_id.as_str())
            .or_insert_with(|| {
                groups.push(ProjectGroup {
                    project_id: &assignment.project_id,
                    members: Vec::new(),
                });
                groups.len() - 1
            });
        groups[slot].members.push(assignment);
    }

    groups
}
