//! Inheritance cycle detection.
//!
//! Each interface or dictionary has at most one parent, so following parents
//! from any definition either ends or enters exactly one cycle. A walk marks
//! the definitions it visits; meeting a definition already on the current
//! walk closes a cycle, which is then reported once.

use rustc_hash::FxHashMap;
use webidl_ir::{FragmentBody, Identifier, Kind, StringInterner};

use crate::merge::MergedRecord;
use crate::IdlError;

#[derive(Copy, Clone, PartialEq, Eq)]
enum Visit {
    OnPath,
    Done,
}

/// Report every inheritance cycle among `records`.
///
/// Only edges to a parent of the same kind are followed; a parent of the
/// wrong kind is reported separately as an invalid reference. Each cycle is
/// reported under the member whose spelling sorts first, listing the members
/// starting from it.
pub(super) fn find_inheritance_cycles(
    records: &[MergedRecord],
    interner: &StringInterner,
) -> Vec<IdlError> {
    let by_identifier: FxHashMap<Identifier, &MergedRecord> = records
        .iter()
        .map(|record| (record.identifier, record))
        .collect();
    let parent_of = |identifier: Identifier| -> Option<Identifier> {
        let record = by_identifier.get(&identifier)?;
        let parent = match &record.body {
            FragmentBody::Interface {
                inherited: Some(parent),
                ..
            }
            | FragmentBody::Dictionary {
                inherited: Some(parent),
                ..
            } => *parent,
            _ => return None,
        };
        let parent_kind: Kind = by_identifier.get(&parent)?.kind();
        (parent_kind == record.kind()).then_some(parent)
    };

    let mut errors = Vec::new();
    let mut visits: FxHashMap<Identifier, Visit> = FxHashMap::default();
    for record in records {
        let mut path = Vec::new();
        let mut current = record.identifier;
        loop {
            match visits.get(&current) {
                Some(Visit::Done) => break,
                Some(Visit::OnPath) => {
                    if let Some(start) = path.iter().position(|&id| id == current) {
                        errors.push(cycle_error(&path[start..], &by_identifier, interner));
                    }
                    break;
                }
                None => {
                    visits.insert(current, Visit::OnPath);
                    path.push(current);
                    match parent_of(current) {
                        Some(parent) => current = parent,
                        None => break,
                    }
                }
            }
        }
        for identifier in path {
            visits.insert(identifier, Visit::Done);
        }
    }
    errors
}

fn cycle_error(
    cycle: &[Identifier],
    by_identifier: &FxHashMap<Identifier, &MergedRecord>,
    interner: &StringInterner,
) -> IdlError {
    let mut cycle = cycle.to_vec();
    let first = cycle
        .iter()
        .enumerate()
        .min_by_key(|(_, &id)| interner.lookup(id))
        .map_or(0, |(index, _)| index);
    cycle.rotate_left(first);

    let mut names: Vec<String> = cycle
        .iter()
        .map(|&id| interner.lookup(id).to_string())
        .collect();
    names.push(names[0].clone());

    let identifier = cycle[0];
    IdlError::InheritanceCycle {
        identifier,
        name: names[0].clone(),
        cycle: names,
        debug_info: by_identifier
            .get(&identifier)
            .map(|record| record.debug_info.clone())
            .unwrap_or_default(),
    }
}
