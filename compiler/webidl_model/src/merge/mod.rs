//! Merge engine: one provisional record per identifier.
//!
//! Every identifier is merged independently of every other, so the pass runs
//! on the rayon pool when configured to. Fragments arrive already ordered by
//! source order, and that order decides member order, the winner of generator
//! hint overrides and the order of accumulated locations.
//!
//! # Rules
//!
//! - All fragments must share one kind.
//! - A kind that allows `partial` needs at least one non-partial fragment.
//! - Member lists concatenate; each member is stamped with its fragment's
//!   [`Origin`]. Included mixins concatenate without duplicates.
//! - Scalar fields (inheritance, callback signature, enumeration values,
//!   typedef target) must agree wherever a fragment states them.
//! - Extended attributes are unioned under the configured policy.
//! - Code generator hints: last fragment wins per field, overrides recorded.
//! - Components and locations accumulate in first-seen order.

mod extended_attributes;

use rayon::prelude::*;
use webidl_ir::{
    CodeGeneratorInfo, ComponentTag, DebugInfo, ExtendedAttributes, Fragment, FragmentBody,
    GeneratorOverride, Identifier, Kind, Member, Origin, RawType, StringInterner,
    WithCodeGeneratorInfo, WithDebugInfo, WithExtendedAttributes,
};

use crate::registry::FragmentsByIdentifier;
use crate::{ExtendedAttributePolicy, IdlError, ModelConfig};

use extended_attributes::ExtendedAttributeMerger;

/// The merged, still unresolved, definition of one identifier.
///
/// The body has the same shape as a fragment body, holding the union of every
/// fragment's contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedRecord {
    pub identifier: Identifier,
    pub body: FragmentBody,
    pub extended_attributes: ExtendedAttributes,
    pub code_generator_info: CodeGeneratorInfo,
    pub overrides: Vec<GeneratorOverride>,
    pub components: Vec<ComponentTag>,
    pub debug_info: DebugInfo,
}

impl MergedRecord {
    pub fn kind(&self) -> Kind {
        self.body.kind()
    }
}

/// Result of merging every identifier.
#[derive(Debug, Default)]
pub struct MergeOutput {
    /// Cleanly merged records, in input order.
    pub records: Vec<MergedRecord>,
    /// Identifiers whose merge produced errors.
    ///
    /// They still count as declared, so references to them are not reported
    /// a second time as unresolved.
    pub failed: Vec<Identifier>,
    pub errors: Vec<IdlError>,
}

/// Merge the fragments of every identifier.
#[tracing::instrument(level = "debug", skip_all, fields(identifiers = fragments.len()))]
pub fn merge_all(
    fragments: FragmentsByIdentifier,
    interner: &StringInterner,
    config: &ModelConfig,
) -> MergeOutput {
    let policy = &config.extended_attributes;
    let merge_one = |(identifier, fragments): (Identifier, Vec<Fragment>)| {
        merge_identifier(identifier, fragments, interner, policy).map(|result| (identifier, result))
    };
    let results: Vec<_> = if config.parallel {
        fragments.into_par_iter().filter_map(merge_one).collect()
    } else {
        fragments.into_iter().filter_map(merge_one).collect()
    };

    let mut output = MergeOutput::default();
    for (identifier, result) in results {
        match result {
            Ok(record) => output.records.push(record),
            Err(errors) => {
                output.failed.push(identifier);
                output.errors.extend(errors);
            }
        }
    }
    tracing::debug!(
        merged = output.records.len(),
        failed = output.failed.len(),
        errors = output.errors.len(),
        "merge finished"
    );
    output
}

/// Merge one identifier's ordered fragments. `None` when there are none.
pub fn merge_identifier(
    identifier: Identifier,
    fragments: Vec<Fragment>,
    interner: &StringInterner,
    policy: &ExtendedAttributePolicy,
) -> Option<Result<MergedRecord, Vec<IdlError>>> {
    let kind = fragments.first()?.kind();
    let name = interner.lookup(identifier);
    tracing::trace!(name, %kind, fragments = fragments.len(), "merge");

    if fragments.iter().any(|fragment| fragment.kind() != kind) {
        return Some(Err(vec![IdlError::KindMismatch {
            identifier,
            name: name.to_string(),
            declarations: fragments
                .iter()
                .map(|fragment| (fragment.kind(), fragment.debug_info().clone()))
                .collect(),
        }]));
    }
    let only_partials = kind.supports_partial() && fragments.iter().all(Fragment::is_partial);

    let mut scalars = ScalarFields::new(identifier, name);
    let mut attributes = ExtendedAttributeMerger::new(policy);
    let mut code_generator_info = CodeGeneratorInfo::default();
    let mut overrides = Vec::new();
    let mut components: Vec<ComponentTag> = Vec::new();
    let mut debug_info = DebugInfo::default();
    let mut body: Option<FragmentBody> = None;

    for fragment in fragments {
        let location = fragment.debug_info().clone();
        for conflict in attributes.absorb(fragment.extended_attributes(), &location) {
            scalars.errors.push(IdlError::DuplicateExtendedAttribute {
                identifier,
                name: name.to_string(),
                attribute: conflict.key,
                first: conflict.first,
                second: conflict.second,
            });
        }

        let (info, replaced) =
            code_generator_info.overlay(fragment.code_generator_info(), &location);
        code_generator_info = info;
        overrides.extend(replaced);

        if !components.contains(&fragment.component()) {
            components.push(fragment.component());
        }
        debug_info.absorb(&location);

        let origin = Origin {
            component: fragment.component(),
            is_partial: fragment.is_partial(),
        };
        let incoming = fragment.into_body();
        body = Some(match body {
            None => scalars.start(incoming, origin, &location),
            Some(merged) => scalars.merge(merged, incoming, origin, &location),
        });
    }

    let mut errors = scalars.errors;
    if only_partials {
        errors.insert(
            0,
            IdlError::PartialWithoutDefinition {
                identifier,
                name: name.to_string(),
                kind,
                debug_info: debug_info.clone(),
            },
        );
    }
    let body = body?;
    if !errors.is_empty() {
        return Some(Err(errors));
    }

    Some(Ok(MergedRecord {
        identifier,
        body,
        extended_attributes: attributes.finish(),
        code_generator_info,
        overrides,
        components,
        debug_info,
    }))
}

/// Tracks where each scalar field was first stated, to report conflicts.
struct ScalarFields<'a> {
    identifier: Identifier,
    name: &'a str,
    sources: Vec<(&'static str, DebugInfo)>,
    errors: Vec<IdlError>,
}

impl<'a> ScalarFields<'a> {
    fn new(identifier: Identifier, name: &'a str) -> Self {
        ScalarFields {
            identifier,
            name,
            sources: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Take the first fragment's body as the starting point.
    fn start(&mut self, body: FragmentBody, origin: Origin, location: &DebugInfo) -> FragmentBody {
        match body {
            FragmentBody::Interface {
                inherited,
                members,
                includes,
            } => {
                if inherited.is_some() {
                    self.stated("inheritance", location);
                }
                let mut unique = Vec::with_capacity(includes.len());
                extend_unique(&mut unique, includes);
                FragmentBody::Interface {
                    inherited,
                    members: stamp(members, origin),
                    includes: unique,
                }
            }
            FragmentBody::InterfaceMixin { members } => FragmentBody::InterfaceMixin {
                members: stamp(members, origin),
            },
            FragmentBody::Namespace { members } => FragmentBody::Namespace {
                members: stamp(members, origin),
            },
            FragmentBody::CallbackInterface { members } => FragmentBody::CallbackInterface {
                members: stamp(members, origin),
            },
            FragmentBody::Dictionary { inherited, members } => {
                if inherited.is_some() {
                    self.stated("inheritance", location);
                }
                FragmentBody::Dictionary {
                    inherited,
                    members: members
                        .into_iter()
                        .map(|mut member| {
                            member.origin = origin;
                            member
                        })
                        .collect(),
                }
            }
            FragmentBody::CallbackFunction { .. } => {
                self.stated("return type", location);
                self.stated("arguments", location);
                body
            }
            FragmentBody::Enumeration { .. } => {
                self.stated("values", location);
                body
            }
            FragmentBody::Typedef { .. } => {
                self.stated("type", location);
                body
            }
        }
    }

    /// Fold a later fragment's body into the merged one.
    fn merge(
        &mut self,
        merged: FragmentBody,
        incoming: FragmentBody,
        origin: Origin,
        location: &DebugInfo,
    ) -> FragmentBody {
        match (merged, incoming) {
            (
                FragmentBody::Interface {
                    mut inherited,
                    mut members,
                    mut includes,
                },
                FragmentBody::Interface {
                    inherited: incoming_inherited,
                    members: incoming_members,
                    includes: incoming_includes,
                },
            ) => {
                self.merge_optional("inheritance", &mut inherited, incoming_inherited, location);
                members.extend(stamp(incoming_members, origin));
                extend_unique(&mut includes, incoming_includes);
                FragmentBody::Interface {
                    inherited,
                    members,
                    includes,
                }
            }
            (
                FragmentBody::InterfaceMixin { mut members },
                FragmentBody::InterfaceMixin {
                    members: incoming_members,
                },
            ) => {
                members.extend(stamp(incoming_members, origin));
                FragmentBody::InterfaceMixin { members }
            }
            (
                FragmentBody::Namespace { mut members },
                FragmentBody::Namespace {
                    members: incoming_members,
                },
            ) => {
                members.extend(stamp(incoming_members, origin));
                FragmentBody::Namespace { members }
            }
            (
                FragmentBody::CallbackInterface { mut members },
                FragmentBody::CallbackInterface {
                    members: incoming_members,
                },
            ) => {
                members.extend(stamp(incoming_members, origin));
                FragmentBody::CallbackInterface { members }
            }
            (
                FragmentBody::Dictionary {
                    mut inherited,
                    mut members,
                },
                FragmentBody::Dictionary {
                    inherited: incoming_inherited,
                    members: incoming_members,
                },
            ) => {
                self.merge_optional("inheritance", &mut inherited, incoming_inherited, location);
                members.extend(incoming_members.into_iter().map(|mut member| {
                    member.origin = origin;
                    member
                }));
                FragmentBody::Dictionary { inherited, members }
            }
            (
                FragmentBody::CallbackFunction {
                    return_type,
                    arguments,
                },
                FragmentBody::CallbackFunction {
                    return_type: incoming_return_type,
                    arguments: incoming_arguments,
                },
            ) => {
                self.require_equal("return type", &return_type, &incoming_return_type, location);
                self.require_equal("arguments", &arguments, &incoming_arguments, location);
                FragmentBody::CallbackFunction {
                    return_type,
                    arguments,
                }
            }
            (
                FragmentBody::Enumeration { values },
                FragmentBody::Enumeration {
                    values: incoming_values,
                },
            ) => {
                self.require_equal("values", &values, &incoming_values, location);
                FragmentBody::Enumeration { values }
            }
            (
                FragmentBody::Typedef { idl_type },
                FragmentBody::Typedef {
                    idl_type: incoming_type,
                },
            ) => {
                self.require_equal("type", &idl_type, &incoming_type, location);
                FragmentBody::Typedef { idl_type }
            }
            // Kinds were checked to agree before merging bodies.
            (merged, _) => merged,
        }
    }

    fn stated(&mut self, field: &'static str, location: &DebugInfo) {
        self.sources.push((field, location.clone()));
    }

    fn merge_optional<T: PartialEq>(
        &mut self,
        field: &'static str,
        merged: &mut Option<T>,
        incoming: Option<T>,
        location: &DebugInfo,
    ) {
        match (merged.as_ref(), incoming) {
            (_, None) => {}
            (None, Some(value)) => {
                *merged = Some(value);
                self.stated(field, location);
            }
            (Some(current), Some(value)) => {
                if *current != value {
                    self.conflict(field, location);
                }
            }
        }
    }

    fn require_equal<T: PartialEq + ?Sized>(
        &mut self,
        field: &'static str,
        merged: &T,
        incoming: &T,
        location: &DebugInfo,
    ) {
        if merged != incoming {
            self.conflict(field, location);
        }
    }

    fn conflict(&mut self, field: &'static str, location: &DebugInfo) {
        let first = self
            .sources
            .iter()
            .find(|(stated, _)| *stated == field)
            .map(|(_, first)| first.clone())
            .unwrap_or_default();
        self.errors.push(IdlError::ConflictingDeclaration {
            identifier: self.identifier,
            name: self.name.to_string(),
            field,
            first,
            second: location.clone(),
        });
    }
}

fn stamp(members: Vec<Member<RawType>>, origin: Origin) -> Vec<Member<RawType>> {
    members
        .into_iter()
        .map(|member| member.with_origin(origin))
        .collect()
}

fn extend_unique(target: &mut Vec<Identifier>, items: Vec<Identifier>) {
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
