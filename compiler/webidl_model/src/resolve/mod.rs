//! Reference resolver: merged records in, frozen definitions out.
//!
//! Every merged identifier gets a dense [`DefId`], assigned in order of
//! identifier spelling so the arena layout never depends on scheduling. Each
//! raw type name then becomes a [`BuiltinType`] or a [`TypeHandle`] carrying
//! that `DefId`. Handles are plain indices, so forward and circular
//! references need no resolution order and no fixed point.
//!
//! Records only read the shared name table while resolving, so they resolve
//! independently, on the rayon pool when configured to.

mod cycles;

use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use webidl_ir::{
    Argument, Attribute, BuiltinType, Constant, Constructor, DebugInfo, DefId, DictionaryMember,
    FragmentBody, Identifier, IdlType, Kind, Member, Operation, RawType, StringInterner,
    TypeHandle,
};

use crate::merge::MergedRecord;
use crate::model::{
    def_id, CallbackFunction, CallbackInterface, Declaration, Dictionary, Enumeration, Interface,
    InterfaceMixin, Namespace, Typedef, UserDefinedType,
};
use crate::stack::ensure_sufficient_stack;
use crate::{IdlError, ModelConfig};

/// Result of resolving every merged record.
#[derive(Debug, Default)]
pub struct ResolveOutput {
    /// Resolved definitions; `definitions[i]` has `DefId(i)`.
    pub definitions: Vec<UserDefinedType>,
    pub errors: Vec<IdlError>,
}

/// A merged identifier's arena slot and kind.
#[derive(Copy, Clone, Debug)]
struct Known {
    def: DefId,
    kind: Kind,
}

/// Resolve every record.
///
/// `failed` lists identifiers whose merge failed: they are declared, so
/// references to them are not reported again, but they get no `DefId`.
#[tracing::instrument(level = "debug", skip_all, fields(records = records.len()))]
pub fn resolve_all(
    mut records: Vec<MergedRecord>,
    failed: &[Identifier],
    interner: &StringInterner,
    config: &ModelConfig,
) -> ResolveOutput {
    records.sort_by_key(|record| interner.lookup(record.identifier));

    let known: FxHashMap<Identifier, Known> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let known = Known {
                def: def_id(index),
                kind: record.kind(),
            };
            (record.identifier, known)
        })
        .collect();
    let failed: FxHashSet<Identifier> = failed.iter().copied().collect();

    let mut errors = cycles::find_inheritance_cycles(&records, interner);

    let resolver = Resolver {
        interner,
        known: &known,
        failed: &failed,
    };
    let resolved: Vec<(UserDefinedType, Vec<IdlError>)> = if config.parallel {
        records
            .into_par_iter()
            .map(|record| resolver.resolve_record(record))
            .collect()
    } else {
        records
            .into_iter()
            .map(|record| resolver.resolve_record(record))
            .collect()
    };

    let mut definitions = Vec::with_capacity(resolved.len());
    for (definition, record_errors) in resolved {
        definitions.push(definition);
        errors.extend(record_errors);
    }
    tracing::debug!(
        definitions = definitions.len(),
        errors = errors.len(),
        "resolve finished"
    );
    ResolveOutput {
        definitions,
        errors,
    }
}

/// Where a type reference appears, for error messages.
#[derive(Copy, Clone, Debug)]
enum Context {
    Attribute(Identifier),
    OperationReturn(Identifier),
    OperationArgument {
        operation: Identifier,
        argument: Identifier,
    },
    ConstructorArgument(Identifier),
    Constant(Identifier),
    DictionaryMember(Identifier),
    CallbackReturn,
    CallbackArgument(Identifier),
    TypedefTarget,
    Inheritance,
    Includes,
}

impl Context {
    fn describe(self, interner: &StringInterner) -> String {
        let operation = |id: Identifier| {
            if id.is_empty() {
                "anonymous operation".to_string()
            } else {
                format!("operation `{}`", interner.lookup(id))
            }
        };
        match self {
            Context::Attribute(id) => format!("attribute `{}`", interner.lookup(id)),
            Context::OperationReturn(id) => format!("return type of {}", operation(id)),
            Context::OperationArgument {
                operation: op,
                argument,
            } => format!(
                "argument `{}` of {}",
                interner.lookup(argument),
                operation(op)
            ),
            Context::ConstructorArgument(id) => {
                format!("argument `{}` of constructor", interner.lookup(id))
            }
            Context::Constant(id) => format!("constant `{}`", interner.lookup(id)),
            Context::DictionaryMember(id) => {
                format!("dictionary member `{}`", interner.lookup(id))
            }
            Context::CallbackReturn => "return type".to_string(),
            Context::CallbackArgument(id) => format!("argument `{}`", interner.lookup(id)),
            Context::TypedefTarget => "aliased type".to_string(),
            Context::Inheritance => "inheritance".to_string(),
            Context::Includes => "includes statement".to_string(),
        }
    }
}

/// The record being resolved and the errors found in it so far.
struct Site<'a> {
    identifier: Identifier,
    name: &'a str,
    debug_info: DebugInfo,
    errors: Vec<IdlError>,
}

impl Site<'_> {
    fn unresolved(&mut self, referenced: &str, context: Context, interner: &StringInterner) {
        self.errors.push(IdlError::UnresolvedReference {
            identifier: self.identifier,
            name: self.name.to_string(),
            referenced: referenced.to_string(),
            context: context.describe(interner),
            debug_info: self.debug_info.clone(),
        });
    }
}

struct Resolver<'a> {
    interner: &'a StringInterner,
    known: &'a FxHashMap<Identifier, Known>,
    failed: &'a FxHashSet<Identifier>,
}

impl Resolver<'_> {
    fn resolve_record(&self, record: MergedRecord) -> (UserDefinedType, Vec<IdlError>) {
        let MergedRecord {
            identifier,
            body,
            extended_attributes,
            code_generator_info,
            overrides,
            components,
            debug_info,
        } = record;
        tracing::trace!(name = self.interner.lookup(identifier), "resolve");

        let mut site = Site {
            identifier,
            name: self.interner.lookup(identifier),
            debug_info: debug_info.clone(),
            errors: Vec::new(),
        };
        let declaration = Declaration::new(
            identifier,
            extended_attributes,
            code_generator_info,
            overrides,
            components,
            debug_info,
        );

        let definition = match body {
            FragmentBody::Interface {
                inherited,
                members,
                includes,
            } => {
                let inherited = inherited.and_then(|parent| {
                    self.resolve_definition(parent, Kind::Interface, Context::Inheritance, &mut site)
                });
                let included_mixins = includes
                    .into_iter()
                    .filter_map(|mixin| {
                        self.resolve_definition(
                            mixin,
                            Kind::InterfaceMixin,
                            Context::Includes,
                            &mut site,
                        )
                    })
                    .collect();
                let members = self.resolve_members(members, &mut site);
                UserDefinedType::Interface(Interface::new(
                    declaration,
                    inherited,
                    included_mixins,
                    members,
                ))
            }
            FragmentBody::InterfaceMixin { members } => UserDefinedType::InterfaceMixin(
                InterfaceMixin::new(declaration, self.resolve_members(members, &mut site)),
            ),
            FragmentBody::Namespace { members } => UserDefinedType::Namespace(Namespace::new(
                declaration,
                self.resolve_members(members, &mut site),
            )),
            FragmentBody::CallbackInterface { members } => UserDefinedType::CallbackInterface(
                CallbackInterface::new(declaration, self.resolve_members(members, &mut site)),
            ),
            FragmentBody::CallbackFunction {
                return_type,
                arguments,
            } => {
                let return_type = self.resolve_type(&return_type, Context::CallbackReturn, &mut site);
                let arguments =
                    self.resolve_arguments(arguments, Context::CallbackArgument, &mut site);
                UserDefinedType::CallbackFunction(CallbackFunction::new(
                    declaration,
                    return_type,
                    arguments,
                ))
            }
            FragmentBody::Dictionary { inherited, members } => {
                let inherited = inherited.and_then(|parent| {
                    self.resolve_definition(
                        parent,
                        Kind::Dictionary,
                        Context::Inheritance,
                        &mut site,
                    )
                });
                let members = members
                    .into_iter()
                    .map(|member| self.resolve_dictionary_member(member, &mut site))
                    .collect();
                UserDefinedType::Dictionary(Dictionary::new(declaration, inherited, members))
            }
            FragmentBody::Enumeration { values } => {
                UserDefinedType::Enumeration(Enumeration::new(declaration, values))
            }
            FragmentBody::Typedef { idl_type } => {
                let idl_type = self.resolve_type(&idl_type, Context::TypedefTarget, &mut site);
                UserDefinedType::Typedef(Typedef::new(declaration, idl_type))
            }
        };
        (definition, site.errors)
    }

    fn resolve_members(
        &self,
        members: Vec<Member<RawType>>,
        site: &mut Site<'_>,
    ) -> Vec<Member<IdlType>> {
        members
            .into_iter()
            .map(|member| self.resolve_member(member, site))
            .collect()
    }

    fn resolve_member(&self, member: Member<RawType>, site: &mut Site<'_>) -> Member<IdlType> {
        match member {
            Member::Attribute(attribute) => Member::Attribute(Attribute {
                idl_type: self.resolve_type(
                    &attribute.idl_type,
                    Context::Attribute(attribute.identifier),
                    site,
                ),
                identifier: attribute.identifier,
                qualifiers: attribute.qualifiers,
                extended_attributes: attribute.extended_attributes,
                debug_info: attribute.debug_info,
                origin: attribute.origin,
            }),
            Member::Operation(operation) => {
                let name = operation.identifier;
                Member::Operation(Operation {
                    return_type: self.resolve_type(
                        &operation.return_type,
                        Context::OperationReturn(name),
                        site,
                    ),
                    arguments: self.resolve_arguments(
                        operation.arguments,
                        |argument| Context::OperationArgument {
                            operation: name,
                            argument,
                        },
                        site,
                    ),
                    identifier: name,
                    qualifiers: operation.qualifiers,
                    extended_attributes: operation.extended_attributes,
                    debug_info: operation.debug_info,
                    origin: operation.origin,
                })
            }
            Member::Constant(constant) => Member::Constant(Constant {
                idl_type: self.resolve_type(
                    &constant.idl_type,
                    Context::Constant(constant.identifier),
                    site,
                ),
                identifier: constant.identifier,
                value: constant.value,
                extended_attributes: constant.extended_attributes,
                debug_info: constant.debug_info,
                origin: constant.origin,
            }),
            Member::Constructor(constructor) => Member::Constructor(Constructor {
                arguments: self.resolve_arguments(
                    constructor.arguments,
                    Context::ConstructorArgument,
                    site,
                ),
                extended_attributes: constructor.extended_attributes,
                debug_info: constructor.debug_info,
                origin: constructor.origin,
            }),
        }
    }

    fn resolve_arguments(
        &self,
        arguments: Vec<Argument<RawType>>,
        context: impl Fn(Identifier) -> Context,
        site: &mut Site<'_>,
    ) -> Vec<Argument<IdlType>> {
        arguments
            .into_iter()
            .map(|argument| Argument {
                idl_type: self.resolve_type(&argument.idl_type, context(argument.identifier), site),
                identifier: argument.identifier,
                is_optional: argument.is_optional,
                is_variadic: argument.is_variadic,
                default_value: argument.default_value,
                extended_attributes: argument.extended_attributes,
            })
            .collect()
    }

    fn resolve_dictionary_member(
        &self,
        member: DictionaryMember<RawType>,
        site: &mut Site<'_>,
    ) -> DictionaryMember<IdlType> {
        DictionaryMember {
            idl_type: self.resolve_type(
                &member.idl_type,
                Context::DictionaryMember(member.identifier),
                site,
            ),
            identifier: member.identifier,
            is_required: member.is_required,
            default_value: member.default_value,
            extended_attributes: member.extended_attributes,
            debug_info: member.debug_info,
            origin: member.origin,
        }
    }

    /// Resolve a type expression. Unresolvable names become `any` after
    /// being reported; a run with errors never builds a model.
    fn resolve_type(&self, raw: &RawType, context: Context, site: &mut Site<'_>) -> IdlType {
        ensure_sufficient_stack(|| match raw {
            RawType::Named(name) => self.resolve_name(*name, context, site),
            RawType::Nullable(inner) => {
                IdlType::Nullable(Box::new(self.resolve_type(inner, context, site)))
            }
            RawType::Sequence(inner) => {
                IdlType::Sequence(Box::new(self.resolve_type(inner, context, site)))
            }
            RawType::FrozenArray(inner) => {
                IdlType::FrozenArray(Box::new(self.resolve_type(inner, context, site)))
            }
            RawType::ObservableArray(inner) => {
                IdlType::ObservableArray(Box::new(self.resolve_type(inner, context, site)))
            }
            RawType::Record { key, value } => IdlType::Record {
                key: Box::new(self.resolve_type(key, context, site)),
                value: Box::new(self.resolve_type(value, context, site)),
            },
            RawType::Promise(inner) => {
                IdlType::Promise(Box::new(self.resolve_type(inner, context, site)))
            }
            RawType::Union(members) => IdlType::Union(
                members
                    .iter()
                    .map(|member| self.resolve_type(member, context, site))
                    .collect(),
            ),
        })
    }

    fn resolve_name(&self, name: Identifier, context: Context, site: &mut Site<'_>) -> IdlType {
        let spelling = self.interner.lookup(name);
        if let Some(builtin) = BuiltinType::from_name(spelling) {
            return IdlType::Builtin(builtin);
        }
        if let Some(known) = self.known.get(&name) {
            return IdlType::Reference(TypeHandle::new(name, known.def));
        }
        if !self.failed.contains(&name) {
            site.unresolved(spelling, context, self.interner);
        }
        IdlType::Builtin(BuiltinType::Any)
    }

    /// Resolve a reference that must name a definition of `expected` kind.
    fn resolve_definition(
        &self,
        name: Identifier,
        expected: Kind,
        context: Context,
        site: &mut Site<'_>,
    ) -> Option<TypeHandle> {
        match self.known.get(&name) {
            Some(known) if known.kind == expected => Some(TypeHandle::new(name, known.def)),
            Some(known) => {
                site.errors.push(IdlError::InvalidReference {
                    identifier: site.identifier,
                    name: site.name.to_string(),
                    referenced: self.interner.lookup(name).to_string(),
                    context: context.describe(self.interner),
                    expected,
                    found: known.kind,
                    debug_info: site.debug_info.clone(),
                });
                None
            }
            None => {
                if !self.failed.contains(&name) {
                    site.unresolved(self.interner.lookup(name), context, self.interner);
                }
                None
            }
        }
    }
}
