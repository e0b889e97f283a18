//! Frozen, resolved definitions: one closed variant per kind.
//!
//! Fields are private and nothing hands out `&mut`, so a definition can only
//! be read once the resolver has built it.

use webidl_ir::{
    Argument, Attribute, CodeGeneratorInfo, ComponentTag, Constant, Constructor, DebugInfo,
    DictionaryMember, ExtendedAttributes, GeneratorOverride, Identifier, IdlType, Kind, Member,
    Operation, TypeHandle, WithCodeGeneratorInfo, WithComponent, WithDebugInfo,
    WithExtendedAttributes, WithIdentifier,
};

/// Metadata every definition carries, whatever its kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    identifier: Identifier,
    extended_attributes: ExtendedAttributes,
    code_generator_info: CodeGeneratorInfo,
    overrides: Vec<GeneratorOverride>,
    components: Vec<ComponentTag>,
    debug_info: DebugInfo,
}

impl Declaration {
    pub(crate) fn new(
        identifier: Identifier,
        extended_attributes: ExtendedAttributes,
        code_generator_info: CodeGeneratorInfo,
        overrides: Vec<GeneratorOverride>,
        components: Vec<ComponentTag>,
        debug_info: DebugInfo,
    ) -> Self {
        Declaration {
            identifier,
            extended_attributes,
            code_generator_info,
            overrides,
            components,
            debug_info,
        }
    }

    /// Generator hints replaced by later fragments during merge.
    pub fn overrides(&self) -> &[GeneratorOverride] {
        &self.overrides
    }
}

impl WithIdentifier for Declaration {
    fn identifier(&self) -> Identifier {
        self.identifier
    }
}

impl WithExtendedAttributes for Declaration {
    fn extended_attributes(&self) -> &ExtendedAttributes {
        &self.extended_attributes
    }
}

impl WithCodeGeneratorInfo for Declaration {
    fn code_generator_info(&self) -> &CodeGeneratorInfo {
        &self.code_generator_info
    }
}

impl WithComponent for Declaration {
    fn components(&self) -> &[ComponentTag] {
        &self.components
    }
}

impl WithDebugInfo for Declaration {
    fn debug_info(&self) -> &DebugInfo {
        &self.debug_info
    }
}

/// Implements `declaration()` and the capability traits by delegating to the
/// `declaration` field.
macro_rules! impl_declaration {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $ty {
                pub fn declaration(&self) -> &Declaration {
                    &self.declaration
                }
            }

            impl WithIdentifier for $ty {
                fn identifier(&self) -> Identifier {
                    self.declaration.identifier
                }
            }

            impl WithExtendedAttributes for $ty {
                fn extended_attributes(&self) -> &ExtendedAttributes {
                    &self.declaration.extended_attributes
                }
            }

            impl WithCodeGeneratorInfo for $ty {
                fn code_generator_info(&self) -> &CodeGeneratorInfo {
                    &self.declaration.code_generator_info
                }
            }

            impl WithComponent for $ty {
                fn components(&self) -> &[ComponentTag] {
                    &self.declaration.components
                }
            }

            impl WithDebugInfo for $ty {
                fn debug_info(&self) -> &DebugInfo {
                    &self.declaration.debug_info
                }
            }
        )*
    };
}

impl_declaration!(
    Interface,
    InterfaceMixin,
    Namespace,
    CallbackInterface,
    CallbackFunction,
    Dictionary,
    Enumeration,
    Typedef,
);

fn attributes_of(members: &[Member<IdlType>]) -> impl Iterator<Item = &Attribute<IdlType>> {
    members.iter().filter_map(|member| match member {
        Member::Attribute(attribute) => Some(attribute),
        _ => None,
    })
}

fn operations_of(members: &[Member<IdlType>]) -> impl Iterator<Item = &Operation<IdlType>> {
    members.iter().filter_map(|member| match member {
        Member::Operation(operation) => Some(operation),
        _ => None,
    })
}

fn constants_of(members: &[Member<IdlType>]) -> impl Iterator<Item = &Constant<IdlType>> {
    members.iter().filter_map(|member| match member {
        Member::Constant(constant) => Some(constant),
        _ => None,
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interface {
    declaration: Declaration,
    inherited: Option<TypeHandle>,
    included_mixins: Vec<TypeHandle>,
    members: Vec<Member<IdlType>>,
}

impl Interface {
    pub(crate) fn new(
        declaration: Declaration,
        inherited: Option<TypeHandle>,
        included_mixins: Vec<TypeHandle>,
        members: Vec<Member<IdlType>>,
    ) -> Self {
        Interface {
            declaration,
            inherited,
            included_mixins,
            members,
        }
    }

    /// The parent interface, if any.
    pub fn inherited(&self) -> Option<TypeHandle> {
        self.inherited
    }

    /// Mixins named by `includes` statements, without duplicates.
    pub fn included_mixins(&self) -> &[TypeHandle] {
        &self.included_mixins
    }

    /// Own members in merge order. Mixin members are not copied in.
    pub fn members(&self) -> &[Member<IdlType>] {
        &self.members
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute<IdlType>> {
        attributes_of(&self.members)
    }

    pub fn operations(&self) -> impl Iterator<Item = &Operation<IdlType>> {
        operations_of(&self.members)
    }

    pub fn constants(&self) -> impl Iterator<Item = &Constant<IdlType>> {
        constants_of(&self.members)
    }

    pub fn constructors(&self) -> impl Iterator<Item = &Constructor<IdlType>> {
        self.members.iter().filter_map(|member| match member {
            Member::Constructor(constructor) => Some(constructor),
            _ => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceMixin {
    declaration: Declaration,
    members: Vec<Member<IdlType>>,
}

impl InterfaceMixin {
    pub(crate) fn new(declaration: Declaration, members: Vec<Member<IdlType>>) -> Self {
        InterfaceMixin {
            declaration,
            members,
        }
    }

    pub fn members(&self) -> &[Member<IdlType>] {
        &self.members
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute<IdlType>> {
        attributes_of(&self.members)
    }

    pub fn operations(&self) -> impl Iterator<Item = &Operation<IdlType>> {
        operations_of(&self.members)
    }

    pub fn constants(&self) -> impl Iterator<Item = &Constant<IdlType>> {
        constants_of(&self.members)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespace {
    declaration: Declaration,
    members: Vec<Member<IdlType>>,
}

impl Namespace {
    pub(crate) fn new(declaration: Declaration, members: Vec<Member<IdlType>>) -> Self {
        Namespace {
            declaration,
            members,
        }
    }

    pub fn members(&self) -> &[Member<IdlType>] {
        &self.members
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute<IdlType>> {
        attributes_of(&self.members)
    }

    pub fn operations(&self) -> impl Iterator<Item = &Operation<IdlType>> {
        operations_of(&self.members)
    }

    pub fn constants(&self) -> impl Iterator<Item = &Constant<IdlType>> {
        constants_of(&self.members)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackInterface {
    declaration: Declaration,
    members: Vec<Member<IdlType>>,
}

impl CallbackInterface {
    pub(crate) fn new(declaration: Declaration, members: Vec<Member<IdlType>>) -> Self {
        CallbackInterface {
            declaration,
            members,
        }
    }

    pub fn members(&self) -> &[Member<IdlType>] {
        &self.members
    }

    pub fn operations(&self) -> impl Iterator<Item = &Operation<IdlType>> {
        operations_of(&self.members)
    }

    pub fn constants(&self) -> impl Iterator<Item = &Constant<IdlType>> {
        constants_of(&self.members)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackFunction {
    declaration: Declaration,
    return_type: IdlType,
    arguments: Vec<Argument<IdlType>>,
}

impl CallbackFunction {
    pub(crate) fn new(
        declaration: Declaration,
        return_type: IdlType,
        arguments: Vec<Argument<IdlType>>,
    ) -> Self {
        CallbackFunction {
            declaration,
            return_type,
            arguments,
        }
    }

    pub fn return_type(&self) -> &IdlType {
        &self.return_type
    }

    pub fn arguments(&self) -> &[Argument<IdlType>] {
        &self.arguments
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dictionary {
    declaration: Declaration,
    inherited: Option<TypeHandle>,
    members: Vec<DictionaryMember<IdlType>>,
}

impl Dictionary {
    pub(crate) fn new(
        declaration: Declaration,
        inherited: Option<TypeHandle>,
        members: Vec<DictionaryMember<IdlType>>,
    ) -> Self {
        Dictionary {
            declaration,
            inherited,
            members,
        }
    }

    pub fn inherited(&self) -> Option<TypeHandle> {
        self.inherited
    }

    /// Own members in merge order; inherited members are not copied in.
    pub fn members(&self) -> &[DictionaryMember<IdlType>] {
        &self.members
    }

    pub fn required_members(&self) -> impl Iterator<Item = &DictionaryMember<IdlType>> {
        self.members.iter().filter(|member| member.is_required)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enumeration {
    declaration: Declaration,
    values: Vec<String>,
}

impl Enumeration {
    pub(crate) fn new(declaration: Declaration, values: Vec<String>) -> Self {
        Enumeration {
            declaration,
            values,
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typedef {
    declaration: Declaration,
    idl_type: IdlType,
}

impl Typedef {
    pub(crate) fn new(declaration: Declaration, idl_type: IdlType) -> Self {
        Typedef {
            declaration,
            idl_type,
        }
    }

    /// The aliased type.
    pub fn idl_type(&self) -> &IdlType {
        &self.idl_type
    }
}

/// A frozen user-defined type.
///
/// Matching on the variants is the exhaustive way to handle every kind. The
/// `is_*` predicates are cheap; the `as_*` downcasts panic when called on the
/// wrong kind, since that is a bug in the caller, not in the IDL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserDefinedType {
    Interface(Interface),
    InterfaceMixin(InterfaceMixin),
    Namespace(Namespace),
    CallbackInterface(CallbackInterface),
    CallbackFunction(CallbackFunction),
    Dictionary(Dictionary),
    Enumeration(Enumeration),
    Typedef(Typedef),
}

/// Generates the `is_*` predicate and `as_*` downcast for each variant.
macro_rules! kind_accessors {
    ($($variant:ident => $is:ident, $as:ident;)*) => {
        $(
            #[inline]
            pub fn $is(&self) -> bool {
                matches!(self, UserDefinedType::$variant(_))
            }

            /// # Panics
            ///
            #[doc = concat!("Panics unless this is a `", stringify!($variant), "`.")]
            #[track_caller]
            pub fn $as(&self) -> &$variant {
                match self {
                    UserDefinedType::$variant(definition) => definition,
                    other => panic!(
                        concat!("`", stringify!($as), "` called on {} `{:?}`"),
                        other.kind(),
                        other.identifier(),
                    ),
                }
            }
        )*
    };
}

impl UserDefinedType {
    pub fn kind(&self) -> Kind {
        match self {
            UserDefinedType::Interface(_) => Kind::Interface,
            UserDefinedType::InterfaceMixin(_) => Kind::InterfaceMixin,
            UserDefinedType::Namespace(_) => Kind::Namespace,
            UserDefinedType::CallbackInterface(_) => Kind::CallbackInterface,
            UserDefinedType::CallbackFunction(_) => Kind::CallbackFunction,
            UserDefinedType::Dictionary(_) => Kind::Dictionary,
            UserDefinedType::Enumeration(_) => Kind::Enumeration,
            UserDefinedType::Typedef(_) => Kind::Typedef,
        }
    }

    pub fn declaration(&self) -> &Declaration {
        match self {
            UserDefinedType::Interface(d) => &d.declaration,
            UserDefinedType::InterfaceMixin(d) => &d.declaration,
            UserDefinedType::Namespace(d) => &d.declaration,
            UserDefinedType::CallbackInterface(d) => &d.declaration,
            UserDefinedType::CallbackFunction(d) => &d.declaration,
            UserDefinedType::Dictionary(d) => &d.declaration,
            UserDefinedType::Enumeration(d) => &d.declaration,
            UserDefinedType::Typedef(d) => &d.declaration,
        }
    }

    kind_accessors! {
        Interface => is_interface, as_interface;
        InterfaceMixin => is_interface_mixin, as_interface_mixin;
        Namespace => is_namespace, as_namespace;
        CallbackInterface => is_callback_interface, as_callback_interface;
        CallbackFunction => is_callback_function, as_callback_function;
        Dictionary => is_dictionary, as_dictionary;
        Enumeration => is_enumeration, as_enumeration;
        Typedef => is_typedef, as_typedef;
    }
}

impl WithIdentifier for UserDefinedType {
    fn identifier(&self) -> Identifier {
        self.declaration().identifier
    }
}

impl WithExtendedAttributes for UserDefinedType {
    fn extended_attributes(&self) -> &ExtendedAttributes {
        &self.declaration().extended_attributes
    }
}

impl WithCodeGeneratorInfo for UserDefinedType {
    fn code_generator_info(&self) -> &CodeGeneratorInfo {
        &self.declaration().code_generator_info
    }
}

impl WithComponent for UserDefinedType {
    fn components(&self) -> &[ComponentTag] {
        &self.declaration().components
    }
}

impl WithDebugInfo for UserDefinedType {
    fn debug_info(&self) -> &DebugInfo {
        &self.declaration().debug_info
    }
}
