//! Members of interfaces, mixins, namespaces, callback interfaces and
//! dictionaries, plus operation arguments.
//!
//! Every definition here is generic over its type representation: the parser
//! builds `Member<RawType>`, the resolver produces `Member<IdlType>`.

use bitflags::bitflags;

use crate::{ComponentTag, DebugInfo, ExtendedAttributes, Identifier};

bitflags! {
    /// Keyword qualifiers on attributes and operations.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Qualifiers: u8 {
        const STATIC = 1 << 0;
        const READONLY = 1 << 1;
        /// `inherit attribute`
        const INHERIT = 1 << 2;
        const STRINGIFIER = 1 << 3;
        const GETTER = 1 << 4;
        const SETTER = 1 << 5;
        const DELETER = 1 << 6;

        /// Any special operation keyword.
        const SPECIAL = Self::GETTER.bits() | Self::SETTER.bits() | Self::DELETER.bits();
    }
}

/// A default or constant value, kept as source text.
///
/// Values are never evaluated here; the generator interprets them.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Literal(String);

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Literal(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Where a member came from. Stamped by the merge engine.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Origin {
    pub component: ComponentTag,
    /// Declared in a `partial` definition.
    pub is_partial: bool,
}

/// An operation, constructor or callback function argument.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Argument<T> {
    pub identifier: Identifier,
    pub idl_type: T,
    pub is_optional: bool,
    pub is_variadic: bool,
    pub default_value: Option<Literal>,
    pub extended_attributes: ExtendedAttributes,
}

impl<T> Argument<T> {
    pub fn new(identifier: Identifier, idl_type: T) -> Self {
        Argument {
            identifier,
            idl_type,
            is_optional: false,
            is_variadic: false,
            default_value: None,
            extended_attributes: ExtendedAttributes::default(),
        }
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    #[must_use]
    pub fn variadic(mut self) -> Self {
        self.is_variadic = true;
        self
    }

    /// Optional argument with a default value.
    #[must_use]
    pub fn with_default(mut self, value: Literal) -> Self {
        self.is_optional = true;
        self.default_value = Some(value);
        self
    }

    #[must_use]
    pub fn with_extended_attributes(mut self, attributes: ExtendedAttributes) -> Self {
        self.extended_attributes = attributes;
        self
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Attribute<T> {
    pub identifier: Identifier,
    pub idl_type: T,
    pub qualifiers: Qualifiers,
    pub extended_attributes: ExtendedAttributes,
    pub debug_info: DebugInfo,
    pub origin: Origin,
}

impl<T> Attribute<T> {
    pub fn new(identifier: Identifier, idl_type: T) -> Self {
        Attribute {
            identifier,
            idl_type,
            qualifiers: Qualifiers::empty(),
            extended_attributes: ExtendedAttributes::default(),
            debug_info: DebugInfo::default(),
            origin: Origin::default(),
        }
    }

    pub fn is_readonly(&self) -> bool {
        self.qualifiers.contains(Qualifiers::READONLY)
    }

    pub fn is_static(&self) -> bool {
        self.qualifiers.contains(Qualifiers::STATIC)
    }
}

/// A regular, static or special operation.
///
/// Anonymous special operations (`getter any (unsigned long index)`) use
/// [`Identifier::EMPTY`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Operation<T> {
    pub identifier: Identifier,
    pub return_type: T,
    pub arguments: Vec<Argument<T>>,
    pub qualifiers: Qualifiers,
    pub extended_attributes: ExtendedAttributes,
    pub debug_info: DebugInfo,
    pub origin: Origin,
}

impl<T> Operation<T> {
    pub fn new(identifier: Identifier, return_type: T, arguments: Vec<Argument<T>>) -> Self {
        Operation {
            identifier,
            return_type,
            arguments,
            qualifiers: Qualifiers::empty(),
            extended_attributes: ExtendedAttributes::default(),
            debug_info: DebugInfo::default(),
            origin: Origin::default(),
        }
    }

    pub fn is_static(&self) -> bool {
        self.qualifiers.contains(Qualifiers::STATIC)
    }

    pub fn is_special(&self) -> bool {
        self.qualifiers.intersects(Qualifiers::SPECIAL)
    }

    pub fn is_anonymous(&self) -> bool {
        self.identifier.is_empty()
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Constant<T> {
    pub identifier: Identifier,
    pub idl_type: T,
    pub value: Literal,
    pub extended_attributes: ExtendedAttributes,
    pub debug_info: DebugInfo,
    pub origin: Origin,
}

impl<T> Constant<T> {
    pub fn new(identifier: Identifier, idl_type: T, value: Literal) -> Self {
        Constant {
            identifier,
            idl_type,
            value,
            extended_attributes: ExtendedAttributes::default(),
            debug_info: DebugInfo::default(),
            origin: Origin::default(),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Constructor<T> {
    pub arguments: Vec<Argument<T>>,
    pub extended_attributes: ExtendedAttributes,
    pub debug_info: DebugInfo,
    pub origin: Origin,
}

impl<T> Constructor<T> {
    pub fn new(arguments: Vec<Argument<T>>) -> Self {
        Constructor {
            arguments,
            extended_attributes: ExtendedAttributes::default(),
            debug_info: DebugInfo::default(),
            origin: Origin::default(),
        }
    }
}

/// A member of an interface, mixin, namespace or callback interface.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Member<T> {
    Attribute(Attribute<T>),
    Operation(Operation<T>),
    Constant(Constant<T>),
    Constructor(Constructor<T>),
}

impl<T> Member<T> {
    /// The member name; `None` for constructors.
    pub fn identifier(&self) -> Option<Identifier> {
        match self {
            Member::Attribute(attribute) => Some(attribute.identifier),
            Member::Operation(operation) => Some(operation.identifier),
            Member::Constant(constant) => Some(constant.identifier),
            Member::Constructor(_) => None,
        }
    }

    /// Short description used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            Member::Attribute(_) => "attribute",
            Member::Operation(_) => "operation",
            Member::Constant(_) => "constant",
            Member::Constructor(_) => "constructor",
        }
    }

    pub fn origin(&self) -> Origin {
        match self {
            Member::Attribute(attribute) => attribute.origin,
            Member::Operation(operation) => operation.origin,
            Member::Constant(constant) => constant.origin,
            Member::Constructor(constructor) => constructor.origin,
        }
    }

    #[must_use]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        match &mut self {
            Member::Attribute(attribute) => attribute.origin = origin,
            Member::Operation(operation) => operation.origin = origin,
            Member::Constant(constant) => constant.origin = origin,
            Member::Constructor(constructor) => constructor.origin = origin,
        }
        self
    }
}

impl<T> From<Attribute<T>> for Member<T> {
    fn from(attribute: Attribute<T>) -> Self {
        Member::Attribute(attribute)
    }
}

impl<T> From<Operation<T>> for Member<T> {
    fn from(operation: Operation<T>) -> Self {
        Member::Operation(operation)
    }
}

impl<T> From<Constant<T>> for Member<T> {
    fn from(constant: Constant<T>) -> Self {
        Member::Constant(constant)
    }
}

impl<T> From<Constructor<T>> for Member<T> {
    fn from(constructor: Constructor<T>) -> Self {
        Member::Constructor(constructor)
    }
}

/// A dictionary member.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DictionaryMember<T> {
    pub identifier: Identifier,
    pub idl_type: T,
    pub is_required: bool,
    pub default_value: Option<Literal>,
    pub extended_attributes: ExtendedAttributes,
    pub debug_info: DebugInfo,
    pub origin: Origin,
}

impl<T> DictionaryMember<T> {
    pub fn new(identifier: Identifier, idl_type: T) -> Self {
        DictionaryMember {
            identifier,
            idl_type,
            is_required: false,
            default_value: None,
            extended_attributes: ExtendedAttributes::default(),
            debug_info: DebugInfo::default(),
            origin: Origin::default(),
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: Literal) -> Self {
        self.default_value = Some(value);
        self
    }
}
