//! Declaration fragments: one source location's contribution to one definition.
//!
//! The parser produces fragments; the registry collects them; the merge engine
//! combines every fragment sharing an identifier. A fragment's [`Kind`] is
//! derived from its body, so the two can never disagree.

use crate::{
    Argument, CodeGeneratorInfo, ComponentTag, DebugInfo, DictionaryMember, ExtendedAttributes,
    Identifier, Kind, Member, RawType, WithCodeGeneratorInfo, WithComponent, WithDebugInfo,
    WithExtendedAttributes, WithIdentifier,
};

/// Kind-specific raw contents of a fragment.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum FragmentBody {
    Interface {
        /// `interface A : Parent`
        inherited: Option<Identifier>,
        members: Vec<Member<RawType>>,
        /// Mixins named by `A includes M;` statements.
        includes: Vec<Identifier>,
    },
    InterfaceMixin {
        members: Vec<Member<RawType>>,
    },
    Namespace {
        members: Vec<Member<RawType>>,
    },
    CallbackInterface {
        members: Vec<Member<RawType>>,
    },
    CallbackFunction {
        return_type: RawType,
        arguments: Vec<Argument<RawType>>,
    },
    Dictionary {
        inherited: Option<Identifier>,
        members: Vec<DictionaryMember<RawType>>,
    },
    Enumeration {
        values: Vec<String>,
    },
    Typedef {
        idl_type: RawType,
    },
}

impl FragmentBody {
    pub const fn kind(&self) -> Kind {
        match self {
            FragmentBody::Interface { .. } => Kind::Interface,
            FragmentBody::InterfaceMixin { .. } => Kind::InterfaceMixin,
            FragmentBody::Namespace { .. } => Kind::Namespace,
            FragmentBody::CallbackInterface { .. } => Kind::CallbackInterface,
            FragmentBody::CallbackFunction { .. } => Kind::CallbackFunction,
            FragmentBody::Dictionary { .. } => Kind::Dictionary,
            FragmentBody::Enumeration { .. } => Kind::Enumeration,
            FragmentBody::Typedef { .. } => Kind::Typedef,
        }
    }

    /// An interface body with no parent and no includes.
    pub fn interface(members: Vec<Member<RawType>>) -> Self {
        FragmentBody::Interface {
            inherited: None,
            members,
            includes: Vec::new(),
        }
    }

    pub fn callback_function(return_type: RawType, arguments: Vec<Argument<RawType>>) -> Self {
        FragmentBody::CallbackFunction {
            return_type,
            arguments,
        }
    }

    pub fn dictionary(members: Vec<DictionaryMember<RawType>>) -> Self {
        FragmentBody::Dictionary {
            inherited: None,
            members,
        }
    }
}

/// One raw, possibly partial, contribution to a definition.
///
/// Built once by the parser with the `with_*` methods and never modified
/// afterwards.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Fragment {
    identifier: Identifier,
    body: FragmentBody,
    is_partial: bool,
    source_order: u32,
    component: ComponentTag,
    extended_attributes: ExtendedAttributes,
    code_generator_info: CodeGeneratorInfo,
    debug_info: DebugInfo,
}

impl Fragment {
    pub fn new(identifier: Identifier, body: FragmentBody) -> Self {
        Fragment {
            identifier,
            body,
            is_partial: false,
            source_order: 0,
            component: ComponentTag::UNSPECIFIED,
            extended_attributes: ExtendedAttributes::default(),
            code_generator_info: CodeGeneratorInfo::default(),
            debug_info: DebugInfo::default(),
        }
    }

    /// Mark as a `partial` definition.
    #[must_use]
    pub fn partial(mut self) -> Self {
        self.is_partial = true;
        self
    }

    /// Position of the source file in the orchestrator's input order.
    ///
    /// Fragments of one identifier are merged in this order, so it must come
    /// from a stable input list rather than from parse completion order.
    #[must_use]
    pub fn with_source_order(mut self, order: u32) -> Self {
        self.source_order = order;
        self
    }

    #[must_use]
    pub fn with_component(mut self, component: ComponentTag) -> Self {
        self.component = component;
        self
    }

    #[must_use]
    pub fn with_extended_attributes(mut self, attributes: ExtendedAttributes) -> Self {
        self.extended_attributes = attributes;
        self
    }

    #[must_use]
    pub fn with_code_generator_info(mut self, info: CodeGeneratorInfo) -> Self {
        self.code_generator_info = info;
        self
    }

    #[must_use]
    pub fn with_debug_info(mut self, debug_info: DebugInfo) -> Self {
        self.debug_info = debug_info;
        self
    }

    pub fn kind(&self) -> Kind {
        self.body.kind()
    }

    pub fn is_partial(&self) -> bool {
        self.is_partial
    }

    pub fn source_order(&self) -> u32 {
        self.source_order
    }

    pub fn component(&self) -> ComponentTag {
        self.component
    }

    pub fn body(&self) -> &FragmentBody {
        &self.body
    }

    /// Consume the fragment, keeping only its body.
    pub fn into_body(self) -> FragmentBody {
        self.body
    }
}

impl WithIdentifier for Fragment {
    fn identifier(&self) -> Identifier {
        self.identifier
    }
}

impl WithExtendedAttributes for Fragment {
    fn extended_attributes(&self) -> &ExtendedAttributes {
        &self.extended_attributes
    }
}

impl WithCodeGeneratorInfo for Fragment {
    fn code_generator_info(&self) -> &CodeGeneratorInfo {
        &self.code_generator_info
    }
}

impl WithComponent for Fragment {
    fn components(&self) -> &[ComponentTag] {
        std::slice::from_ref(&self.component)
    }
}

impl WithDebugInfo for Fragment {
    fn debug_info(&self) -> &DebugInfo {
        &self.debug_info
    }
}
