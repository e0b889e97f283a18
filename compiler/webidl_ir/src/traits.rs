//! Capability traits shared by fragments, members and frozen definitions.
//!
//! Each trait provides one focused piece of cross-cutting metadata, so code
//! that only needs debug info does not depend on anything else.

use crate::{CodeGeneratorInfo, ComponentTag, DebugInfo, ExtendedAttributes, Identifier, Member};

/// Access to the identifier a definition is keyed by.
pub trait WithIdentifier {
    fn identifier(&self) -> Identifier;
}

/// Access to extended attributes.
pub trait WithExtendedAttributes {
    fn extended_attributes(&self) -> &ExtendedAttributes;
}

/// Access to code generator hints.
pub trait WithCodeGeneratorInfo {
    fn code_generator_info(&self) -> &CodeGeneratorInfo;
}

/// Access to the contributing build components.
pub trait WithComponent {
    /// Contributing components in first-seen order, without duplicates.
    fn components(&self) -> &[ComponentTag];
}

/// Access to source locations.
pub trait WithDebugInfo {
    fn debug_info(&self) -> &DebugInfo;
}

impl<T> WithExtendedAttributes for Member<T> {
    fn extended_attributes(&self) -> &ExtendedAttributes {
        match self {
            Member::Attribute(attribute) => &attribute.extended_attributes,
            Member::Operation(operation) => &operation.extended_attributes,
            Member::Constant(constant) => &constant.extended_attributes,
            Member::Constructor(constructor) => &constructor.extended_attributes,
        }
    }
}

impl<T> WithDebugInfo for Member<T> {
    fn debug_info(&self) -> &DebugInfo {
        match self {
            Member::Attribute(attribute) => &attribute.debug_info,
            Member::Operation(operation) => &operation.debug_info,
            Member::Constant(constant) => &constant.debug_info,
            Member::Constructor(constructor) => &constructor.debug_info,
        }
    }
}
