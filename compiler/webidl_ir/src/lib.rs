//! Web IDL IR - identifier-keyed intermediate representation types.
//!
//! This crate contains the data the rest of the pipeline passes around:
//! - Identifiers interned by a sharded, thread-safe interner
//! - Declaration fragments as produced by the parser, one per source location
//! - Cross-cutting metadata carried by every definition: extended attributes,
//!   code generator hints, build component tags and source locations
//! - Type expressions, both raw (names) and resolved (builtins and handles)
//! - Members generic over their type representation
//!
//! # Design
//!
//! - **Intern names**: strings become `Identifier(u32)`, compared in O(1)
//! - **Handles, not pointers**: resolved references are `TypeHandle`s into an
//!   arena, so circular references need no shared ownership
//! - **Focused capability traits**: `WithIdentifier`, `WithExtendedAttributes`,
//!   `WithCodeGeneratorInfo`, `WithComponent`, `WithDebugInfo`

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod builtin_type;
mod code_generator_info;
mod component;
mod debug_info;
mod extended_attributes;
mod fragment;
mod identifier;
mod idl_type;
mod interner;
mod kind;
mod members;
mod traits;

pub use builtin_type::BuiltinType;
pub use code_generator_info::{CodeGeneratorInfo, GeneratorOverride};
pub use component::ComponentTag;
pub use debug_info::{DebugInfo, LineRange, LineRangeError, SourceLocation};
pub use extended_attributes::{ExtendedAttribute, ExtendedAttributeValue, ExtendedAttributes};
pub use fragment::{Fragment, FragmentBody};
pub use identifier::Identifier;
pub use idl_type::{DefId, IdlType, RawType, TypeHandle};
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use kind::Kind;
pub use members::{
    Argument, Attribute, Constant, Constructor, DictionaryMember, Literal, Member, Operation,
    Origin, Qualifiers,
};
pub use traits::{
    WithCodeGeneratorInfo, WithComponent, WithDebugInfo, WithExtendedAttributes, WithIdentifier,
};

// Handles are copied everywhere; keep them word-sized.
static_assert_size!(Identifier, 4);
static_assert_size!(DefId, 4);
static_assert_size!(TypeHandle, 8);
