//! Kinds of user-defined Web IDL definitions.

use std::fmt;

/// The fixed category of an IDL definition.
///
/// A fragment's kind is derived from its body, so it is fixed at creation.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Kind {
    Interface,
    InterfaceMixin,
    Namespace,
    CallbackInterface,
    CallbackFunction,
    Dictionary,
    Enumeration,
    Typedef,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 8] = [
        Kind::Interface,
        Kind::InterfaceMixin,
        Kind::Namespace,
        Kind::CallbackInterface,
        Kind::CallbackFunction,
        Kind::Dictionary,
        Kind::Enumeration,
        Kind::Typedef,
    ];

    /// The IDL keyword spelling of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Interface => "interface",
            Kind::InterfaceMixin => "interface mixin",
            Kind::Namespace => "namespace",
            Kind::CallbackInterface => "callback interface",
            Kind::CallbackFunction => "callback function",
            Kind::Dictionary => "dictionary",
            Kind::Enumeration => "enumeration",
            Kind::Typedef => "typedef",
        }
    }

    /// Whether `partial` definitions of this kind exist.
    pub const fn supports_partial(self) -> bool {
        matches!(
            self,
            Kind::Interface | Kind::InterfaceMixin | Kind::Namespace | Kind::Dictionary
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
