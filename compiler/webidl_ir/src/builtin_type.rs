//! Built-in Web IDL types.
//!
//! Type names that match an entry here never need resolution. Everything else
//! must name a user-defined definition.

/// The fixed table of built-in types.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum BuiltinType {
    Any,
    Undefined,
    /// Legacy spelling of `undefined` in return position.
    Void,
    Boolean,

    // Integer types
    Byte,
    Octet,
    Short,
    UnsignedShort,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,

    // Floating point types
    Float,
    UnrestrictedFloat,
    Double,
    UnrestrictedDouble,

    Bigint,

    // String types
    DomString,
    ByteString,
    UsvString,

    Object,
    Symbol,

    // Buffer source types
    ArrayBuffer,
    SharedArrayBuffer,
    DataView,
    Int8Array,
    Int16Array,
    Int32Array,
    Uint8Array,
    Uint16Array,
    Uint32Array,
    Uint8ClampedArray,
    BigInt64Array,
    BigUint64Array,
    Float32Array,
    Float64Array,
    ArrayBufferView,
    BufferSource,
}

impl BuiltinType {
    /// Every built-in type, in table order.
    pub const ALL: [BuiltinType; 38] = [
        Self::Any,
        Self::Undefined,
        Self::Void,
        Self::Boolean,
        Self::Byte,
        Self::Octet,
        Self::Short,
        Self::UnsignedShort,
        Self::Long,
        Self::UnsignedLong,
        Self::LongLong,
        Self::UnsignedLongLong,
        Self::Float,
        Self::UnrestrictedFloat,
        Self::Double,
        Self::UnrestrictedDouble,
        Self::Bigint,
        Self::DomString,
        Self::ByteString,
        Self::UsvString,
        Self::Object,
        Self::Symbol,
        Self::ArrayBuffer,
        Self::SharedArrayBuffer,
        Self::DataView,
        Self::Int8Array,
        Self::Int16Array,
        Self::Int32Array,
        Self::Uint8Array,
        Self::Uint16Array,
        Self::Uint32Array,
        Self::Uint8ClampedArray,
        Self::BigInt64Array,
        Self::BigUint64Array,
        Self::Float32Array,
        Self::Float64Array,
        Self::ArrayBufferView,
        Self::BufferSource,
    ];

    /// Look up a built-in by its IDL spelling.
    ///
    /// Multi-word spellings use single spaces (`unsigned long long`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    /// The IDL spelling.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Undefined => "undefined",
            Self::Void => "void",
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Octet => "octet",
            Self::Short => "short",
            Self::UnsignedShort => "unsigned short",
            Self::Long => "long",
            Self::UnsignedLong => "unsigned long",
            Self::LongLong => "long long",
            Self::UnsignedLongLong => "unsigned long long",
            Self::Float => "float",
            Self::UnrestrictedFloat => "unrestricted float",
            Self::Double => "double",
            Self::UnrestrictedDouble => "unrestricted double",
            Self::Bigint => "bigint",
            Self::DomString => "DOMString",
            Self::ByteString => "ByteString",
            Self::UsvString => "USVString",
            Self::Object => "object",
            Self::Symbol => "symbol",
            Self::ArrayBuffer => "ArrayBuffer",
            Self::SharedArrayBuffer => "SharedArrayBuffer",
            Self::DataView => "DataView",
            Self::Int8Array => "Int8Array",
            Self::Int16Array => "Int16Array",
            Self::Int32Array => "Int32Array",
            Self::Uint8Array => "Uint8Array",
            Self::Uint16Array => "Uint16Array",
            Self::Uint32Array => "Uint32Array",
            Self::Uint8ClampedArray => "Uint8ClampedArray",
            Self::BigInt64Array => "BigInt64Array",
            Self::BigUint64Array => "BigUint64Array",
            Self::Float32Array => "Float32Array",
            Self::Float64Array => "Float64Array",
            Self::ArrayBufferView => "ArrayBufferView",
            Self::BufferSource => "BufferSource",
        }
    }

    /// Check if this is an integer type.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Byte
                | Self::Octet
                | Self::Short
                | Self::UnsignedShort
                | Self::Long
                | Self::UnsignedLong
                | Self::LongLong
                | Self::UnsignedLongLong
        )
    }

    /// Check if this is a numeric type (integer, floating point or bigint).
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.is_integer()
            || matches!(
                self,
                Self::Float
                    | Self::UnrestrictedFloat
                    | Self::Double
                    | Self::UnrestrictedDouble
                    | Self::Bigint
            )
    }

    /// Check if this is a string type.
    #[must_use]
    pub const fn is_string(self) -> bool {
        matches!(self, Self::DomString | Self::ByteString | Self::UsvString)
    }

    /// Check if this is a buffer source type.
    #[must_use]
    pub const fn is_buffer_source(self) -> bool {
        matches!(
            self,
            Self::ArrayBuffer
                | Self::SharedArrayBuffer
                | Self::DataView
                | Self::Int8Array
                | Self::Int16Array
                | Self::Int32Array
                | Self::Uint8Array
                | Self::Uint16Array
                | Self::Uint32Array
                | Self::Uint8ClampedArray
                | Self::BigInt64Array
                | Self::BigUint64Array
                | Self::Float32Array
                | Self::Float64Array
                | Self::ArrayBufferView
                | Self::BufferSource
        )
    }
}

impl std::fmt::Display for BuiltinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
