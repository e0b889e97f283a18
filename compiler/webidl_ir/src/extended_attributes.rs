//! Extended attributes (`[Exposed=Window, LegacyNoInterfaceObject]`).
//!
//! Attribute values are captured as written; their meaning belongs to the code
//! generator. A list is built once and has no mutating API, which is what keeps
//! frozen definitions immutable.

use std::fmt;

/// The value form of one extended attribute.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExtendedAttributeValue {
    /// `[Replaceable]`
    None,
    /// `[Exposed=Window]`
    Ident(String),
    /// `[Exposed=(Window,Worker)]`
    IdentList(Vec<String>),
    /// `[Constructor(DOMString type)]`, arguments kept as source text.
    Arguments(Vec<String>),
    /// `[LegacyFactoryFunction=Image(unsigned long width)]`
    NamedArguments { name: String, arguments: Vec<String> },
}

impl fmt::Display for ExtendedAttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtendedAttributeValue::None => Ok(()),
            ExtendedAttributeValue::Ident(ident) => write!(f, "={ident}"),
            ExtendedAttributeValue::IdentList(idents) => write!(f, "=({})", idents.join(",")),
            ExtendedAttributeValue::Arguments(args) => write!(f, "({})", args.join(", ")),
            ExtendedAttributeValue::NamedArguments { name, arguments } => {
                write!(f, "={name}({})", arguments.join(", "))
            }
        }
    }
}

/// One `key` or `key=value` entry.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExtendedAttribute {
    key: String,
    value: ExtendedAttributeValue,
}

impl ExtendedAttribute {
    pub fn new(key: impl Into<String>, value: ExtendedAttributeValue) -> Self {
        ExtendedAttribute {
            key: key.into(),
            value,
        }
    }

    /// A value-less attribute such as `[Replaceable]`.
    pub fn flag(key: impl Into<String>) -> Self {
        Self::new(key, ExtendedAttributeValue::None)
    }

    /// A `key=ident` attribute.
    pub fn ident(key: impl Into<String>, ident: impl Into<String>) -> Self {
        Self::new(key, ExtendedAttributeValue::Ident(ident.into()))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &ExtendedAttributeValue {
        &self.value
    }
}

impl fmt::Display for ExtendedAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.key, self.value)
    }
}

/// Ordered list of extended attributes.
///
/// Keys may repeat (repeatable attributes after a merge); [`get`] returns the
/// first entry, [`values_of`] all of them.
///
/// [`get`]: ExtendedAttributes::get
/// [`values_of`]: ExtendedAttributes::values_of
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ExtendedAttributes {
    entries: Vec<ExtendedAttribute>,
}

impl ExtendedAttributes {
    pub fn new(entries: Vec<ExtendedAttribute>) -> Self {
        ExtendedAttributes { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExtendedAttribute> {
        self.entries.iter()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }

    /// The first entry for `key`.
    pub fn get(&self, key: &str) -> Option<&ExtendedAttribute> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Every value recorded for `key`, in order.
    pub fn values_of<'a>(
        &'a self,
        key: &'a str,
    ) -> impl Iterator<Item = &'a ExtendedAttributeValue> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.key == key)
            .map(|entry| &entry.value)
    }
}

impl FromIterator<ExtendedAttribute> for ExtendedAttributes {
    fn from_iter<I: IntoIterator<Item = ExtendedAttribute>>(iter: I) -> Self {
        ExtendedAttributes {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ExtendedAttributes {
    type Item = &'a ExtendedAttribute;
    type IntoIter = std::slice::Iter<'a, ExtendedAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for ExtendedAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests;
