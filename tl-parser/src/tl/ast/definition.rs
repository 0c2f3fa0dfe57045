//! Single declaration model
//!
//! A [`Definition`] is one constructor or function line of a TL schema. Its
//! [`Display`](fmt::Display) output is the canonical one-line rendering used
//! both for identification and for round-trip output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One constructor or RPC function declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub namespace: Vec<String>,
    pub name: String,
    pub id: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_params: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub base: bool,
    #[serde(rename = "type")]
    pub result: Type,
}

impl Definition {
    /// Namespace and name joined with dots, e.g. `messages.getHistory`.
    pub fn full_name(&self) -> String {
        join_path(&self.namespace, &self.name)
    }

    /// Canonical text of the declaration, without the terminating semicolon.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Look up a parameter by name.
    pub fn param(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name == name)
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{:x}", self.full_name(), self.id)?;
        for generic in &self.generic_params {
            write!(f, " {{{generic}:Type}}")?;
        }
        for param in &self.params {
            write!(f, " {param}")?;
        }
        if self.base {
            f.write_str(" ?")?;
        }
        write!(f, " = {}", self.result)
    }
}

/// Condition of a conditional field: bit `index` of the flags field `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    pub name: String,
    pub index: u32,
}

/// A named, typed field of a [`Definition`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Type of the field. Left at its default for a flags field.
    #[serde(rename = "type", default)]
    pub ty: Type,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<Flag>,
    /// `name:#`, a bit field gating conditional fields.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub flags: bool,
}

impl Parameter {
    /// `name:Type`
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Parameter {
            name: name.into(),
            ty,
            flag: None,
            flags: false,
        }
    }

    /// `name:#`
    pub fn flags_field(name: impl Into<String>) -> Self {
        Parameter {
            name: name.into(),
            ty: Type::default(),
            flag: None,
            flags: true,
        }
    }

    /// `name:flags.index?Type`
    pub fn conditional(name: impl Into<String>, flag: Flag, ty: Type) -> Self {
        Parameter {
            name: name.into(),
            ty,
            flag: Some(flag),
            flags: false,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flags {
            return write!(f, "{}:#", self.name);
        }
        write!(f, "{}:", self.name)?;
        if let Some(flag) = &self.flag {
            write!(f, "{}.{}?", flag.name, flag.index)?;
        }
        write!(f, "{}", self.ty)
    }
}

/// A type reference: `Name`, `ns.Name`, `%Name`, `!X` or `Vector<T>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub namespace: Vec<String>,
    pub name: String,
    /// `%Name`: explicitly bare.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub percent: bool,
    /// `!X`: reference to a generic parameter.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub generic_ref: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_arg: Option<Box<Type>>,
}

impl Type {
    pub fn named(name: impl Into<String>) -> Self {
        Type {
            name: name.into(),
            ..Type::default()
        }
    }

    /// `Vector<elem>`
    pub fn vector(elem: Type) -> Self {
        Type {
            name: "Vector".to_string(),
            generic_arg: Some(Box::new(elem)),
            ..Type::default()
        }
    }

    /// Bare types start with a lowercase letter or carry the `%` marker.
    pub fn is_bare(&self) -> bool {
        self.percent || self.name.chars().next().is_some_and(|c| c.is_lowercase())
    }

    pub fn full_name(&self) -> String {
        join_path(&self.namespace, &self.name)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.generic_ref {
            f.write_str("!")?;
        }
        if self.percent {
            f.write_str("%")?;
        }
        f.write_str(&self.full_name())?;
        if let Some(arg) = &self.generic_arg {
            write!(f, "<{arg}>")?;
        }
        Ok(())
    }
}

fn join_path(namespace: &[String], name: &str) -> String {
    let mut out = String::new();
    for ns in namespace {
        out.push_str(ns);
        out.push('.');
    }
    out.push_str(name);
    out
}
