//! Schema model
//!
//! The result of parsing one TL document. Order of [`Schema::definitions`] is
//! meaningful: it drives section-header and class-prologue placement when the
//! schema is written back (see [`formats::tl`](crate::tl::formats::tl)).

use super::annotation::Annotation;
use super::definition::Definition;
use super::scope::ScopeTypeEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a definition was declared in the types or the functions section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Type,
    Function,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Type => "type",
            Category::Function => "function",
        })
    }
}

/// A [`Definition`] with its documentation, section and scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    #[serde(default, skip_serializing_if = "ScopeTypeEnum::is_empty")]
    pub scope: ScopeTypeEnum,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    pub definition: Definition,
    pub category: Category,
}

impl SchemaDefinition {
    /// First `description` annotation, if any.
    pub fn description(&self) -> Option<&str> {
        self.annotation(super::annotation::ANNOTATION_DESCRIPTION)
    }

    pub fn annotation(&self, name: &str) -> Option<&str> {
        self.annotations
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

/// A boxed type with one or more constructors, declared with
/// `//@class InputChatPhoto @description Describes input chat photo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    pub description: String,
}

/// A parsed TL document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<u32>,
    #[serde(default)]
    pub definitions: Vec<SchemaDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<Class>,
}

impl Schema {
    /// Definitions of the given category, in declaration order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &SchemaDefinition> {
        self.definitions
            .iter()
            .filter(move |d| d.category == category)
    }

    pub fn types(&self) -> impl Iterator<Item = &SchemaDefinition> {
        self.by_category(Category::Type)
    }

    pub fn functions(&self) -> impl Iterator<Item = &SchemaDefinition> {
        self.by_category(Category::Function)
    }

    /// First definition whose dotted name matches `name`.
    pub fn definition(&self, name: &str) -> Option<&SchemaDefinition> {
        self.definitions
            .iter()
            .find(|d| d.definition.full_name() == name)
    }

    /// First definition with the given constructor id.
    pub fn definition_by_id(&self, id: u32) -> Option<&SchemaDefinition> {
        self.definitions.iter().find(|d| d.definition.id == id)
    }

    /// First class registered under `name`.
    pub fn class(&self, name: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Definitions constructing (or returning) the given result type.
    pub fn constructors_of<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = &'a SchemaDefinition> + 'a {
        self.definitions
            .iter()
            .filter(move |d| d.definition.result.full_name() == type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tl::ast::Type;

    fn def(name: &str, id: u32, result: &str, category: Category) -> SchemaDefinition {
        SchemaDefinition {
            definition: Definition {
                name: name.to_string(),
                id,
                result: Type::named(result),
                ..Definition::default()
            },
            category,
            ..SchemaDefinition::default()
        }
    }

    #[test]
    fn test_queries() {
        let schema = Schema {
            layer: Some(3),
            definitions: vec![
                def("boolFalse", 0xbc799737, "Bool", Category::Type),
                def("boolTrue", 0x997275b5, "Bool", Category::Type),
                def("ping", 0x7abe77ec, "Pong", Category::Function),
            ],
            classes: vec![Class {
                name: "Bool".to_string(),
                description: "Boolean".to_string(),
            }],
        };

        assert_eq!(schema.types().count(), 2);
        assert_eq!(schema.functions().count(), 1);
        assert_eq!(schema.constructors_of("Bool").count(), 2);
        assert_eq!(
            schema.definition_by_id(0x7abe77ec).map(|d| d.category),
            Some(Category::Function)
        );
        assert!(schema.definition("boolTrue").is_some());
        assert_eq!(schema.class("Bool").map(|c| c.description.as_str()), Some("Boolean"));
        assert!(schema.class("Pong").is_none());
    }

    #[test]
    fn test_description_lookup() {
        let mut d = def("ping", 1, "Pong", Category::Function);
        d.annotations = vec![
            Annotation::new("ping_id", "Identifier"),
            Annotation::new("description", "Ping the server"),
        ];
        assert_eq!(d.description(), Some("Ping the server"));
        assert_eq!(d.annotation("ping_id"), Some("Identifier"));
    }
}
