//! Protocol Buffers generator
//!
//! Every constructor and function becomes a `TL_<name>` message whose fields
//! follow the TL parameters. Each result type gets one wrapper message,
//! emitted before the first definition returning it, with a comment listing
//! every definition that returns it and a `oneof` over its constructors.
//!
//! TL primitives map onto proto scalars (`int` → `int32`, `long` → `int64`,
//! `Bool` → `bool`, `int128`/`int256` → `bytes`, ...), `Vector<T>` onto
//! `repeated`, conditional fields onto `optional`. Field numbers start at a
//! configurable offset.

use super::registry::{FormatError, Formatter};
use crate::tl::ast::{Category, Parameter, Schema, Type};
use std::collections::{HashMap, HashSet};
use std::fmt::Write;

pub struct ProtoFormatter {
    pub package: String,
    /// Number of the first field of every definition message.
    pub field_offset: u32,
    pub syntax: String,
}

impl Default for ProtoFormatter {
    fn default() -> Self {
        ProtoFormatter {
            package: "tl".to_string(),
            field_offset: 3,
            syntax: "proto3".to_string(),
        }
    }
}

impl Formatter for ProtoFormatter {
    fn name(&self) -> &str {
        "proto"
    }

    fn serialize(&self, schema: &Schema) -> Result<String, FormatError> {
        self.generate(schema)
    }

    fn description(&self) -> &str {
        "Protocol Buffers messages, one per definition"
    }
}

impl ProtoFormatter {
    fn generate(&self, schema: &Schema) -> Result<String, FormatError> {
        let usage = type_usage(schema);
        let mut emitted: HashSet<String> = HashSet::new();

        let mut out = String::new();
        writeln!(out, "syntax = \"{}\";", self.syntax).map_err(serialization)?;
        writeln!(out).map_err(serialization)?;
        if !self.package.is_empty() {
            writeln!(out, "package {};", self.package).map_err(serialization)?;
            writeln!(out).map_err(serialization)?;
        }

        for d in &schema.definitions {
            let def = &d.definition;
            let type_name = def.result.full_name();
            if emitted.insert(type_name.clone()) {
                let used_by = usage.get(&type_name).map(Vec::as_slice).unwrap_or_default();
                write_type(&mut out, &def.result, used_by).map_err(serialization)?;
            }

            writeln!(out, "// {def}").map_err(serialization)?;
            writeln!(out, "// int32(crc32): {}", def.id as i32).map_err(serialization)?;
            writeln!(out, "message TL_{} {{", ident(&def.namespace, &def.name))
                .map_err(serialization)?;
            for (i, param) in def.params.iter().enumerate() {
                let number = u32::try_from(i)
                    .ok()
                    .and_then(|i| self.field_offset.checked_add(i))
                    .ok_or_else(|| {
                        FormatError::SerializationError(format!(
                            "field number of {}.{} overflows (offset {})",
                            def.full_name(),
                            param.name,
                            self.field_offset
                        ))
                    })?;
                writeln!(out, "  {} {} = {};", field_type(param), param.name, number)
                    .map_err(serialization)?;
            }
            writeln!(out, "}}").map_err(serialization)?;
            writeln!(out).map_err(serialization)?;
        }
        Ok(out)
    }
}

/// Wrapper message of a result type. The `oneof` only lists constructors;
/// a type that only functions return gets an empty message.
fn write_type(out: &mut String, ty: &Type, used_by: &[Usage]) -> std::fmt::Result {
    let names: Vec<&str> = used_by.iter().map(|u| u.name.as_str()).collect();
    writeln!(out, "// {}: {}", ty.full_name(), names.join(", "))?;
    writeln!(out, "message {} {{", ident(&ty.namespace, &ty.name))?;
    let constructors: Vec<&Usage> = used_by
        .iter()
        .filter(|u| u.category == Category::Type)
        .collect();
    if !constructors.is_empty() {
        writeln!(out, "  oneof value {{")?;
        for (i, constructor) in constructors.iter().enumerate() {
            let field = constructor.name.replace('.', "_");
            writeln!(out, "    TL_{field} {field} = {};", i + 1)?;
        }
        writeln!(out, "  }}")?;
    }
    writeln!(out, "}}")?;
    writeln!(out)
}

fn serialization(e: std::fmt::Error) -> FormatError {
    FormatError::SerializationError(e.to_string())
}

struct Usage {
    name: String,
    category: Category,
}

/// Definitions returning each result type, in declaration order.
fn type_usage(schema: &Schema) -> HashMap<String, Vec<Usage>> {
    let mut usage: HashMap<String, Vec<Usage>> = HashMap::new();
    for d in &schema.definitions {
        usage
            .entry(d.definition.result.full_name())
            .or_default()
            .push(Usage {
                name: d.definition.full_name(),
                category: d.category,
            });
    }
    usage
}

fn ident(namespace: &[String], name: &str) -> String {
    let mut parts: Vec<&str> = namespace.iter().map(String::as_str).collect();
    parts.push(name);
    parts.join("_")
}

fn field_type(param: &Parameter) -> String {
    if param.flags {
        return "uint32".to_string();
    }
    let optional = param.flag.is_some();
    if optional && param.ty.namespace.is_empty() && param.ty.name == "true" {
        return "bool".to_string();
    }
    if let Some(elem) = vector_element(&param.ty) {
        let elem = if vector_element(elem).is_some() {
            "bytes".to_string()
        } else {
            scalar(elem)
        };
        return format!("repeated {elem}");
    }
    if optional {
        format!("optional {}", scalar(&param.ty))
    } else {
        scalar(&param.ty)
    }
}

fn vector_element(ty: &Type) -> Option<&Type> {
    if ty.namespace.is_empty() && ty.name.eq_ignore_ascii_case("vector") {
        ty.generic_arg.as_deref()
    } else {
        None
    }
}

fn scalar(ty: &Type) -> String {
    if ty.generic_ref {
        return "bytes".to_string();
    }
    if ty.namespace.is_empty() {
        let mapped = match ty.name.as_str() {
            "int" | "Int" => Some("int32"),
            "long" | "Long" => Some("int64"),
            "double" | "Double" => Some("double"),
            "string" | "String" => Some("string"),
            "bytes" | "Bytes" | "int128" | "Int128" | "int256" | "Int256" => Some("bytes"),
            "Bool" | "bool" | "true" | "True" => Some("bool"),
            _ => None,
        };
        if let Some(mapped) = mapped {
            return mapped.to_string();
        }
    }
    if ty.is_bare() {
        format!("TL_{}", ident(&ty.namespace, &ty.name))
    } else {
        ident(&ty.namespace, &ty.name)
    }
}
