//! Constructor id derivation
//!
//! A constructor id is the IEEE CRC32 of the declaration written without its
//! `#id`, with generic parameters unbraced, `Vector<T>` as `Vector T`, `bytes`
//! as `string`, and conditional `true` fields left out.

use crate::tl::ast::{Definition, Type};

/// Text the constructor id is derived from.
pub fn checksum_text(def: &Definition) -> String {
    let mut out = def.full_name();
    for generic in &def.generic_params {
        out.push(' ');
        out.push_str(generic);
        out.push_str(":Type");
    }
    for param in &def.params {
        if param.flag.is_some() && param.ty.namespace.is_empty() && param.ty.name == "true" {
            continue;
        }
        out.push(' ');
        out.push_str(&param.name);
        out.push(':');
        if param.flags {
            out.push('#');
            continue;
        }
        if let Some(flag) = &param.flag {
            out.push_str(&format!("{}.{}?", flag.name, flag.index));
        }
        push_type(&mut out, &param.ty);
    }
    if def.base {
        out.push_str(" ?");
    }
    out.push_str(" = ");
    push_type(&mut out, &def.result);
    out
}

/// CRC32 of [`checksum_text`].
pub fn compute_id(def: &Definition) -> u32 {
    crc32fast::hash(checksum_text(def).as_bytes())
}

fn push_type(out: &mut String, ty: &Type) {
    if ty.generic_ref {
        out.push('!');
    }
    if ty.percent {
        out.push('%');
    }
    if ty.namespace.is_empty() && ty.name == "bytes" {
        out.push_str("string");
    } else {
        out.push_str(&ty.full_name());
    }
    if let Some(arg) = &ty.generic_arg {
        out.push(' ');
        push_type(out, arg);
    }
}
