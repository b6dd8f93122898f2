//! Layout and codec planning for raw records.

use std::collections::HashSet;

use quote::ToTokens;
use syn::ext::IdentExt;
use syn::{ItemStruct, Visibility};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{RawType, Strategy, TypeInfo};

/// Everything the emitter needs to render one raw record.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub raw_name: String,
    pub exported_name: String,
    pub fields: Vec<FieldPlan>,
    /// Size of the fixed body in bytes.
    pub size: usize,
}

#[derive(Debug, Clone)]
pub struct FieldPlan {
    /// Field name as written, including any `r#` prefix.
    pub name: String,
    /// Field name without the `r#` prefix, used to derive new identifiers.
    pub base_name: String,
    pub ty: &'static TypeInfo,
    pub offset: usize,
}

impl FieldPlan {
    pub fn strategy(&self) -> Strategy {
        self.ty.strategy
    }

    pub fn end(&self) -> usize {
        self.offset + self.ty.size
    }
}

impl GenerationPlan {
    pub fn has_strings(&self) -> bool {
        self.fields
            .iter()
            .any(|f| f.strategy() == Strategy::StringRegion)
    }
}

/// Plans an eligible struct.
///
/// Fails if the struct is already exported (uppercase name or any `pub`
/// visibility), if no distinct exported name can be derived, or if a field
/// type is missing from the type table.
pub fn plan(item: &ItemStruct, config: &Config) -> Result<GenerationPlan> {
    let raw_name = item.ident.to_string();

    if is_exported(item) {
        return Err(Error::ExportedRawType { name: raw_name });
    }

    let exported_name = export_name(&item.ident.unraw().to_string());
    if exported_name == raw_name || exported_name.is_empty() {
        return Err(Error::UnexportableName { name: raw_name });
    }

    let mut fields = Vec::new();
    let mut cursor: usize = 0;
    let mut max_align: usize = 1;

    for field in &item.fields {
        let ident = field.ident.as_ref().ok_or_else(|| Error::UnnamedField {
            record: raw_name.clone(),
        })?;

        let ty = RawType::resolve(&field.ty, &config.library)
            .and_then(RawType::info)
            .ok_or_else(|| Error::InvalidRawType {
                record: raw_name.clone(),
                field: ident.to_string(),
                ty: field.ty.to_token_stream().to_string(),
            })?;

        let offset = cursor.next_multiple_of(ty.align);
        cursor = offset + ty.size;
        max_align = max_align.max(ty.align);

        fields.push(FieldPlan {
            name: ident.to_string(),
            base_name: ident.unraw().to_string(),
            ty,
            offset,
        });
    }

    check_accessors(&raw_name, &fields)?;

    Ok(GenerationPlan {
        raw_name,
        exported_name,
        fields,
        size: cursor.next_multiple_of(max_align),
    })
}

/// Members the emitter adds to the raw record besides field accessors.
const RESERVED_MEMBERS: &[&str] = &["SIZE", "write_fixed", "read_fixed"];

/// Accessors share the raw record's inherent namespace with the emitter's
/// own members, so every generated name must be unique.
fn check_accessors(record: &str, fields: &[FieldPlan]) -> Result<()> {
    let mut taken: HashSet<String> = RESERVED_MEMBERS.iter().map(|m| m.to_string()).collect();

    for field in fields {
        let mut names = vec![field.base_name.clone()];
        if field.strategy() == Strategy::StringRegion {
            names.push(format!("{}_bytes", field.base_name));
        }
        for name in names {
            if !taken.insert(name.clone()) {
                return Err(Error::AccessorConflict {
                    record: record.to_string(),
                    name,
                });
            }
        }
    }

    Ok(())
}

fn is_exported(item: &ItemStruct) -> bool {
    !matches!(item.vis, Visibility::Inherited)
        || item
            .ident
            .unraw()
            .to_string()
            .starts_with(|c: char| c.is_uppercase())
}

/// Upper-cases the first character: `point` -> `Point`.
pub fn export_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
