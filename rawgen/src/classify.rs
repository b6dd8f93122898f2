//! Decides which struct declarations are raw records.

use std::fmt;

use quote::ToTokens;
use syn::{Fields, ItemStruct};

use crate::config::Config;
use crate::types::RawType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Ineligible(Reason),
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

/// Why a struct was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    NotNamed,
    Generic,
    NoFields,
    UnsupportedField { field: String, ty: String },
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::NotNamed => write!(f, "not a struct with named fields"),
            Reason::Generic => write!(f, "generic"),
            Reason::NoFields => write!(f, "no fields"),
            Reason::UnsupportedField { field, ty } => {
                write!(f, "field {} has non-raw type {}", field, ty)
            }
        }
    }
}

/// Classifies a struct by the declared types of its fields.
///
/// Eligible means: named fields, no generics, at least one field, and every
/// field type resolves to a [`RawType`]. Visibility and naming are not
/// checked here; an eligible but exported struct is rejected by the planner.
pub fn classify(item: &ItemStruct, config: &Config) -> Eligibility {
    let Fields::Named(named) = &item.fields else {
        return Eligibility::Ineligible(Reason::NotNamed);
    };
    if !item.generics.params.is_empty() {
        return Eligibility::Ineligible(Reason::Generic);
    }
    if named.named.is_empty() {
        return Eligibility::Ineligible(Reason::NoFields);
    }

    for field in &named.named {
        if RawType::resolve(&field.ty, &config.library).is_none() {
            return Eligibility::Ineligible(Reason::UnsupportedField {
                field: field
                    .ident
                    .as_ref()
                    .map(|i| i.to_string())
                    .unwrap_or_default(),
                ty: field.ty.to_token_stream().to_string(),
            });
        }
    }

    Eligibility::Eligible
}
