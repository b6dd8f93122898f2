//! The closed set of raw field types.
//!
//! Every component that needs to know something about a field type (the
//! classifier, the planner and the emitter) reads it from [`TYPES`], so the
//! three can never disagree about what is supported.

use syn::{PathArguments, Type};

/// A primitive field type allowed in a raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Time,
    Duration,
    String,
}

/// How a field moves between its exported and in-record representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Same type on both sides.
    Direct,
    /// `as` cast between the declared width and `i64`/`u64`.
    NumericCast,
    /// `DateTime<Utc>` <-> nanoseconds since the epoch.
    TimeNanos,
    /// `TimeDelta` <-> signed nanoseconds.
    DurationCast,
    /// Descriptor in the fixed body, bytes in the trailing region.
    StringRegion,
}

/// One row of the type table.
#[derive(Debug)]
pub struct TypeInfo {
    pub tag: RawType,
    /// Spelling in source. Library types are written `<library>::<name>`.
    pub name: &'static str,
    pub qualified: bool,
    /// Type of the field on the exported struct. `$lib` stands for the
    /// library path.
    pub external: &'static str,
    pub strategy: Strategy,
    pub size: usize,
    pub align: usize,
}

const fn scalar(
    tag: RawType,
    name: &'static str,
    external: &'static str,
    strategy: Strategy,
    size: usize,
) -> TypeInfo {
    TypeInfo {
        tag,
        name,
        qualified: false,
        external,
        strategy,
        size,
        align: size,
    }
}

const fn library(
    tag: RawType,
    name: &'static str,
    external: &'static str,
    strategy: Strategy,
    size: usize,
    align: usize,
) -> TypeInfo {
    TypeInfo {
        tag,
        name,
        qualified: true,
        external,
        strategy,
        size,
        align,
    }
}

pub const TYPES: &[TypeInfo] = &[
    scalar(RawType::Bool, "bool", "bool", Strategy::Direct, 1),
    scalar(RawType::I8, "i8", "i64", Strategy::NumericCast, 1),
    scalar(RawType::I16, "i16", "i64", Strategy::NumericCast, 2),
    scalar(RawType::I32, "i32", "i64", Strategy::NumericCast, 4),
    scalar(RawType::I64, "i64", "i64", Strategy::NumericCast, 8),
    scalar(RawType::U8, "u8", "u64", Strategy::NumericCast, 1),
    scalar(RawType::U16, "u16", "u64", Strategy::NumericCast, 2),
    scalar(RawType::U32, "u32", "u64", Strategy::NumericCast, 4),
    scalar(RawType::U64, "u64", "u64", Strategy::NumericCast, 8),
    scalar(RawType::F32, "f32", "f32", Strategy::Direct, 4),
    scalar(RawType::F64, "f64", "f64", Strategy::Direct, 8),
    library(
        RawType::Time,
        "Time",
        "$lib::chrono::DateTime<$lib::chrono::Utc>",
        Strategy::TimeNanos,
        8,
        8,
    ),
    library(
        RawType::Duration,
        "Duration",
        "$lib::chrono::TimeDelta",
        Strategy::DurationCast,
        8,
        8,
    ),
    library(
        RawType::String,
        "String",
        "::std::string::String",
        Strategy::StringRegion,
        8,
        4,
    ),
];

impl RawType {
    /// Resolves a field's declared type by spelling alone.
    ///
    /// Scalars must be a bare single-segment path (`i32`); library types a
    /// two-segment path rooted at `library` (`raw::String`, `::raw::String`).
    /// Aliases and imports are not followed.
    pub fn resolve(ty: &Type, library: &str) -> Option<RawType> {
        let Type::Path(tp) = ty else {
            return None;
        };
        if tp.qself.is_some() {
            return None;
        }
        let segments = &tp.path.segments;
        if segments
            .iter()
            .any(|s| !matches!(s.arguments, PathArguments::None))
        {
            return None;
        }

        match segments.len() {
            1 if tp.path.leading_colon.is_none() => {
                let name = segments[0].ident.to_string();
                TYPES
                    .iter()
                    .find(|t| !t.qualified && t.name == name)
                    .map(|t| t.tag)
            }
            2 if segments[0].ident == library => {
                let name = segments[1].ident.to_string();
                TYPES
                    .iter()
                    .find(|t| t.qualified && t.name == name)
                    .map(|t| t.tag)
            }
            _ => None,
        }
    }

    pub fn info(self) -> Option<&'static TypeInfo> {
        TYPES.iter().find(|t| t.tag == self)
    }
}

impl TypeInfo {
    /// Type of the slot in the raw record, as written in generated code.
    pub fn repr(&self, library: &str) -> String {
        if self.qualified {
            format!("{}::{}", library, self.name)
        } else {
            self.name.to_string()
        }
    }

    pub fn external(&self, library: &str) -> String {
        self.external.replace("$lib", library)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(src: &str) -> Option<RawType> {
        let ty: Type = syn::parse_str(src).unwrap();
        RawType::resolve(&ty, "raw")
    }

    #[test]
    fn test_table_has_one_row_per_tag() {
        let tags = [
            RawType::Bool,
            RawType::I8,
            RawType::I16,
            RawType::I32,
            RawType::I64,
            RawType::U8,
            RawType::U16,
            RawType::U32,
            RawType::U64,
            RawType::F32,
            RawType::F64,
            RawType::Time,
            RawType::Duration,
            RawType::String,
        ];
        assert_eq!(TYPES.len(), tags.len());
        for tag in tags {
            assert_eq!(TYPES.iter().filter(|t| t.tag == tag).count(), 1, "{:?}", tag);
            assert_eq!(tag.info().map(|t| t.tag), Some(tag));
        }
    }

    #[test]
    fn test_resolve_scalars() {
        assert_eq!(resolve("bool"), Some(RawType::Bool));
        assert_eq!(resolve("i8"), Some(RawType::I8));
        assert_eq!(resolve("u64"), Some(RawType::U64));
        assert_eq!(resolve("f32"), Some(RawType::F32));
    }

    #[test]
    fn test_resolve_library_types() {
        assert_eq!(resolve("raw::Time"), Some(RawType::Time));
        assert_eq!(resolve("raw::Duration"), Some(RawType::Duration));
        assert_eq!(resolve("raw::String"), Some(RawType::String));
        assert_eq!(resolve("::raw::String"), Some(RawType::String));
    }

    #[test]
    fn test_resolve_rejects_everything_else() {
        assert_eq!(resolve("String"), None);
        assert_eq!(resolve("Time"), None);
        assert_eq!(resolve("isize"), None);
        assert_eq!(resolve("other::String"), None);
        assert_eq!(resolve("raw::i32"), None);
        assert_eq!(resolve("raw::String<u8>"), None);
        assert_eq!(resolve("a::raw::String"), None);
        assert_eq!(resolve("::i32"), None);
        assert_eq!(resolve("[u8; 4]"), None);
        assert_eq!(resolve("Option<i32>"), None);
        assert_eq!(resolve("&'static str"), None);
    }

    #[test]
    fn test_resolve_uses_configured_library() {
        let ty: Type = syn::parse_str("fixed::String").unwrap();
        assert_eq!(RawType::resolve(&ty, "fixed"), Some(RawType::String));
        assert_eq!(RawType::resolve(&ty, "raw"), None);
    }

    #[test]
    fn test_repr_and_external() {
        let time = RawType::Time.info().unwrap();
        assert_eq!(time.repr("raw"), "raw::Time");
        assert_eq!(
            time.external("raw"),
            "raw::chrono::DateTime<raw::chrono::Utc>"
        );

        let short = RawType::I16.info().unwrap();
        assert_eq!(short.repr("raw"), "i16");
        assert_eq!(short.external("raw"), "i64");
    }

    #[test]
    fn test_alignment_never_exceeds_size() {
        for t in TYPES {
            assert!(t.align <= t.size, "{:?}", t.tag);
            assert_eq!(t.size % t.align, 0, "{:?}", t.tag);
        }
    }
}
