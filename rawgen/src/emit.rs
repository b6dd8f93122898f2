//! Renders a [`GenerationPlan`] as Rust source.
//!
//! For a raw record `point` the output is, in order:
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, PartialEq)]
//! pub struct Point {
//!     pub x: i64,
//!     pub y: i64,
//! }
//!
//! impl Point {
//!     pub fn encode(&self) -> Result<Vec<u8>, raw::Error> { /* ... */ }
//!     pub fn decode(b: &[u8]) -> Result<Self, raw::Error> { /* ... */ }
//! }
//!
//! impl point {
//!     pub const SIZE: usize = 8;
//!     fn write_fixed(&self, b: &mut [u8]) { /* ... */ }
//!     fn read_fixed(b: &[u8]) -> Result<Self, raw::Error> { /* ... */ }
//!     pub fn x(&self) -> i64 { self.x as i64 }
//!     pub fn y(&self) -> i64 { self.y as i64 }
//! }
//! ```
//!
//! The text is deterministic so regenerating an unchanged file reproduces it
//! byte for byte.

use crate::config::Config;
use crate::plan::{FieldPlan, GenerationPlan};
use crate::types::Strategy;

/// Renders all pieces for one record, without a trailing newline.
pub fn emit(plan: &GenerationPlan, config: &Config) -> String {
    let emitter = RecordEmitter::new(plan, &config.library);
    [
        emitter.generate_exported_type(),
        emitter.generate_codec_impl(),
        emitter.generate_raw_impl(),
    ]
    .join("\n\n")
}

pub(crate) struct RecordEmitter<'a> {
    plan: &'a GenerationPlan,
    lib: &'a str,
}

impl<'a> RecordEmitter<'a> {
    pub(crate) fn new(plan: &'a GenerationPlan, lib: &'a str) -> Self {
        Self { plan, lib }
    }

    fn result(&self, ok: &str) -> String {
        format!("::std::result::Result<{}, {}::Error>", ok, self.lib)
    }

    pub(crate) fn generate_exported_type(&self) -> String {
        let fields: Vec<String> = self
            .plan
            .fields
            .iter()
            .map(|f| format!("    pub {}: {},", f.name, f.ty.external(self.lib)))
            .collect();

        format!(
            "#[derive(Debug, Clone, PartialEq)]\npub struct {} {{\n{}\n}}",
            self.plan.exported_name,
            fields.join("\n")
        )
    }

    pub(crate) fn generate_codec_impl(&self) -> String {
        let raw = &self.plan.raw_name;
        let exported = &self.plan.exported_name;
        let lib = self.lib;

        let mut slots = Vec::new();
        let mut string_encodes = Vec::new();
        for f in &self.plan.fields {
            slots.push(format!(
                "            {}: {},",
                f.name,
                self.encode_expr(f)
            ));
            if f.strategy() == Strategy::StringRegion {
                string_encodes.push(format!(
                    "        r.{name}.encode(&self.{name}, &mut b)?;\n",
                    name = f.name
                ));
            }
        }
        let binding = if string_encodes.is_empty() {
            "let r"
        } else {
            "let mut r"
        };

        let window = if self.plan.has_strings() {
            format!("        let window = {}::window(b);\n", lib)
        } else {
            String::new()
        };
        let values: Vec<String> = self
            .plan
            .fields
            .iter()
            .map(|f| format!("            {}: {},", f.name, self.decode_expr(f)))
            .collect();

        format!(
            r#"impl {exported} {{
    /// Encodes into the fixed `{raw}` body followed by any string bytes.
    pub fn encode(&self) -> {encode_result} {{
        let mut b = ::std::vec![0u8; {raw}::SIZE];
        {binding} = {raw} {{
{slots}
        }};
{string_encodes}        r.write_fixed(&mut b[..{raw}::SIZE]);
        Ok(b)
    }}

    pub fn decode(b: &[u8]) -> {decode_result} {{
        let r = {raw}::read_fixed(b)?;
{window}        Ok({exported} {{
{values}
        }})
    }}
}}"#,
            encode_result = self.result("::std::vec::Vec<u8>"),
            decode_result = self.result("Self"),
            slots = slots.join("\n"),
            string_encodes = string_encodes.concat(),
            values = values.join("\n"),
        )
    }

    pub(crate) fn generate_raw_impl(&self) -> String {
        let raw = &self.plan.raw_name;
        let lib = self.lib;

        let puts: Vec<String> = self
            .plan
            .fields
            .iter()
            .map(|f| {
                format!(
                    "        {}::Fixed::put(&self.{}, &mut b[{}..{}]);",
                    lib,
                    f.name,
                    f.offset,
                    f.end()
                )
            })
            .collect();
        let gets: Vec<String> = self
            .plan
            .fields
            .iter()
            .map(|f| {
                format!(
                    "            {}: {}::Fixed::get(&b[{}..{}]),",
                    f.name,
                    lib,
                    f.offset,
                    f.end()
                )
            })
            .collect();
        let accessors: Vec<String> = self
            .plan
            .fields
            .iter()
            .map(|f| self.generate_accessor(f))
            .collect();

        format!(
            r#"impl {raw} {{
    /// Size in bytes of the fixed body.
    pub const SIZE: usize = {size};

    fn write_fixed(&self, b: &mut [u8]) {{
{puts}
    }}

    fn read_fixed(b: &[u8]) -> {read_result} {{
        {lib}::check_len(b, Self::SIZE)?;
        Ok({raw} {{
{gets}
        }})
    }}

{accessors}
}}"#,
            size = self.plan.size,
            read_result = self.result("Self"),
            puts = puts.join("\n"),
            gets = gets.join("\n"),
            accessors = accessors.join("\n\n"),
        )
    }

    fn generate_accessor(&self, f: &FieldPlan) -> String {
        let name = &f.name;
        let external = f.ty.external(self.lib);

        let body = match f.strategy() {
            Strategy::Direct => format!("self.{}", name),
            Strategy::NumericCast => self.cast(&format!("self.{}", name), f),
            Strategy::TimeNanos => format!("self.{}.to_datetime()", name),
            Strategy::DurationCast => format!("self.{}.to_delta()", name),
            Strategy::StringRegion => {
                return format!(
                    r#"    pub fn {name}<'a>(&self, window: &'a [u8]) -> {str_result} {{
        self.{name}.string(window)
    }}

    pub fn {base}_bytes<'a>(&self, window: &'a [u8]) -> {bytes_result} {{
        self.{name}.bytes(window)
    }}"#,
                    base = f.base_name,
                    str_result = self.result("&'a str"),
                    bytes_result = self.result("&'a [u8]"),
                );
            }
        };

        format!(
            "    pub fn {}(&self) -> {} {{\n        {}\n    }}",
            name, external, body
        )
    }

    fn encode_expr(&self, f: &FieldPlan) -> String {
        let value = format!("self.{}", f.name);
        match f.strategy() {
            Strategy::Direct => value,
            Strategy::NumericCast => {
                let repr = f.ty.repr(self.lib);
                if repr == f.ty.external(self.lib) {
                    value
                } else {
                    format!("{} as {}", value, repr)
                }
            }
            Strategy::TimeNanos => format!("{}::Time::from_datetime(&{})?", self.lib, value),
            Strategy::DurationCast => format!("{}::Duration::from_delta(&{})?", self.lib, value),
            Strategy::StringRegion => format!("{}::String::default()", self.lib),
        }
    }

    fn decode_expr(&self, f: &FieldPlan) -> String {
        match f.strategy() {
            Strategy::StringRegion => format!("r.{}(window)?.to_owned()", f.name),
            _ => format!("r.{}()", f.name),
        }
    }

    /// Widens a slot value to its exported integer type, skipping identity
    /// casts.
    fn cast(&self, value: &str, f: &FieldPlan) -> String {
        let external = f.ty.external(self.lib);
        if f.ty.repr(self.lib) == external {
            value.to_string()
        } else {
            format!("{} as {}", value, external)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::plan;
    use syn::ItemStruct;

    fn emit_str(src: &str) -> String {
        let item: ItemStruct = syn::parse_str(src).unwrap();
        let config = Config::default();
        emit(&plan(&item, &config).unwrap(), &config)
    }

    #[test]
    fn test_point_exported_type() {
        let out = emit_str("struct point { x: i32, y: i32 }");
        assert!(
            out.starts_with(
                "#[derive(Debug, Clone, PartialEq)]\npub struct Point {\n    pub x: i64,\n    pub y: i64,\n}"
            ),
            "got:\n{}",
            out
        );
    }

    #[test]
    fn test_point_accessors_return_i64() {
        let out = emit_str("struct point { x: i32, y: i32 }");
        assert!(
            out.contains("    pub fn x(&self) -> i64 {\n        self.x as i64\n    }"),
            "got:\n{}",
            out
        );
        assert!(
            out.contains("    pub fn y(&self) -> i64 {\n        self.y as i64\n    }"),
            "got:\n{}",
            out
        );
    }

    #[test]
    fn test_point_codec() {
        let out = emit_str("struct point { x: i32, y: i32 }");
        assert!(out.contains("impl Point {"), "got:\n{}", out);
        assert!(out.contains(
            "    pub fn encode(&self) -> ::std::result::Result<::std::vec::Vec<u8>, raw::Error> {"
        ));
        assert!(out.contains("    pub fn decode(b: &[u8]) -> ::std::result::Result<Self, raw::Error> {"));
        assert!(out.contains("        let r = point {\n            x: self.x as i32,\n            y: self.y as i32,\n        };"));
        assert!(out.contains("        raw::Fixed::put(&self.x, &mut b[0..4]);"));
        assert!(out.contains("        raw::Fixed::put(&self.y, &mut b[4..8]);"));
        assert!(out.contains("            y: raw::Fixed::get(&b[4..8]),"));
        assert!(out.contains("    pub const SIZE: usize = 8;"));
        assert!(out.contains("        Ok(Point {\n            x: r.x(),\n            y: r.y(),\n        })"));
        assert!(!out.contains("window"));
    }

    #[test]
    fn test_piece_order() {
        let out = emit_str("struct point { x: i32 }");
        let ty = out.find("pub struct Point").unwrap();
        let codec = out.find("impl Point {").unwrap();
        let raw = out.find("impl point {").unwrap();
        assert!(ty < codec && codec < raw);
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn test_string_field() {
        let out = emit_str("struct rec { id: u32, name: raw::String }");

        assert!(out.contains("    pub name: ::std::string::String,"));
        assert!(out.contains("        let mut r = rec {"));
        assert!(out.contains("            name: raw::String::default(),"));
        assert!(out.contains("        r.name.encode(&self.name, &mut b)?;\n        r.write_fixed(&mut b[..rec::SIZE]);"));
        assert!(out.contains("        let window = raw::window(b);"));
        assert!(out.contains("            name: r.name(window)?.to_owned(),"));
        assert!(out.contains(
            "    pub fn name<'a>(&self, window: &'a [u8]) -> ::std::result::Result<&'a str, raw::Error> {\n        self.name.string(window)\n    }"
        ));
        assert!(out.contains(
            "    pub fn name_bytes<'a>(&self, window: &'a [u8]) -> ::std::result::Result<&'a [u8], raw::Error> {\n        self.name.bytes(window)\n    }"
        ));
    }

    #[test]
    fn test_strings_are_encoded_in_declaration_order() {
        let out = emit_str("struct rec { b: raw::String, n: u8, a: raw::String }");
        let first = out.find("r.b.encode(").unwrap();
        let second = out.find("r.a.encode(").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_time_and_duration() {
        let out = emit_str("struct rec { at: raw::Time, ttl: raw::Duration }");

        assert!(out.contains("    pub at: raw::chrono::DateTime<raw::chrono::Utc>,"));
        assert!(out.contains("    pub ttl: raw::chrono::TimeDelta,"));
        assert!(out.contains("            at: raw::Time::from_datetime(&self.at)?,"));
        assert!(out.contains("            ttl: raw::Duration::from_delta(&self.ttl)?,"));
        assert!(out.contains("        self.at.to_datetime()"));
        assert!(out.contains("        self.ttl.to_delta()"));
    }

    #[test]
    fn test_identity_casts_are_omitted() {
        let out = emit_str("struct rec { n: i64, u: u64, f: f32, ok: bool }");

        assert!(out.contains("            n: self.n,"));
        assert!(out.contains("            u: self.u,"));
        assert!(out.contains("    pub fn n(&self) -> i64 {\n        self.n\n    }"));
        assert!(out.contains("    pub fn f(&self) -> f32 {\n        self.f\n    }"));
        assert!(out.contains("    pub fn ok(&self) -> bool {\n        self.ok\n    }"));
        assert!(!out.contains(" as "));
    }

    #[test]
    fn test_raw_identifier_field() {
        let out = emit_str("struct rec { r#type: raw::String }");
        assert!(out.contains("    pub r#type: ::std::string::String,"));
        assert!(out.contains("    pub fn r#type<'a>("));
        assert!(out.contains("    pub fn type_bytes<'a>("));
    }

    #[test]
    fn test_configured_library_path() {
        let item: ItemStruct = syn::parse_str("struct rec { at: fixed::Time }").unwrap();
        let config = Config::default().with_library("fixed");
        let out = emit(&plan(&item, &config).unwrap(), &config);

        assert!(out.contains("    pub at: fixed::chrono::DateTime<fixed::chrono::Utc>,"));
        assert!(out.contains("fixed::check_len(b, Self::SIZE)?;"));
        assert!(!out.contains("raw::"));
    }

    #[test]
    fn test_output_parses_as_rust() {
        let out = emit_str(
            "struct rec { ok: bool, n: i16, at: raw::Time, ttl: raw::Duration, name: raw::String }",
        );
        syn::parse_file(&out).unwrap();
    }
}
