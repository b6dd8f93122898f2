//! Records generated at build time from `fixtures/` and compiled against
//! `raw`.

pub mod records {
    #![allow(dead_code, non_camel_case_types, unused_imports)]
    #![allow(clippy::single_component_path_imports)]

    include!(concat!(env!("OUT_DIR"), "/records.rs"));

}
