//! Rendering of the metadata modules read by the registry.

use std::fmt::{self, Write};

const HEADER: &str = "// Code generated - DO NOT EDIT.
// This file is a generated binding and any manual changes will be lost.
";

/// Everything the registry knows about a contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Metadata {
    pub(crate) name: String,
    pub(crate) storage_layout_json: String,
    pub(crate) deployed_bin: String,
    pub(crate) deployed_source_map: Option<String>,
    pub(crate) has_immutable_references: bool,
}

/// Name of the bindings module of a contract.
pub(crate) fn bindings_module(contract: &str) -> String {
    contract.to_lowercase()
}

/// Name of the metadata module of a contract.
pub(crate) fn metadata_module(contract: &str) -> String {
    format!("{}_more", contract.to_lowercase())
}

/// Render `<name>_more.rs`.
///
/// # Arguments
///
/// * `metadata`: The contract metadata
/// * `registry_path`: Rust path of the module defining `ContractMetadata`
pub(crate) fn render_metadata(metadata: &Metadata, registry_path: &str) -> String {
    let mut out = String::new();

    write_metadata(&mut out, metadata, registry_path)
        .expect("writing into a String does not fail; qed");

    out
}

/// Render the `mod.rs` of the metadata directory.
///
/// # Arguments
///
/// * `contracts`: Contracts that got a metadata module
/// * `bindings`: Contracts whose bindings module lives in the same directory
/// * `registry_path`: Rust path of the module defining `ContractMetadata`
pub(crate) fn render_registry(
    contracts: &[String],
    bindings: &[String],
    registry_path: &str,
) -> String {
    let mut modules: Vec<String> = contracts.iter().map(|c| metadata_module(c)).collect();
    modules.sort();
    modules.dedup();

    let mut bindings: Vec<String> = bindings.iter().map(|c| bindings_module(c)).collect();
    bindings.sort();
    bindings.dedup();

    let mut out = String::new();

    write_registry(&mut out, &modules, &bindings, registry_path)
        .expect("writing into a String does not fail; qed");

    out
}

fn write_metadata(out: &mut impl Write, metadata: &Metadata, registry_path: &str) -> fmt::Result {
    writeln!(out, "{HEADER}")?;
    writeln!(out, "use {registry_path}::ContractMetadata;\n")?;
    writeln!(
        out,
        "const STORAGE_LAYOUT_JSON: &str = {};\n",
        raw_string(&metadata.storage_layout_json)
    )?;
    writeln!(out, "const DEPLOYED_BIN: &str = {:?};\n", metadata.deployed_bin)?;

    if let Some(source_map) = &metadata.deployed_source_map {
        writeln!(out, "const DEPLOYED_SOURCE_MAP: &str = {source_map:?};\n")?;
    }

    let source_map = match metadata.deployed_source_map {
        Some(_) => "Some(DEPLOYED_SOURCE_MAP)",
        None => "None",
    };

    writeln!(out, "/// Metadata of the `{}` contract.", metadata.name)?;
    writeln!(out, "pub const METADATA: ContractMetadata = ContractMetadata {{")?;
    writeln!(out, "    name: {:?},", metadata.name)?;
    writeln!(out, "    storage_layout_json: STORAGE_LAYOUT_JSON,")?;
    writeln!(out, "    deployed_bin: DEPLOYED_BIN,")?;
    writeln!(out, "    deployed_source_map: {source_map},")?;
    writeln!(
        out,
        "    has_immutable_references: {},",
        metadata.has_immutable_references
    )?;
    writeln!(out, "}};")
}

// `modules` and `bindings` are sorted module names.
fn write_registry(
    out: &mut impl Write,
    modules: &[String],
    bindings: &[String],
    registry_path: &str,
) -> fmt::Result {
    writeln!(out, "{HEADER}")?;
    writeln!(out, "use {registry_path}::ContractMetadata;\n")?;

    if !bindings.is_empty() {
        for module in bindings {
            writeln!(out, "pub mod {module};")?;
        }
        writeln!(out)?;
    }

    for module in modules {
        writeln!(out, "mod {module};")?;
    }

    writeln!(out, "\n/// Metadata of every generated contract.")?;
    writeln!(out, "pub const CONTRACTS: &[ContractMetadata] = &[")?;
    for module in modules {
        writeln!(out, "    {module}::METADATA,")?;
    }
    writeln!(out, "];")
}

// A raw string literal with enough `#` to hold `s` verbatim.
fn raw_string(s: &str) -> String {
    let mut hashes = 1;
    while s.contains(&format!("\"{}", "#".repeat(hashes))) {
        hashes += 1;
    }

    let hashes = "#".repeat(hashes);

    format!("r{hashes}\"{s}\"{hashes}")
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use pretty_assertions::assert_eq;

    use super::{
        raw_string, render_metadata, render_registry, write_metadata, write_registry, Metadata,
    };

    // Accepts `capacity` bytes, then fails.
    struct Bounded {
        capacity: usize,
    }

    impl fmt::Write for Bounded {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.capacity = self.capacity.checked_sub(s.len()).ok_or(fmt::Error)?;
            Ok(())
        }
    }

    fn metadata(source_map: Option<&str>) -> Metadata {
        Metadata {
            name: "SystemConfig".to_string(),
            storage_layout_json: r#"{"storage":[],"types":{}}"#.to_string(),
            deployed_bin: "0x6080".to_string(),
            deployed_source_map: source_map.map(str::to_string),
            has_immutable_references: false,
        }
    }

    #[test]
    fn metadata_module() {
        let rendered = render_metadata(&metadata(None), "crate::registry");

        assert_eq!(
            rendered,
            r##"// Code generated - DO NOT EDIT.
// This file is a generated binding and any manual changes will be lost.

use crate::registry::ContractMetadata;

const STORAGE_LAYOUT_JSON: &str = r#"{"storage":[],"types":{}}"#;

const DEPLOYED_BIN: &str = "0x6080";

/// Metadata of the `SystemConfig` contract.
pub const METADATA: ContractMetadata = ContractMetadata {
    name: "SystemConfig",
    storage_layout_json: STORAGE_LAYOUT_JSON,
    deployed_bin: DEPLOYED_BIN,
    deployed_source_map: None,
    has_immutable_references: false,
};
"##
        );
    }

    #[test]
    fn metadata_with_source_map() {
        let rendered = render_metadata(&metadata(Some("1:2:3:-:0")), "bindings::registry");

        assert!(rendered.contains("use bindings::registry::ContractMetadata;"));
        assert!(rendered.contains("const DEPLOYED_SOURCE_MAP: &str = \"1:2:3:-:0\";"));
        assert!(rendered.contains("deployed_source_map: Some(DEPLOYED_SOURCE_MAP),"));
    }

    #[test]
    fn registry_module_is_sorted() {
        let rendered = render_registry(
            &[
                "SystemConfig".to_string(),
                "L1CrossDomainMessenger".to_string(),
                "SystemConfig".to_string(),
            ],
            &[],
            "crate::registry",
        );

        assert_eq!(
            rendered,
            "// Code generated - DO NOT EDIT.
// This file is a generated binding and any manual changes will be lost.

use crate::registry::ContractMetadata;

mod l1crossdomainmessenger_more;
mod systemconfig_more;

/// Metadata of every generated contract.
pub const CONTRACTS: &[ContractMetadata] = &[
    l1crossdomainmessenger_more::METADATA,
    systemconfig_more::METADATA,
];
"
        );
    }

    #[test]
    fn registry_declares_bindings() {
        let rendered = render_registry(
            &["StorageSetter".to_string()],
            &["StorageSetter".to_string()],
            "crate::registry",
        );

        assert!(rendered.contains("pub mod storagesetter;\n\nmod storagesetter_more;"));
    }

    #[test]
    fn write_errors_are_returned() {
        let mut out = Bounded { capacity: 16 };
        assert_eq!(
            write_metadata(&mut out, &metadata(None), "crate::registry"),
            Err(fmt::Error)
        );

        let mut out = Bounded { capacity: 16 };
        assert_eq!(
            write_registry(&mut out, &["systemconfig_more".to_string()], &[], "crate::registry"),
            Err(fmt::Error)
        );

        let mut out = Bounded { capacity: 4096 };
        assert_eq!(
            write_metadata(&mut out, &metadata(None), "crate::registry"),
            Ok(())
        );
    }

    #[test]
    fn raw_strings() {
        assert_eq!(raw_string("abc"), "r#\"abc\"#");
        assert_eq!(raw_string("a\"#b"), "r##\"a\"#b\"##");
    }
}
