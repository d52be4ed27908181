//! Canonical AST ids for storage layouts.
//!
//! AST ids depend on the order in which the compiler visited source files,
//! so the same contract compiled in two checkouts yields different ids.
//! Layouts are rewritten to sequential ids before they are embedded.

use std::collections::{BTreeMap, HashMap};

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::solc::{StorageLayout, StorageLayoutEntry, StorageLayoutType};

const FIRST_AST_ID: u64 = 1000;
const CONTRACTS_PACKAGE: &str = "/packages/contracts-bedrock/";

lazy_static! {
    // `t_struct(ResourceConfig)1234_storage`, `t_enum(UpdateType)56`, `t_contract(IERC20)78`
    static ref TYPE_AST_ID: Regex = Regex::new(r"(t_(?:struct|enum|contract|userDefinedValueType)\(\w+\))(\d+)")
        .expect("the type id regex is valid; qed");
}

/// Rewrite all AST ids of a layout to sequential ones.
///
/// Storage entries get ids starting at 1000 in declaration order, AST ids
/// embedded into type identifiers continue the sequence in sorted type
/// order, struct members come last. Absolute contract paths are made
/// relative to `monorepo_base`.
pub fn canonicalize_ast_ids(layout: &StorageLayout, monorepo_base: &str) -> StorageLayout {
    let mut next_id = FIRST_AST_ID;
    let mut next = || {
        let id = next_id;
        next_id += 1;
        id
    };

    let entry_ids: Vec<u64> = layout.storage.iter().map(|_| next()).collect();

    let mut type_ids = HashMap::new();
    for type_name in layout.types.keys() {
        for captures in TYPE_AST_ID.captures_iter(type_name) {
            let old: u64 = match captures[2].parse() {
                Ok(id) => id,
                Err(_) => continue,
            };
            type_ids.entry(old).or_insert_with(&mut next);
        }
    }

    let remap = |ty: &str| remap_type(ty, &type_ids);

    let storage = layout
        .storage
        .iter()
        .zip(entry_ids)
        .map(|(entry, ast_id)| StorageLayoutEntry {
            ast_id,
            contract: normalize_contract(&entry.contract, monorepo_base),
            label: entry.label.clone(),
            offset: entry.offset,
            slot: entry.slot,
            ty: remap(&entry.ty),
        })
        .collect();

    let mut types = BTreeMap::new();
    for (name, ty) in &layout.types {
        let members = ty.members.as_ref().map(|members| {
            members
                .iter()
                .map(|member| StorageLayoutEntry {
                    ast_id: next(),
                    contract: normalize_contract(&member.contract, monorepo_base),
                    label: member.label.clone(),
                    offset: member.offset,
                    slot: member.slot,
                    ty: remap(&member.ty),
                })
                .collect()
        });

        types.insert(
            remap(name),
            StorageLayoutType {
                encoding: ty.encoding.clone(),
                label: ty.label.clone(),
                number_of_bytes: ty.number_of_bytes,
                key: ty.key.as_deref().map(remap),
                value: ty.value.as_deref().map(remap),
                base: ty.base.as_deref().map(remap),
                members,
            },
        );
    }

    StorageLayout { storage, types }
}

fn remap_type(ty: &str, type_ids: &HashMap<u64, u64>) -> String {
    TYPE_AST_ID
        .replace_all(ty, |captures: &Captures| {
            let new_id = captures[2]
                .parse::<u64>()
                .ok()
                .and_then(|old| type_ids.get(&old));

            match new_id {
                Some(id) => format!("{}{id}", &captures[1]),
                None => captures[0].to_string(),
            }
        })
        .into_owned()
}

// Absolute paths show up when two imported contracts share a name.
fn normalize_contract(contract: &str, monorepo_base: &str) -> String {
    if !contract.starts_with('/') {
        return contract.to_string();
    }

    let relative = if monorepo_base.is_empty() {
        contract.to_string()
    } else {
        contract.replacen(monorepo_base, "", 1)
    };

    relative
        .strip_prefix(CONTRACTS_PACKAGE)
        .map(str::to_string)
        .unwrap_or(relative)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::canonicalize_ast_ids;
    use crate::solc::StorageLayout;

    const LAYOUT: &str = r#"{
        "storage": [
            {"astId": 31337, "contract": "src/L1/SystemConfig.sol:SystemConfig", "label": "_initialized", "offset": 0, "slot": "0", "type": "t_uint8"},
            {"astId": 58, "contract": "/home/ci/optimism/packages/contracts-bedrock/src/L1/SystemConfig.sol:SystemConfig", "label": "_resourceConfig", "offset": 0, "slot": "105", "type": "t_struct(ResourceConfig)4242_storage"},
            {"astId": 12, "contract": "src/L1/SystemConfig.sol:SystemConfig", "label": "configs", "offset": 0, "slot": "106", "type": "t_mapping(t_address,t_struct(ResourceConfig)4242_storage)"},
            {"astId": 13, "contract": "src/L1/SystemConfig.sol:SystemConfig", "label": "gap", "offset": 0, "slot": "107", "type": "t_array(t_uint256)50_storage"}
        ],
        "types": {
            "t_address": {"encoding": "inplace", "label": "address", "numberOfBytes": "20"},
            "t_array(t_uint256)50_storage": {"encoding": "inplace", "label": "uint256[50]", "numberOfBytes": "1600", "base": "t_uint256"},
            "t_mapping(t_address,t_struct(ResourceConfig)4242_storage)": {
                "encoding": "mapping", "label": "mapping(address => struct ResourceMetering.ResourceConfig)", "numberOfBytes": "32",
                "key": "t_address", "value": "t_struct(ResourceConfig)4242_storage"
            },
            "t_struct(ResourceConfig)4242_storage": {
                "encoding": "inplace", "label": "struct ResourceMetering.ResourceConfig", "numberOfBytes": "32",
                "members": [
                    {"astId": 4000, "contract": "src/L1/ResourceMetering.sol:ResourceMetering", "label": "maxResourceLimit", "offset": 0, "slot": "0", "type": "t_uint32"}
                ]
            },
            "t_uint256": {"encoding": "inplace", "label": "uint256", "numberOfBytes": "32"},
            "t_uint32": {"encoding": "inplace", "label": "uint32", "numberOfBytes": "4"},
            "t_uint8": {"encoding": "inplace", "label": "uint8", "numberOfBytes": "1"}
        }
    }"#;

    #[test]
    fn renumbers_entries_and_types() {
        let layout = StorageLayout::from_json(LAYOUT).unwrap();
        let canonical = canonicalize_ast_ids(&layout, "/home/ci/optimism");

        let ids: Vec<_> = canonical.storage.iter().map(|e| e.ast_id).collect();
        assert_eq!(ids, vec![1000, 1001, 1002, 1003]);

        assert_eq!(canonical.storage[1].ty, "t_struct(ResourceConfig)1004_storage");
        assert_eq!(
            canonical.storage[2].ty,
            "t_mapping(t_address,t_struct(ResourceConfig)1004_storage)"
        );
        // array lengths are not ast ids
        assert_eq!(canonical.storage[3].ty, "t_array(t_uint256)50_storage");

        let mapping = canonical
            .type_of("t_mapping(t_address,t_struct(ResourceConfig)1004_storage)")
            .unwrap();
        assert_eq!(mapping.value.as_deref(), Some("t_struct(ResourceConfig)1004_storage"));

        let config = canonical.type_of("t_struct(ResourceConfig)1004_storage").unwrap();
        assert_eq!(config.members.as_ref().unwrap()[0].ast_id, 1005);
        assert_eq!(canonical.types.len(), layout.types.len());
    }

    #[test]
    fn relative_contract_paths() {
        let layout = StorageLayout::from_json(LAYOUT).unwrap();
        let canonical = canonicalize_ast_ids(&layout, "/home/ci/optimism");

        assert_eq!(
            canonical.storage[1].contract,
            "src/L1/SystemConfig.sol:SystemConfig"
        );
        assert_eq!(
            canonical.storage[0].contract,
            "src/L1/SystemConfig.sol:SystemConfig"
        );
    }

    #[test]
    fn deterministic() {
        let layout = StorageLayout::from_json(LAYOUT).unwrap();

        let first = canonicalize_ast_ids(&layout, "/home/ci/optimism");
        let second = canonicalize_ast_ids(&layout, "/home/ci/optimism");
        assert_eq!(first, second);

        // canonical layouts are a fixed point up to the first id
        assert_eq!(canonicalize_ast_ids(&first, "/home/ci/optimism"), first);
    }
}
