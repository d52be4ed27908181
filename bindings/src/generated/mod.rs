// Code generated - DO NOT EDIT.
// This file is a generated binding and any manual changes will be lost.

use crate::registry::ContractMetadata;

mod l1crossdomainmessenger_more;
mod storagesetter_more;
mod systemconfig_more;

/// Metadata of every generated contract.
pub const CONTRACTS: &[ContractMetadata] = &[
    l1crossdomainmessenger_more::METADATA,
    storagesetter_more::METADATA,
    systemconfig_more::METADATA,
];
