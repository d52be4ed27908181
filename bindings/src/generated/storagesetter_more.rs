// Code generated - DO NOT EDIT.
// This file is a generated binding and any manual changes will be lost.

use crate::registry::ContractMetadata;

const STORAGE_LAYOUT_JSON: &str = r#"{"storage":[],"types":{}}"#;

const DEPLOYED_BIN: &str = "0x608060405234801561001057600080fd5b50600436106100a35760003560e01c8063a6ed563e11610076578063bd02d0f51161005b578063bd02d0f514610160578063ca446dd91461018a578063e2a4853a146100e557600080fd5b8063a6ed563e14610160578063abfdcced1461017c57600080fd5b806321f8a721146100a85780634e91db08146100e557806354fd4d50146100f95780637ae1cfca14610142575b600080fd5b6100bb6100b63660046101a8565b610198565b60405173ffffffffffffffffffffffffffffffffffffffff90911681526020015b60405180910390f35b6100f76100f33660046101c1565b9055565b005b6101356040518060400160405280600581526020017f312e302e3000000000000000000000000000000000000000000000000000000081525081565b6040516100dc91906101e3565b6101506100b63660046101a8565b60405190151581526020016100dc565b61016e6100b63660046101a8565b6040519081526020016100dc565b6100f76100f3366004610256565b6100f76100f336600461028b565b60006101a2825490565b92915050565b6000602082840312156101ba57600080fd5b5035919050565b600080604083850312156101d457600080fd5b50508035926020909101359150565b600060208083528351808285015260005b81811015610210578581018301518582016040015282016101f4565b81811115610222576000604083870101525b50601f017fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe016929092016040019392505050565b6000806040838503121561026957600080fd5b823591506020830135801515811461028057600080fd5b809150509250929050565b6000806040838503121561029e57600080fd5b82359150602083013573ffffffffffffffffffffffffffffffffffffffff8116811461028057600080fdfea164736f6c634300080f000a";

/// Metadata of the `StorageSetter` contract.
pub const METADATA: ContractMetadata = ContractMetadata {
    name: "StorageSetter",
    storage_layout_json: STORAGE_LAYOUT_JSON,
    deployed_bin: DEPLOYED_BIN,
    deployed_source_map: None,
    has_immutable_references: false,
};
