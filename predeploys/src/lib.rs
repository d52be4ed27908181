#![deny(unused_crate_dependencies)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]
#![warn(unused_imports)]

//! Addresses of the contracts predeployed into the L2 genesis state.
//!
//! All predeploys live in the `0x4200..0000`-`0x4200..ffff` range.

use ethers::types::{Address, H160};

const fn predeploy_address(low: u16) -> Address {
    let mut bytes = [0u8; 20];
    bytes[0] = 0x42;
    bytes[18] = (low >> 8) as u8;
    bytes[19] = low as u8;

    H160(bytes)
}

/// `L2ToL1MessagePasser` predeploy.
pub const L2_TO_L1_MESSAGE_PASSER: Address = predeploy_address(0x0016);

/// `DeployerWhitelist` predeploy.
pub const DEPLOYER_WHITELIST: Address = predeploy_address(0x0002);

/// `WTON` predeploy.
pub const WTON: Address = predeploy_address(0x0006);

/// `L2CrossDomainMessenger` predeploy.
pub const L2_CROSS_DOMAIN_MESSENGER: Address = predeploy_address(0x0007);

/// `L2StandardBridge` predeploy.
pub const L2_STANDARD_BRIDGE: Address = predeploy_address(0x0010);

/// `SequencerFeeVault` predeploy.
pub const SEQUENCER_FEE_VAULT: Address = predeploy_address(0x0011);

/// `OptimismMintableERC20Factory` predeploy.
pub const OPTIMISM_MINTABLE_ERC20_FACTORY: Address = predeploy_address(0x0012);

/// `L1BlockNumber` predeploy.
pub const L1_BLOCK_NUMBER: Address = predeploy_address(0x0013);

/// `GasPriceOracle` predeploy.
pub const GAS_PRICE_ORACLE: Address = predeploy_address(0x000f);

/// `L1Block` predeploy.
pub const L1_BLOCK: Address = predeploy_address(0x0015);

/// `GovernanceToken` predeploy.
pub const GOVERNANCE_TOKEN: Address = predeploy_address(0x0042);

/// `LegacyMessagePasser` predeploy.
pub const LEGACY_MESSAGE_PASSER: Address = predeploy_address(0x0000);

/// `L2ERC721Bridge` predeploy.
pub const L2_ERC721_BRIDGE: Address = predeploy_address(0x0014);

/// `OptimismMintableERC721Factory` predeploy.
pub const OPTIMISM_MINTABLE_ERC721_FACTORY: Address = predeploy_address(0x0017);

/// `ProxyAdmin` predeploy.
pub const PROXY_ADMIN: Address = predeploy_address(0x0018);

/// `BaseFeeVault` predeploy.
pub const BASE_FEE_VAULT: Address = predeploy_address(0x0019);

/// `L1FeeVault` predeploy.
pub const L1_FEE_VAULT: Address = predeploy_address(0x001a);

/// `SchemaRegistry` predeploy.
pub const SCHEMA_REGISTRY: Address = predeploy_address(0x0020);

/// `EAS` predeploy.
pub const EAS: Address = predeploy_address(0x0021);

/// `WETH` predeploy.
pub const WETH: Address = predeploy_address(0x0022);

/// `Permit2` predeploy.
pub const PERMIT2: Address = predeploy_address(0x0501);

/// `QuoterV2` predeploy.
pub const QUOTER_V2: Address = predeploy_address(0x0502);

/// `SwapRouter02` predeploy.
pub const SWAP_ROUTER_02: Address = predeploy_address(0x0503);

/// `UniswapV3Factory` predeploy.
pub const UNISWAP_V3_FACTORY: Address = predeploy_address(0x0504);

/// `NFTDescriptor` predeploy.
pub const NFT_DESCRIPTOR: Address = predeploy_address(0x0505);

/// `NonfungiblePositionManager` predeploy.
pub const NONFUNGIBLE_POSITION_MANAGER: Address = predeploy_address(0x0506);

/// `NonfungibleTokenPositionDescriptor` predeploy.
pub const NONFUNGIBLE_TOKEN_POSITION_DESCRIPTOR: Address = predeploy_address(0x0507);

/// `TickLens` predeploy.
pub const TICK_LENS: Address = predeploy_address(0x0508);

/// `UniswapInterfaceMulticall` predeploy.
pub const UNISWAP_INTERFACE_MULTICALL: Address = predeploy_address(0x0509);

/// `L2UsdcBridge` predeploy.
pub const L2_USDC_BRIDGE: Address = predeploy_address(0x0775);

/// `MasterMinter` predeploy.
pub const MASTER_MINTER: Address = predeploy_address(0x0777);

/// `FiatTokenV2_2` predeploy.
pub const FIAT_TOKEN_V2_2: Address = predeploy_address(0x0778);

/// All predeploys by contract name.
pub const PREDEPLOYS: &[(&str, Address)] = &[
    ("L2ToL1MessagePasser", L2_TO_L1_MESSAGE_PASSER),
    ("DeployerWhitelist", DEPLOYER_WHITELIST),
    ("WTON", WTON),
    ("L2CrossDomainMessenger", L2_CROSS_DOMAIN_MESSENGER),
    ("L2StandardBridge", L2_STANDARD_BRIDGE),
    ("SequencerFeeVault", SEQUENCER_FEE_VAULT),
    ("OptimismMintableERC20Factory", OPTIMISM_MINTABLE_ERC20_FACTORY),
    ("L1BlockNumber", L1_BLOCK_NUMBER),
    ("GasPriceOracle", GAS_PRICE_ORACLE),
    ("L1Block", L1_BLOCK),
    ("GovernanceToken", GOVERNANCE_TOKEN),
    ("LegacyMessagePasser", LEGACY_MESSAGE_PASSER),
    ("L2ERC721Bridge", L2_ERC721_BRIDGE),
    ("OptimismMintableERC721Factory", OPTIMISM_MINTABLE_ERC721_FACTORY),
    ("ProxyAdmin", PROXY_ADMIN),
    ("BaseFeeVault", BASE_FEE_VAULT),
    ("L1FeeVault", L1_FEE_VAULT),
    ("SchemaRegistry", SCHEMA_REGISTRY),
    ("EAS", EAS),
    ("WETH", WETH),
    ("Permit2", PERMIT2),
    ("QuoterV2", QUOTER_V2),
    ("SwapRouter02", SWAP_ROUTER_02),
    ("UniswapV3Factory", UNISWAP_V3_FACTORY),
    ("NFTDescriptor", NFT_DESCRIPTOR),
    ("NonfungiblePositionManager", NONFUNGIBLE_POSITION_MANAGER),
    ("NonfungibleTokenPositionDescriptor", NONFUNGIBLE_TOKEN_POSITION_DESCRIPTOR),
    ("TickLens", TICK_LENS),
    ("UniswapInterfaceMulticall", UNISWAP_INTERFACE_MULTICALL),
    ("L2UsdcBridge", L2_USDC_BRIDGE),
    ("MasterMinter", MASTER_MINTER),
    ("FiatTokenV2_2", FIAT_TOKEN_V2_2),
];

/// Look up a predeploy address by contract name.
pub fn predeploy(name: &str) -> Option<Address> {
    PREDEPLOYS
        .iter()
        .find(|(predeploy, _)| *predeploy == name)
        .map(|(_, address)| *address)
}

/// Whether the predeploy sits behind a proxy contract.
pub fn is_proxied(address: Address) -> bool {
    ![WTON, GOVERNANCE_TOKEN, MASTER_MINTER].contains(&address)
}
