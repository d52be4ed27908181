//! Reading state variables by their label.

use artifacts::solc::StorageLayout;
use async_trait::async_trait;
use auto_impl::auto_impl;
use ethers::{
    providers::{JsonRpcClient, Middleware, Provider},
    types::{Address, Bytes, H256},
};

use crate::{metrics::BINDINGS_METRICS, registry, Error, Result};

/// A middleware that reads contract storage with the help of storage layouts.
#[async_trait]
#[auto_impl(&, Arc, Box)]
pub trait StorageLayoutMiddleware: Middleware {
    /// Read the value of a state variable at the latest block.
    ///
    /// The value is returned big-endian, trimmed to the size of its type.
    ///
    /// # Arguments
    ///
    /// * `address`: Address of the contract
    /// * `layout`: Storage layout of the contract
    /// * `label`: Name of the state variable
    async fn storage_value(
        &self,
        address: Address,
        layout: &StorageLayout,
        label: &str,
    ) -> Result<Bytes>;

    /// Read the value of a state variable using the layout known to the registry.
    ///
    /// # Arguments
    ///
    /// * `address`: Address of the contract
    /// * `contract`: Name of the contract
    /// * `label`: Name of the state variable
    async fn storage_value_by_name(
        &self,
        address: Address,
        contract: &str,
        label: &str,
    ) -> Result<Bytes>;
}

#[async_trait]
impl<P: JsonRpcClient> StorageLayoutMiddleware for Provider<P> {
    async fn storage_value(
        &self,
        address: Address,
        layout: &StorageLayout,
        label: &str,
    ) -> Result<Bytes> {
        let entry = layout.entry(label)?;
        let size = layout.type_of(&entry.ty)?.number_of_bytes;

        let mut slot = [0_u8; 32];
        entry.slot.to_big_endian(&mut slot);

        let word = self
            .get_storage_at(address, H256(slot), None)
            .await
            .map_err(|e| Error::Middleware(e.to_string()))?;

        BINDINGS_METRICS.storage_reads.inc();

        field_bytes(word, label, entry.offset, size)
    }

    async fn storage_value_by_name(
        &self,
        address: Address,
        contract: &str,
        label: &str,
    ) -> Result<Bytes> {
        let layout = registry::get_storage_layout(contract)?;

        self.storage_value(address, &layout, label).await
    }
}

// Offsets count from the low-order end of the word.
fn field_bytes(word: H256, label: &str, offset: u64, size: u64) -> Result<Bytes> {
    if offset.checked_add(size).map_or(true, |end| end > 32) {
        return Err(Error::ValueTooShort {
            label: label.to_string(),
            offset,
            size,
        });
    }

    let end = 32 - offset as usize;
    let start = end - size as usize;

    Ok(Bytes::from(word.as_bytes()[start..end].to_vec()))
}

#[cfg(test)]
mod tests {
    use artifacts::solc::StorageLayout;
    use ethers::{
        providers::Provider,
        types::{Address, H256},
    };
    use pretty_assertions::assert_eq;

    use super::{field_bytes, StorageLayoutMiddleware};
    use crate::Error;

    const LAYOUT: &str = r#"{
        "storage": [
            {"astId": 1000, "contract": "src/L1/SystemConfig.sol:SystemConfig", "label": "_initialized", "offset": 0, "slot": "0", "type": "t_uint8"},
            {"astId": 1001, "contract": "src/L1/SystemConfig.sol:SystemConfig", "label": "_initializing", "offset": 1, "slot": "0", "type": "t_bool"},
            {"astId": 1002, "contract": "src/L1/SystemConfig.sol:SystemConfig", "label": "gasLimit", "offset": 0, "slot": "104", "type": "t_uint64"},
            {"astId": 1003, "contract": "src/L1/SystemConfig.sol:SystemConfig", "label": "broken", "offset": 4, "slot": "105", "type": "t_uint256"}
        ],
        "types": {
            "t_bool": {"encoding": "inplace", "label": "bool", "numberOfBytes": "1"},
            "t_uint256": {"encoding": "inplace", "label": "uint256", "numberOfBytes": "32"},
            "t_uint64": {"encoding": "inplace", "label": "uint64", "numberOfBytes": "8"},
            "t_uint8": {"encoding": "inplace", "label": "uint8", "numberOfBytes": "1"}
        }
    }"#;

    fn word(low: &[u8]) -> H256 {
        let mut word = [0_u8; 32];
        word[32 - low.len()..].copy_from_slice(low);
        H256(word)
    }

    #[test]
    fn packed_fields() {
        let slot_zero = word(&[0x01, 0x00, 0x02]);

        assert_eq!(
            field_bytes(slot_zero, "_initialized", 0, 1).unwrap().to_vec(),
            vec![0x02]
        );
        assert_eq!(
            field_bytes(slot_zero, "_initializing", 1, 1).unwrap().to_vec(),
            vec![0x00]
        );
        assert_eq!(
            field_bytes(slot_zero, "packed", 1, 2).unwrap().to_vec(),
            vec![0x01, 0x00]
        );
        assert_eq!(field_bytes(slot_zero, "word", 0, 32).unwrap().len(), 32);
    }

    #[test]
    fn fields_past_the_word() {
        assert!(matches!(
            field_bytes(H256::zero(), "broken", 4, 32),
            Err(Error::ValueTooShort { label, offset: 4, size: 32 }) if label == "broken"
        ));
    }

    #[test]
    fn huge_offsets_do_not_overflow() {
        assert!(matches!(
            field_bytes(H256::zero(), "x", u64::MAX, 1),
            Err(Error::ValueTooShort { offset: u64::MAX, size: 1, .. })
        ));
        assert!(matches!(
            field_bytes(H256::zero(), "x", 1, u64::MAX),
            Err(Error::ValueTooShort { .. })
        ));
    }

    #[tokio::test]
    async fn reads_labelled_value() {
        let (provider, mock) = Provider::mocked();
        mock.push::<H256, _>(word(&[0x01, 0xc9, 0xc3, 0x80])).unwrap();

        let layout = StorageLayout::from_json(LAYOUT).unwrap();
        let value = provider
            .storage_value(Address::zero(), &layout, "gasLimit")
            .await
            .unwrap();

        assert_eq!(
            value.to_vec(),
            vec![0x00, 0x00, 0x00, 0x00, 0x01, 0xc9, 0xc3, 0x80]
        );
    }

    #[tokio::test]
    async fn unknown_label() {
        let (provider, _mock) = Provider::mocked();

        let layout = StorageLayout::from_json(LAYOUT).unwrap();
        let err = provider
            .storage_value(Address::zero(), &layout, "owner")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Artifacts(artifacts::Error::EntryNotFound(label)) if label == "owner"
        ));
    }
}
