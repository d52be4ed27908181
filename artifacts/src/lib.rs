#![deny(unused_crate_dependencies)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]
#![warn(unused_imports)]

//! Readers for solidity build artifacts.
//!
//! Covers the solc storage layout format, foundry (`forge`) artifacts and
//! hardhat artifacts together with their build info and deployments.

mod error;

pub mod ast;
pub mod foundry;
pub mod hardhat;
pub mod solc;

pub use error::{Error, Result};
