//! ABI bindings for the ChainIntegrate contracts and the LUKSO account
//! abstraction surface they are operated through.
//!
//! The certificate contracts themselves are compiled out of a separate
//! Solidity sources repo; the fragments here cover only the methods the
//! deploy & operations scripts touch.

pub mod certificates;
pub mod erc725;
pub mod relay;
