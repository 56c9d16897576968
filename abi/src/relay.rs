//! A composable descriptor for calls relayed through the ERC725 account stack
//!
//! A call on a certificate contract may be submitted directly, wrapped as the
//! argument to a Universal Profile's `execute`, or wrapped a second time as
//! the argument to the profile's KeyManager `execute`. Each wrapping layer has
//! an explicit encode/decode pair so that nested payloads can be built and
//! inspected without ad hoc encoding calls scattered through the scripts.

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use alloy::primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;

use crate::erc725::{IERC725X, ILSP6KeyManager, OPERATION_CALL};

/// A single contract call: target address, attached value, and ABI-encoded
/// calldata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    /// The address the call is made to
    pub target: Address,
    /// The native token value attached to the call
    pub value: U256,
    /// The ABI-encoded calldata, selector included
    pub data: Bytes,
}

/// Errors that can occur when unwrapping a relayed call
#[derive(Debug)]
pub enum RelayError {
    /// The payload does not decode as the expected `execute` call
    Decode(alloy_sol_types::Error),
    /// The relayed call uses an operation type other than `CALL`
    UnsupportedOperation(U256),
}

impl Display for RelayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::Decode(e) => write!(f, "error decoding relayed call: {}", e),
            RelayError::UnsupportedOperation(op) => {
                write!(f, "unsupported relay operation type: {}", op)
            }
        }
    }
}

impl Error for RelayError {}

impl From<alloy_sol_types::Error> for RelayError {
    fn from(e: alloy_sol_types::Error) -> Self {
        RelayError::Decode(e)
    }
}

impl ContractCall {
    /// Create a call descriptor with no attached value
    pub fn new(target: Address, data: impl Into<Bytes>) -> Self {
        Self {
            target,
            value: U256::ZERO,
            data: data.into(),
        }
    }

    /// Attach a native token value to the call
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// Wrap the call as a `CALL`-type `IERC725X::execute` invocation on the
    /// given Universal Profile
    pub fn via_profile(self, profile: Address) -> Self {
        let execute = IERC725X::executeCall {
            operationType: U256::from(OPERATION_CALL),
            target: self.target,
            value: self.value,
            data: self.data,
        };

        Self::new(profile, execute.abi_encode())
    }

    /// Wrap the call as an `ILSP6KeyManager::execute` invocation on the given
    /// KeyManager
    ///
    /// The wrapped call must already target the profile the KeyManager is
    /// linked to; the profile address itself is not part of the payload.
    pub fn via_key_manager(self, key_manager: Address) -> Self {
        let execute = ILSP6KeyManager::executeCall { payload: self.data };

        Self::new(key_manager, execute.abi_encode())
    }

    /// Decode an `IERC725X::execute` payload back into the inner call
    pub fn unwrap_profile(&self) -> Result<Self, RelayError> {
        let execute = IERC725X::executeCall::abi_decode(&self.data)?;
        if execute.operationType != U256::from(OPERATION_CALL) {
            return Err(RelayError::UnsupportedOperation(execute.operationType));
        }

        Ok(Self {
            target: execute.target,
            value: execute.value,
            data: execute.data,
        })
    }

    /// Decode an `ILSP6KeyManager::execute` payload back into the inner call
    /// on the linked profile
    pub fn unwrap_key_manager(&self, profile: Address) -> Result<Self, RelayError> {
        let execute = ILSP6KeyManager::executeCall::abi_decode(&self.data)?;

        Ok(Self::new(profile, execute.payload))
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, Address, U256};
    use alloy_sol_types::SolCall;

    use super::{ContractCall, RelayError};
    use crate::{
        certificates::IIssuerAllowlist,
        erc725::IERC725X,
    };

    /// A fixed certificate contract address
    const ASSET: Address = address!("A0EB23c4e8c08f6d497FD8B80fF9CC9B91452E0A");
    /// A fixed Universal Profile address
    const PROFILE: Address = address!("83cBE526D949A3AaaB4EF9a03E48dd862e81472C");
    /// A fixed KeyManager address
    const KEY_MANAGER: Address = address!("Aa18E265Bb38cD507eD018AF9abf0FeF16E685C9");

    /// Build the inner allow-issuer call used by the tests
    fn allow_issuer_call() -> ContractCall {
        let data = IIssuerAllowlist::setIssuerAllowedCall {
            issuer: KEY_MANAGER,
            allowed: true,
        }
        .abi_encode();

        ContractCall::new(ASSET, data)
    }

    #[test]
    fn profile_layer_round_trip() {
        let inner = allow_issuer_call();
        let wrapped = inner.clone().via_profile(PROFILE);

        assert_eq!(wrapped.target, PROFILE);
        assert_eq!(wrapped.unwrap_profile().unwrap(), inner);
    }

    #[test]
    fn key_manager_layer_round_trip() {
        let inner = allow_issuer_call();
        let profile_call = inner.clone().via_profile(PROFILE);
        let relayed = profile_call.clone().via_key_manager(KEY_MANAGER);

        assert_eq!(relayed.target, KEY_MANAGER);

        let unwrapped = relayed.unwrap_key_manager(PROFILE).unwrap();
        assert_eq!(unwrapped, profile_call);
        assert_eq!(unwrapped.unwrap_profile().unwrap(), inner);
    }

    #[test]
    fn unwrap_rejects_non_call_operation() {
        let inner = allow_issuer_call();
        let execute = IERC725X::executeCall {
            // STATICCALL, which the scripts never relay
            operationType: U256::from(3u8),
            target: inner.target,
            value: inner.value,
            data: inner.data,
        };
        let wrapped = ContractCall::new(PROFILE, execute.abi_encode());

        assert!(matches!(
            wrapped.unwrap_profile(),
            Err(RelayError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn unwrap_rejects_foreign_calldata() {
        // An unwrapped allow-issuer call is not an `execute` payload
        let inner = allow_issuer_call();

        assert!(matches!(
            inner.unwrap_profile(),
            Err(RelayError::Decode(_))
        ));
        assert!(matches!(
            inner.unwrap_key_manager(PROFILE),
            Err(RelayError::Decode(_))
        ));
    }

    #[test]
    fn value_is_preserved_through_profile_layer() {
        let inner = allow_issuer_call().with_value(U256::from(42u64));
        let wrapped = inner.clone().via_profile(PROFILE);

        // The outer transaction itself carries no value; it lives in the payload
        assert_eq!(wrapped.value, U256::ZERO);
        assert_eq!(wrapped.unwrap_profile().unwrap(), inner);
    }
}
