//! Minimal ABI fragments for the ERC725 account stack: the Universal Profile
//! (LSP0 / ERC725Account) and the LSP6 KeyManager that owns it.

use alloy::sol;

/// The `CALL` operation type of `IERC725X::execute`
///
/// Operation types are defined by ERC725X; the scripts only ever relay plain
/// calls, never `CREATE`/`STATICCALL`/`DELEGATECALL`.
pub const OPERATION_CALL: u8 = 0;

sol! {
    /// Execution surface of a Universal Profile (ERC725X)
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IERC725X {
        function owner() external view returns (address);

        function execute(
            uint256 operationType,
            address target,
            uint256 value,
            bytes calldata data
        ) external payable returns (bytes memory);
    }

    /// Execution surface of an LSP6 KeyManager
    ///
    /// The payload is calldata to be run on the linked Universal Profile;
    /// the KeyManager checks the caller's permissions before forwarding it.
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface ILSP6KeyManager {
        function execute(bytes calldata payload) external payable returns (bytes memory);
    }
}
