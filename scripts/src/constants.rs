//! Constants used in the deploy scripts

/// The default JSON-RPC endpoint, the public LUKSO testnet node
pub const LUKSO_TESTNET_RPC_URL: &str = "https://rpc.testnet.lukso.network";

/// The chain id of the LUKSO testnet
pub const LUKSO_TESTNET_CHAIN_ID: u64 = 4201;

/// The number of times to poll for a submitted transaction's receipt
/// before giving up
pub const RECEIPT_POLL_ATTEMPTS: usize = 60;

/// The delay between receipt polls, in milliseconds
///
/// LUKSO testnet blocks land roughly every 12 seconds, so the poll
/// budget covers several blocks.
pub const RECEIPT_POLL_DELAY_MS: u64 = 1000;

/// The directory inside a Hardhat artifacts tree containing the
/// per-contract artifacts
pub const ARTIFACTS_CONTRACTS_DIR: &str = "contracts";

/// The extension of the per-contract artifact directories
/// (`<Name>.sol/<Name>.json`)
pub const SOLIDITY_EXTENSION: &str = "sol";

/// The extension of an artifact file
pub const ARTIFACT_EXTENSION: &str = "json";

/// The key of the deployment bytecode in an artifact file
pub const ARTIFACT_BYTECODE_KEY: &str = "bytecode";

/// The deployments key in the deployments file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The supplier quality contract key in the deployments file
pub const SUPPLIER_QUALITY_CONTRACT_KEY: &str = "supplier_quality_contract";

/// The battery carbon certificate contract key in the deployments file
pub const BATTERY_CERTIFICATE_CONTRACT_KEY: &str = "battery_certificate_contract";

/// The compliance certificate contract key in the deployments file
pub const COMPLIANCE_CERTIFICATE_CONTRACT_KEY: &str = "compliance_certificate_contract";

/// The traceability contract key in the deployments file
pub const TRACEABILITY_CONTRACT_KEY: &str = "traceability_contract";

/// The default name for the supplier quality collection
pub const DEFAULT_SUPPLIER_QUALITY_NAME: &str = "Supplier Quality";

/// The default symbol for the supplier quality collection
pub const DEFAULT_SUPPLIER_QUALITY_SYMBOL: &str = "SQ";

/// The default name for the battery carbon certificate collection
pub const DEFAULT_BATTERY_CERTIFICATE_NAME: &str = "Battery Carbon Certificate";

/// The default symbol for the battery carbon certificate collection
pub const DEFAULT_BATTERY_CERTIFICATE_SYMBOL: &str = "BCC";

/// The default URI recorded for a certificate document before it is
/// published
pub const DEFAULT_DOCUMENT_URI: &str = "ipfs://CID_PLACEHOLDER";
