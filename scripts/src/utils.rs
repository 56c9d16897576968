//! Utilities for the deploy scripts

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use alloy::{
    network::TransactionBuilder,
    primitives::{keccak256, Address, B256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::{TransactionReceipt, TransactionRequest},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use chainintegrate_abi::relay::ContractCall;
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    constants::{
        ARTIFACTS_CONTRACTS_DIR, ARTIFACT_BYTECODE_KEY, ARTIFACT_EXTENSION, DEPLOYMENTS_KEY,
        LUKSO_TESTNET_CHAIN_ID, RECEIPT_POLL_ATTEMPTS, RECEIPT_POLL_DELAY_MS, SOLIDITY_EXTENSION,
    },
    errors::ScriptError,
    types::CertificateContract,
};

/// The client type with which the scripts submit transactions
pub type Client = DynProvider;

/// Sets up the client with which to talk to the configured chain, wiring the
/// deployer key in as the transaction signer
pub async fn setup_client(priv_key: &str, rpc_url: &str) -> Result<Client, ScriptError> {
    let url =
        Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let signer_address = signer.address();
    let provider = ProviderBuilder::new().wallet(signer).connect_http(url);
    let client = DynProvider::new(provider);

    let chain_id = client
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    if chain_id != LUKSO_TESTNET_CHAIN_ID {
        warn!(chain_id, "connected chain is not the LUKSO testnet");
    }
    info!(chain_id, signer = %signer_address, "client initialized");

    Ok(client)
}

/// Parse an address from its hex representation
pub fn parse_address(addr: &str) -> Result<Address, ScriptError> {
    Address::from_str(addr).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}

// -------------
// | Artifacts |
// -------------

/// The path of a contract's Hardhat artifact inside the artifacts tree:
/// `<artifacts>/contracts/<Name>.sol/<Name>.json`
fn artifact_path(artifacts_path: &str, contract: CertificateContract) -> PathBuf {
    let name = contract.contract_name();
    PathBuf::from(artifacts_path)
        .join(ARTIFACTS_CONTRACTS_DIR)
        .join(format!("{name}.{SOLIDITY_EXTENSION}"))
        .join(format!("{name}.{ARTIFACT_EXTENSION}"))
}

/// Read the deployment bytecode for a contract from its compilation artifact
pub fn read_artifact_bytecode(
    artifacts_path: &str,
    contract: CertificateContract,
) -> Result<Vec<u8>, ScriptError> {
    let path = artifact_path(artifacts_path, contract);
    let contents = fs::read_to_string(&path)
        .map_err(|e| ScriptError::ReadFile(format!("{}: {}", path.display(), e)))?;

    parse_artifact_bytecode(&contents)
}

/// Parse the deployment bytecode out of a Hardhat artifact
pub(crate) fn parse_artifact_bytecode(artifact: &str) -> Result<Vec<u8>, ScriptError> {
    let parsed: Value =
        serde_json::from_str(artifact).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let bytecode = parsed[ARTIFACT_BYTECODE_KEY].as_str().ok_or_else(|| {
        ScriptError::ArtifactParsing("no bytecode in artifact".to_string())
    })?;

    hex::decode(bytecode.trim_start_matches("0x"))
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
}

// ----------------
// | Transactions |
// ----------------

/// Deploy a contract, returning its address once the deployment transaction
/// is confirmed
pub async fn deploy_contract(
    client: &Client,
    artifacts_path: &str,
    contract: CertificateContract,
    constructor_args: Vec<u8>,
) -> Result<Address, ScriptError> {
    let mut deploy_code = read_artifact_bytecode(artifacts_path, contract)?;
    deploy_code.extend(constructor_args);

    let tx = TransactionRequest::default().with_deploy_code(deploy_code);
    let receipt = send_transaction(client, tx).await?;

    let address = receipt.contract_address.ok_or_else(|| {
        ScriptError::ContractDeployment("no contract address in receipt".to_string())
    })?;

    info!(contract = %contract, address = %address, tx = %receipt.transaction_hash, "contract deployed");
    Ok(address)
}

/// Submit a (possibly relay-wrapped) contract call as a transaction and wait
/// for its confirmation
pub async fn send_call(
    client: &Client,
    call: ContractCall,
) -> Result<TransactionReceipt, ScriptError> {
    let ContractCall {
        target,
        value,
        data,
    } = call;

    let tx = TransactionRequest::default()
        .with_to(target)
        .with_value(value)
        .with_input(data);

    send_transaction(client, tx).await
}

/// Send a transaction and wait for its receipt, failing if the transaction
/// reverted
///
/// Polls for the receipt rather than watching the pending transaction;
/// watching has proven unreliable against public RPC endpoints.
pub async fn send_transaction(
    client: &Client,
    tx: TransactionRequest,
) -> Result<TransactionReceipt, ScriptError> {
    let pending = client
        .send_transaction(tx)
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    let tx_hash = *pending.tx_hash();
    info!(tx = %tx_hash, "transaction submitted");

    let mut remaining_attempts = RECEIPT_POLL_ATTEMPTS;
    while remaining_attempts > 0 {
        let receipt = client
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

        match receipt {
            Some(receipt) if !receipt.status() => {
                return Err(ScriptError::ContractInteraction(format!(
                    "transaction {tx_hash:#x} reverted"
                )));
            }
            Some(receipt) => return Ok(receipt),
            None => {
                tokio::time::sleep(Duration::from_millis(RECEIPT_POLL_DELAY_MS)).await;
                remaining_attempts -= 1;
            }
        }
    }

    Err(ScriptError::ContractInteraction(format!(
        "no receipt found for transaction {tx_hash:#x}"
    )))
}

// ---------------
// | Deployments |
// ---------------

/// Record a deployed contract address in the deployments file, creating the
/// file if it does not yet exist
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    if !Path::new(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteFile(e.to_string()))?;
    }

    let contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadFile(e.to_string()))?;
    let mut parsed: Value =
        serde_json::from_str(&contents).map_err(|e| ScriptError::ReadFile(e.to_string()))?;

    parsed[DEPLOYMENTS_KEY][contract_key] = Value::String(format!("{address:#x}"));

    let contents =
        serde_json::to_string_pretty(&parsed).map_err(|e| ScriptError::WriteFile(e.to_string()))?;
    fs::write(file_path, contents).map_err(|e| ScriptError::WriteFile(e.to_string()))
}

/// Read a previously recorded contract address from the deployments file
pub fn read_deployed_address(file_path: &str, contract_key: &str) -> Result<Address, ScriptError> {
    let contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadFile(e.to_string()))?;
    let parsed: Value =
        serde_json::from_str(&contents).map_err(|e| ScriptError::ReadFile(e.to_string()))?;

    let addr = parsed[DEPLOYMENTS_KEY][contract_key].as_str().ok_or_else(|| {
        ScriptError::ReadFile(format!("no {contract_key} address in deployments file"))
    })?;

    Address::from_str(addr).map_err(|e| ScriptError::ReadFile(e.to_string()))
}

// -----------
// | Hashing |
// -----------

/// Derive the bytes32 token id for a human-readable certificate id
pub fn certificate_token_id(human_id: &str) -> B256 {
    keccak256(human_id.as_bytes())
}

/// Hash the contents of a file
pub fn keccak_file(path: &str) -> Result<B256, ScriptError> {
    let bytes = fs::read(path).map_err(|e| ScriptError::ReadFile(format!("{path}: {e}")))?;
    Ok(keccak256(bytes))
}

/// The current time in seconds since the Unix epoch
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, keccak256};

    use super::{
        certificate_token_id, keccak_file, parse_artifact_bytecode, read_deployed_address,
        write_deployed_address,
    };
    use crate::constants::SUPPLIER_QUALITY_CONTRACT_KEY;

    /// A temp file path unique to the current test process
    fn temp_path(name: &str) -> String {
        let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn token_id_is_deterministic() {
        let id = "CERT-2025-0001";

        assert_eq!(certificate_token_id(id), certificate_token_id(id));
        assert_eq!(certificate_token_id(id), keccak256(id.as_bytes()));
        assert_ne!(certificate_token_id(id), certificate_token_id("CERT-2025-0002"));
    }

    #[test]
    fn artifact_bytecode_parses() {
        let artifact = r#"{"contractName": "Traceability", "abi": [], "bytecode": "0x6080604052"}"#;

        let bytecode = parse_artifact_bytecode(artifact).unwrap();
        assert_eq!(bytecode, vec![0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn artifact_without_bytecode_is_rejected() {
        let artifact = r#"{"contractName": "Traceability", "abi": []}"#;

        assert!(parse_artifact_bytecode(artifact).is_err());
    }

    #[test]
    fn file_hash_matches_content_hash() {
        let path = temp_path("conformity-doc.pdf");
        let content = b"conformity document";
        std::fs::write(&path, content).unwrap();

        assert_eq!(keccak_file(&path).unwrap(), keccak256(content));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn deployments_file_round_trips() {
        let path = temp_path("deployments.json");
        let address = address!("A0EB23c4e8c08f6d497FD8B80fF9CC9B91452E0A");

        // The file does not exist yet; the write must create it
        write_deployed_address(&path, SUPPLIER_QUALITY_CONTRACT_KEY, address).unwrap();
        assert_eq!(
            read_deployed_address(&path, SUPPLIER_QUALITY_CONTRACT_KEY).unwrap(),
            address
        );

        std::fs::remove_file(&path).unwrap();
    }
}
