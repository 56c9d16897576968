//! Definitions of CLI arguments and commands for the deploy scripts

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{
        allow_issuer, deploy_battery_certificate, deploy_compliance_certificate,
        deploy_supplier_quality, deploy_traceability, mint_certificate,
    },
    constants::{
        DEFAULT_BATTERY_CERTIFICATE_NAME, DEFAULT_BATTERY_CERTIFICATE_SYMBOL,
        DEFAULT_DOCUMENT_URI, DEFAULT_SUPPLIER_QUALITY_NAME, DEFAULT_SUPPLIER_QUALITY_SYMBOL,
        LUKSO_TESTNET_RPC_URL,
    },
    errors::ScriptError,
    utils::Client,
};

/// Deploy & operate the ChainIntegrate certificate contracts on LUKSO
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer / controller EOA
    #[arg(short, long, env = "DEPLOYER_PRIVATE_KEY", hide_env_values = true)]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = LUKSO_TESTNET_RPC_URL)]
    pub rpc_url: String,

    /// Path to the Hardhat artifacts directory of the contracts repo
    #[arg(long, default_value = "artifacts")]
    pub artifacts_path: String,

    /// Path to the file in which deployed addresses are recorded
    #[arg(long, default_value = "deployments.json")]
    pub deployments_path: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The subcommands of the deploy scripts
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the supplier quality collection
    DeploySupplierQuality(DeploySupplierQualityArgs),
    /// Deploy the battery carbon certificate collection
    DeployBatteryCertificate(DeployBatteryCertificateArgs),
    /// Deploy the compliance certificate collection
    DeployComplianceCertificate(DeployComplianceCertificateArgs),
    /// Deploy the traceability collection
    DeployTraceability(DeployTraceabilityArgs),
    /// Allow-list a certificate issuer, relaying the call through the
    /// Universal Profile that owns the contract
    AllowIssuer(AllowIssuerArgs),
    /// Mint a traceability certificate and attach its conformity record,
    /// relaying both calls through the profile's KeyManager
    MintCertificate(MintCertificateArgs),
}

impl Command {
    /// Run the command to completion
    pub async fn run(
        self,
        client: Client,
        artifacts_path: &str,
        deployments_path: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeploySupplierQuality(args) => {
                deploy_supplier_quality(args, client, artifacts_path, deployments_path).await
            }
            Command::DeployBatteryCertificate(args) => {
                deploy_battery_certificate(args, client, artifacts_path, deployments_path).await
            }
            Command::DeployComplianceCertificate(args) => {
                deploy_compliance_certificate(args, client, artifacts_path, deployments_path).await
            }
            Command::DeployTraceability(args) => {
                deploy_traceability(args, client, artifacts_path, deployments_path).await
            }
            Command::AllowIssuer(args) => allow_issuer(args, client).await,
            Command::MintCertificate(args) => mint_certificate(args, client).await,
        }
    }
}

/// Deploy `SupplierQualityLSP8` and sanity-check its owner & quality office
#[derive(Args)]
pub struct DeploySupplierQualityArgs {
    /// Name of the token collection
    #[arg(long, env = "TOKEN_NAME", default_value = DEFAULT_SUPPLIER_QUALITY_NAME)]
    pub token_name: String,

    /// Symbol of the token collection
    #[arg(long, env = "TOKEN_SYMBOL", default_value = DEFAULT_SUPPLIER_QUALITY_SYMBOL)]
    pub token_symbol: String,

    /// Address of the contract owner (the company's Universal Profile)
    #[arg(short, long)]
    pub owner: String,

    /// Address of the quality office account
    #[arg(short, long)]
    pub quality_office: String,
}

/// Deploy `BatteryCarbonCertificateLSP8`
#[derive(Args)]
pub struct DeployBatteryCertificateArgs {
    /// Name of the token collection
    #[arg(long, default_value = DEFAULT_BATTERY_CERTIFICATE_NAME)]
    pub token_name: String,

    /// Symbol of the token collection
    #[arg(long, default_value = DEFAULT_BATTERY_CERTIFICATE_SYMBOL)]
    pub token_symbol: String,

    /// Address of the contract owner (the admin Universal Profile)
    #[arg(short, long)]
    pub owner: String,
}

/// Deploy `ComplianceCertificateLSP8`
#[derive(Args)]
pub struct DeployComplianceCertificateArgs {
    /// Address of the contract owner (the admin Universal Profile)
    #[arg(short, long, env = "UP_ADDRESS")]
    pub owner: String,
}

/// Deploy the `Traceability` collection
#[derive(Args)]
pub struct DeployTraceabilityArgs {
    /// Address of the contract owner (the admin Universal Profile)
    #[arg(short, long, env = "UP_ADDRESS")]
    pub owner: String,
}

/// Allow-list an issuer on a certificate contract via `UP.execute`
#[derive(Args)]
pub struct AllowIssuerArgs {
    /// Address of the Universal Profile that owns the contract
    #[arg(short, long, env = "UP_ADDRESS")]
    pub profile: String,

    /// Address of the certificate contract
    #[arg(short, long, env = "ASSET_ADDRESS")]
    pub asset: String,

    /// Address of the issuer to allow
    #[arg(short, long)]
    pub issuer: String,
}

/// Mint a certificate and set its conformity record via the KeyManager
#[derive(Args)]
pub struct MintCertificateArgs {
    /// Address of the Universal Profile that owns the asset
    #[arg(short, long, env = "UP_ADDRESS")]
    pub profile: String,

    /// Address of the traceability contract
    #[arg(short, long, env = "ASSET_ADDRESS")]
    pub asset: String,

    /// Human-readable certificate id, hashed into the bytes32 token id
    #[arg(short, long)]
    pub certificate_id: String,

    /// Address receiving the minted certificate, defaulting to the profile
    #[arg(long)]
    pub recipient: Option<String>,

    /// Path to the certificate document, hashed into the conformity record
    #[arg(short, long)]
    pub document: String,

    /// URI where the certificate document is published
    #[arg(long, default_value = DEFAULT_DOCUMENT_URI)]
    pub document_uri: String,

    /// Salted company identifier, stored hashed
    #[arg(long)]
    pub company_id: String,

    /// Salted production batch identifier, stored hashed
    #[arg(long)]
    pub batch_id: String,

    /// Name of the conformity standard, stored hashed
    #[arg(long)]
    pub standard: String,

    /// Expiry of the certificate in seconds since the Unix epoch, 0 for none
    #[arg(long, default_value_t = 0)]
    pub valid_until: u64,
}
