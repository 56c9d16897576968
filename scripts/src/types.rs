//! Type definitions used throughout the scripts

use std::fmt::{self, Display};

use crate::constants::{
    BATTERY_CERTIFICATE_CONTRACT_KEY, COMPLIANCE_CERTIFICATE_CONTRACT_KEY,
    SUPPLIER_QUALITY_CONTRACT_KEY, TRACEABILITY_CONTRACT_KEY,
};

/// The certificate contracts the scripts can deploy
#[derive(Copy, Clone)]
pub enum CertificateContract {
    /// The supplier quality collection
    SupplierQuality,
    /// The battery carbon certificate collection
    BatteryCertificate,
    /// The compliance certificate collection
    ComplianceCertificate,
    /// The traceability collection
    Traceability,
}

impl CertificateContract {
    /// The contract's name in the Solidity sources, which is also the name
    /// of its Hardhat artifact
    pub fn contract_name(self) -> &'static str {
        match self {
            CertificateContract::SupplierQuality => "SupplierQualityLSP8",
            CertificateContract::BatteryCertificate => "BatteryCarbonCertificateLSP8",
            CertificateContract::ComplianceCertificate => "ComplianceCertificateLSP8",
            CertificateContract::Traceability => "Traceability",
        }
    }

    /// The key under which the contract's deployed address is recorded in
    /// the deployments file
    pub fn deployments_key(self) -> &'static str {
        match self {
            CertificateContract::SupplierQuality => SUPPLIER_QUALITY_CONTRACT_KEY,
            CertificateContract::BatteryCertificate => BATTERY_CERTIFICATE_CONTRACT_KEY,
            CertificateContract::ComplianceCertificate => COMPLIANCE_CERTIFICATE_CONTRACT_KEY,
            CertificateContract::Traceability => TRACEABILITY_CONTRACT_KEY,
        }
    }
}

impl Display for CertificateContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CertificateContract::SupplierQuality => write!(f, "supplier-quality"),
            CertificateContract::BatteryCertificate => write!(f, "battery-certificate"),
            CertificateContract::ComplianceCertificate => write!(f, "compliance-certificate"),
            CertificateContract::Traceability => write!(f, "traceability"),
        }
    }
}
