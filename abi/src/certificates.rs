//! ABI fragments for the ChainIntegrate certificate contracts (LSP8-based)

use alloy::sol;

/// Conformity status for a certificate that is valid and unrevoked
pub const CONFORMITY_STATUS_VALID: u8 = 0;

sol! {
    /// Supplier quality certificate collection
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract SupplierQualityLSP8 {
        constructor(string memory name, string memory symbol, address owner, address qualityOffice);

        function owner() external view returns (address);
        function qualityOffice() external view returns (address);
    }

    /// Battery carbon certificate collection
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract BatteryCarbonCertificateLSP8 {
        constructor(string memory name, string memory symbol, address owner);

        function owner() external view returns (address);
    }

    /// Compliance certificate collection
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract ComplianceCertificateLSP8 {
        constructor(address owner);
    }

    /// Traceability certificate collection, carrying per-token conformity records
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract Traceability {
        constructor(address owner);

        /// The conformity record attached to a minted certificate
        ///
        /// All identifying fields are keccak256 hashes so that no company or
        /// batch identifiers appear on-chain in the clear.
        struct ConformityData {
            /// Hash of the human-readable certificate id
            bytes32 certificateId;
            /// Hash of the (salted) company identifier
            bytes32 companyIdHash;
            /// Hash of the (salted) production batch identifier
            bytes32 batchIdHash;
            /// Hash of the conformity standard name
            bytes32 standardHash;
            /// Issuance time, seconds since the Unix epoch
            uint64 issuedAt;
            /// Expiry time, or 0 for no expiry
            uint64 validUntil;
            /// Hash of the certificate document contents
            bytes32 documentHash;
            /// URI where the certificate document is published
            string documentURI;
            /// Conformity status code
            uint8 status;
        }

        function mintCert(bytes32 tokenId, address to, bytes memory data) external;
        function setConformityData(bytes32 tokenId, ConformityData memory data) external;
    }

    /// Issuer allow-list surface shared by the certificate contracts
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IIssuerAllowlist {
        function setIssuerAllowed(address issuer, bool allowed) external;
        function isIssuerAllowed(address issuer) external view returns (bool);
    }
}
