//! # Asset Standard
//!
//! Defines the asset abstraction for the AURUM gateway. Both sides of
//! every operation — the native currency spent into swaps and the stable
//! asset the vault holds — are represented as an [`AssetInfo`] with a
//! unique [`AssetId`], plus the vault's own share asset.
//!
//! Asset IDs are deterministic BLAKE3 hashes of the asset's canonical
//! properties (name, symbol, kind, issuer). The same asset always gets
//! the same ID regardless of when or where it's registered — no registry
//! needed, no coordination required.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// AssetId
// ---------------------------------------------------------------------------

/// A unique, content-addressed identifier for an asset.
///
/// Computed as `BLAKE3(name || symbol || kind_tag || issuer)`. Two assets
/// with identical properties always produce the same ID, making this a
/// natural deduplication key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from a raw 32-byte hash.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw 32-byte identifier.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the hex-encoded asset ID.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses a hex-encoded asset ID.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Derives an `AssetId` from the canonical asset properties.
    ///
    /// The hash input concatenates name, symbol, the kind's single-byte
    /// discriminant, and the issuer, with `0x00` separators so that one
    /// field's suffix can never masquerade as another field's prefix.
    pub fn derive(name: &str, symbol: &str, kind: &AssetKind, issuer: &str) -> Self {
        let mut preimage = Vec::with_capacity(name.len() + symbol.len() + issuer.len() + 8);
        preimage.extend_from_slice(name.as_bytes());
        preimage.push(0x00);
        preimage.extend_from_slice(symbol.as_bytes());
        preimage.push(0x00);
        preimage.push(kind.discriminant());
        preimage.push(0x00);
        preimage.extend_from_slice(issuer.as_bytes());

        Self(*blake3::hash(&preimage).as_bytes())
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId({}...)", &self.to_hex()[..12])
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for AssetId {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// ---------------------------------------------------------------------------
// AssetKind
// ---------------------------------------------------------------------------

/// Classification of an asset by its role in the gateway.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    /// The base currency of the host ledger. Spent into swaps, never held
    /// by the gateway.
    Native,
    /// A dollar-pegged stable asset. The swap output and the vault's
    /// underlying holding.
    Stable,
    /// Vault shares — a transferable claim on a pro-rata slice of the
    /// vault's stable holdings.
    VaultShare,
}

impl AssetKind {
    /// Single-byte discriminant used in ID derivation. Part of the wire
    /// format; never renumber existing variants.
    pub fn discriminant(&self) -> u8 {
        match self {
            AssetKind::Native => 0x01,
            AssetKind::Stable => 0x02,
            AssetKind::VaultShare => 0x03,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Native => write!(f, "Native"),
            AssetKind::Stable => write!(f, "Stable"),
            AssetKind::VaultShare => write!(f, "VaultShare"),
        }
    }
}

// ---------------------------------------------------------------------------
// AssetInfo
// ---------------------------------------------------------------------------

/// Complete metadata for an asset known to the gateway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInfo {
    /// Content-addressed identifier derived from this asset's properties.
    pub id: AssetId,

    /// Human-readable asset name (e.g., "Aurum Dollar").
    pub name: String,

    /// Trading symbol / ticker (e.g., "aUSD").
    pub symbol: String,

    /// Number of decimal places of the smallest unit.
    ///
    /// Display-only: amounts are always `u128` smallest units and the
    /// gateway never divides by this.
    pub decimals: u8,

    /// The address authorized to mint/burn this asset, where applicable.
    pub issuer: String,

    /// The asset's role classification.
    pub kind: AssetKind,
}

impl AssetInfo {
    /// Creates a new [`AssetInfo`] with a deterministically derived ID.
    pub fn new(name: &str, symbol: &str, decimals: u8, kind: AssetKind, issuer: &str) -> Self {
        let id = AssetId::derive(name, symbol, &kind, issuer);
        Self {
            id,
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals,
            issuer: issuer.to_string(),
            kind,
        }
    }
}

// ---------------------------------------------------------------------------
// Pre-defined Assets
// ---------------------------------------------------------------------------

/// System issuer address for protocol-level assets. Not backed by a real
/// keypair; assets under this issuer are governed by the host ledger.
const SYSTEM_ISSUER: &str =
    "aurum:0000000000000000000000000000000000000000000000000000000000000000";

/// The host ledger's native currency. 18 decimal places.
pub fn native_asset() -> AssetInfo {
    AssetInfo::new(
        "Aurum Native",
        "AUR",
        crate::config::NATIVE_DECIMALS,
        AssetKind::Native,
        SYSTEM_ISSUER,
    )
}

/// The stable asset the gateway swaps into and the vault holds.
/// 18 decimal places, matching the native currency's precision.
pub fn stable_asset() -> AssetInfo {
    AssetInfo::new(
        "Aurum Dollar",
        "aUSD",
        crate::config::STABLE_DECIMALS,
        AssetKind::Stable,
        SYSTEM_ISSUER,
    )
}

/// The vault's share asset, minted and burned only by the vault itself.
/// The `issuer` is the vault's address.
pub fn vault_share_asset(vault_address: &str) -> AssetInfo {
    AssetInfo::new(
        "Aurum Yield Share",
        "yaUSD",
        crate::config::STABLE_DECIMALS,
        AssetKind::VaultShare,
        vault_address,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_id_derivation_is_deterministic() {
        let id1 = AssetId::derive("Test", "TST", &AssetKind::Stable, "aurum:issuer");
        let id2 = AssetId::derive("Test", "TST", &AssetKind::Stable, "aurum:issuer");
        assert_eq!(id1, id2);
    }

    #[test]
    fn different_kinds_produce_different_ids() {
        let id1 = AssetId::derive("Dollar", "USD", &AssetKind::Stable, "aurum:issuer");
        let id2 = AssetId::derive("Dollar", "USD", &AssetKind::VaultShare, "aurum:issuer");
        assert_ne!(id1, id2);
    }

    #[test]
    fn different_issuers_produce_different_ids() {
        let id1 = AssetId::derive("Share", "SH", &AssetKind::VaultShare, "aurum:alice");
        let id2 = AssetId::derive("Share", "SH", &AssetKind::VaultShare, "aurum:bob");
        assert_ne!(id1, id2);
    }

    #[test]
    fn asset_id_hex_roundtrip() {
        let id = stable_asset().id;
        let recovered = AssetId::from_hex(&id.to_hex()).unwrap();
        assert_eq!(id, recovered);
    }

    #[test]
    fn kind_discriminants_are_unique() {
        let kinds = [AssetKind::Native, AssetKind::Stable, AssetKind::VaultShare];
        let mut tags: Vec<u8> = kinds.iter().map(|k| k.discriminant()).collect();
        tags.sort();
        tags.dedup();
        assert_eq!(tags.len(), kinds.len());
    }

    #[test]
    fn predefined_assets_are_stable() {
        assert_eq!(native_asset().id, native_asset().id);
        assert_ne!(native_asset().id, stable_asset().id);
        assert_eq!(stable_asset().symbol, "aUSD");
        assert_eq!(stable_asset().decimals, 18);
    }

    #[test]
    fn share_asset_bound_to_vault() {
        let a = vault_share_asset("aurum:vault_a");
        let b = vault_share_asset("aurum:vault_b");
        assert_ne!(a.id, b.id);
        assert_eq!(a.issuer, "aurum:vault_a");
    }

    #[test]
    fn asset_info_serialization_roundtrip() {
        let asset = stable_asset();
        let json = serde_json::to_string(&asset).expect("serialize");
        let recovered: AssetInfo = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(asset, recovered);
    }
}
