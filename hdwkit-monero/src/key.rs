//! Spend/view key pairs and the addresses derived from them.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use hdwkit::hash::keccak256;
use hdwkit::{Error, KeyRecord, Result};
use zeroize::Zeroizing;

use crate::kind::MoneroKeyKind;
use crate::network::MoneroNetwork;

const SUBADDRESS_DOMAIN: &[u8] = b"SubAddr\0";

/// `sc_reduce32(keccak(data))`.
fn hash_to_scalar(data: &[u8]) -> Scalar {
    Scalar::from_bytes_mod_order(keccak256(data))
}

fn canonical_scalar(bytes: &[u8], what: &'static str) -> Result<Scalar> {
    let array: [u8; 32] = bytes
        .try_into()
        .map_err(|_| Error::private_key(bytes, format!("{what} must be 32 bytes")))?;
    Option::from(Scalar::from_canonical_bytes(array))
        .ok_or_else(|| Error::private_key(bytes, format!("{what} is not a reduced scalar")))
}

fn encode_address(
    prefix: u8,
    spend: &EdwardsPoint,
    view: &EdwardsPoint,
    extra: &[u8],
) -> Result<String> {
    let mut data = Vec::with_capacity(1 + 64 + extra.len());
    data.push(prefix);
    data.extend_from_slice(spend.compress().as_bytes());
    data.extend_from_slice(view.compress().as_bytes());
    data.extend_from_slice(extra);
    base58_monero::encode_check(&data)
        .map_err(|e| Error::Derivation(format!("Monero base58 encoding: {e}")))
}

/// The key set of one Monero wallet.
///
/// The private spend key is absent for watch-only wallets; the private view
/// key is always known since it is needed to find subaddresses.
#[derive(Clone)]
pub(crate) struct MoneroKeys {
    priv_spend: Option<Scalar>,
    priv_view: Scalar,
    pub_spend: EdwardsPoint,
    pub_view: EdwardsPoint,
}

impl MoneroKeys {
    /// Keys of a wallet seed: 32 bytes are reduced directly, 16 bytes are
    /// hashed first.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        let spend = match seed.len() {
            32 => {
                let mut bytes = Zeroizing::new([0u8; 32]);
                bytes.copy_from_slice(seed);
                Scalar::from_bytes_mod_order(*bytes)
            }
            16 => hash_to_scalar(seed),
            n => return Err(Error::seed(seed, format!("expected 16 or 32 bytes, got {n}"))),
        };
        Ok(Self::from_spend(spend))
    }

    /// Keys from a private spend key, the view key hashed from it.
    pub fn from_private_spend(key: &[u8]) -> Result<Self> {
        Ok(Self::from_spend(canonical_scalar(key, "private spend key")?))
    }

    /// Watch-only keys.
    pub fn from_watch_only(priv_view: &[u8], pub_spend: &[u8]) -> Result<Self> {
        let priv_view = canonical_scalar(priv_view, "private view key")?;
        let pub_spend = CompressedEdwardsY::from_slice(pub_spend)
            .ok()
            .and_then(|c| c.decompress())
            .ok_or_else(|| Error::public_key(pub_spend, "not a valid ed25519 point"))?;
        Ok(Self {
            priv_spend: None,
            priv_view,
            pub_spend,
            pub_view: EdwardsPoint::mul_base(&priv_view),
        })
    }

    fn from_spend(spend: Scalar) -> Self {
        let view = hash_to_scalar(spend.as_bytes());
        Self {
            priv_spend: Some(spend),
            priv_view: view,
            pub_spend: EdwardsPoint::mul_base(&spend),
            pub_view: EdwardsPoint::mul_base(&view),
        }
    }

    pub fn is_watch_only(&self) -> bool {
        self.priv_spend.is_none()
    }

    pub fn primary_address(&self, network: MoneroNetwork) -> Result<String> {
        encode_address(network.prefixes().standard, &self.pub_spend, &self.pub_view, &[])
    }

    pub fn integrated_address(&self, network: MoneroNetwork, payment_id: &[u8; 8]) -> Result<String> {
        encode_address(
            network.prefixes().integrated,
            &self.pub_spend,
            &self.pub_view,
            payment_id,
        )
    }

    /// Subaddress `(major, minor)`; `(0, 0)` is the primary address.
    pub fn subaddress(&self, network: MoneroNetwork, major: u32, minor: u32) -> Result<String> {
        if major == 0 && minor == 0 {
            return self.primary_address(network);
        }
        let mut data = Zeroizing::new(Vec::with_capacity(SUBADDRESS_DOMAIN.len() + 40));
        data.extend_from_slice(SUBADDRESS_DOMAIN);
        data.extend_from_slice(self.priv_view.as_bytes());
        data.extend_from_slice(&major.to_le_bytes());
        data.extend_from_slice(&minor.to_le_bytes());
        let m = hash_to_scalar(&data);
        let spend = self.pub_spend + EdwardsPoint::mul_base(&m);
        let view = self.priv_view * spend;
        encode_address(network.prefixes().subaddress, &spend, &view, &[])
    }

    pub fn key_record(
        &self,
        network: MoneroNetwork,
        payment_id: Option<&[u8; 8]>,
    ) -> Result<KeyRecord<MoneroKeyKind>> {
        let mut record = KeyRecord::new();
        if let Some(spend) = &self.priv_spend {
            record.insert(MoneroKeyKind::PrivSkey, hex::encode(spend.as_bytes()));
        }
        record.insert(MoneroKeyKind::PrivVkey, hex::encode(self.priv_view.as_bytes()));
        record.insert(MoneroKeyKind::PubSkey, hex::encode(self.pub_spend.compress().as_bytes()));
        record.insert(MoneroKeyKind::PubVkey, hex::encode(self.pub_view.compress().as_bytes()));
        record.insert(MoneroKeyKind::PrimaryAddress, self.primary_address(network)?);
        if let Some(id) = payment_id {
            record.insert(MoneroKeyKind::IntegratedAddress, self.integrated_address(network, id)?);
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const VIEW: [u8; 32] = hex!("77916d0cd56ed1920aef6ca56d8a41bac915b68e4c46a589e0956e27a7b77404");
    const SPEND: [u8; 32] = hex!("8163466f1883598e6dd14027b8da727057165da91485834314f5500a65846f09");
    const PUB_SPEND: [u8; 32] = hex!("1e70d53a67da1e77223b2b8522dafe30810fc2e66784356bf722fa88c4fbd2ab");

    fn watch_only() -> MoneroKeys {
        MoneroKeys::from_watch_only(&VIEW, &PUB_SPEND).unwrap()
    }

    #[test]
    fn public_view_key() {
        let keys = watch_only();
        assert_eq!(
            hex::encode(keys.pub_view.compress().as_bytes()),
            "eac2cc96e0ae684388e3185d5277e51313bff98b9ad4a12dcd9205f20d37f1a3"
        );
    }

    #[test]
    fn subaddress_vector() {
        assert_eq!(
            watch_only().subaddress(MoneroNetwork::Mainnet, 2, 18).unwrap(),
            "89pMNxzcCo5LAPZDX4qaTeanA6ZiS3VRdUbeKHzbDZkD1Q3YsDDfmXbT2zyjLeHWuuN4vxKne8kNpjH3cMk7nmhwSALCxsd"
        );
    }

    fn point(bytes: [u8; 32]) -> EdwardsPoint {
        CompressedEdwardsY(bytes).decompress().unwrap()
    }

    #[test]
    fn standard_address_encoding() {
        let spend = point(hex!("e2bb117506bc69b13acfcd2acde5fb8176fd15f53143244b3e0c505af4c26cd2"));
        let view = point(hex!("dc73c337bd58884e3f202921a8cdf5038bea6d40c6b3356cf74db719ac3b7173"));
        let prefixes = MoneroNetwork::Mainnet.prefixes();
        assert_eq!(
            encode_address(prefixes.standard, &spend, &view, &[]).unwrap(),
            "4ADT1BtbxqEWeMKp9GgPr2NeyJXXtNxvoDawpyA4WpzFcGcoHUvXeijE66DNfohE9r1bQYaBiQjEtKE7CtkTdLwiDznFzra"
        );
    }

    #[test]
    fn integrated_address_encoding() {
        let spend = point(hex!("11517fe6a6235124a15e9ace3c62c33e0c0bea85e4c44d0344bc544e5e6dee2c"));
        let view = point(hex!("73d4d3ccc61e4946eb34a0c827d786eff9812f9c0e7412bf70cf8bd0363b5c73"));
        let prefixes = MoneroNetwork::Mainnet.prefixes();
        assert_eq!(
            encode_address(prefixes.integrated, &spend, &view, &hex!("5876b8b72996ff97")).unwrap(),
            "4Byr22j9M2878Mtyb3fEPcBNwBZf5EXqn1Yi6VzR46618SFBrYysab2Cs1474CVDbsh94AJq7vuV3Z2DRq4zLcY3LHzo1Nbv3d8J6VhvCV"
        );
    }

    #[test]
    fn index_zero_is_primary() {
        let keys = watch_only();
        assert_eq!(
            keys.subaddress(MoneroNetwork::Mainnet, 0, 0).unwrap(),
            keys.primary_address(MoneroNetwork::Mainnet).unwrap()
        );
    }

    #[test]
    fn view_key_is_hashed_from_spend() {
        let keys = MoneroKeys::from_private_spend(&SPEND).unwrap();
        assert_eq!(
            hex::encode(keys.priv_view.as_bytes()),
            "4f7ca68734a54d8a4bcdd1be4967843c043b76f30b2c5f0659f944d42366110f"
        );
        assert_eq!(keys.pub_spend.compress().to_bytes(), PUB_SPEND);
    }

    #[test]
    fn network_changes_prefix_only() {
        let keys = MoneroKeys::from_private_spend(&SPEND).unwrap();
        assert_eq!(
            keys.primary_address(MoneroNetwork::Stagenet).unwrap(),
            "52z3wMo796DLvkHTcnbHrd97YxWFA7ji4K4QAbcS891jVjWrW27Qe1w1dHCz3GAX2RUHL1it5PGVmSWteA9M6aqTP5BnUPN"
        );
        assert_eq!(
            keys.primary_address(MoneroNetwork::Testnet).unwrap(),
            "9tKZLmYQmrDLvkHTcnbHrd97YxWFA7ji4K4QAbcS891jVjWrW27Qe1w1dHCz3GAX2RUHL1it5PGVmSWteA9M6aqTP5g1nfn"
        );
    }

    #[test]
    fn rejects_bad_keys() {
        assert!(matches!(
            MoneroKeys::from_private_spend(&[0xff; 32]),
            Err(Error::InvalidPrivateKey { .. })
        ));
        assert!(MoneroKeys::from_private_spend(&SPEND[..31]).is_err());
        assert!(matches!(
            MoneroKeys::from_watch_only(&VIEW, &[0xff; 31]),
            Err(Error::InvalidPublicKey { .. })
        ));
        assert!(MoneroKeys::from_seed(&[1u8; 20]).is_err());
    }
}
