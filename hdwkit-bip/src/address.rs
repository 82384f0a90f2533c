//! Address encoding for every supported coin.

use bitcoin::key::TapTweak;
use bitcoin::secp256k1::{PublicKey, Secp256k1, XOnlyPublicKey};
use hdwkit::encoding::{base58check_encode, bech32_encode, eip55_checksum, segwit_encode};
use hdwkit::hash::{hash160, keccak256};
use hdwkit::{Error, Result};

use crate::bip::{Bip, ScriptKind};
use crate::coin::{AddressStyle, Coin};

/// Encode the address of a secp256k1 public key for `coin` under `bip`.
pub(crate) fn secp256k1_address(coin: Coin, bip: Bip, public_key: &PublicKey) -> Result<String> {
    match coin.address_style() {
        AddressStyle::Utxo { p2pkh, p2sh, hrp } => {
            let key_hash = hash160(&public_key.serialize());
            match (bip.script_kind(), hrp) {
                (ScriptKind::P2pkh, _) => Ok(base58check_encode(&[p2pkh], &key_hash)),
                (ScriptKind::P2shP2wpkh, _) => {
                    let mut script = Vec::with_capacity(22);
                    script.extend_from_slice(&[0x00, 0x14]);
                    script.extend_from_slice(&key_hash);
                    Ok(base58check_encode(&[p2sh], &hash160(&script)))
                }
                (ScriptKind::P2wpkh, Some(hrp)) => segwit_encode(hrp, 0, &key_hash),
                (ScriptKind::P2tr, Some(hrp)) => {
                    let secp = Secp256k1::verification_only();
                    let (tweaked, _parity) = XOnlyPublicKey::from(*public_key).tap_tweak(&secp, None);
                    segwit_encode(hrp, 1, &tweaked.serialize())
                }
                _ => Err(Error::unsupported(
                    "address type",
                    format!("{bip} for {coin}"),
                )),
            }
        }
        AddressStyle::Ethereum => Ok(eip55_checksum(&ethereum_key_hash(public_key))),
        AddressStyle::Tron => Ok(base58check_encode(&[0x41], &ethereum_key_hash(public_key))),
        AddressStyle::Cosmos { hrp } => bech32_encode(hrp, &hash160(&public_key.serialize())),
        AddressStyle::Solana => Err(Error::unsupported(
            "secp256k1 key",
            coin.name(),
        )),
    }
}

/// Encode the address of an ed25519 public key.
pub(crate) fn ed25519_address(coin: Coin, public_key: &[u8; 32]) -> Result<String> {
    match coin.address_style() {
        AddressStyle::Solana => Ok(bs58::encode(public_key).into_string()),
        _ => Err(Error::unsupported("ed25519 key", coin.name())),
    }
}

fn ethereum_key_hash(public_key: &PublicKey) -> [u8; 20] {
    let uncompressed = public_key.serialize_uncompressed();
    let hash = keccak256(&uncompressed[1..]);
    let mut out = [0u8; 20];
    out.copy_from_slice(&hash[12..]);
    out
}
