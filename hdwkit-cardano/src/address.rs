//! Shelley address encoding (CIP-19).

use hdwkit::Result;
use hdwkit::encoding::bech32_encode;
use hdwkit::hash::blake2b_224;

use crate::coin::CardanoCoin;

// Header nibbles: base address with key payment and key stake parts, and a
// reward address with a key stake part.
const BASE_ADDRESS: u8 = 0b0000_0000;
const REWARD_ADDRESS: u8 = 0b1110_0000;

/// Base address paying to `payment` and delegating with `stake`.
pub(crate) fn base_address(coin: CardanoCoin, payment: &[u8; 32], stake: &[u8; 32]) -> Result<String> {
    let mut data = Vec::with_capacity(1 + 28 + 28);
    data.push(BASE_ADDRESS | coin.network_id());
    data.extend_from_slice(&blake2b_224(payment));
    data.extend_from_slice(&blake2b_224(stake));
    bech32_encode(coin.address_hrp(), &data)
}

/// Reward (stake) address of `stake`.
pub(crate) fn reward_address(coin: CardanoCoin, stake: &[u8; 32]) -> Result<String> {
    let mut data = Vec::with_capacity(1 + 28);
    data.push(REWARD_ADDRESS | coin.network_id());
    data.extend_from_slice(&blake2b_224(stake));
    bech32_encode(coin.reward_hrp(), &data)
}
