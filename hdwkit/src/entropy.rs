//! Operating-system randomness for fresh wallets.

use rand_core::{OsRng, RngCore};
use zeroize::Zeroizing;

/// Fill an `N`-byte buffer from the OS random number generator.
pub fn random_bytes<const N: usize>() -> Zeroizing<[u8; N]> {
    let mut buf = Zeroizing::new([0u8; N]);
    OsRng.fill_bytes(buf.as_mut());
    buf
}
