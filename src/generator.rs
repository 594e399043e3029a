use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::mac_address::{Delimiter, MacAddress};

/// Generates random MAC addresses from an injected random source.
///
/// Addresses are meant for testing and simulation. They carry no
/// cryptographic guarantee, are not checked for uniqueness and do not
/// respect vendor prefixes.
#[derive(Debug)]
pub struct MacGenerator<R> {
    rng: R,
}

impl MacGenerator<StdRng> {
    /// Create a generator whose output is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from the current system time.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::seeded(nanos)
    }
}

impl<R: Rng> MacGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate `count` addresses, in generation order.
    ///
    /// Every octet is an independent uniform draw from `0..=255`. Duplicates
    /// are possible.
    pub fn generate(&mut self, count: usize, delimiter: Delimiter) -> Vec<MacAddress> {
        debug!("Generating {count} MAC addresses with delimiter '{delimiter}'");
        (0..count).map(|_| self.next_address(delimiter)).collect()
    }

    fn next_address(&mut self, delimiter: Delimiter) -> MacAddress {
        let octets: [u8; 6] = std::array::from_fn(|_| self.rng.random());
        MacAddress::new(octets, delimiter)
    }
}
