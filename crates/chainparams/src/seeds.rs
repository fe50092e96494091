//! Conversion of packed fixed-seed tables into peer address records.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::{SystemTime, UNIX_EPOCH};

use bscd_consensus::constants::{NODE_NETWORK, ONE_WEEK_SECS};
use bscd_log::log_warn;
use rand::Rng;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SeedAddress {
    pub addr: SocketAddr,
    pub services: u64,
    /// Unix time the peer was supposedly last seen, one to two weeks ago.
    pub last_seen: i64,
}

/// Materializes `table` using the system clock and thread-local RNG.
pub fn materialize_seeds(table: &[u32], port: u16) -> Vec<SeedAddress> {
    let now = unix_seconds(SystemTime::now());
    materialize_seeds_at(table, port, now, &mut rand::thread_rng())
}

/// Signed seconds since the Unix epoch; negative for clocks set before 1970.
fn unix_seconds(now: SystemTime) -> i64 {
    match now.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX),
        Err(err) => {
            let behind = i64::try_from(err.duration().as_secs()).unwrap_or(i64::MAX);
            log_warn!("system clock is {behind}s before the unix epoch");
            -behind
        }
    }
}

/// One record per table entry, in table order. The first octet of each
/// address lives in the entry's most significant byte.
pub fn materialize_seeds_at<R: Rng>(
    table: &[u32],
    port: u16,
    now: i64,
    rng: &mut R,
) -> Vec<SeedAddress> {
    table
        .iter()
        .map(|entry| SeedAddress {
            addr: SocketAddr::from((Ipv4Addr::from(entry.to_be_bytes()), port)),
            services: NODE_NETWORK,
            last_seen: now - rng.gen_range(0..ONE_WEEK_SECS) - ONE_WEEK_SECS,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    #[test]
    fn duplicates_are_kept() {
        let mut rng = StdRng::seed_from_u64(7);
        let seeds = materialize_seeds_at(&[0x7f00_0001, 0x7f00_0001], 1, 0, &mut rng);
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].addr, seeds[1].addr);
        assert_eq!(seeds[0].addr.to_string(), "127.0.0.1:1");
    }

    #[test]
    fn clock_before_epoch_is_negative() {
        let before = UNIX_EPOCH - Duration::from_secs(90);
        let after = UNIX_EPOCH + Duration::from_secs(1_534_245_522);
        assert_eq!(unix_seconds(before), -90);
        assert_eq!(unix_seconds(after), 1_534_245_522);
        assert_eq!(unix_seconds(UNIX_EPOCH), 0);

        let mut rng = StdRng::seed_from_u64(1);
        let seeds = materialize_seeds_at(&[0x7f00_0001], 1, unix_seconds(before), &mut rng);
        assert!(seeds[0].last_seen <= -90 - ONE_WEEK_SECS);
        assert!(seeds[0].last_seen > -90 - 2 * ONE_WEEK_SECS);
    }
}
