use crate::utils::now;
use once_cell::sync::Lazy;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic transaction-id source, seeded randomly per process so xids
/// do not repeat across client restarts.
static XID_COUNTER: Lazy<AtomicU64> = Lazy::new(|| {
    let mut rng = ChaCha8Rng::seed_from_u64(now());
    AtomicU64::new(rng.next_u32() as u64)
});

#[inline]
pub fn generate_xid() -> u32 {
    XID_COUNTER.fetch_add(1, Ordering::Relaxed) as u32
}
