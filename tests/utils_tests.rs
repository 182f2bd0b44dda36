use oncwire::utils::{generate_xid, now};
use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

#[test]
fn test_now_monotonicity() {
    let t1 = now();
    let t2 = now();
    assert!(t2 >= t1, "Timestamp is not monotonic: {} < {}", t2, t1);
}

#[test]
fn test_now_close_to_system_time() {
    let system_time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_micros() as u64;

    let reported = now();

    let delta = if system_time > reported {
        system_time - reported
    } else {
        reported - system_time
    };

    // Acceptable skew threshold (e.g., 5 milliseconds)
    assert!(delta < 5_000, "Timestamp delta too large: {} µs", delta);
}

#[test]
fn test_generate_xid_uniqueness() {
    let mut seen = HashSet::new();

    for _ in 0..10_000 {
        let xid = generate_xid();
        assert!(seen.insert(xid), "Duplicate xid generated: {}", xid);
    }
}
