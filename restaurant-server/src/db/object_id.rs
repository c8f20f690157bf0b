//! Natural key generator
//!
//! 12 字节 → 24 位小写十六进制:
//!
//! ```text
//! | 4 bytes unix seconds (BE) | 5 bytes process random | 3 bytes counter (BE) |
//! ```
//!
//! Keys from one process sort in generation order.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};

use rand::Rng;

const COUNTER_MASK: u32 = 0x00FF_FFFF;

static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

fn process_unique() -> &'static [u8; 5] {
    PROCESS_UNIQUE.get_or_init(|| rand::thread_rng().r#gen())
}

fn counter() -> &'static AtomicU32 {
    // start in the lower half so the 24-bit counter does not wrap early
    COUNTER.get_or_init(|| AtomicU32::new(rand::thread_rng().gen_range(0..0x0080_0000)))
}

/// Generate a new natural key
pub fn new_key() -> String {
    let secs = chrono::Utc::now().timestamp() as u32;
    let count = counter().fetch_add(1, Ordering::SeqCst) & COUNTER_MASK;

    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&secs.to_be_bytes());
    bytes[4..9].copy_from_slice(process_unique());
    bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);

    hex::encode(bytes)
}

/// Whether `key` has the shape of a generated natural key
pub fn is_valid(key: &str) -> bool {
    key.len() == 24
        && key
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_shape() {
        let key = new_key();
        assert_eq!(key.len(), 24);
        assert!(is_valid(&key));
        assert!(!is_valid("XYZ"));
        assert!(!is_valid(&key.to_uppercase()));
    }

    #[test]
    fn test_keys_are_monotonic() {
        let keys: Vec<String> = (0..1000).map(|_| new_key()).collect();
        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_process_part_is_stable() {
        let a = new_key();
        let b = new_key();
        assert_eq!(a[8..18], b[8..18]);
    }
}
