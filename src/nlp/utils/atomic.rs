// An f64 with atomic load / store, stored as its bit pattern
// in an AtomicU64.  Only the operations needed here are provided.

pub(crate) use std::sync::atomic::Ordering;
use std::sync::atomic::AtomicU64;

#[derive(Debug)]
pub(crate) struct AtomicF64 {
    bits: AtomicU64,
}

impl AtomicF64 {
    pub(crate) fn new(v: f64) -> Self {
        Self {
            bits: AtomicU64::new(v.to_bits()),
        }
    }

    pub(crate) fn load(&self, order: Ordering) -> f64 {
        f64::from_bits(self.bits.load(order))
    }

    pub(crate) fn store(&self, v: f64, order: Ordering) {
        self.bits.store(v.to_bits(), order)
    }
}

#[test]
fn test_atomic_f64() {
    let a = AtomicF64::new(1.5);
    assert_eq!(a.load(Ordering::Relaxed), 1.5);
    a.store(-2.25, Ordering::Relaxed);
    assert_eq!(a.load(Ordering::Relaxed), -2.25);
}
