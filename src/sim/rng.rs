//! Seeded small-fast-counter generator
//!
//! Four 32-bit registers, all arithmetic wrapping at 32 bits. The stream must
//! be bit-identical across platforms so a daily seed yields the same board
//! everywhere.

use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Golden-ratio constant loaded into `b`, `c` and `d`
const GOLDEN: u32 = 0x9e37_79b9;

/// 2^32, for mapping a `u32` draw into [0, 1)
const TWO_POW_32: f64 = 4_294_967_296.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sfc32 {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl Sfc32 {
    /// Seed from a signed 32-bit seed value (see [`crate::seed::parse_seed`])
    pub fn new(seed: i32) -> Self {
        Self {
            a: seed as u32,
            b: GOLDEN,
            c: GOLDEN,
            d: GOLDEN,
        }
    }

    /// Seed straight from a seed string
    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(crate::seed::parse_seed(seed))
    }

    /// Next raw 32-bit output
    #[inline]
    pub fn next_raw(&mut self) -> u32 {
        let t = self.a.wrapping_add(self.b).wrapping_add(self.d);
        self.d = self.d.wrapping_add(1);
        self.a = self.b ^ (self.b >> 9);
        self.b = self.c.wrapping_add(self.c << 3);
        self.c = self.c.rotate_left(21).wrapping_add(t);
        t
    }

    /// Next real in [0, 1)
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.next_raw() as f64 / TWO_POW_32
    }
}

impl RngCore for Sfc32 {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.next_raw() as u64;
        let hi = self.next_raw() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
