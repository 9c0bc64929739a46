//! Deterministic hashing for node identity
//!
//! Wraps blake3 so ids stay the same across processes and runs.

/// A deterministic hasher using blake3
///
/// Unlike `std::hash::Hasher`, the same input always produces the same
/// output, regardless of process or platform.
pub struct StableHasher {
    inner: blake3::Hasher,
}

impl StableHasher {
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    /// Update with raw bytes
    #[inline]
    pub fn update(mut self, data: &[u8]) -> Self {
        self.inner.update(data);
        self
    }

    /// Update with a string, length-prefixed so `"ab" + "c"` != `"a" + "bc"`
    #[inline]
    pub fn update_str(self, s: &str) -> Self {
        self.update_u64(s.len() as u64).update(s.as_bytes())
    }

    /// Update with a u64 value (little-endian)
    #[inline]
    pub fn update_u64(self, v: u64) -> Self {
        self.update(&v.to_le_bytes())
    }

    /// Update with a u32 value (little-endian)
    #[inline]
    pub fn update_u32(self, v: u32) -> Self {
        self.update(&v.to_le_bytes())
    }

    /// Finish and return the first 8 bytes of the digest as a little-endian u64
    #[inline]
    pub fn finish(self) -> u64 {
        let hash = self.inner.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }
}

impl Default for StableHasher {
    fn default() -> Self {
        Self::new()
    }
}
