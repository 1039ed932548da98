use blake3::Hasher;
use crate::types::Vec2;
use crate::Scalar;

/// blake3 over the little-endian encoding of world state. Two worlds that
/// agree bit for bit produce the same digest.
pub struct StepHasher(Hasher);

impl StepHasher {
    pub fn new() -> Self { StepHasher(Hasher::new()) }
    pub fn update_bytes(&mut self, bytes: &[u8]) { self.0.update(bytes); }
    #[inline] pub fn update_u32(&mut self, v: u32) { self.0.update(&v.to_le_bytes()); }
    #[inline] pub fn update_scalar(&mut self, s: Scalar) { self.0.update(&s.to_le_bytes()); }
    #[inline] pub fn update_vec2(&mut self, v: Vec2) {
        self.update_scalar(v.x);
        self.update_scalar(v.y);
    }
    /// Length-prefixed so adjacent strings cannot run together.
    pub fn update_str(&mut self, s: &str) {
        self.update_u32(s.len() as u32);
        self.0.update(s.as_bytes());
    }
    pub fn finalize(self) -> [u8; 32] { *self.0.finalize().as_bytes() }
}

impl Default for StepHasher {
    fn default() -> Self { Self::new() }
}

/// Lowercase hex, for logs and CLI output.
pub fn digest_hex(d: &[u8; 32]) -> String {
    d.iter().map(|b| format!("{b:02x}")).collect()
}
