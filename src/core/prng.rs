// Minimal PRNG for visitor ids and decorative randomness.
//
// Not cryptographically secure. Visitor ids are a stand-in identity, not a
// secret, and effect positions only need to look scattered.

#[derive(Debug, Clone)]
pub struct Prng {
    state: u64,
}

impl Prng {
    pub fn new(seed: u64) -> Self {
        // Avoid a zero state.
        let seed = if seed == 0 { 0x9E3779B97F4A7C15 } else { seed };
        Self { state: seed }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    pub fn next_f32_01(&mut self) -> f32 {
        // Convert to [0,1) from the top 24 bits so the result never rounds up to 1.0.
        let x = self.next_u32() >> 8;
        (x as f32) / ((1u32 << 24) as f32)
    }

    #[inline]
    pub fn gen_range_f32(&mut self, low: f32, high: f32) -> f32 {
        low + (high - low) * self.next_f32_01()
    }

    #[inline]
    pub fn gen_range_usize(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        let span = (high - low) as u32;
        let v = self.next_u32() % span;
        low + v as usize
    }

    /// `len` lowercase base-36 characters.
    pub fn base36(&mut self, len: usize) -> String {
        const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
        (0..len)
            .map(|_| ALPHABET[self.gen_range_usize(0, ALPHABET.len())] as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_stay_in_bounds() {
        let mut rng = Prng::new(0);
        for _ in 0..1000 {
            let f = rng.gen_range_f32(2.0, 5.0);
            assert!((2.0..5.0).contains(&f));
            let u = rng.gen_range_usize(3, 7);
            assert!((3..7).contains(&u));
        }
        assert_eq!(rng.gen_range_usize(4, 4), 4);
    }

    #[test]
    fn base36_uses_the_alphabet() {
        let mut rng = Prng::new(1234);
        let s = rng.base36(9);
        assert_eq!(s.len(), 9);
        assert!(s.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
