//! SHA-1 digest (RFC 3174).

use std::{borrow::Borrow, fmt};

/// Stage constants, one per 20-round stage.
const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

const INIT: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// SHA-1 digest value (20 bytes).
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sha1([u8; 20]);

impl Sha1 {
    /// The size of the digest in bytes.
    pub const SIZE: usize = 20;

    /// Compute the SHA-1 digest of the provided bytes.
    ///
    /// ```
    /// use bytekit_core::Sha1;
    ///
    /// let digest = Sha1::new(b"hello");
    /// assert_eq!(digest.to_hex(), "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d");
    /// ```
    pub fn new(buf: impl AsRef<[u8]>) -> Self {
        let mut hasher = Sha1Hasher::new();
        hasher.update(buf.as_ref());
        hasher.finalize()
    }

    /// Bytes of the digest.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Create a `Sha1` from its raw bytes representation.
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Render the digest as 40 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        data_encoding::HEXLOWER.encode(&self.0)
    }
}

impl AsRef<[u8]> for Sha1 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for Sha1 {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 20]> for Sha1 {
    fn from(value: [u8; 20]) -> Self {
        Self(value)
    }
}

impl From<Sha1> for [u8; 20] {
    fn from(value: Sha1) -> Self {
        value.0
    }
}

impl fmt::Debug for Sha1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sha1").field(&self.to_hex()).finish()
    }
}

impl fmt::Display for Sha1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Incremental SHA-1 hasher.
///
/// Same padding structure as MD5 but with the message bit length appended
/// big-endian, and big-endian words throughout.
#[derive(Clone)]
pub struct Sha1Hasher {
    state: [u32; 5],
    /// Partial input block, `buf_len` bytes valid.
    buf: [u8; 64],
    buf_len: usize,
    /// Total message length in bytes.
    len: u64,
}

impl Default for Sha1Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha1Hasher {
    pub fn new() -> Self {
        Self {
            state: INIT,
            buf: [0u8; 64],
            buf_len: 0,
            len: 0,
        }
    }

    /// Feed more message bytes into the hasher.
    pub fn update(&mut self, mut input: &[u8]) {
        self.len = self.len.wrapping_add(input.len() as u64);

        if self.buf_len > 0 {
            let take = (64 - self.buf_len).min(input.len());
            self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&input[..take]);
            self.buf_len += take;
            input = &input[take..];
            if self.buf_len == 64 {
                compress(&mut self.state, &self.buf);
                self.buf_len = 0;
            } else {
                // Input exhausted without filling the block.
                return;
            }
        }

        let mut chunks = input.chunks_exact(64);
        for block in &mut chunks {
            compress(&mut self.state, block.try_into().unwrap());
        }
        let rest = chunks.remainder();
        self.buf[..rest.len()].copy_from_slice(rest);
        self.buf_len = rest.len();
    }

    /// Pad the message and produce the digest.
    pub fn finalize(mut self) -> Sha1 {
        let bit_len = self.len.wrapping_mul(8);
        self.update(&[0x80]);
        while self.buf_len != 56 {
            self.update(&[0]);
        }
        self.update(&bit_len.to_be_bytes());
        debug_assert_eq!(self.buf_len, 0);

        let mut out = [0u8; 20];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Sha1(out)
    }
}

/// One application of the compression function to a 512-bit block.
fn compress(state: &mut [u32; 5], block: &[u8; 64]) {
    // Expand the 16 block words to 80 via the XOR-rotate schedule.
    let mut w = [0u32; 80];
    for (i, chunk) in block.chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes(chunk.try_into().unwrap());
    }
    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (i, word) in w.into_iter().enumerate() {
        let (f, k) = match i {
            0..=19 => ((b & c) | (!b & d), K[0]),
            20..=39 => (b ^ c ^ d, K[1]),
            40..=59 => ((b & c) | (b & d) | (c & d), K[2]),
            _ => (b ^ c ^ d, K[3]),
        };
        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(word);
        (a, b, c, d, e) = (temp, a, b.rotate_left(30), c, d);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}
