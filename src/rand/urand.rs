//! Urandom pool - optional /dev/urandom entropy source via a small buffered pool.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use zeroize::Zeroize;

const DEVICE: &str = "/dev/urandom";
const POOL_SIZE: usize = 256;

pub fn is_available() -> bool {
    Path::new(DEVICE).exists()
}

/// Buffered reader over /dev/urandom. Refills in `POOL_SIZE` chunks and
/// zeroes consumed bytes on drop.
pub struct Pool {
    file: File,
    buf: [u8; POOL_SIZE],
    pos: usize,
}

impl Pool {
    pub fn open() -> io::Result<Self> {
        let mut file = File::open(DEVICE)?;
        let mut buf = [0u8; POOL_SIZE];
        file.read_exact(&mut buf)?;
        Ok(Self { file, buf, pos: 0 })
    }

    /// Returns the next u64 from the pool, refilling when exhausted.
    pub fn next_u64(&mut self) -> io::Result<u64> {
        if self.pos + 8 > POOL_SIZE {
            self.file.read_exact(&mut self.buf)?;
            self.pos = 0;
        }
        let mut word = [0u8; 8];
        word.copy_from_slice(&self.buf[self.pos..self.pos + 8]);
        self.buf[self.pos..self.pos + 8].zeroize();
        self.pos += 8;
        Ok(u64::from_le_bytes(word))
    }
}

impl Drop for Pool {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}
