//! Block-buffered random source.
//!
//! All randomness in the saver flows through [`RandomSource`]: a 32 KiB byte
//! buffer refilled in whole blocks from an [`EntropyBackend`] and drained one
//! byte at a time. Refilling in blocks keeps the cost of the OS entropy call
//! amortized over thousands of draws instead of paying a syscall per byte.
//!
//! The source is an explicit ECS resource, not a process-wide global, so
//! tests can swap the OS backend for [`ScriptedEntropy`] and replay an exact
//! byte sequence.

use bevy_ecs::prelude::Resource;
use rand::RngCore;
use rand::rngs::OsRng;
use thiserror::Error;

/// Size of one refill block.
pub const ENTROPY_BLOCK_LEN: usize = 32 * 1024;

#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("OS entropy source unavailable: {0}")]
    Unavailable(String),
}

/// A refillable block source of random bytes.
///
/// Implementations fill the whole slice on every call. The OS backend is
/// cryptographically sourced; [`ScriptedEntropy`] is deterministic and meant
/// for tests and replay.
pub trait EntropyBackend: Send + Sync {
    fn fill(&mut self, buf: &mut [u8]);
}

/// OS CSPRNG backend.
pub struct OsEntropy;

impl OsEntropy {
    /// Acquire the OS entropy source, performing a trial read so that an
    /// unavailable source fails at startup instead of mid-run.
    pub fn probe() -> Result<Self, EntropyError> {
        let mut probe = [0u8; 16];
        OsRng
            .try_fill_bytes(&mut probe)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))?;
        Ok(Self)
    }
}

impl EntropyBackend for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) {
        // OsRng already probed at startup; a later failure panics inside
        // `rand` rather than handing out uninitialized bytes.
        OsRng.fill_bytes(buf);
    }
}

/// Deterministic backend that cycles a fixed byte script.
///
/// Bytes come out of [`RandomSource`] in script order, wrapping around when
/// the script is shorter than a refill block.
pub struct ScriptedEntropy {
    script: Vec<u8>,
    next: usize,
}

impl ScriptedEntropy {
    pub fn new(script: impl Into<Vec<u8>>) -> Self {
        let script = script.into();
        assert!(!script.is_empty(), "entropy script must not be empty");
        Self { script, next: 0 }
    }
}

impl EntropyBackend for ScriptedEntropy {
    fn fill(&mut self, buf: &mut [u8]) {
        for b in buf.iter_mut() {
            *b = self.script[self.next];
            self.next = (self.next + 1) % self.script.len();
        }
    }
}

/// Buffered byte source backing every random decision in the saver.
///
/// Invariant: `off` is in `[0, ENTROPY_BLOCK_LEN]`; `off == ENTROPY_BLOCK_LEN`
/// means the buffer is exhausted and the next draw triggers a block refill.
#[derive(Resource)]
pub struct RandomSource {
    backend: Box<dyn EntropyBackend>,
    buf: Vec<u8>,
    off: usize,
}

impl RandomSource {
    /// Create a source over `backend` with an empty buffer, forcing a refill
    /// on the first draw.
    pub fn new(backend: impl EntropyBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            buf: vec![0; ENTROPY_BLOCK_LEN],
            off: ENTROPY_BLOCK_LEN,
        }
    }

    /// One uniformly random byte.
    pub fn next_u8(&mut self) -> u8 {
        if self.off == self.buf.len() {
            self.backend.fill(&mut self.buf);
            self.off = 0;
        }
        let b = self.buf[self.off];
        self.off += 1;
        b
    }

    /// One random byte reinterpreted as signed (−128..=127).
    pub fn next_i8(&mut self) -> i8 {
        self.next_u8() as i8
    }

    /// Four consecutive random bytes composed least-significant first.
    pub fn next_u32(&mut self) -> u32 {
        u32::from(self.next_u8())
            | u32::from(self.next_u8()) << 8
            | u32::from(self.next_u8()) << 16
            | u32::from(self.next_u8()) << 24
    }
}
