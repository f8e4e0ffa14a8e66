use std::ops::{Deref, DerefMut};
use std::sync::Mutex;

/// Source of reusable staging buffers.
pub trait BufferPool {
    /// Returns a zeroed buffer of exactly `len` bytes.
    fn acquire(&self, len: usize) -> Vec<u8>;

    /// Hands a buffer back for reuse.
    fn release(&self, buf: Vec<u8>);
}

/// Scoped lease on a pool buffer; returned to the pool on drop.
pub struct PooledBuffer<'p, P: BufferPool + ?Sized> {
    pool: &'p P,
    buf: Vec<u8>,
}

impl<'p, P: BufferPool + ?Sized> PooledBuffer<'p, P> {
    pub fn acquire(pool: &'p P, len: usize) -> Self {
        let buf = pool.acquire(len);
        debug_assert_eq!(buf.len(), len);
        Self { pool, buf }
    }
}

impl<P: BufferPool + ?Sized> Deref for PooledBuffer<'_, P> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.buf
    }
}

impl<P: BufferPool + ?Sized> DerefMut for PooledBuffer<'_, P> {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}

impl<P: BufferPool + ?Sized> Drop for PooledBuffer<'_, P> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.buf));
    }
}

/// Allocates on every acquire and drops released buffers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPool;

impl BufferPool for NoPool {
    fn acquire(&self, len: usize) -> Vec<u8> {
        vec![0u8; len]
    }

    fn release(&self, _buf: Vec<u8>) {}
}

/// Free list of byte buffers.
///
/// At most `max_retained` buffers are kept; extra releases are dropped.
#[derive(Debug)]
pub struct VecPool {
    free: Mutex<Vec<Vec<u8>>>,
    max_retained: usize,
}

impl VecPool {
    pub fn new(max_retained: usize) -> Self {
        Self {
            free: Mutex::new(Vec::new()),
            max_retained,
        }
    }

    pub fn retained(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Vec<u8>>> {
        // Pool contents stay valid even if a holder panicked.
        self.free.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for VecPool {
    fn default() -> Self {
        Self::new(4)
    }
}

impl BufferPool for VecPool {
    fn acquire(&self, len: usize) -> Vec<u8> {
        let reused = {
            let mut free = self.lock();
            let slot = free.iter().position(|b| b.capacity() >= len);
            slot.map(|i| free.swap_remove(i))
        };

        match reused {
            Some(mut buf) => {
                buf.clear();
                buf.resize(len, 0);
                buf
            }
            None => vec![0u8; len],
        }
    }

    fn release(&self, buf: Vec<u8>) {
        let mut free = self.lock();
        if free.len() >= self.max_retained {
            tracing::warn!(
                capacity = buf.capacity(),
                max_retained = self.max_retained,
                "buffer pool full, dropping released buffer"
            );
            return;
        }
        free.push(buf);
    }
}
