use crate::Error;
use std::io::Write;

/// A fixed-capacity write buffer with a cursor.
///
/// Values are laid out big-endian at the cursor, which advances past each
/// write. The capacity is set at construction and never changes; a write that
/// does not fit fails with [`Error::Overflow`] and leaves the buffer
/// untouched.
///
/// The storage is generic: [`allocate`](Self::allocate) produces an owning
/// `ByteBuffer<Vec<u8>>`, while [`wrap`](Self::wrap) lays writes directly
/// into any caller-supplied storage, such as a `&mut [u8]`.
#[derive(Debug)]
pub struct ByteBuffer<B> {
    storage: B,
    position: usize,
}

impl ByteBuffer<Vec<u8>> {
    /// Make a new buffer of `capacity` zero bytes, with the cursor at the start.
    ///
    /// The capacity is signed so that out-of-domain requests fail with
    /// [`Error::InvalidCapacity`] instead of being unrepresentable: anything
    /// negative, or too large for the target's sizes, is rejected.
    pub fn allocate(capacity: i64) -> Result<Self, Error> {
        let capacity = usize::try_from(capacity)
            .map_err(|error| Error::InvalidCapacity { capacity, error })?;

        Ok(Self {
            storage: vec![0; capacity],
            position: 0,
        })
    }
}

impl<B> ByteBuffer<B> {
    /// Make a new buffer over existing storage, with the cursor at the start.
    ///
    /// The storage is used as-is, not copied: writes land directly in it,
    /// over whatever bytes it already holds. Wrap a `&mut [u8]` to fill bytes
    /// owned elsewhere, or pass owned storage and take it back with
    /// [`into_inner`](Self::into_inner).
    pub fn wrap(storage: B) -> Self {
        Self {
            storage,
            position: 0,
        }
    }

    /// Get the cursor position, the offset of the next write.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the backing storage.
    pub fn into_inner(self) -> B {
        self.storage
    }
}

impl<B> ByteBuffer<B>
where
    B: AsRef<[u8]>,
{
    /// Get the total capacity.
    pub fn capacity(&self) -> usize {
        self.storage.as_ref().len()
    }

    /// Get the number of bytes that can still be written.
    pub fn remaining(&self) -> usize {
        self.storage.as_ref().len().saturating_sub(self.position)
    }

    /// Get the entire backing storage, including bytes past the cursor.
    ///
    /// For an allocated buffer the unwritten tail is zero; for a wrapped one
    /// it is whatever the caller's storage held. This is a view of the live
    /// storage, not a copy.
    pub fn as_slice(&self) -> &[u8] {
        self.storage.as_ref()
    }
}

impl<B> ByteBuffer<B>
where
    B: AsMut<[u8]>,
{
    /// Write a single byte at the cursor.
    pub fn put_u8(&mut self, value: u8) -> Result<&mut Self, Error> {
        self.put_slice(std::slice::from_ref(&value))
    }

    /// Write a big-endian `i32` at the cursor.
    pub fn put_i32(&mut self, value: i32) -> Result<&mut Self, Error> {
        self.put_slice(&value.to_be_bytes())
    }

    /// Write a big-endian `i64` at the cursor.
    pub fn put_i64(&mut self, value: i64) -> Result<&mut Self, Error> {
        self.put_slice(&value.to_be_bytes())
    }

    /// Write a big-endian `u32` at the cursor.
    pub fn put_u32(&mut self, value: u32) -> Result<&mut Self, Error> {
        self.put_slice(&value.to_be_bytes())
    }

    /// Write a big-endian `u64` at the cursor.
    pub fn put_u64(&mut self, value: u64) -> Result<&mut Self, Error> {
        self.put_slice(&value.to_be_bytes())
    }

    /// Write an `f64` at the cursor, as its big-endian IEEE-754 bit pattern.
    pub fn put_f64(&mut self, value: f64) -> Result<&mut Self, Error> {
        self.put_slice(&value.to_be_bytes())
    }

    /// Write a slice of bytes at the cursor.
    ///
    /// The space check happens before any byte is copied, so a write that
    /// does not fit fails whole, with the cursor and contents as they were.
    /// The fixed-width writers all funnel through here and share that
    /// guarantee.
    pub fn put_slice(&mut self, value: &[u8]) -> Result<&mut Self, Error> {
        let storage = self.storage.as_mut();
        let remaining = storage.len().saturating_sub(self.position);
        if value.len() > remaining {
            return Err(Error::Overflow {
                size: value.len(),
                remaining,
            });
        }

        storage[self.position..self.position + value.len()].copy_from_slice(value);
        self.position += value.len();
        Ok(self)
    }

    /// Write the UTF-8 bytes of a string at the cursor.
    pub fn put_str(&mut self, value: &str) -> Result<&mut Self, Error> {
        self.put_slice(value.as_bytes())
    }
}

/// Writes fill the buffer from the cursor.
///
/// Unlike the put methods, `write` is not all-or-nothing: it copies as many
/// bytes as fit and reports the short count, returning `Ok(0)` once the
/// buffer is full.
impl<B> Write for ByteBuffer<B>
where
    B: AsMut<[u8]>,
{
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let storage = self.storage.as_mut();
        let remaining = storage.len().saturating_sub(self.position);
        let len = std::cmp::min(buf.len(), remaining);

        storage[self.position..self.position + len].copy_from_slice(&buf[..len]);
        self.position += len;

        Ok(len)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
