//! A fixed-capacity, position-tracking write buffer for laying out big-endian
//! binary data, in the manner of Java's `ByteBuffer`.
//!
//! ```
//! use bytebuf::ByteBuffer;
//!
//! let mut buffer = ByteBuffer::allocate(8)?;
//! buffer.put_i32(0x0102_0304)?.put_i32(4)?;
//! assert_eq!(buffer.as_slice(), &[0x01, 0x02, 0x03, 0x04, 0x00, 0x00, 0x00, 0x04]);
//! # Ok::<(), bytebuf::Error>(())
//! ```

/// The write buffer.
pub mod buffer;
#[cfg(feature = "tokio")]
mod tokio;

pub use self::buffer::ByteBuffer;

/// The library error type
#[derive(Debug)]
pub enum Error {
    /// The requested capacity cannot be represented as a size.
    InvalidCapacity {
        /// The requested capacity
        capacity: i64,

        /// The error
        error: std::num::TryFromIntError,
    },

    /// A write was larger than the remaining space.
    Overflow {
        /// The size of the rejected write
        size: usize,

        /// The space that was remaining
        remaining: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCapacity { capacity, .. } => {
                write!(f, "capacity \"{capacity}\" is invalid")
            }
            Self::Overflow { size, remaining } => write!(
                f,
                "buffer overflow, needed {size} bytes but only {remaining} remain"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidCapacity { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn message_smoke() {
        // A small fixed-layout frame: id, flags, timestamp, payload.
        let payload = b"ping";
        let mut buffer =
            ByteBuffer::allocate(13 + payload.len() as i64).expect("failed to allocate buffer");
        buffer
            .put_u32(0xFEED_FACE)
            .expect("failed to write id")
            .put_u8(0x01)
            .expect("failed to write flags")
            .put_i64(1_723_939_200)
            .expect("failed to write timestamp")
            .put_slice(payload)
            .expect("failed to write payload");

        assert_eq!(buffer.remaining(), 0);
        assert_eq!(&buffer.as_slice()[..4], &[0xFE, 0xED, 0xFA, 0xCE]);
        assert_eq!(&buffer.as_slice()[13..], b"ping");
    }

    #[test]
    fn error_display() {
        let error = ByteBuffer::allocate(-1).expect_err("allocate should have failed");
        assert_eq!(error.to_string(), "capacity \"-1\" is invalid");

        let mut buffer = ByteBuffer::allocate(3).expect("failed to allocate buffer");
        let error = buffer
            .put_i32(1)
            .expect_err("write should have overflowed");
        assert_eq!(
            error.to_string(),
            "buffer overflow, needed 4 bytes but only 3 remain"
        );
    }
}
