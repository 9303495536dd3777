use crate::ByteBuffer;
use std::pin::Pin;
use std::task::Context;
use std::task::Poll;
use tokio::io::AsyncWrite;

/// Async writes fill the buffer from the cursor, completing immediately.
///
/// This follows the blocking [`std::io::Write`] impl: short writes once space
/// runs low, `Ok(0)` when full. The buffer is plain memory, so nothing here
/// ever returns [`Poll::Pending`].
impl<B> AsyncWrite for ByteBuffer<B>
where
    B: AsMut<[u8]> + Unpin,
{
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<std::io::Result<usize>> {
        Poll::Ready(std::io::Write::write(self.get_mut(), buf))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

#[cfg(test)]
mod test {
    use crate::ByteBuffer;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn writer_smoke() {
        let mut buffer = ByteBuffer::allocate(9).expect("failed to allocate buffer");
        buffer
            .write_u32(0xDEAD_CAFE)
            .await
            .expect("failed to write value");
        buffer.write_u8(0x2A).await.expect("failed to write byte");
        buffer
            .write_all(b"ping")
            .await
            .expect("failed to write slice");
        buffer.flush().await.expect("failed to flush");

        assert_eq!(
            buffer.as_slice(),
            &[0xDE, 0xAD, 0xCA, 0xFE, 0x2A, b'p', b'i', b'n', b'g']
        );
        assert_eq!(buffer.remaining(), 0);
    }

    #[tokio::test]
    async fn writer_full() {
        let mut buffer = ByteBuffer::allocate(2).expect("failed to allocate buffer");
        let error = buffer
            .write_all(b"ping")
            .await
            .expect_err("write should have failed");
        assert_eq!(error.kind(), std::io::ErrorKind::WriteZero);
        assert_eq!(buffer.as_slice(), b"pi");
    }
}
