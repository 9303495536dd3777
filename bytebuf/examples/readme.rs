fn main() {
    // Lay out a fixed 17 byte message frame.
    let mut buffer = bytebuf::ByteBuffer::allocate(17).expect("failed to allocate buffer");
    buffer
        .put_u32(0xDEAD_CAFE)
        .expect("failed to write magic")
        .put_u8(0x01)
        .expect("failed to write version")
        .put_i64(1_723_939_200)
        .expect("failed to write timestamp")
        .put_slice(b"ping")
        .expect("failed to write payload");

    // Every slot is now spoken for.
    assert!(buffer.remaining() == 0);
    println!("frame: {:02X?}", buffer.as_slice());

    // Wrapping fills caller-owned bytes in place.
    let mut checksum = [0x00; 4];
    bytebuf::ByteBuffer::wrap(&mut checksum[..])
        .put_u32(0x1234_5678)
        .expect("failed to write checksum");
    assert!(checksum == [0x12, 0x34, 0x56, 0x78]);
    println!("checksum: {checksum:02X?}");
}
