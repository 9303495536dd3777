use js_sys::ArrayBuffer;
use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;

/// A fixed-capacity big-endian write buffer
#[wasm_bindgen]
pub struct ByteBuffer {
    buffer: bytebuf::ByteBuffer<Vec<u8>>,
}

#[wasm_bindgen]
impl ByteBuffer {
    /// Make a new [`ByteBuffer`] of `capacity` zero bytes, with the cursor at the start.
    #[wasm_bindgen(constructor)]
    pub fn new(capacity: f64) -> Result<ByteBuffer, JsError> {
        if !capacity.is_finite() || capacity.fract() != 0.0 {
            return Err(JsError::new(&format!(
                "capacity \"{capacity}\" is not an integer"
            )));
        }

        let buffer = bytebuf::ByteBuffer::allocate(capacity as i64)
            .map_err(|error| JsError::new(&error.to_string()))?;

        Ok(Self { buffer })
    }

    /// Make a new [`ByteBuffer`] over a copy of existing bytes, with the cursor at the start.
    ///
    /// Accepts either an [`Uint8Array`] or an [`ArrayBuffer`].
    /// The bytes are copied into the buffer's own storage.
    pub fn wrap(value: &JsValue) -> Result<ByteBuffer, JsError> {
        let bytes = value
            .dyn_ref::<Uint8Array>()
            .map(|array| array.to_vec())
            .or_else(|| {
                value
                    .dyn_ref::<ArrayBuffer>()
                    .map(|buffer| Uint8Array::new(buffer).to_vec())
            })
            .ok_or_else(|| JsError::new(&format!("Unknown Argument Type \"{value:?}\"")))?;

        Ok(Self {
            buffer: bytebuf::ByteBuffer::wrap(bytes),
        })
    }

    /// Write a single byte at the cursor.
    #[wasm_bindgen(js_name = "putUint8")]
    pub fn put_u8(&mut self, value: u8) -> Result<(), JsError> {
        self.buffer
            .put_u8(value)
            .map_err(|error| JsError::new(&error.to_string()))?;
        Ok(())
    }

    /// Write a big-endian 32 bit signed integer at the cursor.
    #[wasm_bindgen(js_name = "putInt32")]
    pub fn put_i32(&mut self, value: i32) -> Result<(), JsError> {
        self.buffer
            .put_i32(value)
            .map_err(|error| JsError::new(&error.to_string()))?;
        Ok(())
    }

    /// Write a big-endian 64 bit signed integer at the cursor.
    ///
    /// Takes a `BigInt`.
    #[wasm_bindgen(js_name = "putInt64")]
    pub fn put_i64(&mut self, value: i64) -> Result<(), JsError> {
        self.buffer
            .put_i64(value)
            .map_err(|error| JsError::new(&error.to_string()))?;
        Ok(())
    }

    /// Write a big-endian 32 bit unsigned integer at the cursor.
    #[wasm_bindgen(js_name = "putUint32")]
    pub fn put_u32(&mut self, value: u32) -> Result<(), JsError> {
        self.buffer
            .put_u32(value)
            .map_err(|error| JsError::new(&error.to_string()))?;
        Ok(())
    }

    /// Write a big-endian 64 bit unsigned integer at the cursor.
    ///
    /// Takes a `BigInt`.
    #[wasm_bindgen(js_name = "putUint64")]
    pub fn put_u64(&mut self, value: u64) -> Result<(), JsError> {
        self.buffer
            .put_u64(value)
            .map_err(|error| JsError::new(&error.to_string()))?;
        Ok(())
    }

    /// Write a 64 bit float at the cursor, as its big-endian IEEE-754 bit pattern.
    #[wasm_bindgen(js_name = "putFloat64")]
    pub fn put_f64(&mut self, value: f64) -> Result<(), JsError> {
        self.buffer
            .put_f64(value)
            .map_err(|error| JsError::new(&error.to_string()))?;
        Ok(())
    }

    /// Write a slice of bytes at the cursor.
    #[wasm_bindgen(js_name = "putBytes")]
    pub fn put_bytes(&mut self, value: &[u8]) -> Result<(), JsError> {
        self.buffer
            .put_slice(value)
            .map_err(|error| JsError::new(&error.to_string()))?;
        Ok(())
    }

    /// Write the UTF-8 bytes of a string at the cursor.
    #[wasm_bindgen(js_name = "putText")]
    pub fn put_text(&mut self, value: &str) -> Result<(), JsError> {
        self.buffer
            .put_str(value)
            .map_err(|error| JsError::new(&error.to_string()))?;
        Ok(())
    }

    /// Get the total capacity.
    #[wasm_bindgen(getter)]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Get the cursor position, the offset of the next write.
    #[wasm_bindgen(getter)]
    pub fn position(&self) -> usize {
        self.buffer.position()
    }

    /// Get the number of bytes that can still be written.
    #[wasm_bindgen(getter)]
    pub fn remaining(&self) -> usize {
        self.buffer.remaining()
    }

    /// Get the entire backing storage as a new [`Uint8Array`], including bytes past the cursor.
    #[wasm_bindgen(js_name = "toBytes")]
    pub fn to_bytes(&self) -> Uint8Array {
        Uint8Array::from(self.buffer.as_slice())
    }
}
