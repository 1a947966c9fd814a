/// Append-only byte buffer for encoding values
#[derive(Default)]
pub struct Writer {
    bytes: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    pub fn write_u32(&mut self, value: &u32) {
        self.write_bytes(&value.to_be_bytes());
    }

    pub fn write_u64(&mut self, value: &u64) {
        self.write_bytes(&value.to_be_bytes());
    }

    // Strings are prefixed with their byte length as u32
    pub fn write_string(&mut self, value: &str) {
        self.write_u32(&(value.len() as u32));
        self.write_bytes(value.as_bytes());
    }

    pub fn total_write(&self) -> usize {
        self.bytes.len()
    }

    pub fn bytes(self) -> Vec<u8> {
        self.bytes
    }
}
