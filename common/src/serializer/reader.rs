use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderError {
    #[error("Invalid size")]
    InvalidSize,

    #[error("Invalid hex")]
    InvalidHex,

    #[error("Invalid UTF-8 string")]
    InvalidString,
}

/// Cursor over an encoded byte slice
pub struct Reader<'a> {
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], ReaderError> {
        if n > self.bytes.len() {
            return Err(ReaderError::InvalidSize);
        }
        let (head, tail) = self.bytes.split_at(n);
        self.bytes = tail;
        Ok(head)
    }

    pub fn read_bytes<const N: usize>(&mut self, n: usize) -> Result<[u8; N], ReaderError> {
        if n != N {
            return Err(ReaderError::InvalidSize);
        }
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(n)?);
        Ok(out)
    }

    pub fn read_u32(&mut self) -> Result<u32, ReaderError> {
        Ok(u32::from_be_bytes(self.read_bytes(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64, ReaderError> {
        Ok(u64::from_be_bytes(self.read_bytes(8)?))
    }

    pub fn read_string_with_size(&mut self, size: usize) -> Result<String, ReaderError> {
        let bytes = self.take(size)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| ReaderError::InvalidString)
    }

    pub fn read_string(&mut self) -> Result<String, ReaderError> {
        let size = self.read_u32()? as usize;
        self.read_string_with_size(size)
    }

    /// Bytes left to read
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
