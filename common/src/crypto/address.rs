use serde::de::Error as SerdeError;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Debug, Display, Error, Formatter},
    str::FromStr,
};

use crate::serializer::{Reader, ReaderError, Serializer, Writer};

use super::CryptoError;

pub const ADDRESS_SIZE: usize = 32; // 32 bytes / 256 bits

/// Identity of a token holder or of the registry administrator
///
/// The all-zero address is the null identity: it is never a valid holder
/// or administrator and marks the synthetic end of mint/burn records.
#[derive(Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Hash, Default)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Address(bytes)
    }

    pub const fn zero() -> Self {
        Address::new([0; ADDRESS_SIZE])
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; ADDRESS_SIZE] {
        self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let decoded = hex::decode(hex).map_err(|e| CryptoError::InvalidHex(e.to_string()))?;
        let len = decoded.len();
        let bytes: [u8; ADDRESS_SIZE] =
            decoded
                .try_into()
                .map_err(|_| CryptoError::InvalidAddressLength {
                    len,
                    expected: ADDRESS_SIZE,
                })?;
        Ok(Address::new(bytes))
    }
}

impl From<[u8; ADDRESS_SIZE]> for Address {
    fn from(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Address::new(bytes)
    }
}

impl FromStr for Address {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_hex(s)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", &self.to_hex())
    }
}

impl Debug for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "Address({})", &self.to_hex())
    }
}

impl Serializer for Address {
    fn write(&self, writer: &mut Writer) {
        writer.write_bytes(&self.0);
    }

    fn read(reader: &mut Reader) -> Result<Self, ReaderError> {
        Ok(Address::new(reader.read_bytes(ADDRESS_SIZE)?))
    }

    fn size(&self) -> usize {
        ADDRESS_SIZE
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'a> Deserialize<'a> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        let hex = String::deserialize(deserializer)?;
        if hex.len() != ADDRESS_SIZE * 2 {
            return Err(SerdeError::custom("Invalid hex length"));
        }

        Address::from_hex(&hex).map_err(SerdeError::custom)
    }
}
