use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use serde::Deserialize;
use crate::store::enums::store_error::StoreError;
use crate::tracker::structs::info_hash::InfoHash;

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for InfoHash {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = InfoHash([0u8; 20]);
        hex::decode_to_slice(s, &mut result.0)?;
        Ok(result)
    }
}

impl From<[u8; 20]> for InfoHash {
    fn from(data: [u8; 20]) -> Self {
        InfoHash(data)
    }
}

impl TryFrom<&[u8]> for InfoHash {
    type Error = StoreError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 20]>::try_from(data)
            .map(InfoHash)
            .map_err(|_| StoreError::InvalidKeyLength(data.len()))
    }
}

impl AsRef<[u8]> for InfoHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl serde::ser::Serialize for InfoHash {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::de::Deserialize<'de> for InfoHash {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        let value = String::deserialize(des)?;
        value.parse().map_err(|_| serde::de::Error::invalid_value(
            serde::de::Unexpected::Str(&value),
            &"a 40 character hex info hash",
        ))
    }
}
