use sha1::{Digest, Sha1};
use std::fmt;
use std::fmt::Formatter;
use crate::tracker::structs::piece_hash::PieceHash;

impl PieceHash {
    pub fn digest(data: &[u8]) -> PieceHash {
        let mut hasher = Sha1::new();
        hasher.update(data);
        let mut result = PieceHash([0u8; 20]);
        result.0.copy_from_slice(&hasher.finalize());
        result
    }

    /// Digests `data` and compares it with this hash. Digests of a different
    /// length never match.
    pub fn matches(&self, data: &[u8]) -> bool {
        let mut hasher = Sha1::new();
        hasher.update(data);
        let computed = hasher.finalize();
        computed.len() == self.0.len() && computed.as_slice() == self.0.as_slice()
    }
}

impl fmt::Display for PieceHash {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl std::str::FromStr for PieceHash {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = PieceHash([0u8; 20]);
        hex::decode_to_slice(s, &mut result.0)?;
        Ok(result)
    }
}

impl From<[u8; 20]> for PieceHash {
    fn from(data: [u8; 20]) -> Self {
        PieceHash(data)
    }
}

impl serde::ser::Serialize for PieceHash {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> serde::de::Deserialize<'de> for PieceHash {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        struct PieceHashVisitor;

        impl<'de> serde::de::Visitor<'de> for PieceHashVisitor {
            type Value = PieceHash;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 40 character hex string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                if v.len() != 40 {
                    return Err(E::custom("expected 40 character hex string"));
                }
                v.parse::<PieceHash>().map_err(|e| E::custom(format!("invalid hex string: {e}")))
            }
        }

        des.deserialize_str(PieceHashVisitor)
    }
}
