use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier of a product in the economy graph.
///
/// Stored as `NonZeroU32` so `Option<ProductId>` stays a single word.
/// Ids are handed out by the graph from a monotonic counter and are never
/// reused; a deleted product leaves a gap.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(NonZeroU32);

impl ProductId {
    /// Create an id from a 0-based index, stored internally as index+1.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProductId({})", self.index())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// On the wire a product id is its bare index.
#[cfg(feature = "serde")]
impl serde::Serialize for ProductId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.index())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ProductId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = <u32 as serde::Deserialize>::deserialize(deserializer)?;
        NonZeroU32::new(index.wrapping_add(1))
            .map(ProductId)
            .ok_or_else(|| serde::de::Error::custom("product id out of range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_index() {
        for i in [0_u32, 1, 2, 42, 10_000] {
            let id = ProductId::from_index(i);
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn option_id_is_small() {
        // The None niche comes from the NonZero representation.
        assert_eq!(
            core::mem::size_of::<ProductId>(),
            core::mem::size_of::<Option<ProductId>>()
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_bare_index() {
        let id = ProductId::from_index(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
