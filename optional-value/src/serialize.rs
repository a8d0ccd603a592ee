use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Optional;

// A present value serializes exactly like a bare `T`.
// Use `#[serde(skip_serializing_if = "Optional::is_empty")]` to omit absent fields.
impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Present(value) => value.serialize(serializer),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

// Goes through `deserialize_option`, which means `null` and
// missing struct fields both produce an absent value.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
