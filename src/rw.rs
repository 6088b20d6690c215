use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::FractalCombiner;

#[derive(Serialize, Deserialize)]
struct FractalRecord {
    octaves: usize,
    seed: i32,
}

impl Serialize for FractalCombiner {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        FractalRecord {
            octaves: self.octaves(),
            seed: self.seed(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FractalCombiner {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = FractalRecord::deserialize(deserializer)?;
        Self::new(record.octaves, record.seed).map_err(serde::de::Error::custom)
    }
}
