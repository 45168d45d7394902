use vadgor_core::dictionary::LoadError;

use crate::dictionary::SwedishDictionary;

/// Bundled Swedish-English dictionary
pub const EMBEDDED_JSON: &str = include_str!("../data/sv_en.json");

pub struct SwedishDictionaryLoader;

impl SwedishDictionaryLoader {
    /// Load embedded dictionary data
    pub fn load_embedded() -> Result<SwedishDictionary, LoadError> {
        tracing::debug!("Loading embedded Swedish dictionary...");
        Self::load_json(EMBEDDED_JSON)
    }

    pub fn load_json(json: &str) -> Result<SwedishDictionary, LoadError> {
        let dict = SwedishDictionary::from_json(json)?;
        tracing::debug!("Loaded {} dictionary entries", dict.entry_count());
        Ok(dict)
    }
}
