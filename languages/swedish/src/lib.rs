pub mod dictionary;
pub mod explain;
pub mod loader;
pub mod processor;

pub use dictionary::SwedishDictionary;
pub use explain::{PrimaryPhrase, PrimaryWord, PRIMARY_PHRASE};
pub use loader::SwedishDictionaryLoader;
pub use processor::{SwedishProcessor, normalize_token, REMOVED_CHARS};
