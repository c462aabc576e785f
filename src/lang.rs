//! Label translation lookup.
//!
//! Fields constructed with a label key resolve the display text through a
//! process-wide registry at render time, so installing a new language
//! re-labels every field on the next frame. Unknown keys fall back to the
//! key text itself, which keeps development builds legible before a
//! translation table ships.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;

static TRANSLATIONS: Lazy<RwLock<HashMap<String, String>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Replaces the installed translation table.
pub fn set_translations<I, K, V>(entries: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut table = TRANSLATIONS.write().expect("translation table poisoned");
    table.clear();
    table.extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
}

/// Adds or replaces a single translation.
pub fn add_translation(key: impl Into<String>, text: impl Into<String>) {
    TRANSLATIONS
        .write()
        .expect("translation table poisoned")
        .insert(key.into(), text.into());
}

/// Resolves a label key to display text, falling back to the key itself.
pub fn get(key: &str) -> String {
    TRANSLATIONS
        .read()
        .expect("translation table poisoned")
        .get(key)
        .cloned()
        .unwrap_or_else(|| key.to_string())
}
