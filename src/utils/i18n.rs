// ============================================================================
// INTERNATIONALIZATION - Locale selection + message catalog
// ============================================================================
// The catalog is plain data: locale -> key -> template. A missing key is
// never an error, callers get an empty string.
// ============================================================================

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// Supported UI languages. `En` is the fallback for anything unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Kh,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Kh];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Kh => "kh",
        }
    }

    /// Resolve a stored/user-supplied code, falling back to the default locale.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "kh" | "km" => Locale::Kh,
            _ => Locale::En,
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Locale::default()
    }

    /// Flag image shown by the language switcher.
    pub fn flag_asset(&self) -> &'static str {
        match self {
            Locale::En => "/assets/images/en.webp",
            Locale::Kh => "/assets/images/kh.webp",
        }
    }
}

const EN_STRINGS: &[(&str, &str)] = &[
    // Alert titles
    ("success", "Success"),
    ("error", "Error"),
    ("info", "Info"),
    // Session
    ("sessionExpired", "Your session has expired. Please sign in again."),
    ("welcomeBack", "Welcome back, {name}!"),
    ("welcome", "Welcome"),
    ("logout", "Logout"),
    // Entry form
    ("capture", "Capture Data"),
    ("addEntryHeader", "Add New Entry"),
    ("namePlaceholder", "Name"),
    ("phonePlaceholder", "Phone number"),
    ("addressPlaceholder", "Address"),
    ("takePhoto", "Take Photo"),
    ("selectPhotos", "Select Photos"),
    ("pleaseAddPhoto", "Please add at least one photo."),
    ("submit", "Submit"),
    ("submitting", "Submitting..."),
    ("entrySubmittedSuccess", "Entry {orderNo} submitted successfully."),
    ("entrySubmittedError", "Could not submit the entry. Please try again."),
    // Collections
    ("ordersLoadFailed", "Could not load orders."),
    ("mapsLoadFailed", "Could not load map locations."),
    // Misc
    ("selectLanguage", "Select Language"),
    ("close", "Close"),
    ("ok", "OK"),
    ("loading", "Loading..."),
];

const KH_STRINGS: &[(&str, &str)] = &[
    ("success", "ជោគជ័យ"),
    ("error", "កំហុស"),
    ("info", "ព័ត៌មាន"),
    ("sessionExpired", "វគ្គរបស់អ្នកបានផុតកំណត់។ សូមចូលម្តងទៀត។"),
    ("welcomeBack", "សូមស្វាគមន៍ការត្រឡប់មកវិញ {name}!"),
    ("welcome", "សូមស្វាគមន៍"),
    ("logout", "ចាកចេញ"),
    ("capture", "ថតទិន្នន័យ"),
    ("addEntryHeader", "បន្ថែមទិន្នន័យថ្មី"),
    ("namePlaceholder", "ឈ្មោះ"),
    ("phonePlaceholder", "លេខទូរស័ព្ទ"),
    ("addressPlaceholder", "អាសយដ្ឋាន"),
    ("takePhoto", "ថតរូប"),
    ("selectPhotos", "ជ្រើសរើសរូបភាព"),
    ("pleaseAddPhoto", "សូមបន្ថែមរូបភាពយ៉ាងហោចណាស់មួយ។"),
    ("submit", "ដាក់ស្នើ"),
    ("submitting", "កំពុងដាក់ស្នើ..."),
    ("entrySubmittedSuccess", "ទិន្នន័យ {orderNo} ត្រូវបានដាក់ស្នើដោយជោគជ័យ។"),
    ("entrySubmittedError", "មិនអាចដាក់ស្នើទិន្នន័យបានទេ។ សូមព្យាយាមម្តងទៀត។"),
    ("ordersLoadFailed", "មិនអាចទាញយកការបញ្ជាទិញបានទេ។"),
    ("mapsLoadFailed", "មិនអាចទាញយកទីតាំងផែនទីបានទេ។"),
    ("selectLanguage", "ជ្រើសរើសភាសា"),
    ("close", "បិទ"),
    ("ok", "យល់ព្រម"),
    ("loading", "កំពុងផ្ទុក..."),
];

/// Locale -> key -> template.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<Locale, HashMap<String, String>>,
}

impl Catalog {
    /// Empty catalog, every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The strings shipped with the app.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        for (locale, table) in [(Locale::En, EN_STRINGS), (Locale::Kh, KH_STRINGS)] {
            for (key, template) in table {
                catalog.insert(locale, key, template);
            }
        }
        catalog
    }

    pub fn insert(&mut self, locale: Locale, key: &str, template: &str) {
        self.entries
            .entry(locale)
            .or_default()
            .insert(key.to_string(), template.to_string());
    }

    /// Builder variant of [`Catalog::insert`].
    pub fn with_entry(mut self, locale: Locale, key: &str, template: &str) -> Self {
        self.insert(locale, key, template);
        self
    }

    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.entries
            .get(&locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Translate `key`, resolving to an empty string when it is missing.
    pub fn t(&self, locale: Locale, key: &str) -> String {
        match self.get(locale, key) {
            Some(template) => template.to_string(),
            None => {
                log::debug!("🌐 Missing translation '{}' for locale {}", key, locale.as_str());
                String::new()
            }
        }
    }
}

/// Replace the first `{name}` for each entry of `params`.
///
/// One left-to-right pass over the template: inserted values are never
/// scanned again. Repeated placeholders and placeholders without a matching
/// param are left as literal text.
pub fn replace_params(template: &str, params: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut used = BTreeSet::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let name = after.find('}').map(|close| &after[..close]);

        match name.and_then(|name| params.get_key_value(name)) {
            Some((name, value)) if used.insert(name.as_str()) => {
                out.push_str(value);
                rest = &after[name.len() + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
