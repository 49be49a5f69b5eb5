//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English
    EnUS,
    /// Norwegian Bokmål
    #[default]
    NbNO,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::NbNO => "Norsk",
        }
    }

    /// Language code stored in settings
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::NbNO => "nb",
        }
    }

    /// Parse a language code or tag ("nb", "no-NO", "en-US")
    pub fn from_code(code: &str) -> Self {
        let lang = code.split(['-', '_']).next().unwrap_or_default();
        match lang.to_ascii_lowercase().as_str() {
            "nb" | "nn" | "no" => Locale::NbNO,
            _ => Locale::EnUS,
        }
    }

    /// The other locale
    pub fn toggled(self) -> Self {
        match self {
            Locale::EnUS => Locale::NbNO,
            Locale::NbNO => Locale::EnUS,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, nb))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Fagerhaug Wind", "Fagerhaug Vind"));
    map.insert("app-footer", ("Live wind data from ENOP", "Sanntid vinddata fra ENOP"));

    // Header
    map.insert("header-timespan", ("Time span", "Tidsrom"));
    map.insert("header-minutes", ("{n} min", "{n} min"));
    map.insert("header-last-update", ("Last update {time}", "Sist oppdatert {time}"));
    map.insert("header-never-updated", ("Not updated yet", "Ikke oppdatert ennå"));
    map.insert("action-refresh", ("Refresh", "Oppdater"));
    map.insert("header-loading", ("Loading…", "Laster…"));

    // Charts
    map.insert("line-title", ("Wind graph, last {n} minutes", "Vindgraf siste {n} minutter"));
    map.insert("gauge-title", ("Max gust, last {n} minutes", "Maks vindkast siste {n} minutter"));
    map.insert("rose-title", ("Wind rose, last {n} minutes", "Vindrose siste {n} minutter"));
    map.insert("tooltip-time", ("Time", "Tid"));
    map.insert("tooltip-avg", ("Average wind", "Snittvind"));
    map.insert("tooltip-gust", ("Gust", "Vindkast"));
    map.insert("gauge-latest-avg", ("Latest average {v} kn", "Siste snitt {v} kn"));
    map.insert("rose-undirected", ("{n} samples without direction", "{n} målinger uten retning"));
    map.insert("chart-pending", ("Waiting for data…", "Venter på data…"));

    // Overlay
    map.insert("overlay-error", ("Error: Could not fetch wind data", "Error: Kunne ikke hente vinddata"));
    map.insert("overlay-error-hint", ("Check the log for more info", "Sjekk loggen for mer info"));
    map.insert("overlay-no-data", ("No wind data for this period", "Ingen vinddata for denne perioden"));
    map.insert("overlay-no-data-hint", ("The sensor may be offline", "Sensoren kan være frakoblet"));
    map.insert("overlay-retry", ("Tap to try again", "Trykk for å prøve på nytt"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, nb)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::NbNO => SharedString::from(nb),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

/// Translate a key and substitute `{name}` placeholders
pub fn t_args(locale: Locale, key: &str, args: &[(&str, &str)]) -> SharedString {
    let mut result = t(locale, key).to_string();
    for (name, value) in args {
        result = result.replace(&format!("{{{name}}}"), value);
    }
    result.into()
}
