//! Defines the locales supported by the application and their UI strings.

use serde::Deserialize;
use serde::Serialize;

/// A display language, containing its language code and localized resources.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, Default, strum::EnumIs, strum::EnumIter, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Locale {
    Id, // Bahasa Indonesia
    #[default]
    En, // English
}

impl Locale {
    /// Returns the two-letter language code (e.g., "id").
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// The application name, shown in the home screen's top bar.
    pub fn app_name(&self) -> &'static str {
        match self {
            Self::Id => "Showroom Motor",
            Self::En => "Moto Showroom",
        }
    }

    /// Headline above the motorcycle list.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Id => "Pilih Motor Impianmu",
            Self::En => "Pick Your Dream Bike",
        }
    }

    /// Label of the info action and title of the about screen.
    pub fn about(&self) -> &'static str {
        match self {
            Self::Id => "Tentang Aplikasi",
            Self::En => "About",
        }
    }

    /// Accessible label of the back arrow on the about screen.
    pub fn back(&self) -> &'static str {
        match self {
            Self::Id => "Kembali",
            Self::En => "Back",
        }
    }

    /// Copyright notice on the about screen.
    pub fn copyright(&self) -> &'static str {
        match self {
            Self::Id => "© 2024 Showroom Motor. Hak cipta dilindungi.",
            Self::En => "© 2024 Moto Showroom. All rights reserved.",
        }
    }

    /// Warning shown under the name field while it is empty.
    pub fn invalid_input(&self) -> &'static str {
        match self {
            Self::Id => "Nama tidak boleh kosong",
            Self::En => "Name must not be empty",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn default_locale_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn codes_are_two_letter_lowercase() {
        assert_eq!(Locale::Id.code(), "id");
        assert_eq!(Locale::En.code(), "en");
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("ID".parse::<Locale>().unwrap(), Locale::Id);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn every_resource_resolves_in_both_locales() {
        for locale in Locale::iter() {
            assert!(!locale.app_name().is_empty());
            assert!(!locale.title().is_empty());
            assert!(!locale.about().is_empty());
            assert!(!locale.back().is_empty());
            assert!(!locale.copyright().is_empty());
            assert!(!locale.invalid_input().is_empty());
        }
    }

    #[test]
    fn indonesian_strings_differ_from_english() {
        assert_ne!(Locale::Id.app_name(), Locale::En.app_name());
        assert_ne!(Locale::Id.title(), Locale::En.title());
        assert_ne!(Locale::Id.about(), Locale::En.about());
        assert_ne!(Locale::Id.back(), Locale::En.back());
        assert_ne!(Locale::Id.copyright(), Locale::En.copyright());
        assert_ne!(Locale::Id.invalid_input(), Locale::En.invalid_input());
        assert_eq!(Locale::Id.about(), "Tentang Aplikasi");
        assert_eq!(Locale::Id.back(), "Kembali");
        assert_eq!(Locale::Id.invalid_input(), "Nama tidak boleh kosong");
    }
}
