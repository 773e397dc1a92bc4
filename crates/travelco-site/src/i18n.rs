//! Localization provider for navigation and chrome labels.
//!
//! The site ships English and Arabic. The directory core is independent of
//! the active locale; the only locale-specific branch anywhere is the text
//! direction, which is a display concern.

/// Active interface language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

/// Translated label strings for one locale.
#[derive(Debug)]
pub struct UiStrings {
    pub nav_home: &'static str,
    pub nav_destinations: &'static str,
    pub nav_cruises: &'static str,
    pub nav_medical: &'static str,
    pub nav_visa: &'static str,
    pub nav_about: &'static str,
    pub nav_contact: &'static str,
    pub book_now: &'static str,
    pub support_badge: &'static str,
    pub search_placeholder: &'static str,
    pub search_button: &'static str,
    pub no_results: &'static str,
    pub all_regions: &'static str,
    /// Label shown on the language switcher: the *other* language's name.
    pub switch_language: &'static str,
}

static EN: UiStrings = UiStrings {
    nav_home: "Home",
    nav_destinations: "Destinations",
    nav_cruises: "Cruise Packages",
    nav_medical: "Medical Tourism",
    nav_visa: "Visa Services",
    nav_about: "About",
    nav_contact: "Contact",
    book_now: "Book Now",
    support_badge: "24/7 Support",
    search_placeholder: "Search a country...",
    search_button: "Search",
    no_results: "No countries match your search.",
    all_regions: "All Regions",
    switch_language: "العربية",
};

static AR: UiStrings = UiStrings {
    nav_home: "الرئيسية",
    nav_destinations: "الوجهات",
    nav_cruises: "الرحلات البحرية",
    nav_medical: "السياحة العلاجية",
    nav_visa: "خدمات التأشيرات",
    nav_about: "من نحن",
    nav_contact: "اتصل بنا",
    book_now: "احجز الآن",
    support_badge: "دعم على مدار الساعة",
    search_placeholder: "ابحث عن دولة...",
    search_button: "بحث",
    no_results: "لا توجد دول مطابقة لبحثك.",
    all_regions: "كل المناطق",
    switch_language: "English",
};

impl Locale {
    /// Parses a language tag, silently falling back to English when the
    /// tag is unknown.
    pub fn from_tag(tag: &str) -> Locale {
        match tag.split(['-', '_']).next().unwrap_or("") {
            t if t.eq_ignore_ascii_case("ar") => Locale::Ar,
            t if t.eq_ignore_ascii_case("en") => Locale::En,
            _ => Locale::En,
        }
    }

    /// Returns the translated chrome strings for this locale.
    pub fn strings(&self) -> &'static UiStrings {
        match self {
            Locale::En => &EN,
            Locale::Ar => &AR,
        }
    }

    /// HTML `dir` attribute value for this locale.
    pub fn text_direction(&self) -> &'static str {
        match self {
            Locale::En => "ltr",
            Locale::Ar => "rtl",
        }
    }

    /// Returns the other available locale.
    pub fn toggled(&self) -> Locale {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_parse() {
        assert_eq!(Locale::from_tag("en"), Locale::En);
        assert_eq!(Locale::from_tag("en-GB"), Locale::En);
        assert_eq!(Locale::from_tag("ar"), Locale::Ar);
        assert_eq!(Locale::from_tag("AR_QA"), Locale::Ar);
    }

    #[test]
    fn unknown_tags_fall_back_to_english() {
        assert_eq!(Locale::from_tag("fr"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
        assert_eq!(Locale::from_tag("zz-ZZ"), Locale::En);
    }

    #[test]
    fn text_direction_follows_locale() {
        assert_eq!(Locale::En.text_direction(), "ltr");
        assert_eq!(Locale::Ar.text_direction(), "rtl");
    }

    #[test]
    fn toggle_flips_between_the_two_locales() {
        assert_eq!(Locale::En.toggled(), Locale::Ar);
        assert_eq!(Locale::Ar.toggled(), Locale::En);
    }
}
