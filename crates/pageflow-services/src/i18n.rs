//! Static phrase table with a language toggle.
//!
//! Missing keys fall back to the `en_us` column; a key absent from the
//! table entirely is returned as-is, so untranslated UI stays readable.

use std::cell::Cell;

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    EnUs,
    ZhCn,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::EnUs => "en_us",
            Language::ZhCn => "zh_cn",
        }
    }
}

/// `(key, en_us, zh_cn)` rows. An empty `zh_cn` cell falls back to `en_us`.
const PHRASES: &[(&str, &str, &str)] = &[
    ("home", "Home", "首页"),
    ("about", "About", "关于"),
    ("projects", "Projects", "项目"),
    ("contact", "Contact", "联系"),
    ("contact_description", "Get in touch by email.", "通过电子邮件联系我。"),
    ("email", "Email", "邮箱"),
    ("alternate_email", "Alternate email", "备用邮箱"),
    ("toggle_language", "Toggle language", "切换语言"),
    ("toggle_theme", "Toggle theme", "切换主题"),
    ("hsr_cloud", "Hsr Cloud", ""),
    ("copied_to_clipboard", "Copied to clipboard", "已复制到剪贴板"),
    ("copy_failed", "Failed to copy", "复制失败"),
    ("stars_unavailable", "Stars unavailable", "星标不可用"),
];

/// Phrase lookup with a current language.
pub struct Translator {
    language: Cell<Language>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Language::EnUs)
    }
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self {
            language: Cell::new(language),
        }
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn set_language(&self, language: Language) {
        debug!("language set to {}", language.code());
        self.language.set(language);
    }

    /// The header button behavior: flip between the two languages.
    pub fn toggle_language(&self) {
        let next = match self.language.get() {
            Language::EnUs => Language::ZhCn,
            Language::ZhCn => Language::EnUs,
        };
        self.set_language(next);
    }

    /// Localized string for `key`, falling back to `en_us`, then to the key
    /// itself.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        let Some(&(_, en, zh)) = PHRASES.iter().find(|(k, _, _)| *k == key) else {
            return key;
        };
        match self.language.get() {
            Language::EnUs => en,
            Language::ZhCn => {
                if zh.is_empty() {
                    en
                } else {
                    zh
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_in_the_current_language() {
        let translator = Translator::new(Language::EnUs);
        assert_eq!(translator.t("about"), "About");

        translator.set_language(Language::ZhCn);
        assert_eq!(translator.t("about"), "关于");
    }

    #[test]
    fn toggle_flips_languages() {
        let translator = Translator::default();
        translator.toggle_language();
        assert_eq!(translator.language(), Language::ZhCn);
        translator.toggle_language();
        assert_eq!(translator.language(), Language::EnUs);
    }

    #[test]
    fn missing_translation_falls_back_to_english() {
        let translator = Translator::new(Language::ZhCn);
        assert_eq!(translator.t("hsr_cloud"), "Hsr Cloud");
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        let translator = Translator::default();
        assert_eq!(translator.t("nonexistent_key"), "nonexistent_key");
    }
}
