use serde_json::Value;

const LOCALE_TABLE: &[(&str, &str)] = &[("en", include_str!("../../i18n/en.json"))];

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    let data = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;
    serde_json::from_str(data).ok()
}

fn build_bundle(lang: &str) -> I18nBundle {
    I18nBundle {
        lang: lang.to_string(),
        translations: load_translations(lang)
            .unwrap_or_else(|| Value::Object(serde_json::Map::new())),
    }
}

thread_local! {
    static CURRENT: I18nBundle = build_bundle("en");
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(f)
}

/// Language of the active message catalog.
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}
