use i18nrs::yew::I18nProviderConfig;
use std::collections::HashMap;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Information about a supported language
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([(
        DEFAULT_LANGUAGE,
        LanguageInfo {
            code: DEFAULT_LANGUAGE,
            translation: include_str!("../translations/en.json"),
            native_name: "English",
        },
    )])
}

/// Provider settings covering every supported language.
pub fn provider_config() -> I18nProviderConfig {
    let translations = supported_languages()
        .iter()
        .map(|(&key, info)| (key, info.translation))
        .collect();
    I18nProviderConfig {
        translations,
        default_language: DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    }
}

/// Server-renders `children` inside the translation provider.
#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) async fn render_translated(children: yew::Html) -> String {
    yew::LocalServerRenderer::<i18nrs::yew::I18nProvider>::with_props(I18nProviderConfig {
        children,
        ..provider_config()
    })
    .render()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_supported() {
        let languages = supported_languages();
        let info = languages.get(DEFAULT_LANGUAGE).unwrap();
        assert_eq!(info.code, "en");
        assert_eq!(info.native_name, "English");
    }

    #[test]
    fn translation_is_valid_json_with_navigation() {
        let languages = supported_languages();
        let parsed: serde_json::Value =
            serde_json::from_str(languages[DEFAULT_LANGUAGE].translation).unwrap();
        for key in ["home", "about", "dashboard", "users", "hubs"] {
            assert!(parsed["nav"][key]["title"].is_string(), "nav.{key}.title");
        }
        assert!(parsed["home"]["hero"]["title"].is_string());
    }

    #[test]
    fn user_management_strings_are_translated() {
        let languages = supported_languages();
        let parsed: serde_json::Value =
            serde_json::from_str(languages[DEFAULT_LANGUAGE].translation).unwrap();
        let keys = [
            "users.title",
            "users.total",
            "users.dismiss",
            "users.search.placeholder",
            "users.table.empty",
            "users.table.role_for",
            "users.roles.user",
            "users.roles.admin",
            "users.pagination.previous",
            "users.pagination.next",
            "users.dialogs.delete_title",
            "users.dialogs.ban_message",
            "users.dialogs.unban_title",
            "users.notice.role_changed",
            "users.notice.banned",
            "users.notice.unbanned",
            "users.notice.deleted",
            "users.errors.load",
            "users.errors.role",
            "users.errors.ban",
            "users.errors.delete",
            "dialog.cancel",
            "hubs.load_failed",
            "hubs.save_failed",
        ];
        for key in keys {
            let pointer = format!("/{}", key.replace('.', "/"));
            assert!(parsed.pointer(&pointer).is_some_and(serde_json::Value::is_string), "{key}");
        }
        assert!(parsed["users"]["total"].as_str().unwrap().contains("{count}"));
        assert!(parsed["users"]["dialogs"]["delete_message"].as_str().unwrap().contains("{email}"));
    }
}
