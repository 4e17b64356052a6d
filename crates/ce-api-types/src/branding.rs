use serde::{Deserialize, Serialize};

/// Organization branding applied to the platform console.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrandingConfig {
    pub header_font: String,
    pub header_color: String,
    pub body_font: String,
    pub body_color: String,
    pub logo: String,
    pub favicon: String,
    pub theme_primary_color: String,
    pub theme_secondary_color: String,
    pub theme_highlight_color: String,
    pub button_primary_background_color: String,
    pub button_primary_text_color: String,
    pub button_secondary_background_color: String,
    pub button_secondary_text_color: String,
    pub button_delete_background_color: String,
    pub button_delete_text_color: String,
    pub logo_background_color: String,
    pub top_bar_background_color: String,
    pub navigation_background_color: String,
    pub context_background_color: String,
    pub card_header_color: String,
    pub card_background: String,
    pub card_menu_background: String,
    pub card_menu_link_color: String,
    pub navigation_link_background: String,
    pub navigation_link_foreground: String,
    pub navigation_link_background_hover: String,
    pub navigation_link_foreground_hover: String,
    pub navigation_link_background_active: String,
    pub navigation_link_foreground_active: String,
    pub top_bar_navigation_color: String,
    pub table_header_background: String,
    pub table_header_foreground: String,
    pub table_body_background: String,
    pub table_body_foreground: String,
    pub intercom_enabled: bool,
    pub pendo_enabled: bool,
    #[serde(rename = "documentationUrl")]
    pub documentation_url: String,
    pub elements_enabled: bool,
    pub instance_enabled: bool,
    pub formulas_enabled: bool,
    pub virtual_data_enabled: bool,
    pub reports_enabled: bool,
    pub navigation_icon_position: String,
    pub navigation_icon_size: String,
    pub navigation_label_size: String,
}

impl BrandingConfig {
    /// The stock platform look.
    pub fn platform_default() -> Self {
        let s = |v: &str| v.to_string();
        Self {
            header_font: s("museo-sans"),
            header_color: s("#4d82bf"),
            body_font: s("Open Sans"),
            body_color: s("#333333"),
            theme_primary_color: s("#4d82bf"),
            theme_secondary_color: s("#44c8f5"),
            theme_highlight_color: s("#761299"),
            button_primary_background_color: s("#4d82bf"),
            button_primary_text_color: s("#ffffff"),
            button_secondary_background_color: s("#44c8f5"),
            button_secondary_text_color: s("#ffffff"),
            button_delete_background_color: s("#FF4E4E"),
            button_delete_text_color: s("#ffffff"),
            logo_background_color: s("#44c8f5"),
            top_bar_background_color: s("#ffffff"),
            navigation_background_color: s("#172330"),
            context_background_color: s("#edf1f2"),
            card_header_color: s("#4d82bf"),
            card_background: s("#ffffff"),
            card_menu_background: s("#d1d1d1"),
            card_menu_link_color: s("#172330"),
            navigation_link_background: s("#172330"),
            navigation_link_foreground: s("#ffffff"),
            navigation_link_background_hover: s("#303a47"),
            navigation_link_foreground_hover: s("#ffffff"),
            navigation_link_foreground_active: s("#44c8f5"),
            navigation_link_background_active: s("#101922"),
            top_bar_navigation_color: s("#172330"),
            table_header_background: s("#172330"),
            table_body_background: s("#ffffff"),
            table_header_foreground: s("#ffffff"),
            table_body_foreground: s("#333333"),
            navigation_icon_size: s("20px"),
            navigation_label_size: s("9px"),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_branding_uses_platform_keys() {
        let value = serde_json::to_value(BrandingConfig::platform_default()).expect("encode");
        assert_eq!(value["headerFont"], "museo-sans");
        assert_eq!(value["buttonDeleteBackgroundColor"], "#FF4E4E");
        assert_eq!(value["documentationUrl"], "");
        assert_eq!(value["navigationLinkForegroundActive"], "#44c8f5");
    }
}
