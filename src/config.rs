use serde::Deserialize;

use crate::error::ConfigError;

/// Module specifiers the synthesized imports point at.
///
/// Every key is optional in the plugin's JSON config; missing keys keep the
/// defaults below. Tag names and rule tables are not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bundle whose named imports are split into one import per used icon.
    pub icon_bundle: String,
    /// Per-icon modules live at `<icons_root>/<Icon>`.
    pub icons_root: String,

    pub view_module: String,
    pub image_module: String,
    pub text_module: String,
    pub button_module: String,
    pub checkbox_module: String,
    pub link_module: String,
    pub input_module: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon_bundle: "lucide-react".into(),
            icons_root: "@/components/icons".into(),
            view_module: "react-native".into(),
            image_module: "expo-image".into(),
            text_module: "@/components/ui/text".into(),
            button_module: "@/components/ui/button".into(),
            checkbox_module: "@/components/ui/checkbox".into(),
            link_module: "expo-router".into(),
            input_module: "@/components/ui/input".into(),
        }
    }
}

/// Which configured module a component import comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentModule {
    View,
    Image,
    Text,
    Button,
    Checkbox,
    Link,
    Input,
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let modules = [
            ("icon_bundle", &self.icon_bundle),
            ("icons_root", &self.icons_root),
            ("view_module", &self.view_module),
            ("image_module", &self.image_module),
            ("text_module", &self.text_module),
            ("button_module", &self.button_module),
            ("checkbox_module", &self.checkbox_module),
            ("link_module", &self.link_module),
            ("input_module", &self.input_module),
        ];
        for (key, value) in modules {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyModule { key });
            }
        }
        Ok(())
    }

    pub fn component_module(&self, which: ComponentModule) -> &str {
        match which {
            ComponentModule::View => &self.view_module,
            ComponentModule::Image => &self.image_module,
            ComponentModule::Text => &self.text_module,
            ComponentModule::Button => &self.button_module,
            ComponentModule::Checkbox => &self.checkbox_module,
            ComponentModule::Link => &self.link_module,
            ComponentModule::Input => &self.input_module,
        }
    }

    /// `<icons_root>/<icon>`, without doubling a trailing slash.
    pub fn icon_module(&self, icon: &str) -> String {
        format!("{}/{}", self.icons_root.trim_end_matches('/'), icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(Config::from_json("").unwrap(), Config::default());
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = Config::from_json(r#"{"icon_bundle":"react-feather","view_module":"rn"}"#).unwrap();
        assert_eq!(config.icon_bundle, "react-feather");
        assert_eq!(config.view_module, "rn");
        assert_eq!(config.text_module, "@/components/ui/text");
    }

    #[test]
    fn wrong_type_is_rejected() {
        let err = Config::from_json(r#"{"icons_root": 3}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn blank_module_is_rejected() {
        let err = Config::from_json(r#"{"input_module": "  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyModule { key: "input_module" }));
    }

    #[test]
    fn icon_module_joins_root() {
        let mut config = Config::default();
        assert_eq!(config.icon_module("Home"), "@/components/icons/Home");
        config.icons_root = "~/icons/".into();
        assert_eq!(config.icon_module("Home"), "~/icons/Home");
    }
}
