//! Site content: brand data, copy, colours and shell settings.
//!
//! Content is plain data loaded from JSON. The shell (navigation, transition,
//! templates) is shared by every content file, so a second variant of the
//! site is a second JSON file rather than a second copy of the views.

use std::str::FromStr;

use tracing::info;

use crate::error::{Error, Result};
use crate::transition::{DEFAULT_FADE_SECONDS, DEFAULT_SCROLL_RESET_SECONDS};
use crate::view::ViewId;

const EMBEDDED_CONTENT: &str = include_str!("../content/daniela_simao.json");

/// An sRGB colour written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(s.to_string());

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }

        let channel =
            |idx: usize| u8::from_str_radix(&hex[idx..idx + 2], 16).map_err(|_| invalid());

        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(val: Rgb) -> Self {
        format!("#{:02X}{:02X}{:02X}", val.0, val.1, val.2)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub background: Rgb,
    pub surface: Rgb,
}

/// Timing and layout constants of the shell.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    pub transition_seconds: f64,
    pub scroll_reset_seconds: f64,
    pub compact_threshold_px: f32,
    pub mobile_breakpoint_px: f32,
    pub marquee_seconds: f64,
    pub marquee_repeats: usize,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            transition_seconds: DEFAULT_FADE_SECONDS,
            scroll_reset_seconds: DEFAULT_SCROLL_RESET_SECONDS,
            compact_threshold_px: 20.0,
            mobile_breakpoint_px: 768.0,
            marquee_seconds: 40.0,
            marquee_repeats: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Brand {
    pub name: String,
    pub registration: String,
    pub tagline: String,
    pub email: String,
    /// International number, digits only, e.g. `5511966020206`.
    pub phone_digits: String,
    pub social_url: String,
    pub motto: String,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NavItem {
    pub view: ViewId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Footer {
    pub navigation_title: String,
    pub navigation: Vec<NavItem>,
    pub service_title: String,
    pub service_lines: Vec<String>,
    pub connect_title: String,
    pub social_label: String,
    pub messaging_label: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CallToAction {
    pub eyebrow: String,
    pub title: String,
    pub accent: String,
    pub button: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PracticeArea {
    pub numeral: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MapEmbed {
    pub label: String,
    pub embed_url: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Maps {
    pub primary: MapEmbed,
    pub secondary: MapEmbed,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Highlight {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hero {
    pub title: String,
    pub accent: String,
    pub button: String,
    pub summary: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Purpose {
    pub subtitle: String,
    pub title: String,
    pub statement: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PracticeSection {
    pub subtitle: String,
    pub title: String,
    pub link: String,
    pub card_link: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Teaser {
    pub badge: String,
    pub subtitle: String,
    pub title: String,
    pub body: String,
    pub image_url: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Presence {
    pub subtitle: String,
    pub title: String,
    pub body: String,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HomeContent {
    pub hero: Hero,
    pub banner: String,
    pub purpose: Purpose,
    pub practice: PracticeSection,
    pub teaser: Teaser,
    pub quote: String,
    pub presence: Presence,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AboutContent {
    pub subtitle: String,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub highlights: Vec<Highlight>,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExpertiseContent {
    pub subtitle: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProfileContent {
    pub subtitle: String,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub highlights: Vec<Highlight>,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FormLabels {
    pub name_label: String,
    pub name_placeholder: String,
    pub email_label: String,
    pub email_placeholder: String,
    pub message_label: String,
    pub message_placeholder: String,
    pub submit: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContactContent {
    pub subtitle: String,
    pub title: String,
    pub phone_label: String,
    pub email_label: String,
    pub registration_label: String,
    pub form: FormLabels,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub theme: Theme,
    #[serde(default)]
    pub shell: ShellSettings,
    pub menu: Vec<NavItem>,
    pub footer: Footer,
    pub call_to_action: CallToAction,
    pub practice_areas: Vec<PracticeArea>,
    pub maps: Maps,
    pub home: HomeContent,
    pub about: AboutContent,
    pub expertise: ExpertiseContent,
    pub profile: ProfileContent,
    pub contact: ContactContent,
}

impl SiteContent {
    /// The content compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn load(path: &std::path::Path) -> Result<Self> {
        info!("Loading site content from {}", path.display());

        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// The navbar must list every view exactly once, in menu order.
    fn validate(&self) -> Result<()> {
        let menu_views: Vec<ViewId> = self.menu.iter().map(|item| item.view).collect();

        if menu_views != ViewId::ALL {
            return Err(Error::InvalidMenu(format!(
                "expected {:?}, found {:?}",
                ViewId::ALL,
                menu_views
            )));
        }

        Ok(())
    }

    pub fn menu_label(&self, view: ViewId) -> &str {
        self.menu
            .iter()
            .find(|item| item.view == view)
            .map_or_else(|| view.key(), |item| item.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_loads() {
        let content = SiteContent::embedded().unwrap();

        assert_eq!(content.brand.name, "Daniela Simão");
        assert_eq!(content.menu.len(), 5);
        assert_eq!(content.practice_areas.len(), 4);
        assert_eq!(content.theme.primary, Rgb(0x32, 0x2A, 0x26));
        assert_eq!(content.shell, ShellSettings::default());
    }

    #[test]
    fn menu_labels_follow_content() {
        let content = SiteContent::embedded().unwrap();

        assert_eq!(content.menu_label(ViewId::Home), "Início");
        assert_eq!(content.menu_label(ViewId::Contact), "Contato");
    }

    #[test]
    fn reserializing_keeps_content() {
        let content = SiteContent::embedded().unwrap();

        let json = serde_json::to_string(&content).unwrap();

        assert_eq!(SiteContent::from_json(&json).unwrap(), content);
    }

    #[test]
    fn missing_shell_section_uses_defaults() {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_CONTENT).unwrap();
        value.as_object_mut().unwrap().remove("shell");

        let content = SiteContent::from_json(&value.to_string()).unwrap();

        assert_eq!(content.shell, ShellSettings::default());
    }

    #[test]
    fn menu_missing_a_view_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_CONTENT).unwrap();
        value["menu"].as_array_mut().unwrap().pop();

        let result = SiteContent::from_json(&value.to_string());

        assert!(matches!(result, Err(Error::InvalidMenu(_))));
    }

    #[test]
    fn unknown_menu_view_fails_to_parse() {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_CONTENT).unwrap();
        value["menu"][0]["view"] = serde_json::Value::from("nonexistent-id");

        let result = SiteContent::from_json(&value.to_string());

        assert!(matches!(result, Err(Error::ContentParseFailure(_))));
    }

    #[test]
    fn bad_theme_colour_fails_to_parse() {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_CONTENT).unwrap();
        value["theme"]["primary"] = serde_json::Value::from("brown");

        let result = SiteContent::from_json(&value.to_string());

        assert!(matches!(result, Err(Error::ContentParseFailure(_))));
    }

    #[test]
    fn missing_file_is_a_read_failure() {
        let result = SiteContent::load(std::path::Path::new("./does/not/exist.json"));

        assert!(matches!(result, Err(Error::ContentReadFailure(_))));
    }

    #[test]
    fn parses_hex_colours() {
        assert_eq!("#A68966".parse::<Rgb>().unwrap(), Rgb(0xA6, 0x89, 0x66));
        assert_eq!("#f9f7f2".parse::<Rgb>().unwrap(), Rgb(0xF9, 0xF7, 0xF2));
        assert_eq!(String::from(Rgb(0x1A, 0x1A, 0x1A)), "#1A1A1A");
    }

    #[test]
    fn rejects_malformed_colours() {
        for bad in ["322A26", "#322A2", "#322A2G", "#ÿÿÿ", ""] {
            assert!(
                matches!(bad.parse::<Rgb>(), Err(Error::InvalidColor(_))),
                "{bad} should be rejected"
            );
        }
    }
}
