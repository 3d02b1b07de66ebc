//! Link targets and call-to-action buttons

use serde::Serialize;
use serde_json::Value;

use crate::content::fields::{bool_field, str_field};

/// Where a block links to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkTarget {
    pub url: String,
    pub is_external: bool,
    pub open_in_new_tab: bool,
}

impl LinkTarget {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            is_external: false,
            open_in_new_tab: false,
        }
    }

    /// Build a link from the differently named fields each block kind uses.
    /// A missing or blank url means no link.
    ///
    /// # Examples
    /// ```ignore
    /// LinkTarget::from_fields(v, "buttonURL", "isButtonUrlExternal", "buttontarget")
    /// ```
    pub fn from_fields(value: &Value, url_key: &str, external_key: &str, target_key: &str) -> Option<Self> {
        let url = str_field(value, url_key)?;
        Some(Self {
            url,
            is_external: bool_field(value, external_key).unwrap_or(false),
            open_in_new_tab: str_field(value, target_key).as_deref() == Some("_blank"),
        })
    }
}

/// Button style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    /// Unknown and absent variants fall back to `Primary`
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("Secondary") => ButtonVariant::Secondary,
            _ => ButtonVariant::Primary,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
        }
    }
}

/// A labelled link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: String,
    pub link: LinkTarget,
    pub variant: ButtonVariant,
}

impl CallToAction {
    /// A button exists only when both its label and its link do
    pub fn from_fields(
        value: &Value,
        label_key: &str,
        url_key: &str,
        external_key: &str,
        target_key: &str,
        variant_key: &str,
    ) -> Option<Self> {
        let label = str_field(value, label_key)?;
        let link = LinkTarget::from_fields(value, url_key, external_key, target_key)?;
        Some(Self {
            label,
            link,
            variant: ButtonVariant::parse(str_field(value, variant_key).as_deref()),
        })
    }

    /// The `buttonName`/`buttonLink`/`isExternal`/`target`/`variant` shape
    /// shared by most nested button lists
    pub fn from_button(value: &Value) -> Option<Self> {
        Self::from_fields(value, "buttonName", "buttonLink", "isExternal", "target", "variant")
    }
}
