//! Trial-panel render requests.
//!
//! The panel itself belongs to the host UI. This module only decides which
//! named attributes it receives.

use std::collections::BTreeMap;
use tracing::info;

/// Attribute carrying the purchase link.
pub const BUY_NOW_ATTRIBUTE: &str = "buy-now";
/// Attribute carrying the product version.
pub const VERSION_ATTRIBUTE: &str = "version";
/// Attribute carrying a custom message pattern.
pub const MESSAGE_ATTRIBUTE: &str = "message";
/// Attribute carrying custom link text.
pub const LINK_TEXT_ATTRIBUTE: &str = "link-text";

/// Attribute name to value, in a stable order.
pub type TrialPanelAttributes = BTreeMap<&'static str, String>;

/// Host hook that makes a trial notice visible.
pub trait TrialPanelRenderer: Send + Sync {
    /// Create and attach a panel carrying `attributes`.
    fn render(&self, attributes: &TrialPanelAttributes);
}

/// Standard trial panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialPanelOptions {
    /// Purchase link.
    pub buy_now_url: String,
    /// Product version shown on the panel.
    pub version: String,
}

/// Trial panel with a product-supplied message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomTrialPanelOptions {
    /// Message pattern shown instead of the standard text.
    pub custom_message_pattern: String,
    /// Link text; the link is shown only with a URL as well.
    pub custom_link_text: Option<String>,
    /// Purchase link; the link is shown only with link text as well.
    pub buy_now_url: Option<String>,
}

/// Request the standard trial panel.
pub fn show_trial_panel(renderer: &dyn TrialPanelRenderer, options: &TrialPanelOptions) {
    let mut attributes = TrialPanelAttributes::new();
    attributes.insert(BUY_NOW_ATTRIBUTE, options.buy_now_url.clone());
    attributes.insert(VERSION_ATTRIBUTE, options.version.clone());
    renderer.render(&attributes);
}

/// Request a trial panel with a custom message.
pub fn show_custom_trial_panel(
    renderer: &dyn TrialPanelRenderer,
    options: &CustomTrialPanelOptions,
) {
    let mut attributes = TrialPanelAttributes::new();
    attributes.insert(MESSAGE_ATTRIBUTE, options.custom_message_pattern.clone());

    let link_text = options.custom_link_text.as_deref().filter(|s| !s.is_empty());
    let buy_now_url = options.buy_now_url.as_deref().filter(|s| !s.is_empty());
    if let (Some(link_text), Some(buy_now_url)) = (link_text, buy_now_url) {
        attributes.insert(BUY_NOW_ATTRIBUTE, buy_now_url.to_string());
        attributes.insert(LINK_TEXT_ATTRIBUTE, link_text.to_string());
    }

    renderer.render(&attributes);
}

/// Renderer that records the request in the log instead of drawing anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRenderer;

impl TrialPanelRenderer for TracingRenderer {
    fn render(&self, attributes: &TrialPanelAttributes) {
        info!(?attributes, "Trial panel requested");
    }
}
