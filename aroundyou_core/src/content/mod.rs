#[cfg(test)]
mod tests;

mod content_error;
mod glyph;
mod link;

pub use content_error::ContentError;
pub use glyph::{Accent, Glyph};
pub use link::{Anchor, LinkTarget, PageLink};

use std::sync::LazyLock;

use serde::Deserialize;
use strum::IntoEnumIterator;

use crate::include_content_file;
use crate::utils::is_blank;

/// The features grid is laid out for exactly this many cards
pub const FEATURE_COUNT: usize = 6;

/// The content document compiled into the page
pub const EMBEDDED_DOCUMENT: &str = include_content_file!("site.json");

static EMBEDDED: LazyLock<Result<SiteContent, Vec<ContentError>>> =
    LazyLock::new(|| SiteContent::parse(EMBEDDED_DOCUMENT));

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: Anchor,
}

/// A product highlight shown next to the headphone showcase
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Highlight {
    pub icon: Glyph,
    pub title: String,
    pub description: String,
    pub accent: Accent,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FeatureDescriptor {
    pub icon: Glyph,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactChannel {
    pub icon: Glyph,
    pub label: String,
    /// Rendered one per line
    pub lines: Vec<String>,
    #[serde(default)]
    pub href: Option<String>,
    pub accent: Accent,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TeamMember {
    pub initials: String,
    pub name: String,
    pub role: String,
    pub accent: Accent,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FooterColumn {
    pub heading: String,
    pub links: Vec<FooterLink>,
}

/// Every static record the page renders
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteContent {
    pub nav: Vec<NavLink>,
    pub highlights: Vec<Highlight>,
    pub features: Vec<FeatureDescriptor>,
    pub contact: Vec<ContactChannel>,
    pub team: Vec<TeamMember>,
    pub footer: Vec<FooterColumn>,
}

impl SiteContent {
    /// The content compiled into the binary, parsed and validated once.
    pub fn embedded() -> Result<&'static SiteContent, &'static [ContentError]> {
        EMBEDDED.as_ref().map_err(Vec::as_slice)
    }

    pub fn parse(document: &str) -> Result<SiteContent, Vec<ContentError>> {
        let content = SiteContent::from_json(document).map_err(|e| vec![e])?;
        content.validate()?;
        Ok(content)
    }

    /// Deserializes without running `validate`
    pub fn from_json(document: &str) -> Result<SiteContent, ContentError> {
        serde_json::from_str(document).map_err(ContentError::from_json)
    }

    /// Section ids the page carries
    pub fn declared_anchors() -> impl Iterator<Item = Anchor> {
        Anchor::iter()
    }

    pub fn validate(&self) -> Result<(), Vec<ContentError>> {
        let mut errors = Vec::new();

        for (i, link) in self.nav.iter().enumerate() {
            if is_blank(&link.label) {
                errors.push(ContentError::new(
                    format!("nav[{}].label", i),
                    "Navigation label must not be blank",
                ));
            }
        }

        if self.features.len() != FEATURE_COUNT {
            errors.push(ContentError::new(
                "features",
                format!(
                    "Expected exactly {} features, got {}",
                    FEATURE_COUNT,
                    self.features.len()
                ),
            ));
        }
        for (i, feature) in self.features.iter().enumerate() {
            if is_blank(&feature.title) {
                errors.push(ContentError::new(
                    format!("features[{}].title", i),
                    "Feature title must not be blank",
                ));
            }
            if is_blank(&feature.description) {
                errors.push(ContentError::new(
                    format!("features[{}].description", i),
                    "Feature description must not be blank",
                ));
            }
        }

        for (i, channel) in self.contact.iter().enumerate() {
            if let Some(href) = &channel.href {
                match LinkTarget::parse(href) {
                    LinkTarget::Mail(address) if !is_blank(address) => {}
                    LinkTarget::Phone(number) if !is_blank(number) => {}
                    _ => errors.push(ContentError::new(
                        format!("contact[{}].href", i),
                        format!("Contact link '{}' must use a mailto: or tel: address", href),
                    )),
                }
            }
            if channel.lines.iter().all(|line| is_blank(line)) {
                errors.push(ContentError::new(
                    format!("contact[{}].lines", i),
                    "Contact channel needs at least one line of text",
                ));
            }
        }

        for (i, member) in self.team.iter().enumerate() {
            let initials = member.initials.chars().count();
            if !(1..=3).contains(&initials)
                || !member.initials.chars().all(|c| c.is_uppercase())
            {
                errors.push(ContentError::new(
                    format!("team[{}].initials", i),
                    format!(
                        "Initials must be 1 to 3 uppercase letters, got '{}'",
                        member.initials
                    ),
                ));
            }
            if is_blank(&member.name) {
                errors.push(ContentError::new(
                    format!("team[{}].name", i),
                    "Team member name must not be blank",
                ));
            }
        }

        for (i, column) in self.footer.iter().enumerate() {
            for (j, link) in column.links.iter().enumerate() {
                if let LinkTarget::UnknownSection(id) = LinkTarget::parse(&link.href) {
                    errors.push(ContentError::new(
                        format!("footer[{}].links[{}].href", i, j),
                        format!("Link points at section '{}' which the page does not declare", id),
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Every link rendered on the page, in document order
    pub fn links(&self) -> Vec<PageLink> {
        let mut links = Vec::new();

        for link in &self.nav {
            links.push(PageLink {
                location: "nav".to_string(),
                label: link.label.clone(),
                href: link.target.href(),
            });
        }

        for channel in &self.contact {
            if let Some(href) = &channel.href {
                links.push(PageLink {
                    location: "contact".to_string(),
                    label: channel.label.clone(),
                    href: href.clone(),
                });
            }
        }

        for column in &self.footer {
            for link in &column.links {
                links.push(PageLink {
                    location: format!("footer/{}", column.heading),
                    label: link.label.clone(),
                    href: link.href.clone(),
                });
            }
        }

        links
    }
}
