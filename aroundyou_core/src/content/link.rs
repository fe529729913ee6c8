use std::str::FromStr;

use serde::Deserialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Section ids the page declares. Navigation may only point at these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Anchor {
    Product,
    Features,
    About,
    Contact,
}

impl Anchor {
    pub fn id(&self) -> &'static str {
        (*self).into()
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

/// What an `href` on the page points at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    Section(Anchor),
    /// bare `#`, a link that is not wired up yet
    Placeholder,
    Mail(&'a str),
    Phone(&'a str),
    UnknownSection(&'a str),
    External(&'a str),
}

impl<'a> LinkTarget<'a> {
    pub fn parse(href: &'a str) -> Self {
        if href == "#" {
            LinkTarget::Placeholder
        } else if let Some(id) = href.strip_prefix('#') {
            match Anchor::from_str(id) {
                Ok(anchor) => LinkTarget::Section(anchor),
                Err(_) => LinkTarget::UnknownSection(id),
            }
        } else if let Some(address) = href.strip_prefix("mailto:") {
            LinkTarget::Mail(address)
        } else if let Some(number) = href.strip_prefix("tel:") {
            LinkTarget::Phone(number)
        } else {
            LinkTarget::External(href)
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LinkTarget::Section(_) | LinkTarget::UnknownSection(_) => "anchor",
            LinkTarget::Placeholder => "placeholder",
            LinkTarget::Mail(_) => "mailto",
            LinkTarget::Phone(_) => "tel",
            LinkTarget::External(_) => "external",
        }
    }

    /// Only in-page anchors can be checked; everything else is assumed to resolve.
    pub fn resolves(&self) -> bool {
        !matches!(self, LinkTarget::UnknownSection(_))
    }
}

/// One link rendered somewhere on the page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLink {
    pub location: String,
    pub label: String,
    pub href: String,
}

impl PageLink {
    pub fn target(&self) -> LinkTarget<'_> {
        LinkTarget::parse(&self.href)
    }
}
