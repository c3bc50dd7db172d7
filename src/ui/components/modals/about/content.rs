//! Content composition for the About dialog
//!
//! [`compose`] maps the supplied inputs to an ordered list of [`Section`]s.
//! A section exists iff its input was supplied; the order never depends on
//! the order in which inputs were set.

use serde::{Deserialize, Serialize};

use crate::ui::components::{link::Link, logo::Logo};

/// A labelled block of extra information (licences, build details, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoGroup {
    pub label: String,
    pub content: String,
}

impl InfoGroup {
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }
}

/// Optional content inputs of the dialog.
///
/// Empty `links` and `additional_info` count as not supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AboutContent {
    pub title: Option<String>,
    pub logo: Option<Logo>,
    pub content: Option<String>,
    pub general_text: Option<String>,
    pub links: Vec<Link>,
    pub copyright_text: Option<String>,
    pub version_number: Option<String>,
    pub additional_info: Vec<InfoGroup>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Title,
    Logo,
    Body,
    GeneralText,
    Links,
    Copyright,
    Version,
    AdditionalInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Title(String),
    Logo(Logo),
    Body(String),
    GeneralText(String),
    Links(Vec<Link>),
    Copyright(String),
    Version(String),
    AdditionalInfo(InfoGroup),
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Title(_) => SectionKind::Title,
            Section::Logo(_) => SectionKind::Logo,
            Section::Body(_) => SectionKind::Body,
            Section::GeneralText(_) => SectionKind::GeneralText,
            Section::Links(_) => SectionKind::Links,
            Section::Copyright(_) => SectionKind::Copyright,
            Section::Version(_) => SectionKind::Version,
            Section::AdditionalInfo(_) => SectionKind::AdditionalInfo,
        }
    }
}

/// Build the ordered section list for `content`
pub fn compose(content: &AboutContent) -> Vec<Section> {
    let mut sections = Vec::new();

    if let Some(title) = &content.title {
        sections.push(Section::Title(title.clone()));
    }
    if let Some(logo) = &content.logo {
        sections.push(Section::Logo(logo.clone()));
    }
    if let Some(body) = &content.content {
        sections.push(Section::Body(body.clone()));
    }
    if let Some(text) = &content.general_text {
        sections.push(Section::GeneralText(text.clone()));
    }
    if !content.links.is_empty() {
        sections.push(Section::Links(content.links.clone()));
    }
    if let Some(text) = &content.copyright_text {
        sections.push(Section::Copyright(text.clone()));
    }
    if let Some(version) = &content.version_number {
        sections.push(Section::Version(version.clone()));
    }
    sections.extend(
        content
            .additional_info
            .iter()
            .cloned()
            .map(Section::AdditionalInfo),
    );

    sections
}
