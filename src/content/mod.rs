//! Content - the static data the page is built from
//!
//! Copy, image paths and link targets live here as plain tables; the
//! sections only decide layout.

pub mod icons;
pub mod site;

pub use icons::Icon;
pub use site::*;

use std::fmt;

/// Brand accent used by a product card and its button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Teal,
    Blue,
    Orange,
}

impl Tone {
    pub fn text_class(&self) -> &'static str {
        match self {
            Self::Teal => "text-mai-teal",
            Self::Blue => "text-mai-blue",
            Self::Orange => "text-mai-orange",
        }
    }

    pub fn fill_class(&self) -> &'static str {
        match self {
            Self::Teal => "bg-mai-teal",
            Self::Blue => "bg-mai-blue",
            Self::Orange => "bg-mai-orange",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Teal => "teal",
            Self::Blue => "blue",
            Self::Orange => "orange",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub title: &'static str,
    pub tone: Tone,
    pub text: &'static str,
    pub extra: Option<&'static str>,
}

/// One of the four "P"s
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub title: &'static str,
    pub text: &'static str,
    pub icon_src: &'static str,
    pub icon_alt: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientLogo {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudienceCard {
    pub src: &'static str,
    pub alt: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

/// A section opener: heading lines above a scroll-expanding image
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    pub heading: &'static [&'static str],
    pub image_src: &'static str,
    pub image_alt: &'static str,
    pub priority: bool,
}

/// Full-bleed photo with a tinted overlay behind centred content
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub src: &'static str,
    pub alt: &'static str,
    /// Class setting the band's minimum height
    pub height_class: &'static str,
    /// CSS colour laid over the photo
    pub overlay: &'static str,
    pub image_class: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}
