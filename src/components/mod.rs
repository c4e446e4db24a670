//! Components - the animated and layout building blocks of the page

mod cta;
mod expand_image;
mod heading;
mod layout;
mod reveal;

pub use cta::{CtaLink, IconGlyph};
pub use expand_image::ExpandImage;
pub use heading::{HeadingLevel, StaggeredHeading};
pub use layout::{BleedTag, FullBleed, ImageBand};
pub use reveal::Reveal;
