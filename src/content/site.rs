//! Site copy and asset paths

use super::{
    AudienceCard, Band, ClientLogo, Contact, Icon, Point, ProductCard, SocialLink, Story, Tone,
};

pub const SITE_TITLE: &str = "MAI World | Handover Cleaning Specialists";
pub const SITE_DESCRIPTION: &str =
    "Manpower Alliance of India (MAI) handover cleaning and housekeeping services.";

pub const LOGO_SRC: &str = "/assets/logos/mai-logo-primary.png";
pub const LOGO_ALT: &str = "MAI Logo";

/// Call-to-action targets are placeholders until the booking flow exists
pub const PLACEHOLDER_HREF: &str = "#";

pub const TAGLINE: &str = "seva se hoga.";

pub const HERO: Story = Story {
    heading: &["Handover-Cleaning Specialists"],
    image_src: "/assets/images/hero-handover.webp",
    image_alt: "Handover cleaning team in an empty home",
    priority: true,
};

pub const HERO_INTRO: &str = "MAI (Manpower Alliance of India) specialises in handover-cleaning in \
    Pune. We undertake handover cleaning for new, post-construction, and post-renovation \
    properties.";

pub const KHUSHNUMA: Story = Story {
    heading: &["Ab Har Kona Khushnuma"],
    image_src: "/assets/images/hero-ab-har-kona.webp",
    image_alt: "Cleaned apartment with glass balcony",
    priority: false,
};

pub const KHUSHNUMA_BODY: &[&str] = &[
    "We all know how construction dirt and furniture dust settle into pores, not just on \
     surfaces. How adhesive residue hides on glass. And how stone, metal, wood finishes and \
     fixtures require different handling and careful cleaning.",
    "This isn't any 'labour' job. But a service partner's job who understands your work. Our \
     parent company has been in the contracting business for the past 35 years. MAI is your \
     reliable and professional service partner for handover-cleaning.",
];

pub const LEAVING_FRESH: Story = Story {
    heading: &[
        "Leaving a fresh, pleasant, and clean space",
        "is a memorable gesture.",
    ],
    image_src: "/assets/images/hero-leaving-fresh.webp",
    image_alt: "Deep cleaning a premium lobby",
    priority: false,
};

pub const LEAVING_FRESH_SUBHEAD: &str = "You have beautifully designed and built the space. It \
    now requires our cleaning service before delivery, so the owners welcome it with delight.";

pub const AUDIENCE_HEADING: &str = "MAI is hired for handover-cleaning by";

pub const AUDIENCE: &[AudienceCard] = &[
    AudienceCard {
        src: "/assets/images/audience-architects.png",
        alt: "Architects",
        label: "Architects",
        href: PLACEHOLDER_HREF,
    },
    AudienceCard {
        src: "/assets/images/audience-interior-designers.png",
        alt: "Interior Designers",
        label: "Interior Designers",
        href: PLACEHOLDER_HREF,
    },
    AudienceCard {
        src: "/assets/images/audience-property-owners.png",
        alt: "Property Owners",
        label: "Property Owners",
        href: PLACEHOLDER_HREF,
    },
    AudienceCard {
        src: "/assets/images/audience-builders-promoters.png",
        alt: "Builders and Promoters",
        label: "Builders and Promoters",
        href: PLACEHOLDER_HREF,
    },
];

pub const PRODUCTS_STORY: Story = Story {
    heading: &["Choose the product that best suits you."],
    image_src: "/assets/images/hero-products.webp",
    image_alt: "House cleaning inside a premium residence",
    priority: false,
};

pub const PRODUCTS_INTRO: [&str; 2] = [
    "We have designed and developed products tailored to our clients' different needs.",
    "Do choose what best suits your requirements.",
];

pub const PRODUCTS_HEADING: &str = "Three products from MAI";
pub const PRODUCT_CTA: &str = "Request a Site Assessment";
pub const PRODUCTS_NOTE: &str = "*t&c apply";

pub const PRODUCTS: &[ProductCard] = &[
    ProductCard {
        title: "MAI-ESSENTIAL",
        tone: Tone::Teal,
        text: "MAI-ESSENTIAL is a standard handover cleaning product that covers a range of \
               services, from dust and debris removal to final touch-up, with optional services \
               such as shampooing and odour removal.",
        extra: None,
    },
    ProductCard {
        title: "MAI-PREMIUM",
        tone: Tone::Blue,
        text: "MAI-PREMIUM is an enhanced move-in-ready product that delivers comprehensive deep \
               cleaning and enhanced detailing.",
        extra: Some(
            "This product covers all MAI-ESSENTIAL services, plus premium services like \
             scrubbing, equipment cleaning, internal kitchen cabinets, odour treatment and \
             sanitisation, and several optional services to choose from.",
        ),
    },
    ProductCard {
        title: "MAI-SIGNATURE",
        tone: Tone::Orange,
        text: "MAI-SIGNATURE is a premium white-glove handover product designed for luxurious \
               properties that demand impeccable presentation.",
        extra: Some(
            "It covers all MAI-PREMIUM plus stone polishing, hardware polishing, fine-dust \
             extraction, and several optional add-on services.",
        ),
    },
];

pub const COST_BAND: Band = Band {
    src: "/assets/images/hero-cost-banner.webp",
    alt: "Cost packages banner",
    height_class: "min-h-420",
    overlay: "rgba(5,17,28,0.53)",
    image_class: "object-center",
};

pub const COST_HEADING: &str = "Cost packages start at only";
pub const COST_HIGHLIGHT: &str = "Rs. 10* per sq. ft.";
pub const COST_NOTE: &str = "*Conditions apply. Costs increase based on the size, scale, \
    condition of the premises, and the product selected.";
pub const COST_CTA: &str = "Get a Custom Handover Estimate";

pub const WHY_HEADING: &str = "Why MAI?";
pub const WHY_SUBHEAD: &str = "Focus on 4Ps";

pub const POINTS: &[Point] = &[
    Point {
        title: "Parentage",
        text: "Business Understanding (Parent 35 years in Contracting)",
        icon_src: "/assets/icons/why-mai/asset-4.svg",
        icon_alt: "Parentage icon",
    },
    Point {
        title: "People",
        text: "Constant Training and Development",
        icon_src: "/assets/icons/why-mai/asset-3.svg",
        icon_alt: "People icon",
    },
    Point {
        title: "Products",
        text: "Latest Equipment and correct consumables",
        icon_src: "/assets/icons/why-mai/asset-2.svg",
        icon_alt: "Products icon",
    },
    Point {
        title: "Procedure",
        text: "Performance-Oriented Processes and Approach",
        icon_src: "/assets/icons/why-mai/asset-1.svg",
        icon_alt: "Procedure icon",
    },
];

pub const CLIENTS_HEADING: &str = "Sites we have served.";
pub const CLIENTS_SUBHEAD: &str = "The list is growing every day.";
pub const CLIENTS_NOTE: &str =
    "*All logos displayed here are registered trademark of their respective owners.";

/// Logos in the wide first row; the rest go in a narrower second row
pub const CLIENTS_FIRST_ROW: usize = 5;

pub const CLIENTS: &[ClientLogo] = &[
    ClientLogo { src: "/assets/clients/logo-kotibhaskar.png", alt: "Kotibhaskar" },
    ClientLogo { src: "/assets/clients/logo-amar.png", alt: "Amar Builders" },
    ClientLogo { src: "/assets/clients/logo-solitaire.png", alt: "Solitaire" },
    ClientLogo { src: "/assets/clients/logo-bharati.png", alt: "Bharati Vidyapeeth" },
    ClientLogo { src: "/assets/clients/logo-sayaji.png", alt: "Sayaji" },
    ClientLogo { src: "/assets/clients/logo-archpro.png", alt: "ArchPro" },
    ClientLogo { src: "/assets/clients/logo-zostel.png", alt: "Zostel" },
    ClientLogo { src: "/assets/clients/logo-treebo.png", alt: "Treebo" },
];

pub const TEAM_BAND: Band = Band {
    src: "/assets/images/hero-team.webp",
    alt: "Team image band",
    height_class: "min-h-560",
    overlay: "rgba(7,18,30,0.48)",
    image_class: "object-top",
};

pub const HOUSEKEEPING_BAND: Band = Band {
    src: "/assets/images/hero-housekeeping.webp",
    alt: "Housekeeping banner",
    height_class: "min-h-620",
    overlay: "rgba(7,18,30,0.52)",
    image_class: "object-center",
};

pub const HOUSEKEEPING_HEADING: &[&str] = &[
    "Reliable Everyday Housekeeping Services for Establishments in",
    "Pune",
];
pub const HOUSEKEEPING_CTA: &str = "Explore Everyday Housekeeping";

pub const ABOUT: &str = "Manpower Alliance of India (MAI) is a professional, reliable, and \
    value-driven service provider of deep cleaning for handovers and general housekeeping for \
    companies. We operate in Pune and its surrounding areas.";

pub const SERVICES: &[&str] = &["Handover cleaning", "Everyday Housekeeping"];

pub const CONTACT: Contact = Contact {
    address: "Office 101, Plot No. 12, Shailesh Society, Next to Ashwini Hospital, Off \
              Navasahyadri, Karvenagar, Pune - 411 052",
    phone: "+91-8263054306",
    email: "seva@maiworld.in",
};

pub const SOCIAL: &[SocialLink] = &[
    SocialLink { label: "LinkedIn", href: PLACEHOLDER_HREF, icon: Icon::Linkedin },
    SocialLink { label: "Facebook", href: PLACEHOLDER_HREF, icon: Icon::Facebook },
    SocialLink { label: "Instagram", href: PLACEHOLDER_HREF, icon: Icon::Instagram },
];

pub const COPYRIGHT: &str = "@ 2026 Manpower Alliance of India";
pub const LEGAL: &str = "Privacy Policy | Terms & Conditions | Disclaimer";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_image_has_alt_text() {
        let mut alts: Vec<&str> = vec![LOGO_ALT, COST_BAND.alt, TEAM_BAND.alt, HOUSEKEEPING_BAND.alt];
        alts.extend([HERO, KHUSHNUMA, LEAVING_FRESH, PRODUCTS_STORY].iter().map(|s| s.image_alt));
        alts.extend(AUDIENCE.iter().map(|a| a.alt));
        alts.extend(POINTS.iter().map(|p| p.icon_alt));
        alts.extend(CLIENTS.iter().map(|c| c.alt));
        assert!(alts.iter().all(|a| !a.trim().is_empty()));
    }

    #[test]
    fn only_the_hero_image_is_priority() {
        let stories = [HERO, KHUSHNUMA, LEAVING_FRESH, PRODUCTS_STORY];
        let priority: Vec<_> = stories.iter().filter(|s| s.priority).collect();
        assert_eq!(priority.len(), 1);
        assert_eq!(priority[0].image_src, HERO.image_src);
    }

    #[test]
    fn product_tones_are_distinct() {
        let tones: HashSet<Tone> = PRODUCTS.iter().map(|p| p.tone).collect();
        assert_eq!(tones.len(), PRODUCTS.len());
    }

    #[test]
    fn client_rows_split() {
        assert!(CLIENTS_FIRST_ROW <= CLIENTS.len());
        let (first, second) = CLIENTS.split_at(CLIENTS_FIRST_ROW);
        assert_eq!(first.len(), 5);
        assert_eq!(second.len(), 3);
    }

    #[test]
    fn four_ps() {
        let titles: Vec<&str> = POINTS.iter().map(|p| p.title).collect();
        assert_eq!(titles, ["Parentage", "People", "Products", "Procedure"]);
    }
}
