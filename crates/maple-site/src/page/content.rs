//! The copy and imagery shown on the landing page.

pub const TITLE: &str =
  "Maple Properties - Transforming Dilapidated Properties Into High-Quality Homes";
pub const DESCRIPTION: &str = "Maple Properties is a family-run property investment \
  company buying rundown properties across the UK for refurbishment and long-term letting.";

pub const KEYWORDS: &str = "property investment, property refurbishment, UK property, \
  family property company, property development";
pub const AUTHOR: &str = "Maple Properties";
pub const CANONICAL_URL: &str = "https://mapleproperties.co.uk";
pub const FAVICON: &str = "/favicon.ico";

/// Title and description shared by the Open Graph and Twitter cards.
pub const SHARE_TITLE: &str = "Maple Properties - Transforming Properties Into Homes";
pub const SHARE_DESCRIPTION: &str = "Family-run property investment company buying \
  rundown properties across the UK for refurbishment and long-term letting.";

/// `<meta property=...>` Open Graph tags.
pub const OPEN_GRAPH: [(&str, &str); 4] = [
  ("og:title", SHARE_TITLE),
  ("og:description", SHARE_DESCRIPTION),
  ("og:type", "website"),
  ("og:url", CANONICAL_URL),
];

/// `<meta name=...>` Twitter card tags.
pub const TWITTER_CARD: [(&str, &str); 3] = [
  ("twitter:card", "summary_large_image"),
  ("twitter:title", SHARE_TITLE),
  ("twitter:description", SHARE_DESCRIPTION),
];

pub const BRAND: &str = "Maple Properties";
pub const LOGO: &str = "/maple-logo.png";
pub const HERO_IMAGE: &str = "/maple-hero.jpeg";
pub const HERO_HEADLINE: &str =
  "A Family-run property building company carrying out projects all over England.";
pub const HERO_TAGLINE: &str = "Over 30 years experience buying and renovating";

pub const EMAIL: &str = "info@mapleproperties.co.uk";
pub const PHONE_DISPLAY: &str = "01234 567890";
pub const PHONE_DIAL: &str = "01234567890";
pub const COPYRIGHT: &str = "\u{a9} 2024 Maple Properties. All rights reserved.";

pub struct Link {
  pub href:  &'static str,
  pub label: &'static str,
}

pub const NAV: [Link; 4] = [
  Link { href: "#about",       label: "About" },
  Link { href: "#what-we-buy", label: "What We Buy" },
  Link { href: "#projects",    label: "Projects" },
  Link { href: "#contact",     label: "Contact" },
];

pub const FOOTER_LINKS: [Link; 4] = [
  Link { href: "#about",       label: "About Us" },
  Link { href: "#what-we-buy", label: "What We Buy" },
  Link { href: "#projects",    label: "Our Projects" },
  Link { href: "#contact",     label: "Contact" },
];

// ─── Intro ────────────────────────────────────────────────────────────────────

pub struct Card {
  pub icon:  &'static str,
  pub title: &'static str,
  pub body:  &'static str,
}

pub const INTRO: [Card; 3] = [
  Card {
    icon:  "/icon-everything-144.png",
    title: "Everything in one place",
    body:  "Maple Properties is led by father and daughter duo Andre and Karina \
            Savoie. With over 30 years of hands-on building experience and a \
            passion for thoughtful design, we specialise in giving neglected \
            properties a new lease of life. From fire-damaged terraces to unloved \
            apartments, we turn problems into beautiful homes.",
  },
  Card {
    icon:  "/icons-family.png",
    title: "Family expertise",
    body:  "We combine experienced local knowledge with smart tools and \
            transparent pricing. Whether you're selling your first property or \
            upgrading to your next, we're here to help you move forward with ease \
            and speed.",
  },
  Card {
    icon:  "/icons-property.png",
    title: "Property investment reimagined",
    body:  "This isn't property investment the old way. It's transforming \
            neglected properties into beautiful homes, reimagined for today's \
            market.",
  },
];

// ─── About ────────────────────────────────────────────────────────────────────

pub const ABOUT_HEADING: &str = "Family Values. Professional Results.";
pub const ABOUT_LEAD: &str = "We're a family-owned property company with a big \
  vision: to restore and retain unloved buildings across the UK.";
pub const ABOUT_CLOSING: &str = "Together, Andre and Karina manage every project \
  from purchase to refurbishment to onward sale or letting.";
pub const ABOUT_IMAGE: &str = "/success-image.jpeg";

pub struct TeamMember {
  pub name: &'static str,
  pub role: &'static str,
  pub bio:  &'static str,
}

pub const TEAM: [TeamMember; 2] = [
  TeamMember {
    name: "Andre Savoie",
    role: "FOUNDER AND DIRECTOR",
    bio:  "Andre has worked in UK construction for over 30 years. He brings deep \
           technical knowledge, practical site experience and an ability to see \
           potential where others see problems.",
  },
  TeamMember {
    name: "Karina Savoie",
    role: "PROJECT MANAGER",
    bio:  "Karina is a creative force with interests spanning project \
           management, architecture and interior design.",
  },
];

// ─── What we buy ──────────────────────────────────────────────────────────────

pub const BUY_HEADING: &str = "We Buy Houses with Great Potential";

pub const SEEKING: [&str; 4] = [
  "Unmodernised or dilapidated residential houses",
  "Bungalows in need of full refurbishment or extension",
  "Blocks of flats (vacant or part-tenanted)",
  "Mixed-use properties (e.g. shops with upper parts)",
];

pub const ISSUES: [&str; 3] = [
  "Structural movement or subsidence",
  "Fire damage",
  "Damp and roof problems",
];

pub const CASH_BUYER: &str = "We're cash buyers and can complete in as little as \
  7 days. If you're looking for a reliable, no-nonsense sale \u{2013} we can help.";

// ─── Projects ─────────────────────────────────────────────────────────────────

pub const PROJECTS_HEADING: &str = "A Selection of Our Recent Refurbishments";

pub struct Project {
  pub image:   &'static str,
  pub alt:     &'static str,
  pub place:   &'static str,
  pub kind:    &'static str,
  pub summary: &'static str,
}

const UNSPLASH_PARAMS: &str = "?auto=format&fit=crop&w=1000&q=80";

pub const PROJECTS: [Project; 5] = [
  Project {
    image:   "https://images.unsplash.com/photo-1564013799919-ab600027ffc6",
    alt:     "Broadstairs bungalow extension",
    place:   "Broadstairs, Kent",
    kind:    "Bungalow Extension & Refurbishment",
    summary: "A tired 2-bed bungalow extended into a spacious 3-bed family home \
              with new kitchen-diner, rewire, and full external landscaping.",
  },
  Project {
    image:   "https://images.unsplash.com/photo-1570129477492-45c003edd2be",
    alt:     "Southampton detached house refurbishment",
    place:   "Southampton",
    kind:    "Detached House Refurbishment",
    summary: "A large vacant house suffering from neglect. Full strip-out, \
              structural repairs, internal redesign and modernisation.",
  },
  Project {
    image:   "https://images.unsplash.com/photo-1586023492125-27b2c045efd7",
    alt:     "Coventry semi-detached refurbishment",
    place:   "Coventry",
    kind:    "Semi-Detached 3-Bed Refurbishment",
    summary: "Former rental with fire damage and damp issues. Completed rewire, \
              new roof, and interior fit-out to high rental standard.",
  },
  Project {
    image:   "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00",
    alt:     "Nottingham apartment block overhaul",
    place:   "Nottingham",
    kind:    "Apartment Block Overhaul",
    summary: "A neglected 6-unit block with part-vacancy and anti-social \
              behaviour issues. Renovated and relet to working professionals.",
  },
  Project {
    image:   "https://images.unsplash.com/photo-1518780664697-55e3ad937233",
    alt:     "Cambridgeshire cottage refurbishment",
    place:   "Cambridgeshire",
    kind:    "Cottage Refurbishment",
    summary: "Quaint but crumbling. Repaired structural movement, exposed \
              original features, added insulation and restored charm.",
  },
];

impl Project {
  /// Image URL with the crop/size parameters the gallery expects.
  pub fn image_url(&self) -> String {
    format!("{}{UNSPLASH_PARAMS}", self.image)
  }
}

// ─── Contact ──────────────────────────────────────────────────────────────────

pub const CONTACT_HEADING: &str = "Let's Talk";
pub const CONTACT_LEAD: &str = "Have a property to sell or just want a chat about \
  what's possible? Get in touch directly \u{2013} we're always happy to talk.";

pub const WHY_CHOOSE: [&str; 4] = [
  "Cash buyers - quick completion",
  "30+ years of construction experience",
  "Family-run business with personal touch",
  "Portfolio of 50+ successful projects",
];
