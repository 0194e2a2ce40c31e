//! Branding and the fixed external destinations linked from the header.

use icondata::Icon;

pub const BRAND_ACCENT: &str = "Dr.";
pub const BRAND_NAME: &str = "Interested";
pub const LOGO_SRC: &str = "/circle-logo.png";
pub const LOGO_ALT: &str = "Dr. Interested Logo";

pub const INTEREST_FORM_LABEL: &str = "Interested?";
pub const INTEREST_FORM_URL: &str = "https://forms.gle/i3Y6vazF5TErGBxG7";

/// An icon link to one of the organisation's community or social profiles.
#[derive(Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: Icon,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Discord",
        url: "https://discord.gg/pzbGRgsGXY",
        icon: icondata::BsDiscord,
    },
    SocialLink {
        label: "Instagram",
        url: "https://www.instagram.com/dr.interested/",
        icon: icondata::LuInstagram,
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/company/dr-interested",
        icon: icondata::LuLinkedin,
    },
];

/// Full brand name as shown in titles.
pub fn brand() -> String {
    format!("{BRAND_ACCENT} {BRAND_NAME}")
}
