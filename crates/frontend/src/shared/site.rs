//! Company details shown in the footer and on the contact page

pub const COMPANY_NAME: &str = "QJWC Construction";
pub const COMPANY_SHORT: &str = "QJWC";
pub const PHONE: &str = "0915 099 8094";
pub const PHONE_HREF: &str = "tel:09150998094";
pub const EMAIL: &str = "tradingqjwc@gmail.com";
pub const ADDRESS: &str = "General Trias, Cavite";
pub const HOURS: &str = "Mon - Fri : 8:00 AM - 5:00 PM";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/QJWC.Trading";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps?q=General+Trias,+Cavite&output=embed";

/// A labelled internal link
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href }
}

pub const MAIN_NAV: [NavLink; 5] = [
    link("Home", "/"),
    link("Products", "/products"),
    link("Services", "/services"),
    link("About", "/about"),
    link("Contact", "/contact"),
];

pub const FOOTER_SERVICES: [NavLink; 4] = [
    link("Bulk Purchasing", "/services"),
    link("Contractor Pricing", "/services"),
    link("Material Sourcing", "/services"),
    link("Delivery Services", "/services"),
];

pub const FOOTER_COMPANY: [NavLink; 4] = [
    link("About Us", "/about"),
    link("Our Services", "/services"),
    link("Contact", "/contact"),
    link("Request Quote", "/contact"),
];

/// `/` only matches itself; every other link also matches its sub-paths
pub fn is_nav_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        pathname == "/"
    } else {
        pathname.starts_with(href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_nav_active() {
        assert!(is_nav_active("/", "/"));
        assert!(!is_nav_active("/", "/products"));
        assert!(is_nav_active("/products", "/products"));
        assert!(is_nav_active("/products", "/products/plywood-marine-1"));
        assert!(!is_nav_active("/contact", "/products"));
    }
}
