//! Static navigation targets and asset paths.

/// A plain hyperlink in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const HOME_HREF: &str = "/";

pub const LOGO_SRC: &str = "/logo.svg";

pub const COMPASS_SRC: &str = "/compass.svg";

/// Links rendered on the right-hand side of the bar, in order.
pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        label: "About",
        href: "/about",
    },
    NavLink {
        label: "Explore",
        href: "/explore",
    },
];

/// Every page path the site answers with its shell document.
#[must_use]
pub fn page_paths() -> Vec<&'static str> {
    std::iter::once(HOME_HREF)
        .chain(NAV_LINKS.iter().map(|link| link.href))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_about_before_explore() {
        let labels: Vec<_> = NAV_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(labels, ["About", "Explore"]);
    }

    #[test]
    fn should_include_home_in_page_paths() {
        assert_eq!(page_paths(), ["/", "/about", "/explore"]);
    }
}
