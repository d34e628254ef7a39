use crate::icon::Icon;

/// One sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

/// Sidebar links, top to bottom.
pub const NAVIGATION: [NavItem; 3] = [
    NavItem {
        label: "Home",
        href: "/dashboard",
        icon: Icon::Home,
    },
    NavItem {
        label: "Profile",
        href: "/dashboard/profile",
        icon: Icon::User,
    },
    NavItem {
        label: "Settings",
        href: "/dashboard/settings",
        icon: Icon::Settings,
    },
];

impl NavItem {
    /// Exact match only: `/dashboard/profile` does not activate `/dashboard`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.href == current_path
    }

    pub fn link_class(&self, current_path: &str) -> &'static str {
        if self.is_active(current_path) {
            "nav-link nav-link-active"
        } else {
            "nav-link"
        }
    }
}

pub fn active_item<'a>(items: &'a [NavItem], current_path: &str) -> Option<&'a NavItem> {
    items.iter().find(|item| item.is_active(current_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_home_profile_settings() {
        let labels: Vec<_> = NAVIGATION.iter().map(|i| i.label).collect();
        assert_eq!(labels, ["Home", "Profile", "Settings"]);
    }

    #[test]
    fn parent_link_not_active_on_child_route() {
        let home = &NAVIGATION[0];
        assert!(home.is_active("/dashboard"));
        assert!(!home.is_active("/dashboard/profile"));
        assert_eq!(home.link_class("/dashboard/profile"), "nav-link");
        assert_eq!(home.link_class("/dashboard"), "nav-link nav-link-active");
    }

    #[test]
    fn trailing_slash_is_not_a_match() {
        assert_eq!(active_item(&NAVIGATION, "/dashboard/"), None);
    }
}
