use serde::Serialize;

use crate::session::Session;

pub const BRAND: &str = "AI News";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAVIGATION: [NavItem; 4] = [
    NavItem { name: "Dashboard", href: "/" },
    NavItem { name: "Sources", href: "/sources" },
    NavItem { name: "Content", href: "/content" },
    NavItem { name: "Settings", href: "/settings" },
];

/// The root item only matches the root itself, everything else matches by prefix.
pub fn is_active(href: &str, path: &str) -> bool {
    if href == "/" {
        return path == "/";
    }
    path.starts_with(href)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SidebarState {
    pub collapsed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub href: &'static str,
    /// Hidden while the sidebar is collapsed.
    pub label: Option<&'static str>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorCard {
    pub name: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    pub collapsed: bool,
    pub width_class: &'static str,
    pub brand: Option<&'static str>,
    pub items: Vec<NavEntry>,
    pub operator: Option<OperatorCard>,
}

impl SidebarView {
    /// True when any text (brand, nav label, operator card) would be rendered.
    pub fn shows_labels(&self) -> bool {
        self.brand.is_some() || self.operator.is_some() || self.items.iter().any(|i| i.label.is_some())
    }
}

impl SidebarState {
    pub fn toggle(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    pub fn width_class(&self) -> &'static str {
        if self.collapsed {
            "w-16"
        } else {
            "w-64"
        }
    }

    pub fn view(&self, path: &str, session: &Session) -> SidebarView {
        let expanded = !self.collapsed;
        SidebarView {
            collapsed: self.collapsed,
            width_class: self.width_class(),
            brand: expanded.then_some(BRAND),
            items: NAVIGATION
                .iter()
                .map(|item| NavEntry {
                    href: item.href,
                    label: expanded.then_some(item.name),
                    active: is_active(item.href, path),
                })
                .collect(),
            operator: expanded.then(|| session.operator_card()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_only_active_on_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/sources"));
        assert!(is_active("/sources", "/sources"));
        assert!(is_active("/sources", "/sources/4/edit"));
        assert!(!is_active("/content", "/settings"));
    }

    #[test]
    fn test_view_marks_exactly_one_active_item() {
        let view = SidebarState::default().view("/content", &Session::Anonymous);
        let active: Vec<_> = view.items.iter().filter(|i| i.active).map(|i| i.href).collect();
        assert_eq!(active, vec!["/content"]);
    }

    #[test]
    fn test_collapse_narrows_and_hides_labels() {
        let mut state = SidebarState::default();
        let expanded = state.view("/", &Session::Anonymous);
        assert_eq!(expanded.width_class, "w-64");
        assert!(expanded.shows_labels());
        assert!(expanded.items.iter().all(|i| i.label.is_some()));

        assert!(state.toggle());
        let collapsed = state.view("/", &Session::Anonymous);
        assert_eq!(collapsed.width_class, "w-16");
        assert!(!collapsed.shows_labels());
        assert_eq!(collapsed.items.len(), NAVIGATION.len());

        assert!(!state.toggle());
        assert_eq!(state.view("/", &Session::Anonymous), expanded);
    }
}
