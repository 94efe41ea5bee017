//! Console chrome: area menus, portal navigation, banner lettering

use crate::session::AdminArea;

/// One entry in a navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// Stable page handle, used as the CLI subcommand name too
    pub slug: &'static str,
    pub label: &'static str,
}

const fn item(slug: &'static str, label: &'static str) -> MenuItem {
    MenuItem { slug, label }
}

/// Sidebar entries for an admin area, in display order
pub fn area_menu(area: AdminArea) -> Vec<MenuItem> {
    match area {
        AdminArea::Hr => vec![
            item("announcements", "Announcements"),
            item("activities", "Activities"),
            item("articles", "Articles"),
            item("sections", "Landing sections"),
            item("regulations", "Regulations"),
            item("forms", "Form templates"),
            item("trainings", "Trainings"),
            item("users", "Users"),
            item("visits", "Visit log"),
        ],
        AdminArea::It => vec![
            item("knowledge", "IT knowledge"),
            item("security", "Security bulletins"),
            item("links", "Quick links"),
            item("popup", "Popup images"),
            item("sockets", "Socket sessions"),
            item("page-visits", "Page visits"),
            item("messages", "Messages"),
            item("users", "Users"),
        ],
    }
}

/// Top navigation of the public portal
pub fn portal_menu() -> Vec<MenuItem> {
    vec![
        item("home", "Home"),
        item("articles", "News"),
        item("knowledge", "IT knowledge"),
        item("security", "Security"),
        item("activities", "Activities"),
        item("trainings", "Trainings"),
        item("contact", "Contact"),
    ]
}

/// Banner heading in the portal's rainbow lettering.
///
/// One 256-color code per visible character, cycling through the
/// palette, with a single reset at the end.
pub fn rainbow(text: &str) -> String {
    const PALETTE: [u8; 6] = [196, 208, 226, 46, 33, 129];

    let mut out = String::new();
    let mut idx = 0usize;
    for ch in text.chars() {
        if ch.is_whitespace() {
            out.push(ch);
            continue;
        }
        out.push_str(&format!("\x1b[38;5;{}m{}", PALETTE[idx % PALETTE.len()], ch));
        idx += 1;
    }
    out.push_str("\x1b[0m");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hr_menu_covers_people_content() {
        let menu = area_menu(AdminArea::Hr);
        let slugs: Vec<&str> = menu.iter().map(|m| m.slug).collect();

        assert!(slugs.contains(&"announcements"));
        assert!(slugs.contains(&"trainings"));
        assert!(slugs.contains(&"visits"));
        assert!(!slugs.contains(&"popup"));
    }

    #[test]
    fn test_it_menu_covers_system_screens() {
        let menu = area_menu(AdminArea::It);
        let slugs: Vec<&str> = menu.iter().map(|m| m.slug).collect();

        assert!(slugs.contains(&"knowledge"));
        assert!(slugs.contains(&"popup"));
        assert!(slugs.contains(&"sockets"));
        assert!(!slugs.contains(&"announcements"));
    }

    #[test]
    fn test_both_areas_manage_users() {
        for area in [AdminArea::Hr, AdminArea::It] {
            let slugs: Vec<&str> = area_menu(area).iter().map(|m| m.slug).collect();
            assert!(slugs.contains(&"users"));
        }
    }

    #[test]
    fn test_rainbow_colors_every_letter_and_resets() {
        let banner = rainbow("Atrium");
        assert_eq!(banner.matches("\x1b[38;5;").count(), 6);
        assert!(banner.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_rainbow_leaves_whitespace_uncolored() {
        let banner = rainbow("a b");
        assert_eq!(banner.matches("\x1b[38;5;").count(), 2);
        assert!(banner.contains(' '));
    }
}
