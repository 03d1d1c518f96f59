//! Static page content: section identifiers, navigation, events and stats.
//! Everything here is defined once at load time and never mutated.

/// One scrollable page region. The id doubles as the DOM id of the section
/// element, so navigation can find it with `get_element_by_id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Events,
    Volunteer,
    Survey,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Events,
        Section::Volunteer,
        Section::Survey,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Events => "events",
            Section::Volunteer => "volunteer",
            Section::Survey => "survey",
            Section::Contact => "contact",
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: Section,
}

#[derive(Clone, Copy, PartialEq)]
pub struct EventInfo {
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    /// Display-only; sign-up does not change it.
    pub volunteers: u32,
}

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Users,
    Calendar,
    Waves,
    MapPin,
}

#[derive(Clone, Copy, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: StatIcon,
}

pub fn navigation() -> [NavItem; 6] {
    [
        NavItem { label: "Home", section: Section::Home },
        NavItem { label: "About", section: Section::About },
        NavItem { label: "Events", section: Section::Events },
        NavItem { label: "Volunteer", section: Section::Volunteer },
        NavItem { label: "Survey", section: Section::Survey },
        NavItem { label: "Contact", section: Section::Contact },
    ]
}

pub fn upcoming_events() -> [EventInfo; 3] {
    [
        EventInfo {
            title: "Sunset Beach Cleanup",
            date: "November 15, 2025",
            time: "9:00 AM - 12:00 PM",
            location: "Pantai Kenjeran",
            volunteers: 45,
        },
        EventInfo {
            title: "Coastal Conservation Day",
            date: "November 22, 2025",
            time: "8:00 AM - 1:00 PM",
            location: "Surabaya North Quay",
            volunteers: 62,
        },
        EventInfo {
            title: "Family Beach Day",
            date: "December 6, 2025",
            time: "10:00 AM - 2:00 PM",
            location: "Pantai Balekambang",
            volunteers: 38,
        },
    ]
}

pub fn impact_stats() -> [Stat; 4] {
    [
        Stat { label: "Relawan", value: "2,500+", icon: StatIcon::Users },
        Stat { label: "Pembersihan Pantai", value: "150+", icon: StatIcon::Calendar },
        Stat { label: "Ton dikumpulkan", value: "45+", icon: StatIcon::Waves },
        Stat { label: "Pantai dibersihkan", value: "30+", icon: StatIcon::MapPin },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_navigation_covers_all_sections_in_order() {
        let ids: Vec<&str> = navigation().iter().map(|item| item.section.id()).collect();
        assert_eq!(ids, vec!["home", "about", "events", "volunteer", "survey", "contact"]);
    }

    #[test]
    fn test_section_ids_are_distinct() {
        let ids: HashSet<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn test_fixed_content_counts() {
        assert_eq!(upcoming_events().len(), 3);
        assert_eq!(impact_stats().len(), 4);
    }
}
