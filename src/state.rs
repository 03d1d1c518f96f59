//! View state for the campaign page. The update logic lives here, away from
//! the DOM layer, so it can be unit-tested on the host.

use crate::content::Section;

/// Navigation state: which section is highlighted and whether the mobile
/// menu is expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub active: Section,
    pub menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: Section::Home,
            menu_open: false,
        }
    }
}

impl NavState {
    /// Activate a section. Always closes the mobile menu, whether the
    /// selection came from the expanded menu or the desktop link row.
    pub fn select(&mut self, section: Section) {
        self.active = section;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

/// Selects one field of the volunteer form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    FullName,
    Email,
    Phone,
    Message,
}

/// The four-field form record backing the sign-up inputs. All fields are
/// always present; reset returns every one of them to the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VolunteerForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl VolunteerForm {
    /// Replace exactly one field, leaving the others untouched.
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::FullName => self.full_name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_activates_each_section() {
        for section in Section::ALL {
            let mut nav = NavState::default();
            nav.select(section);
            assert_eq!(nav.active, section);
        }
    }

    #[test]
    fn test_select_closes_open_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open);
        nav.select(Section::Events);
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_double_toggle_returns_menu_to_closed() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_set_field_leaves_others_untouched() {
        let fields = [
            FormField::FullName,
            FormField::Email,
            FormField::Phone,
            FormField::Message,
        ];
        for field in fields {
            let mut form = VolunteerForm {
                full_name: "a".into(),
                email: "b".into(),
                phone: "c".into(),
                message: "d".into(),
            };
            let before = form.clone();
            form.set(field, "changed".into());
            let values = |f: &VolunteerForm| {
                [f.full_name.clone(), f.email.clone(), f.phone.clone(), f.message.clone()]
            };
            let before = values(&before);
            let after = values(&form);
            for (i, other) in fields.iter().enumerate() {
                if *other == field {
                    assert_eq!(after[i], "changed");
                } else {
                    assert_eq!(after[i], before[i]);
                }
            }
        }
    }

    #[test]
    fn test_reset_empties_all_fields() {
        let mut form = VolunteerForm {
            full_name: "Jane".into(),
            email: "jane@example.com".into(),
            phone: "+62 812".into(),
            message: "I love the sea".into(),
        };
        form.reset();
        assert_eq!(form, VolunteerForm::default());
    }

    #[test]
    fn test_volunteer_signup_scenario() {
        let mut nav = NavState::default();
        let mut form = VolunteerForm::default();
        assert_eq!(nav.active, Section::Home);
        assert_eq!(form, VolunteerForm::default());

        nav.select(Section::Volunteer);
        assert_eq!(nav.active, Section::Volunteer);

        form.set(FormField::FullName, "Jane Doe".into());
        assert_eq!(
            form,
            VolunteerForm {
                full_name: "Jane Doe".into(),
                email: String::new(),
                phone: String::new(),
                message: String::new(),
            }
        );

        // Submission acknowledges and clears.
        form.reset();
        assert_eq!(form, VolunteerForm::default());
    }
}
