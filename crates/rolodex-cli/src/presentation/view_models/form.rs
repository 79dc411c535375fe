/// Raw, unvalidated form input. Validation happens in the controller so a
/// submit with a missing field never reaches the network layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    Email,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Phone, FormField::Email];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Phone => "Phone",
            FormField::Email => "Email",
        }
    }
}

/// Editable state of the add/edit form: three fields and a focus marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: ContactDraft,
    focus: usize,
}

impl FormState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn prefilled(name: &str, phone: &str, email: &str) -> Self {
        Self {
            draft: ContactDraft {
                name: name.to_string(),
                phone: phone.to_string(),
                email: email.to_string(),
            },
            focus: 0,
        }
    }

    pub fn focused(&self) -> FormField {
        FormField::ALL[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FormField::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + FormField::ALL.len() - 1) % FormField::ALL.len();
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.draft.name,
            FormField::Phone => &self.draft.phone,
            FormField::Email => &self.draft.email,
        }
    }

    pub fn insert(&mut self, c: char) {
        self.focused_value_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_value_mut().pop();
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focused() {
            FormField::Name => &mut self.draft.name,
            FormField::Phone => &mut self.draft.phone,
            FormField::Email => &mut self.draft.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut form = FormState::empty();
        assert_eq!(form.focused(), FormField::Name);
        form.focus_next();
        assert_eq!(form.focused(), FormField::Phone);
        form.focus_next();
        assert_eq!(form.focused(), FormField::Email);
        form.focus_next();
        assert_eq!(form.focused(), FormField::Name);
        form.focus_prev();
        assert_eq!(form.focused(), FormField::Email);
    }

    #[test]
    fn editing_targets_the_focused_field() {
        let mut form = FormState::empty();
        form.insert('A');
        form.focus_next();
        form.insert('5');
        form.insert('5');
        form.backspace();
        assert_eq!(form.draft.name, "A");
        assert_eq!(form.draft.phone, "5");
        assert_eq!(form.draft.email, "");
    }

    #[test]
    fn prefilled_carries_existing_values() {
        let form = FormState::prefilled("Bob", "555", "b@x.com");
        assert_eq!(form.value(FormField::Name), "Bob");
        assert_eq!(form.value(FormField::Phone), "555");
        assert_eq!(form.value(FormField::Email), "b@x.com");
    }
}
