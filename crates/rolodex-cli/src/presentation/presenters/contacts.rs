//! Pure presenters: snapshot + query in, display-ready view models out.
//! Filtering and ordering live here so both front ends render identically.

use crate::presentation::formatters::text::sanitize;
use crate::presentation::view_models::{ContactListViewModel, ContactRow, RosterViewModel};
use rolodex_types::{filter_contacts, sort_by_name, Contact};

pub fn present_contact_list(contacts: &[Contact], query: &str) -> ContactListViewModel {
    let rows = rows_for(contacts, query);
    ContactListViewModel {
        total: contacts.len(),
        shown: rows.len(),
        rows,
        query: some_query(query),
    }
}

pub fn present_roster(contacts: &[Contact], query: &str) -> RosterViewModel {
    let rows = rows_for(contacts, query);
    RosterViewModel {
        total: contacts.len(),
        shown: rows.len(),
        rows,
    }
}

fn rows_for(contacts: &[Contact], query: &str) -> Vec<ContactRow> {
    sort_by_name(&filter_contacts(contacts, query))
        .into_iter()
        .map(|c| ContactRow {
            name: sanitize(&c.name),
            phone: sanitize(&c.phone),
            email: sanitize(&c.email),
        })
        .collect()
}

fn some_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Contact> {
        vec![
            Contact::new("Carol", "020", "carol@home.net").unwrap(),
            Contact::new("Bob", "555", "bob@example.com").unwrap(),
            Contact::new("alice", "777", "alice@work.org").unwrap(),
        ]
    }

    #[test]
    fn rows_are_sorted_by_name() {
        let vm = present_contact_list(&sample(), "");
        let names: Vec<&str> = vm.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["alice", "Bob", "Carol"]);
        assert_eq!(vm.total, 3);
        assert_eq!(vm.shown, 3);
    }

    #[test]
    fn query_narrows_shown_but_not_total() {
        let vm = present_contact_list(&sample(), "bob");
        assert_eq!(vm.total, 3);
        assert_eq!(vm.shown, 1);
        assert_eq!(vm.rows[0].name, "Bob");
        assert_eq!(vm.query.as_deref(), Some("bob"));
    }

    #[test]
    fn presenting_twice_is_identical() {
        let contacts = sample();
        let a = present_roster(&contacts, "a");
        let b = present_roster(&contacts, "a");
        assert_eq!(a.rows, b.rows);
        assert_eq!(a.shown, b.shown);
    }

    #[test]
    fn user_text_is_sanitized() {
        let contacts = vec![Contact::new("Eve\x1b[2J", "5\n5", "e@x.com").unwrap()];
        let vm = present_roster(&contacts, "");
        assert!(!vm.rows[0].name.contains('\x1b'));
        assert_eq!(vm.rows[0].phone, "5 5");
    }

    #[test]
    fn empty_view_reports_placeholder_counts() {
        let vm = present_contact_list(&sample(), "zzz");
        assert!(vm.rows.is_empty());
        assert_eq!(vm.shown, 0);
        let rendered = vm.to_string();
        assert!(rendered.contains("No contacts found."));
        assert!(rendered.contains("Total: 3  Shown: 0"));
    }

    #[test]
    fn single_contact_scenario_renders_one_row() {
        let contacts = vec![Contact::new("Bob", "555", "b@x.com").unwrap()];
        let vm = present_contact_list(&contacts, "");
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.total, 1);
        let rendered = vm.to_string();
        assert!(rendered.contains("Bob"));
        assert!(rendered.contains("Total: 1"));
    }
}
