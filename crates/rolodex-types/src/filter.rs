use crate::contact::Contact;

/// Case-insensitive substring filter across name, phone, and email.
///
/// The query is trimmed and lowercased; an empty query returns the full list
/// unchanged. Pure: never mutates or reorders its input.
pub fn filter_contacts(contacts: &[Contact], query: &str) -> Vec<Contact> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return contacts.to_vec();
    }

    contacts
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&q)
                || c.phone.to_lowercase().contains(&q)
                || c.email.to_lowercase().contains(&q)
        })
        .cloned()
        .collect()
}

/// Return a copy sorted by name, case-insensitive, with original-case order
/// as tiebreak so the result is deterministic.
pub fn sort_by_name(contacts: &[Contact]) -> Vec<Contact> {
    let mut sorted = contacts.to_vec();
    sorted.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    sorted
}
