use serde::Serialize;
use std::fmt;

/// One display-ready contact. All strings are already sanitized.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactRow {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Console list output: filtered, sorted rows plus the footer counts.
#[derive(Debug, Serialize)]
pub struct ContactListViewModel {
    pub rows: Vec<ContactRow>,
    pub total: usize,
    pub shown: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl fmt::Display for ContactListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.rows.is_empty() {
            writeln!(f, "No contacts found.")?;
        } else {
            let name_w = self
                .rows
                .iter()
                .map(|r| r.name.chars().count())
                .chain(["NAME".len()].into_iter())
                .max()
                .unwrap_or(4);
            let phone_w = self
                .rows
                .iter()
                .map(|r| r.phone.chars().count())
                .chain(["PHONE".len()].into_iter())
                .max()
                .unwrap_or(5);

            writeln!(
                f,
                "{:<name_w$}  {:<phone_w$}  {}",
                "NAME",
                "PHONE",
                "EMAIL",
                name_w = name_w,
                phone_w = phone_w
            )?;
            for row in &self.rows {
                writeln!(
                    f,
                    "{:<name_w$}  {:<phone_w$}  {}",
                    row.name,
                    row.phone,
                    row.email,
                    name_w = name_w,
                    phone_w = phone_w
                )?;
            }
        }

        writeln!(f)?;
        match &self.query {
            Some(q) => writeln!(f, "Total: {}  Shown: {}  (query: {})", self.total, self.shown, q),
            None => writeln!(f, "Total: {}  Shown: {}", self.total, self.shown),
        }
    }
}

/// Screen data for the TUI roster pane, rebuilt on every draw from the
/// current snapshot and search query.
#[derive(Debug, Serialize)]
pub struct RosterViewModel {
    pub rows: Vec<ContactRow>,
    pub total: usize,
    pub shown: usize,
}
