use crate::error::{Error, Result};
use crate::wire;
use reqwest::blocking::{Client, Response};
use rolodex_types::Contact;
use url::Url;

/// Thin wrapper over the four REST calls. Holds no state beyond the base URL
/// and the connection pool; no retries, no timeouts, no caching.
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    /// `base_url` is the API root, e.g. `http://127.0.0.1:5000/api`.
    pub fn new(base_url: &str) -> Result<Self> {
        let base =
            Url::parse(base_url.trim_end_matches('/')).map_err(|e| Error::BaseUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(Error::BaseUrl(format!("{} has no host", base_url)));
        }
        Ok(Self {
            http: Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// GET /contacts
    pub fn list(&self) -> Result<Vec<Contact>> {
        let rsp = self.http.get(self.collection_url()?).send()?;
        let (ok, body) = split(rsp)?;
        wire::parse_list(ok, &body)
    }

    /// POST /contacts
    pub fn create(&self, contact: &Contact) -> Result<()> {
        let rsp = self
            .http
            .post(self.collection_url()?)
            .json(contact)
            .send()?;
        let (ok, body) = split(rsp)?;
        wire::parse_mutation(ok, &body, "Failed to add contact")
    }

    /// PUT /contacts/{name} — `name` is the contact's *current* name; the
    /// body may carry a new name, which re-keys the record server-side.
    pub fn update(&self, name: &str, contact: &Contact) -> Result<()> {
        let rsp = self
            .http
            .put(self.contact_url(name)?)
            .json(contact)
            .send()?;
        let (ok, body) = split(rsp)?;
        wire::parse_mutation(ok, &body, "Failed to update contact")
    }

    /// DELETE /contacts/{name}. Failure is recoverable: the caller reports
    /// the message and stays interactive.
    pub fn delete(&self, name: &str) -> Result<()> {
        let rsp = self.http.delete(self.contact_url(name)?).send()?;
        let (ok, body) = split(rsp)?;
        wire::parse_mutation(ok, &body, "Failed to delete contact")
    }

    fn collection_url(&self) -> Result<Url> {
        self.extend(&["contacts"])
    }

    fn contact_url(&self, name: &str) -> Result<Url> {
        self.extend(&["contacts", name])
    }

    // path_segments_mut percent-encodes each segment, so names with spaces
    // or slashes stay a single segment
    fn extend(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::BaseUrl(format!("{} cannot carry a path", self.base)))?
            .extend(segments);
        Ok(url)
    }
}

fn split(rsp: Response) -> Result<(bool, String)> {
    let ok = rsp.status().is_success();
    let body = rsp.text()?;
    Ok((ok, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_url_percent_encodes_the_name() {
        let client = ApiClient::new("http://127.0.0.1:5000/api").unwrap();
        let url = client.contact_url("Ann O'Leary / 2").unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:5000/api/contacts/Ann%20O'Leary%20%2F%202"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let client = ApiClient::new("http://localhost:5000/api/").unwrap();
        let url = client.collection_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/contacts");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(Error::BaseUrl(_))
        ));
    }
}
