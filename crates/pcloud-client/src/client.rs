//! Blocking HTTP implementation of [`CatalogClient`]

use std::io::Write;
use std::path::Path;

use pcloud_core::{
    AlbumPage, AlbumRef, AttachmentRef, AuthOutcome, CatalogClient, GroupPage, Overview,
    PartitionUpload, check_attachment,
};
use pcloud_meta::Credentials;
use reqwest::blocking::{Client, Response, multipart};

use crate::error::{ClientError, Result};
use crate::markup;

/// Session with one PartitionCloud server.
///
/// Cookies set by the login are kept for every later request, so
/// [`CatalogClient::authenticate`] must run before any call that needs an
/// identity.
pub struct PartitionCloudClient {
    host: String,
    http: Client,
}

impl PartitionCloudClient {
    /// Create a client for `host` (scheme included, no trailing slash).
    pub fn new(host: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .cookie_store(true)
            .user_agent(concat!("pcloud/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            host: host.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.host, path)
    }

    fn checked(method: &'static str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ClientError::Status {
                method,
                url: response.url().to_string(),
                status: status.as_u16(),
            })
        }
    }

    fn get(&self, path: &str) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.http.get(&url).send()?;
        Self::checked("GET", response)
    }

    /// Fetch a page, returning its final URL and body.
    fn page(&self, path: &str) -> Result<(String, String)> {
        let response = self.get(path)?;
        let url = response.url().to_string();
        Ok((url, response.text()?))
    }

    fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.http.post(&url).form(fields).send()?;
        Self::checked("POST", response)
    }

    fn post_multipart(&self, path: &str, form: multipart::Form) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(%url, "POST multipart");
        let response = self.http.post(&url).multipart(form).send()?;
        Self::checked("POST", response)
    }

    fn file_part(form: multipart::Form, file: &Path) -> Result<multipart::Form> {
        form.file("file", file).map_err(|source| ClientError::Io {
            path: file.to_path_buf(),
            source,
        })
    }

    fn login(&self, credentials: &Credentials) -> Result<AuthOutcome> {
        let response = self.post_form(
            "/auth/login",
            &[
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ],
        )?;

        if markup::is_login_page(&response.text()?) {
            Ok(AuthOutcome::Rejected)
        } else {
            Ok(AuthOutcome::Accepted)
        }
    }

    fn stream(&self, partition_id: &str, sink: &mut dyn Write) -> Result<u64> {
        let mut response = self.get(&format!("/partition/{partition_id}"))?;
        let url = response.url().to_string();
        std::io::copy(&mut response, sink).map_err(|source| ClientError::Body { url, source })
    }

    fn new_album(&self, name: &str) -> Result<AlbumRef> {
        let response = self.post_form("/albums/create-album", &[("name", name)])?;
        let url = response.url().to_string();
        let id = markup::last_segment(&url).ok_or_else(|| ClientError::Markup {
            url: url.clone(),
            element: "album identifier in redirect".to_string(),
        })?;
        Ok(AlbumRef::new(id, name))
    }

    fn add_partition(&self, album_id: &str, upload: &PartitionUpload) -> Result<()> {
        let form = multipart::Form::new()
            .text("name", upload.name.clone())
            .text("author", upload.author.clone())
            .text("body", upload.body.clone());
        let form = Self::file_part(form, &upload.file)?;

        self.post_multipart(&format!("/albums/{album_id}/add-partition"), form)?;
        Ok(())
    }

    fn add_attachment(&self, partition_id: &str, file: &Path, name: &str) -> Result<()> {
        let form = multipart::Form::new().text("name", name.to_string());
        let form = Self::file_part(form, file)?;

        self.post_multipart(&format!("/partition/{partition_id}/add-attachment"), form)?;
        Ok(())
    }
}

impl CatalogClient for PartitionCloudClient {
    fn authenticate(&self, credentials: &Credentials) -> pcloud_core::Result<AuthOutcome> {
        Ok(self.login(credentials)?)
    }

    fn list_top_level(&self) -> pcloud_core::Result<Overview> {
        let (url, html) = self.page("/albums")?;
        Ok(markup::parse_overview(&url, &html)?)
    }

    fn album(&self, album_id: &str) -> pcloud_core::Result<AlbumPage> {
        let (url, html) = self.page(&format!("/albums/{album_id}"))?;
        Ok(markup::parse_album(&url, &html)?)
    }

    fn group(&self, group_id: &str) -> pcloud_core::Result<GroupPage> {
        let (url, html) = self.page(&format!("/groupe/{group_id}"))?;
        Ok(markup::parse_group(&url, &html)?)
    }

    fn stream_partition(&self, partition_id: &str, sink: &mut dyn Write) -> pcloud_core::Result<u64> {
        Ok(self.stream(partition_id, sink)?)
    }

    fn list_attachments(&self, partition_id: &str) -> pcloud_core::Result<Vec<AttachmentRef>> {
        let (url, html) = self.page(&format!("/partition/{partition_id}/attachments"))?;
        Ok(markup::parse_attachments(&url, &html)?)
    }

    fn create_album(&self, name: &str) -> pcloud_core::Result<AlbumRef> {
        Ok(self.new_album(name)?)
    }

    fn upload_partition(&self, album_id: &str, upload: &PartitionUpload) -> pcloud_core::Result<()> {
        Ok(self.add_partition(album_id, upload)?)
    }

    fn upload_attachment(&self, partition_id: &str, file: &Path, name: &str) -> pcloud_core::Result<()> {
        check_attachment(file)?;
        Ok(self.add_attachment(partition_id, file, name)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_trailing_slash_is_trimmed() {
        let client = PartitionCloudClient::new("https://pc.example.org/").unwrap();
        assert_eq!(client.host(), "https://pc.example.org");
        assert_eq!(client.url("/albums"), "https://pc.example.org/albums");
    }

    #[test]
    fn test_unsupported_attachment_rejected_before_sending() {
        // Nothing listens on this port; the extension check must fail first.
        let client = PartitionCloudClient::new("http://127.0.0.1:9").unwrap();
        let err = client
            .upload_attachment("p1", Path::new("take.wav"), "Take")
            .unwrap_err();
        assert!(matches!(err, pcloud_core::Error::UnsupportedAttachment { .. }));
    }
}
