use super::{AppFilter, AppRecord, DirectoryClient, DirectoryError};

/// Directory client backed by the admin HTTP API.
#[derive(Debug, Clone)]
pub struct HttpDirectoryClient {
    base_url: String,
    api_token: Option<String>,
}

impl HttpDirectoryClient {
    pub fn new(base_url: impl Into<String>, api_token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.filter(|t| !t.trim().is_empty()),
        }
    }

    fn endpoint(&self, filter: &AppFilter) -> String {
        let base = self.base_url.trim_end_matches('/');
        match &filter.group_id {
            Some(group_id) => format!("{base}/groups/{}/apps", urlencoding::encode(group_id)),
            None => format!("{base}/apps"),
        }
    }

    fn list_apps(&self, url: &str) -> Result<Vec<AppRecord>, DirectoryError> {
        let mut request = ureq::get(url).set("Accept", "application/json");
        if let Some(token) = &self.api_token {
            request = request.set("Authorization", &format!("Bearer {token}"));
        }

        let response = request.call().map_err(|e| match e {
            ureq::Error::Status(status, response) => DirectoryError::Status {
                status,
                message: response
                    .into_string()
                    .unwrap_or_else(|_| "<unreadable body>".to_string()),
            },
            ureq::Error::Transport(t) => DirectoryError::Request(t.to_string()),
        })?;

        response
            .into_json::<Vec<AppRecord>>()
            .map_err(|e| DirectoryError::Decode(e.to_string()))
    }
}

impl DirectoryClient for HttpDirectoryClient {
    fn find_apps(&self, filter: &AppFilter) -> Result<Vec<AppRecord>, DirectoryError> {
        let url = self.endpoint(filter);
        tracing::debug!(%url, %filter, "querying app directory");

        let apps: Vec<AppRecord> = self
            .list_apps(&url)?
            .into_iter()
            .filter(|app| filter.matches(app))
            .collect();

        tracing::debug!(matches = apps.len(), "app directory responded");
        Ok(apps)
    }
}
