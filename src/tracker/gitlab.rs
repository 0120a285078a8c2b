use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::core::error::YaspError;

use super::traits::{IssueTracker, RemoteIssue, TrackerError};

pub const TOKEN_VAR: &str = "GITLAB_TOKEN";
pub const API_URL_VAR: &str = "GITLAB_API_URL";
pub const PROJECT_ID_VAR: &str = "GITLAB_PROJECT_ID";

const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub token: String,
    pub api_url: String,
    pub project_id: String,
}

impl TrackerConfig {
    pub fn from_env() -> Result<Self, YaspError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, YaspError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let require = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(YaspError::MissingVar(key))
        };
        Ok(Self {
            token: require(TOKEN_VAR)?,
            api_url: require(API_URL_VAR)?,
            project_id: require(PROJECT_ID_VAR)?,
        })
    }
}

#[derive(Deserialize)]
struct CreatedIssue {
    iid: u64,
}

pub struct GitLabClient {
    client: Client,
    config: TrackerConfig,
}

impl GitLabClient {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn issues_url(&self) -> String {
        format!(
            "{}/{}/issues",
            self.config.api_url.trim_end_matches('/'),
            self.config.project_id
        )
    }

    async fn send(&self, method: Method, url: &str) -> Result<Response, TrackerError> {
        tracing::debug!(%method, %url, "tracker request");
        let resp = self
            .client
            .request(method, url)
            .header(TOKEN_HEADER, &self.config.token)
            .send()
            .await
            .map_err(|source| TrackerError::Network {
                url: url.to_string(),
                source,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(TrackerError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }
        Ok(resp)
    }

    async fn decode<T: DeserializeOwned>(resp: Response, url: &str) -> Result<T, TrackerError> {
        resp.json().await.map_err(|source| TrackerError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl IssueTracker for GitLabClient {
    fn name(&self) -> &'static str {
        "GitLab"
    }

    async fn create_issue(&self, title: &str) -> Result<u64, TrackerError> {
        let url = format!("{}?title={}", self.issues_url(), title);
        let resp = self.send(Method::POST, &url).await?;
        let created: CreatedIssue = Self::decode(resp, &url).await?;
        tracing::info!(iid = created.iid, %title, "created issue");
        Ok(created.iid)
    }

    async fn list_issues(&self) -> Result<Vec<RemoteIssue>, TrackerError> {
        let url = self.issues_url();
        let resp = self.send(Method::GET, &url).await?;
        Self::decode(resp, &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GitLabClient {
        GitLabClient::new(TrackerConfig {
            token: "s3cret".to_string(),
            api_url: format!("{}/api/v4/projects/", server.uri()),
            project_id: "42".to_string(),
        })
    }

    #[test]
    fn test_config_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (TOKEN_VAR, "tok"),
            (API_URL_VAR, "https://gitlab.com/api/v4/projects"),
            (PROJECT_ID_VAR, "9"),
        ]);
        let config = TrackerConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.token, "tok");
        assert_eq!(config.project_id, "9");
    }

    #[test]
    fn test_config_requires_every_var() {
        let vars: HashMap<&str, &str> = HashMap::from([(TOKEN_VAR, "tok"), (API_URL_VAR, "")]);
        let err = TrackerConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap_err();
        assert!(matches!(err, YaspError::MissingVar(API_URL_VAR)));
    }

    #[tokio::test]
    async fn test_create_issue_returns_iid() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v4/projects/42/issues"))
            .and(query_param("title", "Fix the thing"))
            .and(header("PRIVATE-TOKEN", "s3cret"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 900,
                "iid": 12,
                "title": "Fix the thing"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let iid = client_for(&server)
            .create_issue("Fix%20the%20thing")
            .await
            .unwrap();
        assert_eq!(iid, 12);
    }

    #[tokio::test]
    async fn test_list_issues() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v4/projects/42/issues"))
            .and(header("PRIVATE-TOKEN", "s3cret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": 1,
                    "iid": 1,
                    "title": "First",
                    "description": "details",
                    "author": {"username": "dev"},
                    "state": "opened"
                },
                {
                    "id": 2,
                    "iid": 2,
                    "title": "Second",
                    "description": null,
                    "author": {"username": "ops"},
                    "state": "closed"
                }
            ])))
            .mount(&server)
            .await;

        let issues = client_for(&server).list_issues().await.unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].description.as_deref(), Some("details"));
        assert_eq!(issues[1].author.username, "ops");
        assert_eq!(issues[1].state, "closed");
    }

    #[tokio::test]
    async fn test_error_status_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("401 Unauthorized"))
            .mount(&server)
            .await;

        let err = client_for(&server).list_issues().await.unwrap_err();
        assert!(matches!(err, TrackerError::Status { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).create_issue("x").await.unwrap_err();
        assert!(matches!(err, TrackerError::Decode { .. }));
    }
}
