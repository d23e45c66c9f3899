//! Mock API HTTP client.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{BenefitsResponse, MockDataResponse, Resource};
use crate::domain::entities::{Benefit, RewardPoints, UserProfile};
use crate::domain::errors::FetchError;
use crate::domain::ports::DashboardDataPort;
use crate::infrastructure::config::EndpointLayout;

const CONSOLIDATED_PATH: &str = "/api/mock-data";
const USER_AGENT: &str = concat!("garagedash/", env!("CARGO_PKG_VERSION"));

/// Dashboard data over plain JSON GETs.
pub struct HttpDashboardClient {
    client: Client,
    base_url: String,
    layout: EndpointLayout,
}

impl HttpDashboardClient {
    /// Creates a client for the given base URL and endpoint layout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(base_url: impl Into<String>, layout: EndpointLayout) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::network(format!("failed to create HTTP client: {e}")))?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            layout,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: Resource,
    ) -> Result<T, FetchError> {
        let url = self.url(path);
        debug!(url = %url, resource = %resource, "Requesting dashboard data");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(error = %e, url = %url, "Request failed");
            resource.fetch_failed()
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, url = %url, "Unexpected response status");
            return Err(resource.fetch_failed());
        }

        let body = response.text().await.map_err(|e| {
            warn!(error = %e, url = %url, "Failed to read response body");
            resource.fetch_failed()
        })?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, url = %url, "Failed to parse response");
            FetchError::decode(e.to_string())
        })
    }

    async fn get_mock_data(&self, resource: Resource) -> Result<MockDataResponse, FetchError> {
        let data: Option<MockDataResponse> = self.get_json(CONSOLIDATED_PATH, resource).await?;
        data.ok_or_else(|| resource.missing())
    }
}

#[async_trait]
impl DashboardDataPort for HttpDashboardClient {
    async fn fetch_user(&self) -> Result<UserProfile, FetchError> {
        let resource = Resource::User;
        match self.layout {
            EndpointLayout::Discrete => self
                .get_json::<Option<UserProfile>>(resource.path(), resource)
                .await?
                .ok_or_else(|| resource.missing()),
            EndpointLayout::Consolidated => self.get_mock_data(resource).await?.into_user(),
        }
    }

    async fn fetch_reward_points(&self) -> Result<RewardPoints, FetchError> {
        let resource = Resource::XpPoints;
        match self.layout {
            EndpointLayout::Discrete => self
                .get_json::<Option<RewardPoints>>(resource.path(), resource)
                .await?
                .ok_or_else(|| resource.missing()),
            EndpointLayout::Consolidated => {
                self.get_mock_data(resource).await?.into_reward_points()
            }
        }
    }

    async fn fetch_benefits(&self) -> Result<Vec<Benefit>, FetchError> {
        let resource = Resource::Benefits;
        match self.layout {
            EndpointLayout::Discrete => self
                .get_json::<Option<BenefitsResponse>>(resource.path(), resource)
                .await?
                .ok_or_else(|| resource.missing())?
                .into_benefits(),
            EndpointLayout::Consolidated => self.get_mock_data(resource).await?.into_benefits(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::mpsc;

    /// Serves canned responses on a loopback port and reports request paths.
    async fn serve(
        responses: Vec<(u16, &'static str)>,
    ) -> (String, mpsc::UnboundedReceiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (path_tx, path_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut request = Vec::new();
                let mut chunk = [0_u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = socket.read(&mut chunk).await.unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&chunk[..n]);
                }
                let request = String::from_utf8_lossy(&request);
                let path = request
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or_default()
                    .to_string();
                let _ = path_tx.send(path);

                let response = format!(
                    "HTTP/1.1 {status} X\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
            }
        });

        (format!("http://{addr}"), path_rx)
    }

    #[test]
    fn test_client_creation() {
        let client = HttpDashboardClient::new("http://localhost:3000/", EndpointLayout::Discrete);
        assert!(client.is_ok());
        assert_eq!(client.unwrap().url("/user"), "http://localhost:3000/user");
    }

    #[tokio::test]
    async fn test_discrete_reward_points() {
        let (base_url, mut paths) = serve(vec![(200, r#"{"points": 42, "maxPoints": 100}"#)]).await;
        let client = HttpDashboardClient::new(base_url, EndpointLayout::Discrete).unwrap();

        let points = client.fetch_reward_points().await.unwrap();

        assert_eq!(points, RewardPoints::new(42.0, 100.0));
        assert_eq!(paths.recv().await.unwrap(), "/xpPoints");
    }

    #[tokio::test]
    async fn test_discrete_user_not_ok() {
        let (base_url, _paths) = serve(vec![(500, "{}")]).await;
        let client = HttpDashboardClient::new(base_url, EndpointLayout::Discrete).unwrap();

        let err = client.fetch_user().await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to fetch user data");
    }

    #[tokio::test]
    async fn test_discrete_points_null_body() {
        let (base_url, _paths) = serve(vec![(200, "null")]).await;
        let client = HttpDashboardClient::new(base_url, EndpointLayout::Discrete).unwrap();

        let err = client.fetch_reward_points().await.unwrap_err();

        assert_eq!(err.to_string(), "XP Points not found in response");
    }

    #[tokio::test]
    async fn test_discrete_benefits_bare_list() {
        let (base_url, mut paths) = serve(vec![(
            200,
            r#"[{"title": "Gift", "icon": "FaGift", "description": "Free gift", "cta": "Open"}]"#,
        )])
        .await;
        let client = HttpDashboardClient::new(base_url, EndpointLayout::Discrete).unwrap();

        let benefits = client.fetch_benefits().await.unwrap();

        assert_eq!(benefits.len(), 1);
        assert_eq!(benefits[0].title, "Gift");
        assert_eq!(paths.recv().await.unwrap(), "/benefits");
    }

    #[tokio::test]
    async fn test_consolidated_extracts_sub_shapes() {
        const DOC: &str = r#"{
            "user": {"avatarUrl": "a.png", "name": "Ada", "level": 3, "xp": 10, "xpMax": 20},
            "xpPoints": {"points": 5, "maxPoints": 50},
            "benefits": []
        }"#;
        let (base_url, mut paths) = serve(vec![(200, DOC), (200, DOC)]).await;
        let client = HttpDashboardClient::new(base_url, EndpointLayout::Consolidated).unwrap();

        let user = client.fetch_user().await.unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(paths.recv().await.unwrap(), "/api/mock-data");

        let points = client.fetch_reward_points().await.unwrap();
        assert_eq!(points, RewardPoints::new(5.0, 50.0));
    }

    #[tokio::test]
    async fn test_consolidated_broken_benefits_leave_other_sections() {
        const DOC: &str = r#"{
            "user": {"avatarUrl": "a.png", "name": "Ada", "level": 3, "xp": 10, "xpMax": 20},
            "xpPoints": {"points": 42, "maxPoints": 100},
            "benefits": [{"title": "Broken", "icon": "FaTag", "description": "no cta"}]
        }"#;
        let (base_url, _paths) = serve(vec![(200, DOC), (200, DOC), (200, DOC)]).await;
        let client = HttpDashboardClient::new(base_url, EndpointLayout::Consolidated).unwrap();

        let err = client.fetch_benefits().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));

        assert_eq!(client.fetch_user().await.unwrap().name, "Ada");
        assert_eq!(
            client.fetch_reward_points().await.unwrap(),
            RewardPoints::new(42.0, 100.0)
        );
    }

    #[tokio::test]
    async fn test_consolidated_missing_benefits() {
        let (base_url, _paths) = serve(vec![(200, r#"{"user": null}"#)]).await;
        let client = HttpDashboardClient::new(base_url, EndpointLayout::Consolidated).unwrap();

        let err = client.fetch_benefits().await.unwrap_err();

        assert_eq!(err.to_string(), "Benefits not found in response");
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let (base_url, _paths) = serve(vec![(200, "not json")]).await;
        let client = HttpDashboardClient::new(base_url, EndpointLayout::Discrete).unwrap();

        let err = client.fetch_user().await.unwrap_err();

        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client =
            HttpDashboardClient::new(format!("http://{addr}"), EndpointLayout::Discrete).unwrap();

        let err = client.fetch_benefits().await.unwrap_err();

        assert!(matches!(err, FetchError::Network { .. }));
        assert_eq!(err.to_string(), "Failed to fetch benefits");
    }
}
