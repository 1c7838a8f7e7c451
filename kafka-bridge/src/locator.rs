//! Marathon locator - finds where the Kafka scheduler API is listening
//!
//! Asks Marathon for the app descriptor once per invocation and turns the
//! first task's host and first allocated port into a `host:port` endpoint.
//! No retries: endpoints move between deployments, so a failed lookup is
//! reported as-is.

use crate::config::ClusterConfig;
use crate::error::{ApiSnafu, NotRunningSnafu, RequestSnafu, Result, UnexpectedStatusSnafu};
use reqwest::StatusCode;
use serde::Deserialize;
use snafu::{OptionExt, ResultExt};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Marathon app id of the Kafka scheduler
pub const APP_ID: &str = "kafka";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Marathon's view of a deployed app
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppDescriptor {
    #[serde(default)]
    pub tasks: Vec<TaskInstance>,
}

/// One running replica of the app
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskInstance {
    pub host: String,
    #[serde(default)]
    pub ports: Vec<u16>,
}

/// Body of `GET /v2/apps/{id}`; errors come back as `message`
#[derive(Debug, Deserialize)]
struct AppResponse {
    app: Option<AppDescriptor>,
    message: Option<String>,
}

/// Source of the endpoint injected into the delegated process
pub trait EndpointResolver {
    fn resolve_endpoint(&self) -> Result<String>;
}

pub struct Locator {
    config_path: Option<PathBuf>,
    app_id: String,
    timeout: Duration,
    use_proxy: bool,
}

impl Locator {
    /// Create a locator reading the cluster config from `config_path` on demand
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            app_id: APP_ID.to_string(),
            timeout: REQUEST_TIMEOUT,
            use_proxy: true,
        }
    }

    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Connect to Marathon directly, ignoring `HTTP_PROXY` and friends
    pub fn without_proxy(mut self) -> Self {
        self.use_proxy = false;
        self
    }

    /// Load the cluster config and fetch the app descriptor
    pub fn resolve_application(&self) -> Result<AppDescriptor> {
        let config = ClusterConfig::load(self.config_path.as_deref())?;
        self.fetch_application(&config)
    }

    /// Fetch the app descriptor from the Marathon named by `config`
    pub fn fetch_application(&self, config: &ClusterConfig) -> Result<AppDescriptor> {
        let url = format!("{}/v2/apps/{}", config.marathon_url(), self.app_id);
        debug!(%url, timeout = ?self.timeout, "querying marathon");

        let mut builder = reqwest::blocking::Client::builder().timeout(self.timeout);
        if !self.use_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .context(RequestSnafu { url: &url })?;

        let response = client.get(&url).send().context(RequestSnafu { url: &url })?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                return NotRunningSnafu { app: &self.app_id }.fail();
            }
            status => {
                return UnexpectedStatusSnafu {
                    status: status.as_u16(),
                }
                .fail();
            }
        }

        let text = response.text().context(RequestSnafu { url: &url })?;
        let body: AppResponse = serde_json::from_str(&text).map_err(|e| {
            ApiSnafu {
                message: format!("Invalid response from Marathon: {e}"),
            }
            .build()
        })?;

        match body {
            AppResponse { app: Some(app), .. } => {
                debug!(tasks = app.tasks.len(), "marathon app resolved");
                Ok(app)
            }
            AppResponse { message, .. } => ApiSnafu {
                message: message
                    .unwrap_or_else(|| format!("Marathon did not describe app '{}'", self.app_id)),
            }
            .fail(),
        }
    }

    /// `host:port` of the first task's first allocated port
    pub fn endpoint_of(&self, app: &AppDescriptor) -> Result<String> {
        let task = app
            .tasks
            .first()
            .context(NotRunningSnafu { app: &self.app_id })?;

        let port = task.ports.first().context(ApiSnafu {
            message: format!("Task on {} has no allocated ports", task.host),
        })?;

        Ok(format!("{}:{port}", task.host))
    }
}

impl EndpointResolver for Locator {
    fn resolve_endpoint(&self) -> Result<String> {
        let app = self.resolve_application()?;
        let endpoint = self.endpoint_of(&app)?;
        info!(%endpoint, "resolved {} endpoint", self.app_id);
        Ok(endpoint)
    }
}
