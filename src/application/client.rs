/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::application::auth::{AuthProvider, auth_from_config};
use crate::application::config::Config;
use crate::application::resources::{
    AlertsClient, AssetsClient, AuditClient, DirectoryClient, EnvironmentsClient, FoldersClient,
    JobsClient, LibrariesClient, LicensingClient, LogsClient, MachinesClient, MaintenanceClient,
    MetricsClient, ProcessesClient, QueuesClient, ReleasesClient, RobotsClient, SettingsClient,
    StatsClient, StatusClient, TaskFormsClient, TestAutomationClient, TestDataQueueClient,
    UsersClient, WebhooksClient,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use std::sync::Arc;
use tracing::debug;

/// Entry point of the library
///
/// Owns the shared dispatcher and exposes one field per API area:
///
/// ```ignore
/// let client = Client::from_config(Config::new())?;
/// let folders = client.folders.get(Some("Finance"), None).await?;
/// ```
pub struct Client {
    http_client: Arc<HttpClient>,
    /// Alerts raised by Orchestrator
    pub alerts: AlertsClient,
    /// Shared assets
    pub assets: AssetsClient,
    /// Audit logs and exports
    pub audit: AuditClient,
    /// Directory service lookups
    pub directory: DirectoryClient,
    /// Robot environments
    pub environments: EnvironmentsClient,
    /// Folders and folder navigation
    pub folders: FoldersClient,
    /// Job execution
    pub jobs: JobsClient,
    /// Library packages
    pub libraries: LibrariesClient,
    /// License units
    pub licensing: LicensingClient,
    /// Robot log submission
    pub logs: LogsClient,
    /// Machines
    pub machines: MachinesClient,
    /// Maintenance mode
    pub maintenance: MaintenanceClient,
    /// Server metrics
    pub metrics: MetricsClient,
    /// Process packages
    pub processes: ProcessesClient,
    /// Queue definitions and queue items
    pub queues: QueuesClient,
    /// Releases (deployed processes)
    pub releases: ReleasesClient,
    /// Robots
    pub robots: RobotsClient,
    /// Tenant settings
    pub settings: SettingsClient,
    /// Usage statistics
    pub stats: StatsClient,
    /// Service status
    pub status: StatusClient,
    /// Task forms and tasks
    pub task_forms: TaskFormsClient,
    /// Test sets and test case executions
    pub test_automation: TestAutomationClient,
    /// Test data queues
    pub test_data_queue: TestDataQueueClient,
    /// Users
    pub users: UsersClient,
    /// Webhooks
    pub webhooks: WebhooksClient,
}

impl Client {
    /// Creates a client talking to `base_url` with credentials from `auth`
    pub fn new(auth: Arc<dyn AuthProvider>, base_url: &str) -> Result<Self, AppError> {
        let http_client = HttpClient::new(auth, base_url)?;
        Ok(Self::from_http_client(Arc::new(http_client)))
    }

    /// Creates a client from configuration
    ///
    /// Uses a static bearer token when `UIPATH_ACCESS_TOKEN` is set and the
    /// client credentials flow otherwise.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let auth = auth_from_config(&config)?;
        let http_client = HttpClient::from_config(auth, &config)?;
        Ok(Self::from_http_client(Arc::new(http_client)))
    }

    /// Creates a client around an existing dispatcher
    pub fn from_http_client(http_client: Arc<HttpClient>) -> Self {
        debug!("Creating client for {}", http_client.base_url());
        Self {
            alerts: AlertsClient::new(http_client.clone()),
            assets: AssetsClient::new(http_client.clone()),
            audit: AuditClient::new(http_client.clone()),
            directory: DirectoryClient::new(http_client.clone()),
            environments: EnvironmentsClient::new(http_client.clone()),
            folders: FoldersClient::new(http_client.clone()),
            jobs: JobsClient::new(http_client.clone()),
            libraries: LibrariesClient::new(http_client.clone()),
            licensing: LicensingClient::new(http_client.clone()),
            logs: LogsClient::new(http_client.clone()),
            machines: MachinesClient::new(http_client.clone()),
            maintenance: MaintenanceClient::new(http_client.clone()),
            metrics: MetricsClient::new(http_client.clone()),
            processes: ProcessesClient::new(http_client.clone()),
            queues: QueuesClient::new(http_client.clone()),
            releases: ReleasesClient::new(http_client.clone()),
            robots: RobotsClient::new(http_client.clone()),
            settings: SettingsClient::new(http_client.clone()),
            stats: StatsClient::new(http_client.clone()),
            status: StatusClient::new(http_client.clone()),
            task_forms: TaskFormsClient::new(http_client.clone()),
            test_automation: TestAutomationClient::new(http_client.clone()),
            test_data_queue: TestDataQueueClient::new(http_client.clone()),
            users: UsersClient::new(http_client.clone()),
            webhooks: WebhooksClient::new(http_client.clone()),
            http_client,
        }
    }

    /// Shared dispatcher, for requests no resource client covers
    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }
}
