//! One client per Orchestrator API area
//!
//! Every client holds the shared [`HttpClient`](crate::model::http::HttpClient)
//! and turns each method call into exactly one request.

pub mod alerts;
pub mod assets;
pub mod audit;
pub mod directory;
pub mod environments;
pub mod folders;
pub mod jobs;
pub mod libraries;
pub mod licensing;
pub mod logs;
pub mod machines;
pub mod maintenance;
pub mod metrics;
pub mod processes;
pub mod queues;
pub mod releases;
pub mod robots;
pub mod settings;
pub mod stats;
pub mod status;
pub mod task_forms;
pub mod test_automation;
pub mod test_data_queue;
pub mod users;
pub mod webhooks;

pub use alerts::AlertsClient;
pub use assets::AssetsClient;
pub use audit::AuditClient;
pub use directory::DirectoryClient;
pub use environments::EnvironmentsClient;
pub use folders::FoldersClient;
pub use jobs::JobsClient;
pub use libraries::LibrariesClient;
pub use licensing::LicensingClient;
pub use logs::LogsClient;
pub use machines::MachinesClient;
pub use maintenance::MaintenanceClient;
pub use metrics::MetricsClient;
pub use processes::ProcessesClient;
pub use queues::QueuesClient;
pub use releases::ReleasesClient;
pub use robots::RobotsClient;
pub use settings::SettingsClient;
pub use stats::StatsClient;
pub use status::StatusClient;
pub use task_forms::TaskFormsClient;
pub use test_automation::TestAutomationClient;
pub use test_data_queue::TestDataQueueClient;
pub use users::UsersClient;
pub use webhooks::WebhooksClient;
