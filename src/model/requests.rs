/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::model::query::{ODataFilter, QueryParams};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Filters for listing alerts
#[derive(Debug, Clone, Default)]
pub struct AlertFilter<'a> {
    /// Severity (Critical, Warning, Info)
    pub severity: Option<&'a str>,
    /// Status (Active, Acknowledged, Resolved)
    pub status: Option<&'a str>,
    /// Only alerts created after this ISO date
    pub from_date: Option<&'a str>,
}

impl<'a> AlertFilter<'a> {
    /// Empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the severity
    pub fn with_severity(mut self, severity: &'a str) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: &'a str) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the from date
    pub fn with_from_date(mut self, from_date: &'a str) -> Self {
        self.from_date = Some(from_date);
        self
    }

    /// `$filter` expression
    pub fn to_filter(&self) -> ODataFilter {
        ODataFilter::new()
            .eq_text("Severity", self.severity)
            .eq_text("Status", self.status)
            .gt("CreationTime", self.from_date)
    }

    /// Query parameters for the request
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new().with_filter(&self.to_filter())
    }
}

/// Filters for listing assets
#[derive(Debug, Clone, Default)]
pub struct AssetFilter<'a> {
    /// Asset name
    pub name: Option<&'a str>,
    /// Value scope (Global, PerRobot)
    pub value_scope: Option<&'a str>,
    /// Value type (Text, Bool, Integer, Credential)
    pub value_type: Option<&'a str>,
}

impl<'a> AssetFilter<'a> {
    /// Empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    pub fn with_name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the value scope
    pub fn with_value_scope(mut self, value_scope: &'a str) -> Self {
        self.value_scope = Some(value_scope);
        self
    }

    /// Set the value type
    pub fn with_value_type(mut self, value_type: &'a str) -> Self {
        self.value_type = Some(value_type);
        self
    }

    /// `$filter` expression
    pub fn to_filter(&self) -> ODataFilter {
        ODataFilter::new()
            .eq_text("Name", self.name)
            .eq_text("ValueScope", self.value_scope)
            .eq_text("ValueType", self.value_type)
    }

    /// Query parameters for the request
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new().with_filter(&self.to_filter())
    }
}

/// Filters for listing audit logs
#[derive(Debug, Clone, Default)]
pub struct AuditLogFilter<'a> {
    /// Only entries created after this ISO date
    pub from_date: Option<&'a str>,
    /// Only entries created before this ISO date
    pub to_date: Option<&'a str>,
    /// Component name
    pub component: Option<&'a str>,
    /// Action type
    pub action: Option<&'a str>,
}

impl<'a> AuditLogFilter<'a> {
    /// Empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the from date
    pub fn with_from_date(mut self, from_date: &'a str) -> Self {
        self.from_date = Some(from_date);
        self
    }

    /// Set the to date
    pub fn with_to_date(mut self, to_date: &'a str) -> Self {
        self.to_date = Some(to_date);
        self
    }

    /// Set the component
    pub fn with_component(mut self, component: &'a str) -> Self {
        self.component = Some(component);
        self
    }

    /// Set the action
    pub fn with_action(mut self, action: &'a str) -> Self {
        self.action = Some(action);
        self
    }

    /// `$filter` expression
    pub fn to_filter(&self) -> ODataFilter {
        ODataFilter::new()
            .gt("CreationTime", self.from_date)
            .lt("CreationTime", self.to_date)
            .eq_text("Component", self.component)
            .eq_text("Action", self.action)
    }

    /// Query parameters for the request
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new().with_filter(&self.to_filter())
    }
}

/// Filters for listing jobs
#[derive(Debug, Clone, Default)]
pub struct JobFilter<'a> {
    /// Job state (Pending, Running, Successful, Faulted, ...)
    pub state: Option<&'a str>,
    /// Name of the release (process) that ran the job
    pub release_name: Option<&'a str>,
    /// Only jobs created after this ISO date
    pub from_date: Option<&'a str>,
}

impl<'a> JobFilter<'a> {
    /// Empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the state
    pub fn with_state(mut self, state: &'a str) -> Self {
        self.state = Some(state);
        self
    }

    /// Set the release name
    pub fn with_release_name(mut self, release_name: &'a str) -> Self {
        self.release_name = Some(release_name);
        self
    }

    /// Set the from date
    pub fn with_from_date(mut self, from_date: &'a str) -> Self {
        self.from_date = Some(from_date);
        self
    }

    /// `$filter` expression
    pub fn to_filter(&self) -> ODataFilter {
        ODataFilter::new()
            .eq_text("State", self.state)
            .eq_text("ReleaseName", self.release_name)
            .gt("CreationTime", self.from_date)
    }

    /// Query parameters for the request
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new().with_filter(&self.to_filter())
    }
}

/// Filters for listing robots
#[derive(Debug, Clone, Default)]
pub struct RobotFilter<'a> {
    /// Robot name
    pub name: Option<&'a str>,
    /// Machine the robot is attached to
    pub machine_name: Option<&'a str>,
    /// Robot type (Unattended, Attended, Development, ...)
    pub robot_type: Option<&'a str>,
}

impl<'a> RobotFilter<'a> {
    /// Empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    pub fn with_name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the machine name
    pub fn with_machine_name(mut self, machine_name: &'a str) -> Self {
        self.machine_name = Some(machine_name);
        self
    }

    /// Set the robot type
    pub fn with_robot_type(mut self, robot_type: &'a str) -> Self {
        self.robot_type = Some(robot_type);
        self
    }

    /// `$filter` expression
    pub fn to_filter(&self) -> ODataFilter {
        ODataFilter::new()
            .eq_text("Name", self.name)
            .eq_text("MachineName", self.machine_name)
            .eq_text("Type", self.robot_type)
    }

    /// Query parameters for the request
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new().with_filter(&self.to_filter())
    }
}

/// Filters for listing users
#[derive(Debug, Clone, Default)]
pub struct UserFilter<'a> {
    /// User name
    pub username: Option<&'a str>,
    /// Email address
    pub email: Option<&'a str>,
    /// Active status
    pub is_active: Option<bool>,
}

impl<'a> UserFilter<'a> {
    /// Empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user name
    pub fn with_username(mut self, username: &'a str) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the email
    pub fn with_email(mut self, email: &'a str) -> Self {
        self.email = Some(email);
        self
    }

    /// Set the active status
    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// `$filter` expression
    pub fn to_filter(&self) -> ODataFilter {
        ODataFilter::new()
            .eq_text("UserName", self.username)
            .eq_text("EmailAddress", self.email)
            .eq("IsActive", self.is_active)
    }

    /// Query parameters for the request
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new().with_filter(&self.to_filter())
    }
}

/// Query for system metrics
#[derive(Debug, Clone, Default)]
pub struct MetricsQuery<'a> {
    /// Metric category
    pub category: Option<&'a str>,
    /// Start date (ISO format)
    pub from_date: Option<&'a str>,
    /// End date (ISO format)
    pub to_date: Option<&'a str>,
}

impl<'a> MetricsQuery<'a> {
    /// Empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category
    pub fn with_category(mut self, category: &'a str) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the from date
    pub fn with_from_date(mut self, from_date: &'a str) -> Self {
        self.from_date = Some(from_date);
        self
    }

    /// Set the to date
    pub fn with_to_date(mut self, to_date: &'a str) -> Self {
        self.to_date = Some(to_date);
        self
    }

    /// Query parameters for the request
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_text("category", self.category)
            .with_text("from", self.from_date)
            .with_text("to", self.to_date)
    }
}

/// Paged query over tasks
#[derive(Debug, Clone)]
pub struct TaskQuery<'a> {
    /// Task title
    pub title: Option<&'a str>,
    /// Task status (Unassigned, Pending, Completed)
    pub status: Option<&'a str>,
    /// Id of the user the task is assigned to
    pub assigned_to: Option<i64>,
    /// Number of records to skip
    pub skip: u32,
    /// Number of records to return
    pub take: u32,
}

impl Default for TaskQuery<'_> {
    fn default() -> Self {
        Self {
            title: None,
            status: None,
            assigned_to: None,
            skip: 0,
            take: DEFAULT_PAGE_SIZE,
        }
    }
}

impl<'a> TaskQuery<'a> {
    /// First page, no filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: &'a str) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the assignee
    pub fn with_assigned_to(mut self, user_id: i64) -> Self {
        self.assigned_to = Some(user_id);
        self
    }

    /// Set the records to skip
    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = skip;
        self
    }

    /// Set the page size
    pub fn with_take(mut self, take: u32) -> Self {
        self.take = take;
        self
    }

    /// `$filter` expression
    pub fn to_filter(&self) -> ODataFilter {
        ODataFilter::new()
            .eq_text("Title", self.title)
            .eq_text("Status", self.status)
            .eq("AssignedToUserId", self.assigned_to)
    }

    /// Query parameters for the request; paging is always sent
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("$skip", self.skip)
            .with("$take", self.take)
            .with_filter(&self.to_filter())
    }
}

/// Paged query over queue items
#[derive(Debug, Clone, Default)]
pub struct QueueItemFilter<'a> {
    /// Queue definition the items belong to
    pub queue_definition_id: Option<i64>,
    /// Item status (New, InProgress, Successful, Failed, ...)
    pub status: Option<&'a str>,
    /// Number of records to skip
    pub skip: Option<u32>,
    /// Number of records to return
    pub top: Option<u32>,
}

impl<'a> QueueItemFilter<'a> {
    /// Empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the queue definition
    pub fn with_queue_definition_id(mut self, id: i64) -> Self {
        self.queue_definition_id = Some(id);
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: &'a str) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the records to skip
    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Set the page size
    pub fn with_top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }

    /// `$filter` expression
    pub fn to_filter(&self) -> ODataFilter {
        ODataFilter::new()
            .eq("QueueDefinitionId", self.queue_definition_id)
            .eq_text("Status", self.status)
    }

    /// Query parameters for the request
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_filter(&self.to_filter())
            .with_opt("$skip", self.skip)
            .with_opt("$top", self.top)
    }
}

/// Query for the folder roles of one user
#[derive(Debug, Clone)]
pub struct FolderRolesQuery<'a> {
    /// User name to get roles for
    pub username: &'a str,
    /// Principal type (User, Group, Machine, Robot, ExternalApplication)
    pub user_type: &'a str,
    /// Folder name filter
    pub search_text: Option<&'a str>,
    /// Number of records to skip
    pub skip: u32,
    /// Number of records to return
    pub take: u32,
}

impl<'a> FolderRolesQuery<'a> {
    /// Query for `username` as a plain user, first page
    pub fn new(username: &'a str) -> Self {
        Self {
            username,
            user_type: "User",
            search_text: None,
            skip: 0,
            take: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the principal type
    pub fn with_user_type(mut self, user_type: &'a str) -> Self {
        self.user_type = user_type;
        self
    }

    /// Set the folder name filter
    pub fn with_search_text(mut self, search_text: &'a str) -> Self {
        self.search_text = Some(search_text);
        self
    }

    /// Set the records to skip
    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = skip;
        self
    }

    /// Set the page size
    pub fn with_take(mut self, take: u32) -> Self {
        self.take = take;
        self
    }

    /// Query parameters for the request
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("username", self.username)
            .with("type", self.user_type)
            .with("skip", self.skip)
            .with("take", self.take)
            .with_text("searchText", self.search_text)
    }
}

/// Maintenance phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenancePhase {
    /// New jobs are refused, running ones finish
    Draining,
    /// Everything is stopped
    Suspended,
}

impl fmt::Display for MaintenancePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaintenancePhase::Draining => f.write_str("Draining"),
            MaintenancePhase::Suspended => f.write_str("Suspended"),
        }
    }
}

/// Parameters for starting a maintenance window
#[derive(Debug, Clone)]
pub struct MaintenanceStart {
    /// Phase to transition to
    pub phase: MaintenancePhase,
    /// Ignore errors during the transition
    pub force: bool,
    /// Kill running jobs when moving to Suspended
    pub kill_jobs: bool,
    /// Tenant to start maintenance for
    pub tenant_id: Option<i64>,
}

impl MaintenanceStart {
    /// Start `phase` without force or killing jobs
    pub fn new(phase: MaintenancePhase) -> Self {
        Self {
            phase,
            force: false,
            kill_jobs: false,
            tenant_id: None,
        }
    }

    /// Set the force flag
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Set the kill-jobs flag
    pub fn with_kill_jobs(mut self, kill_jobs: bool) -> Self {
        self.kill_jobs = kill_jobs;
        self
    }

    /// Set the tenant
    pub fn with_tenant_id(mut self, tenant_id: i64) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }

    /// Query parameters for the request
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("phase", self.phase)
            .with("force", self.force)
            .with("killJobs", self.kill_jobs)
            .with_opt("tenantId", self.tenant_id)
    }
}

/// Audit log export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Comma separated values
    #[default]
    Csv,
    /// JSON document
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => f.write_str("CSV"),
            ExportFormat::Json => f.write_str("JSON"),
        }
    }
}

/// Folder types accepted by the folder navigation endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderType {
    /// Classic or modern standard folder
    Standard,
    /// Personal workspace
    Personal,
    /// Virtual folder
    Virtual,
    /// Solution folder
    Solution,
}

impl fmt::Display for FolderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FolderType::Standard => "Standard",
            FolderType::Personal => "Personal",
            FolderType::Virtual => "Virtual",
            FolderType::Solution => "Solution",
        };
        f.write_str(name)
    }
}

/// How running jobs are stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StopStrategy {
    /// Ask the job to stop at its next checkpoint
    #[default]
    SoftStop,
    /// Kill the process
    Kill,
}

/// Queue item priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QueuePriority {
    /// Low
    Low,
    /// Normal
    #[default]
    Normal,
    /// High
    High,
}

/// Item added to a queue through `AddQueueItem`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct QueueItem {
    /// Name of the target queue
    pub name: String,
    /// Processing priority
    pub priority: QueuePriority,
    /// Free-form item payload
    pub specific_content: Value,
    /// Business reference, unique per queue when the queue enforces it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Earliest processing date (ISO format)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defer_date: Option<String>,
    /// Latest processing date (ISO format)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl QueueItem {
    /// Item for `queue_name` carrying `specific_content`
    pub fn new(queue_name: &str, specific_content: Value) -> Self {
        Self {
            name: queue_name.to_string(),
            priority: QueuePriority::Normal,
            specific_content,
            reference: None,
            defer_date: None,
            due_date: None,
        }
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: QueuePriority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the reference
    pub fn with_reference(mut self, reference: &str) -> Self {
        self.reference = Some(reference.to_string());
        self
    }

    /// Set the defer date
    pub fn with_defer_date(mut self, defer_date: &str) -> Self {
        self.defer_date = Some(defer_date.to_string());
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: &str) -> Self {
        self.due_date = Some(due_date.to_string());
        self
    }
}
