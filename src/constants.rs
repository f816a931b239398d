/// Default base URL of the UiPath Automation Cloud
pub const DEFAULT_BASE_URL: &str = "https://cloud.uipath.com";
/// Default identity server used for OAuth token exchange
pub const DEFAULT_IDENTITY_URL: &str = "https://cloud.uipath.com/identity_";
/// Path of the token endpoint, relative to the identity server
pub const TOKEN_ENDPOINT: &str = "connect/token";
/// Default OAuth scope requested with client credentials
pub const DEFAULT_SCOPE: &str = "OR.Default";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Seconds before expiry at which a cached access token is considered stale
pub const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;
/// User agent string used in HTTP requests to identify this client to Orchestrator
pub const USER_AGENT: &str = "uipath-client/0.1.0";
/// Namespace prefix of Orchestrator OData actions and functions
pub const ODATA_ACTION_NAMESPACE: &str = "UiPath.Server.Configuration.OData";
/// Header carrying the tenant name for multi-tenant deployments
pub const TENANT_HEADER: &str = "X-UIPATH-TenantName";
/// Header carrying the folder (organization unit) id
pub const FOLDER_HEADER: &str = "X-UIPATH-OrganizationUnitId";
/// Default page size for paged navigation endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 100;
