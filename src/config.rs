/// Configuration constants for the Zendesk API
pub mod api {
    /// Base path for Zendesk API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Host suffix appended to the company subdomain
    pub const HOST_SUFFIX: &str = "zendesk.com";

    /// Page size for cursor-paginated list endpoints
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Values accepted by a user's `ticket_restriction` (plus null)
    pub const TICKET_RESTRICTIONS: &[&str] = &["assigned", "groups", "organization", "requested"];
}

/// Environment variables read for credentials and task inputs
pub mod env {
    pub const COMPANY: &str = "ZENDESK_COMPANY";
    pub const USERNAME: &str = "ZENDESK_USERNAME";
    pub const PASSWORD: &str = "ZENDESK_PASSWORD";

    /// Full API root; overrides the company host (self-hosted proxies, mocks)
    pub const BASE_URL: &str = "ZENDESK_URL";

    /// CSV of `email,employee_id` rows for external id reconciliation
    pub const EXTERNAL_ID_FILE: &str = "EXTERNAL_ID_FILE";

    /// Log level used when `--log-level` is not given
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default external id input file
    pub const EXTERNAL_ID_FILE: &str = "/data.csv";

    /// Tickets not updated for this many days are considered stale
    pub const STALE_TICKET_DAYS: i64 = 366;

    /// Report written by 'major-cert-tickets'
    pub const MAJOR_CERT_FILE: &str = "major-cert-tickets.csv";
}
