//! Network constants for the Bittrex v1.1 REST API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://bittrex.com/api/v1.1";

/// Address the host pings to judge venue reachability.
pub const DEFAULT_PING_ADDRESS: &str = "http://www.bittrex.com:80";

/// Suggested host polling interval, in seconds.
pub const DEFAULT_POLLING_SPEED: u32 = 30;
