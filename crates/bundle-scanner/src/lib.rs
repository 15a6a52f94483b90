pub mod scanner;
pub mod patterns;

pub use scanner::{list_bundles, sort_by_embedded_timestamp};
pub use patterns::{parse_for_service_request_id, parse_for_timestamp};
pub use bundle_domain::BundleEntry;
