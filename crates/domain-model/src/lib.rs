pub mod bundle_entry;
pub mod selection;
pub mod upload_request;
pub mod upload_outcome;

pub use bundle_entry::*;
pub use selection::*;
pub use upload_request::*;
pub use upload_outcome::*;
