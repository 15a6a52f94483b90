pub mod endpoint;
pub mod transport;
pub mod upload;

pub use endpoint::*;
pub use transport::*;
pub use upload::*;
