pub mod prompt;
pub mod request;
pub mod response;
pub mod transport;

pub use request::{build, PreparedRequest};
pub use response::GenerationResult;
pub use transport::{HttpTransport, Transport};
