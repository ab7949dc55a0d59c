mod command;
mod credentials;
mod nameserver;
mod query;
mod response;
mod target;

pub use command::*;
pub use credentials::*;
pub use nameserver::*;
pub use query::*;
pub use response::*;
pub use target::*;
