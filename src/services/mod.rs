pub mod extract;
pub mod fetch;
pub mod ledger;
pub mod log;
pub mod resolve;
pub mod vocab;

pub use extract::*;
pub use fetch::*;
pub use ledger::*;
pub use log::*;
pub use resolve::*;
pub use vocab::*;
