mod error;
mod parse;
mod types;


pub use error::RecordError;
pub use parse::parse_record;
pub use types::{Direction, Record, RecordKind, ReqEnd, SessionId, Xid};
