pub mod enums;
pub mod error;
pub mod record;

pub use enums::{EditState, Focus, MessageKind};
pub use error::TodoError;
pub use record::TodoRecord;
