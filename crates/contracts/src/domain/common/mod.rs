pub mod record_id;

pub use record_id::{next_record_id, RecordId};
