pub mod user;
pub mod order;
pub mod map_entry;
pub mod envelope;

pub use user::{Role, UserId, UserRecord};
pub use order::Order;
pub use map_entry::MapEntry;
pub use envelope::CollectionEnvelope;
