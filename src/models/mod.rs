//! Data models

pub mod account;
pub mod category;
pub mod equipment;

// Re-export commonly used types
pub use account::{AdminAccount, AdminCriteria};
pub use category::{BulkUpdate, CategoryCorrection};
pub use equipment::{CreateEquipment, Equipment, UpdateEquipment};
