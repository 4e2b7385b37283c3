pub mod dashboard;
pub mod error;
pub mod forms;
pub mod indoor;
pub mod plant;
pub mod timestamp;
