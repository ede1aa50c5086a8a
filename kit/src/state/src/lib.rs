pub mod error;
pub mod modal_machine;
pub mod options;
