pub mod analyze;
pub mod batch;
pub mod compare;
pub mod history;
pub mod init;
pub mod stats;
pub mod validate;
