pub mod report;
pub mod service;
pub mod timestamp;

// Re-export commonly used types
pub use service::ExportRequest;
