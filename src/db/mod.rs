pub mod connection;
pub mod job_repository;
pub mod models;

#[cfg(test)]
pub mod fixtures;
