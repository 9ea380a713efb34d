pub mod client;
pub mod issues;
pub mod repository;

#[cfg(test)]
pub mod testing;
