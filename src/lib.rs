pub mod corpus;
pub mod error;
pub mod layouts;
pub mod scorer;
// Report rendering lives in the binary; see src/main.rs.
