/// Throwaway SQLite database per test
pub mod support;




/// Transaction handling and cascade tests
pub mod transaction_tests;
