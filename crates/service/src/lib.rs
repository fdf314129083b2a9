//! Service layer providing the store operations behind the HTTP handlers.
//! - Every mutation runs inside one database transaction.
//! - Reuses validation and entity definitions in `models` crate.
//! - Nested reads return the models grouped per view; shaping JSON is left to callers.

pub mod errors;
pub mod restaurant_service;
pub mod pizza_service;
pub mod restaurant_pizza_service;
pub mod seed;
#[cfg(test)]
pub mod test_support;
