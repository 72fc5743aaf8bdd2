pub mod catch_tests;
pub mod outcome_async_tests;
