//! Cross-module test suites


mod clock_tests;
mod concurrent_tests;
mod seed_tests;
