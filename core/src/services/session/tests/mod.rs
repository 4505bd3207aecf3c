//! Tests for the session facade

mod service_tests;
