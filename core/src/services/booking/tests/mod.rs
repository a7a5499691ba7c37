//! Unit tests for the booking services

mod mocks;

mod service_tests;
