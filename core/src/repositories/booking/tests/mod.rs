//! Tests for the booking repository implementations
