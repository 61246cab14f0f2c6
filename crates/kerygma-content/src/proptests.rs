//! Property-based tests for detection and normalization.
