//! Property-based tests for ACL resolution.
