//! Shared fixtures for the lock tests and the `key_fixture` binary.
