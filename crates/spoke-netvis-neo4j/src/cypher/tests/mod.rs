//! Unit tests for query construction.
