//! Unit tests for render preparation.

mod prepare_tests;
