//! Unit tests for the data model.

mod path_tests;
