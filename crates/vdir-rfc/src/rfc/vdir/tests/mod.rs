//! Fixture-driven tests for the directory codec and record mapping.
