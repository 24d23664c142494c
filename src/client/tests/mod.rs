//! Unit tests for the client reconciliation layer.
