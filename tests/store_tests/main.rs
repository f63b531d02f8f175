//! Record store tests
