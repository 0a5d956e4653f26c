//! Integration tests for chatfile.
//!
//! A local warp server stands in for the chat completion endpoint.

mod support;
