//! divelog - A minimal, self-hostable dive log web service
//!
//! A single SQLite table of dive records behind a REST API and a
//! static-file front end.

pub mod cli;
pub mod http_server;
pub mod storage;
