//! KeyStore - asynchronous key-value snapshot storage
//!
//! Stores one serialized payload per key, one file per key, under a base
//! directory. Writes for a given key can be routed through a single-writer
//! queue that serializes them and coalesces a backlog down to the newest
//! snapshot.
//!
//! # Architecture
//!
//! ```text
//! <base-dir>/
//! ├── dailyTasks.json      # one payload per key
//! └── <other-key>.json
//! ```
//!
//! # Example
//!
//! ```ignore
//! use keystore::{KeyStore, writer};
//!
//! let store = KeyStore::open("/var/lib/app");
//! let handle = writer::spawn(store.clone(), "dailyTasks");
//! handle.submit(r#"[{"id":"1"}]"#.to_string());
//! handle.flush().await;
//! assert!(store.get("dailyTasks").await?.is_some());
//! ```

mod store;
pub mod writer;

pub use store::KeyStore;
pub use writer::WriterHandle;
