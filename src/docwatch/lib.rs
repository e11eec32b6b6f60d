//! # Docwatch Architecture
//!
//! Docwatch keeps track of documents that expire (passports, licenses, insurance
//! policies...) and warns ahead of time. Each document has a name, an expiration
//! date and an alert lead time: the number of days before expiration at which it
//! starts asking for attention.
//!
//! Like any UI-agnostic library, it is a library first with a CLI on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the DocumentStore        │
//! │  - Normalizes inputs (selectors → UUIDs)                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: dates, status, view, calendar, model                 │
//! │  Storage (store/): BlobStore trait + DocumentStore          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived, never stored
//!
//! Status (OK / Alert / Expired) and days remaining depend on today's date, so
//! they are computed on every listing and never persisted. See [`status`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Blob persistence and the owning [`store::DocumentStore`]
//! - [`model`]: `Document`, raw drafts and validation
//! - [`dates`]: Calendar-day arithmetic and ISO parsing
//! - [`status`]: OK / Alert / Expired derivation
//! - [`view`]: Filtering and sorting for display
//! - [`index`]: Display numbers and selector resolution
//! - [`calendar`]: iCalendar reminder export
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and wiring
//! - [`error`]: Error types

pub mod api;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod dates;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod status;
pub mod store;
pub mod view;
