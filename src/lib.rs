//! # Person Gallery
//!
//! Persisted gallery of labeled person photos behind a biometric-style lock.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    PERSON GALLERY                        │
//! │  ┌─────────────┐  ┌──────────────┐  ┌────────────────┐  │
//! │  │  AUTH GATE  │  │ GALLERY STORE│  │ CAPTURE        │  │
//! │  │  (port)     │  │ visible/     │  │ PROVIDER (port)│  │
//! │  └──────┬──────┘  │ hidden/lock  │  └───────┬────────┘  │
//! │         │         └──────┬───────┘          │           │
//! │  ┌──────┴────────────────┴──────────────────┴────────┐  │
//! │  │                 UI SIGNAL PORT                     │  │
//! │  │    confirmation / error / text input / choice      │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                                                          │
//! │  ┌─────────────┐  ┌──────────────┐  ┌────────────────┐  │
//! │  │ PREFERENCE  │  │ IMAGE STORE  │  │ JPEG           │  │
//! │  │ STORE (kv)  │  │ (documents)  │  │ COMPRESSION    │  │
//! │  └─────────────┘  └──────────────┘  └────────────────┘  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Model
//!
//! - Records are `{name, image reference}`; the reference names a JPEG
//!   in the documents directory and doubles as the stable handle
//! - The whole visible list persists under one preference-store key
//! - The gallery opens locked whenever saved records exist; unlocking
//!   requires proof from the authentication gate
//! - Per operation: durable side effect, then mutation, then event

pub mod auth;
pub mod capture;
pub mod compress;
pub mod error;
pub mod gallery;
pub mod image_fs;
pub mod prefs;
pub mod record;
pub mod ui;

pub use auth::{AuthProof, AuthenticationGate, Availability, PinGate};
pub use capture::{CaptureProvider, ChosenSource, FileCaptureProvider};
pub use compress::RawImage;
pub use error::{GalleryError, GalleryResult};
pub use gallery::{GalleryEvent, GalleryStore, PREFS_KEY};
pub use image_fs::ImageStore;
pub use prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use record::PersonRecord;
pub use ui::{ConsoleUi, UiPort};

/// Person Gallery version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
