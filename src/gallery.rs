//! Person Gallery - Gallery Store
//!
//! The core store: an ordered list of labeled photo records, persisted
//! whole under one preference-store key, with companion image files in
//! a documents directory and a locked/unlocked visibility split.
//!
//! Per operation the sequence is strict: durable-storage side effect,
//! then in-memory mutation, then change event. Across operations there
//! is no ordering guarantee; a single mutex over the state rules out
//! torn reads but concurrent capture/delete callers still race for
//! position, which is why records are addressed by their immutable
//! image reference instead of a raw index.

use std::path::Path;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::task;

use crate::auth::{self, AuthProof, AuthenticationGate};
use crate::capture::{CaptureProvider, ChosenSource};
use crate::compress::{self, RawImage};
use crate::error::{GalleryError, GalleryResult};
use crate::image_fs::ImageStore;
use crate::prefs::PreferenceStore;
use crate::record::{self, PersonRecord};
use crate::ui::UiPort;

/// Preference-store key the record list persists under.
pub const PREFS_KEY: &str = "people";

/// Prompt shown by the authentication gate.
const UNLOCK_PROMPT: &str = "Use biometrics to access your pictures";

/// Change feed entries; the display layer re-reads after each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    Captured { image_reference: String },
    Renamed { image_reference: String },
    Deleted { image_reference: String },
    Locked,
    Unlocked,
}

/// In-memory gallery state.
#[derive(Debug, Default)]
struct GalleryState {
    /// Records currently shown, insertion-ordered.
    visible: Vec<PersonRecord>,
    /// Records loaded from persistence but not yet revealed.
    hidden: Vec<PersonRecord>,
    /// True until the authentication gate approves.
    locked: bool,
}

/// The persisted gallery of person records.
pub struct GalleryStore {
    prefs: Box<dyn PreferenceStore>,
    images: ImageStore,
    state: Mutex<GalleryState>,
    events: broadcast::Sender<GalleryEvent>,
}

impl GalleryStore {
    // ═══════════════════════════════════════════════════════════════════════
    // OPEN / SAVE
    // ═══════════════════════════════════════════════════════════════════════

    /// Open the gallery: load any persisted records into the hidden set
    /// and start locked whenever that set is non-empty.
    ///
    /// Decode failure is non-fatal; the gallery starts empty.
    pub fn open(prefs: Box<dyn PreferenceStore>, documents_dir: &Path) -> GalleryResult<Self> {
        let images = ImageStore::new(documents_dir)?;
        let hidden = Self::load_hidden(prefs.as_ref());
        let locked = !hidden.is_empty();

        let (events, _) = broadcast::channel(32);

        Ok(Self {
            prefs,
            images,
            state: Mutex::new(GalleryState {
                visible: Vec::new(),
                hidden,
                locked,
            }),
            events,
        })
    }

    /// Decode the persisted record list, treating any failure as
    /// "no prior records".
    fn load_hidden(prefs: &dyn PreferenceStore) -> Vec<PersonRecord> {
        let bytes = match prefs.get(PREFS_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("failed to read persisted people: {}", e);
                return Vec::new();
            }
        };

        match record::decode_records(&bytes) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("failed to decode persisted people: {}", e);
                Vec::new()
            }
        }
    }

    /// Persist the visible list. Failure is logged, never raised.
    fn save_visible(&self, visible: &[PersonRecord]) {
        let bytes = match record::encode_records(visible) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::error!("failed to encode people: {}", e);
                return;
            }
        };

        if let Err(e) = self.prefs.set(PREFS_KEY, &bytes) {
            log::error!("failed to save people: {}", e);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // CAPTURE
    // ═══════════════════════════════════════════════════════════════════════

    /// Compress and write a captured image, then append a new record
    /// named "Unknown". The only way a record is created.
    ///
    /// The file write runs off the interactive path and must succeed
    /// before the list is touched; a write failure creates no record.
    pub async fn capture(&self, image: RawImage) -> GalleryResult<PersonRecord> {
        if self.state.lock().locked {
            return Err(GalleryError::Locked);
        }

        let reference = PersonRecord::fresh_reference();
        let images = self.images.clone();
        let file_ref = reference.clone();

        task::spawn_blocking(move || -> GalleryResult<()> {
            let blob = compress::compress(&image)?;
            images.write(&file_ref, &blob)
        })
        .await??;

        let record = PersonRecord::new(reference.clone());
        {
            let mut state = self.state.lock();
            if state.locked {
                // A lock raced the write; drop the file rather than
                // clobber the persisted hidden list on save.
                let _ = self.images.delete(&reference);
                return Err(GalleryError::Locked);
            }
            state.visible.push(record.clone());
            self.save_visible(&state.visible);
        }

        self.emit(GalleryEvent::Captured {
            image_reference: reference,
        });
        Ok(record)
    }

    /// Drive the full capture flow through a host provider: source
    /// choice (only offered when a camera exists), capture, then
    /// [`GalleryStore::capture`]. Cancellation at either stage is a
    /// silent no-op.
    pub async fn add_person_via(
        &self,
        provider: &dyn CaptureProvider,
    ) -> GalleryResult<Option<PersonRecord>> {
        let source = if provider.camera_available() {
            provider.present_source_choice(true)
        } else {
            ChosenSource::Photos
        };

        if source == ChosenSource::Cancelled {
            return Ok(None);
        }

        match provider.capture(source)? {
            Some(image) => Ok(Some(self.capture(image).await?)),
            None => Ok(None),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // RENAME
    // ═══════════════════════════════════════════════════════════════════════

    /// Rename the record with the given image reference. The new name
    /// is not validated; empty is permitted.
    pub fn rename(&self, image_reference: &str, new_name: &str) -> GalleryResult<()> {
        {
            let mut state = self.state.lock();
            if state.locked {
                return Err(GalleryError::Locked);
            }

            let record = state
                .visible
                .iter_mut()
                .find(|r| r.image_reference == image_reference)
                .ok_or_else(|| GalleryError::RecordNotFound(image_reference.to_string()))?;

            record.name = new_name.to_string();
            self.save_visible(&state.visible);
        }

        self.emit(GalleryEvent::Renamed {
            image_reference: image_reference.to_string(),
        });
        Ok(())
    }

    /// Rename through the host dialog surface. Cancelling the text
    /// input leaves the record untouched.
    pub fn rename_via(&self, ui: &dyn UiPort, image_reference: &str) -> bool {
        let Some(new_name) = ui.request_text_input("Rename person") else {
            return false;
        };

        match self.rename(image_reference, &new_name) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("rename failed: {}", e);
                ui.notify_error("Error", "Person could not be renamed");
                false
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // DELETE
    // ═══════════════════════════════════════════════════════════════════════

    /// Remove a record and its image file. The file removal runs off
    /// the interactive path and must succeed first; on failure the
    /// record stays in the list untouched.
    pub async fn delete(&self, image_reference: &str) -> GalleryResult<()> {
        {
            let state = self.state.lock();
            if state.locked {
                return Err(GalleryError::Locked);
            }
            if !state
                .visible
                .iter()
                .any(|r| r.image_reference == image_reference)
            {
                return Err(GalleryError::RecordNotFound(image_reference.to_string()));
            }
        }

        let images = self.images.clone();
        let file_ref = image_reference.to_string();
        task::spawn_blocking(move || images.delete(&file_ref)).await??;

        {
            let mut state = self.state.lock();
            if state.locked {
                // A lock raced the removal; the visible list is gone
                // from memory and saving here would overwrite the
                // persisted records with the empty list.
                return Err(GalleryError::Locked);
            }
            // Re-resolve by reference; the list may have shifted while
            // the removal was in flight.
            state
                .visible
                .retain(|r| r.image_reference != image_reference);
            self.save_visible(&state.visible);
        }

        self.emit(GalleryEvent::Deleted {
            image_reference: image_reference.to_string(),
        });
        Ok(())
    }

    /// Confirm with the user, then delete. Declining leaves everything
    /// unchanged; a removal failure keeps the record and is surfaced as
    /// an error dialog rather than raised.
    pub async fn request_delete(&self, ui: &dyn UiPort, image_reference: &str) -> bool {
        let name = {
            let state = self.state.lock();
            match state
                .visible
                .iter()
                .find(|r| r.image_reference == image_reference)
            {
                Some(record) => record.name.clone(),
                None => return false,
            }
        };

        let message = format!("Delete person \"{}\"?", name);
        if !ui.request_confirmation("Confirmation", &message) {
            return false;
        }

        match self.delete(image_reference).await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("delete failed: {}", e);
                ui.notify_error("Error", "Person could not be deleted");
                false
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // LOCK / UNLOCK
    // ═══════════════════════════════════════════════════════════════════════

    /// Clear the visible set from memory. Persisted bytes are left
    /// exactly as they were. Invoked when the host loses foreground.
    pub fn lock(&self) {
        {
            let mut state = self.state.lock();
            state.visible.clear();
            state.locked = true;
        }
        self.emit(GalleryEvent::Locked);
    }

    /// Reveal the persisted records. Requires proof of a successful
    /// gate decision; [`auth::request_unlock`] is the only mint.
    pub fn unlock(&self, _proof: AuthProof) {
        {
            let mut state = self.state.lock();
            if state.hidden.is_empty() {
                // Past the initial unlock the hidden set is spent;
                // the persisted copy is the source of truth.
                state.hidden = Self::load_hidden(self.prefs.as_ref());
            }
            state.visible = std::mem::take(&mut state.hidden);
            state.locked = false;
        }
        self.emit(GalleryEvent::Unlocked);
    }

    /// Run the gate flow and unlock on success, surfacing a distinct
    /// message per failure mode. Returns whether the gallery unlocked.
    pub fn unlock_via(&self, gate: &dyn AuthenticationGate, ui: &dyn UiPort) -> bool {
        match auth::request_unlock(gate, UNLOCK_PROMPT) {
            Ok(proof) => {
                self.unlock(proof);
                true
            }
            Err(GalleryError::AuthUnavailable(reason)) => {
                ui.notify_error("Unavailable", &reason);
                false
            }
            Err(GalleryError::AuthCancelled) => {
                ui.notify_error("Cancelled", "Authentication was cancelled");
                false
            }
            Err(e) => {
                ui.notify_error("Failed", &e.to_string());
                false
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Snapshot of the visible records, in display order.
    pub fn records(&self) -> Vec<PersonRecord> {
        self.state.lock().visible.clone()
    }

    /// Snapshot of the loaded-but-not-revealed records.
    pub fn hidden_records(&self) -> Vec<PersonRecord> {
        self.state.lock().hidden.clone()
    }

    pub fn is_locked(&self) -> bool {
        self.state.lock().locked
    }

    /// Path of the image file backing a record.
    pub fn image_path(&self, image_reference: &str) -> std::path::PathBuf {
        self.images.path_for(image_reference)
    }

    /// Subscribe to the change feed.
    pub fn subscribe(&self) -> broadcast::Receiver<GalleryEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: GalleryEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}
