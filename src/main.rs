//! Person Gallery - CLI
//!
//! Command-line host for the gallery store. Dialogs are answered on the
//! terminal and the authentication gate is a PIN taken from the
//! `PERSON_GALLERY_PIN` environment variable.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use person_gallery::auth::AuthFailure;
use person_gallery::{
    AuthenticationGate, Availability, ConsoleUi, FileCaptureProvider, FilePreferenceStore,
    GalleryResult, GalleryStore, PinGate,
};

#[derive(Parser)]
#[command(name = "person-gallery")]
#[command(version = person_gallery::VERSION)]
#[command(about = "Person Gallery - persisted gallery of labeled photos behind a lock")]
struct Cli {
    /// Gallery root directory
    #[arg(short, long, default_value = "./gallery")]
    gallery: PathBuf,

    /// PIN for unlocking a gallery with saved records
    #[arg(short, long)]
    pin: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture a new person from an image file
    Add {
        /// Image path
        image: PathBuf,
    },

    /// List visible records
    List,

    /// Rename a person
    Rename {
        /// Image reference of the record
        reference: String,

        /// New name; prompted for when omitted
        name: Option<String>,
    },

    /// Delete a person and their image file
    Delete {
        /// Image reference of the record
        reference: String,

        /// Skip the confirmation dialog
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show lock state and record counts
    Status,
}

/// Stands in when no PIN is configured on the host.
struct UnconfiguredGate;

impl AuthenticationGate for UnconfiguredGate {
    fn availability(&self) -> Availability {
        Availability::Unavailable {
            reason: "No PIN configured (set PERSON_GALLERY_PIN)".into(),
        }
    }

    fn authenticate(&self, _prompt: &str) -> Result<(), AuthFailure> {
        Err(AuthFailure::Cancelled)
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn open_store(cli: &Cli) -> GalleryResult<GalleryStore> {
    let prefs = FilePreferenceStore::new(&cli.gallery.join("prefs"));
    GalleryStore::open(Box::new(prefs), &cli.gallery.join("documents"))
}

/// Unlock through the PIN gate if the gallery opened locked.
fn unlock_if_needed(store: &GalleryStore, cli: &Cli, ui: &ConsoleUi) -> bool {
    if !store.is_locked() {
        return true;
    }

    match std::env::var("PERSON_GALLERY_PIN") {
        Ok(expected) => {
            let gate = PinGate::new(expected, cli.pin.clone().unwrap_or_default());
            store.unlock_via(&gate, ui)
        }
        Err(_) => store.unlock_via(&UnconfiguredGate, ui),
    }
}

async fn run(cli: Cli) -> GalleryResult<()> {
    let store = open_store(&cli)?;

    match &cli.command {
        Commands::Add { image } => {
            let ui = ConsoleUi::new(false);
            if !unlock_if_needed(&store, &cli, &ui) {
                return Ok(());
            }

            let provider = FileCaptureProvider::new(image.clone());
            match store.add_person_via(&provider).await? {
                Some(record) => {
                    println!("Added \"{}\" ({})", record.name, record.image_reference);
                }
                None => println!("Cancelled"),
            }
        }

        Commands::List => {
            let ui = ConsoleUi::new(false);
            if !unlock_if_needed(&store, &cli, &ui) {
                return Ok(());
            }

            let records = store.records();
            if records.is_empty() {
                println!("No people in the gallery");
            } else {
                println!("People ({}):", records.len());
                for record in records {
                    println!("  {}  {}", record.image_reference, record.name);
                }
            }
        }

        Commands::Rename { reference, name } => {
            let ui = ConsoleUi::new(false);
            if !unlock_if_needed(&store, &cli, &ui) {
                return Ok(());
            }

            let renamed = match name {
                Some(name) => {
                    store.rename(reference, name)?;
                    true
                }
                None => store.rename_via(&ui, reference),
            };
            if renamed {
                println!("Renamed {}", reference);
            }
        }

        Commands::Delete { reference, yes } => {
            let ui = ConsoleUi::new(*yes);
            if !unlock_if_needed(&store, &cli, &ui) {
                return Ok(());
            }

            if store.request_delete(&ui, reference).await {
                println!("Deleted {}", reference);
            } else {
                println!("Not deleted");
            }
        }

        Commands::Status => {
            println!("Gallery: {}", cli.gallery.display());
            println!("Locked:  {}", store.is_locked());
            println!("Visible: {}", store.records().len());
            println!("Hidden:  {}", store.hidden_records().len());
        }
    }

    Ok(())
}
