//! Caller-side persistence of encoded placeholders.
//!
//! The encoder never touches the filesystem. These helpers are what a
//! pipeline uses to write a batch of slots: every failure is logged and
//! recorded, and the batch moves on to the next slot.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use placard_core::{Compressor, Crc32, Error, Result};
use tracing::{error, info};

use crate::encoder::{encode_minimal_placeholder, PlaceholderEncoder};

/// One image slot to fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Destination file.
    pub path: PathBuf,
    /// 1-based page index.
    pub page: u32,
    /// 1-based image index within the page.
    pub image: u32,
    /// Free-text annotation of the slot.
    pub annotation: String,
}

/// Which placeholder to write into every slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// The gray test card at the given size.
    Pattern { width: u32, height: u32 },
    /// The fixed 1x1 transparent image.
    Minimal,
}

/// Outcome of a batch write.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Slots written successfully, in order.
    pub written: Vec<PathBuf>,
    /// Slots that failed, with the error.
    pub failed: Vec<(PathBuf, Error)>,
}

impl BatchReport {
    /// Whether every slot was written.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Write `bytes` to `path`, creating or truncating the file.
pub fn write_placeholder(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path.as_ref())?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(())
}

/// Encode and write every slot, continuing past failures.
pub fn write_slots<C: Compressor, K: Crc32>(
    encoder: &PlaceholderEncoder<C, K>,
    fill: Fill,
    slots: &[Slot],
) -> BatchReport {
    let mut report = BatchReport::default();

    for slot in slots {
        let result = match fill {
            Fill::Pattern { width, height } => encoder
                .encode(width, height, slot.page, slot.image, &slot.annotation)
                .and_then(|bytes| write_placeholder(&slot.path, &bytes)),
            Fill::Minimal => write_placeholder(&slot.path, encode_minimal_placeholder()),
        };

        match result {
            Ok(()) => {
                info!(
                    page = slot.page,
                    image = slot.image,
                    path = %slot.path.display(),
                    "wrote placeholder"
                );
                report.written.push(slot.path.clone());
            }
            Err(e) => {
                error!(
                    page = slot.page,
                    image = slot.image,
                    path = %slot.path.display(),
                    category = e.category(),
                    "failed to write placeholder: {}",
                    e
                );
                report.failed.push((slot.path.clone(), e));
            }
        }
    }

    report
}
