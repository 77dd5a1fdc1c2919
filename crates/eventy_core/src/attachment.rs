//! Image attachments and preview lifetime tracking.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::FileConstraintError;

/// Hard cap on attached image size, in bytes.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// The two image slots on an event, with their multipart field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageField {
    Picture,
    CoverImage,
}

impl ImageField {
    pub fn wire_key(&self) -> &'static str {
        match self {
            ImageField::Picture => "image",
            ImageField::CoverImage => "coverImage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImageField::Picture => "Event image",
            ImageField::CoverImage => "Cover image",
        }
    }
}

/// Check a candidate file against the image constraints.
///
/// Order matters: the type check runs before the size check, so a large
/// non-image reports the type problem.
pub fn validate_image(mime_type: &str, size: u64) -> Result<(), FileConstraintError> {
    if !mime_type.starts_with("image/") {
        return Err(FileConstraintError::NotAnImage {
            mime_type: mime_type.to_string(),
        });
    }
    if size > MAX_IMAGE_BYTES {
        return Err(FileConstraintError::TooLarge { size });
    }
    Ok(())
}

/// MIME type from a file name's extension. Unknown extensions fall through to
/// `application/octet-stream`, which the image check then rejects.
pub fn mime_for_file_name(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or("");
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Issues preview handles and tracks how many are still alive.
///
/// Every attached image holds a handle for its preview; dropping the handle
/// releases the preview. The live count exists so tests and shutdown paths
/// can assert nothing leaked.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    live: Arc<AtomicUsize>,
    next_id: Arc<AtomicUsize>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> PreviewHandle {
        self.live.fetch_add(1, Ordering::SeqCst);
        PreviewHandle {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            live: Arc::clone(&self.live),
        }
    }

    /// Number of handles issued and not yet dropped.
    pub fn live_count(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

/// Scoped preview resource. Releases itself on drop; not cloneable.
#[derive(Debug)]
pub struct PreviewHandle {
    id: usize,
    live: Arc<AtomicUsize>,
}

impl PreviewHandle {
    pub fn id(&self) -> usize {
        self.id
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// An image accepted into a draft slot, with its preview held alive.
#[derive(Debug)]
pub struct AttachedImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    preview: PreviewHandle,
}

impl AttachedImage {
    /// Validate and attach, acquiring a preview handle on success.
    pub fn new(
        registry: &PreviewRegistry,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, FileConstraintError> {
        let mime_type = mime_type.into();
        validate_image(&mime_type, bytes.len() as u64)?;
        Ok(Self {
            file_name: file_name.into(),
            mime_type,
            bytes,
            preview: registry.acquire(),
        })
    }

    pub fn preview_id(&self) -> usize {
        self.preview.id()
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
