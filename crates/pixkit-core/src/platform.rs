//! Platform bridging and image storage seams.
//!
//! The toolkit does not know how to talk to a windowing system or how to
//! decode files. Hosts supply those capabilities by implementing
//! [`PlatformBridge`] and [`ImageStore`] and handing them to a
//! [`ToolkitConfig`], which is then passed explicitly to whatever needs it.
//! There is no global registry.
//!
//! # Usage
//!
//! ```rust
//! use pixkit_core::{Gray8Image, Image, PlatformBridge, PlatformHandle, Result, ToolkitConfig};
//!
//! struct Tagger;
//!
//! impl PlatformBridge for Tagger {
//!     fn name(&self) -> &str {
//!         "tagger"
//!     }
//!
//!     fn wrap(&self, image: &Image) -> Result<PlatformHandle> {
//!         Ok(PlatformHandle::new(image.to_string()))
//!     }
//! }
//!
//! let config = ToolkitConfig::new().with_bridge(Tagger);
//! let mut img: Image = Gray8Image::new(2, 2).unwrap().into();
//! config.attach_platform(&mut img).unwrap();
//! let tag = img.platform().unwrap().downcast_ref::<String>().unwrap();
//! assert_eq!(tag, "Gray8 (2x2)");
//! ```

use std::any::Any;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::{Error, Image, Result};

/// Opaque native handle attached to an image.
///
/// The core stores the handle but never looks inside it. Cloning shares
/// the same underlying value.
#[derive(Clone)]
pub struct PlatformHandle(Arc<dyn Any + Send + Sync>);

impl PlatformHandle {
    /// Wraps a native value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Borrows the native value if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns `true` if both handles share the same native value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for PlatformHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlatformHandle(..)")
    }
}

/// Converts toolkit images into native platform objects.
pub trait PlatformBridge: Send + Sync {
    /// Name of the platform, for diagnostics.
    fn name(&self) -> &str;

    /// Builds the native handle for `image`.
    fn wrap(&self, image: &Image) -> Result<PlatformHandle>;
}

/// Reads and writes images by path.
pub trait ImageStore: Send + Sync {
    /// Loads the image at `path`.
    fn read(&self, path: &Path) -> Result<Image>;

    /// Saves `image` to `path`.
    fn write(&self, path: &Path, image: &Image) -> Result<()>;
}

/// Host-supplied capabilities, passed explicitly.
#[derive(Clone, Default)]
pub struct ToolkitConfig {
    bridge: Option<Arc<dyn PlatformBridge>>,
    store: Option<Arc<dyn ImageStore>>,
}

impl ToolkitConfig {
    /// Configuration with no bridge and no store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the platform bridge.
    pub fn with_bridge(mut self, bridge: impl PlatformBridge + 'static) -> Self {
        self.bridge = Some(Arc::new(bridge));
        self
    }

    /// Sets the image store.
    pub fn with_store(mut self, store: impl ImageStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// The configured bridge, if any.
    pub fn bridge(&self) -> Option<&dyn PlatformBridge> {
        self.bridge.as_deref()
    }

    /// The configured store, if any.
    pub fn store(&self) -> Option<&dyn ImageStore> {
        self.store.as_deref()
    }

    /// Wraps `image` through the bridge and stores the resulting handle on it.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] if no bridge is configured, or whatever the
    /// bridge returns.
    pub fn attach_platform(&self, image: &mut Image) -> Result<()> {
        let bridge = self
            .bridge()
            .ok_or_else(|| Error::unsupported("no platform bridge configured"))?;
        let handle = bridge.wrap(image)?;
        debug!(bridge = bridge.name(), image = %image, "attached platform handle");
        image.set_platform(Some(handle));
        Ok(())
    }

    /// Reads an image through the store.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] if no store is configured.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Image> {
        let path = path.as_ref();
        let store = self
            .store()
            .ok_or_else(|| Error::unsupported("no image store configured"))?;
        debug!(path = %path.display(), "reading image");
        store.read(path)
    }

    /// Writes an image through the store.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] if no store is configured.
    pub fn write(&self, path: impl AsRef<Path>, image: &Image) -> Result<()> {
        let path = path.as_ref();
        let store = self
            .store()
            .ok_or_else(|| Error::unsupported("no image store configured"))?;
        debug!(path = %path.display(), image = %image, "writing image");
        store.write(path, image)
    }
}

impl fmt::Debug for ToolkitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolkitConfig")
            .field("bridge", &self.bridge.as_ref().map(|b| b.name().to_string()))
            .field("store", &self.store.is_some())
            .finish()
    }
}
