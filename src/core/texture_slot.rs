use std::path::{Path, PathBuf};

use egui::{ColorImage, TextureHandle, TextureId, TextureOptions};
use thiserror::Error;

use crate::core::image_loader::{ImageLoader, LoadError};

/// Uploads decoded pixels to the GPU and frees them again.
pub trait TextureBackend {
    type Handle;

    fn upload(&mut self, name: &str, image: ColorImage) -> Self::Handle;
    fn release(&mut self, handle: Self::Handle);
    fn texture_id(handle: &Self::Handle) -> TextureId;
}

/// Textures managed by egui. Linear filtering, clamp-to-edge wrapping.
pub struct EguiTextures {
    ctx: egui::Context,
}

impl EguiTextures {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl TextureBackend for EguiTextures {
    type Handle = TextureHandle;

    fn upload(&mut self, name: &str, image: ColorImage) -> TextureHandle {
        self.ctx.load_texture(name, image, TextureOptions::LINEAR)
    }

    fn release(&mut self, handle: TextureHandle) {
        // egui frees the texture once the last handle is gone
        drop(handle);
    }

    fn texture_id(handle: &TextureHandle) -> TextureId {
        handle.id()
    }
}

#[derive(Debug, Error)]
pub enum TextureError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("texture slot already holds {}", .0.display())]
    SlotOccupied(PathBuf),
}

pub struct ActiveTexture<H> {
    pub handle: H,
    pub size: [usize; 2],
    pub path: PathBuf,
}

impl<H> ActiveTexture<H> {
    pub fn width(&self) -> usize {
        self.size[0]
    }

    pub fn height(&self) -> usize {
        self.size[1]
    }
}

/// Owns at most one uploaded texture.
///
/// `load` refuses to run while a texture is held; callers `release` first.
/// Whatever is still held when the slot is dropped is released.
pub struct TextureSlot<B: TextureBackend> {
    loader: Box<dyn ImageLoader>,
    backend: B,
    current: Option<ActiveTexture<B::Handle>>,
}

impl<B: TextureBackend> TextureSlot<B> {
    pub fn new(loader: Box<dyn ImageLoader>, backend: B) -> Self {
        Self {
            loader,
            backend,
            current: None,
        }
    }

    pub fn load(&mut self, path: &Path) -> Result<&ActiveTexture<B::Handle>, TextureError> {
        if let Some(held) = &self.current {
            return Err(TextureError::SlotOccupied(held.path.clone()));
        }

        // decode fully before touching the GPU
        let image = self.loader.load(path)?;
        let size = image.size;
        let handle = self
            .backend
            .upload(&format!("image_{}", path.display()), image);
        log::debug!("Uploaded {} ({}x{})", path.display(), size[0], size[1]);

        Ok(&*self.current.insert(ActiveTexture {
            handle,
            size,
            path: path.to_path_buf(),
        }))
    }

    pub fn release(&mut self) {
        if let Some(texture) = self.current.take() {
            log::debug!("Releasing texture for {}", texture.path.display());
            self.backend.release(texture.handle);
        }
    }

    pub fn texture(&self) -> Option<&ActiveTexture<B::Handle>> {
        self.current.as_ref()
    }
}

impl<B: TextureBackend> Drop for TextureSlot<B> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts uploads and releases so tests can check nothing leaks.
    #[derive(Clone, Default)]
    pub struct CountingBackend {
        pub uploads: Rc<Cell<usize>>,
        pub releases: Rc<Cell<usize>>,
    }

    impl CountingBackend {
        pub fn live(&self) -> usize {
            self.uploads.get() - self.releases.get()
        }
    }

    impl TextureBackend for CountingBackend {
        type Handle = u64;

        fn upload(&mut self, _name: &str, _image: ColorImage) -> u64 {
            self.uploads.set(self.uploads.get() + 1);
            self.uploads.get() as u64
        }

        fn release(&mut self, _handle: u64) {
            self.releases.set(self.releases.get() + 1);
        }

        fn texture_id(handle: &u64) -> TextureId {
            TextureId::User(*handle)
        }
    }
}
