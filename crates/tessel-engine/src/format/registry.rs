use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{GfxError, Result};

use super::blit::{BlitFn, generic_blit, mono_blit};
use super::{FormatId, Mono1Ideal, Mono1Vertical, PixelFormat};

/// Format descriptors plus the table of specialised block copies.
///
/// Registration happens at startup; afterwards the registry is only read,
/// which is why contexts share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct FormatRegistry {
    formats: HashMap<FormatId, &'static dyn PixelFormat>,
    blits: HashMap<(FormatId, FormatId), BlitFn>,
}

static GLOBAL: OnceLock<Arc<FormatRegistry>> = OnceLock::new();

impl FormatRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Both 1-bpp formats and their accelerated copies.
    pub fn with_builtin() -> Self {
        let mut reg = Self::new();
        reg.formats.insert(FormatId::MONO_IDEAL, &Mono1Ideal);
        reg.formats.insert(FormatId::MONO_VERTICAL, &Mono1Vertical);

        let ideal = FormatId::MONO_IDEAL;
        let vertical = FormatId::MONO_VERTICAL;
        reg.blits.insert((ideal, ideal), mono_blit::<Mono1Ideal, Mono1Ideal>);
        reg.blits.insert((vertical, vertical), mono_blit::<Mono1Vertical, Mono1Vertical>);
        reg.blits.insert((ideal, vertical), mono_blit::<Mono1Ideal, Mono1Vertical>);

        log::debug!("format registry seeded with {} built-in format(s)", reg.formats.len());
        reg
    }

    /// Process-wide registry holding the built-in formats.
    ///
    /// Callers that need custom formats build their own registry and hand it
    /// to their contexts instead.
    pub fn global() -> Arc<FormatRegistry> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::with_builtin())))
    }

    /// Adds a descriptor. Each id may be registered once.
    pub fn register(&mut self, format: &'static dyn PixelFormat) -> Result<()> {
        let id = format.id();
        if self.formats.contains_key(&id) {
            return Err(GfxError::DuplicateFormat(id));
        }
        self.formats.insert(id, format);
        log::debug!("registered pixel format {id}");
        Ok(())
    }

    /// Installs a specialised copy for `src → dst`, returning the one it replaces.
    pub fn register_blit(&mut self, src: FormatId, dst: FormatId, blit: BlitFn) -> Option<BlitFn> {
        log::debug!("registered blit {src} -> {dst}");
        self.blits.insert((src, dst), blit)
    }

    /// Resolves a descriptor.
    ///
    /// An unknown id is a configuration error; nothing can be drawn into a
    /// bitmap whose encoding is unknown.
    pub fn lookup(&self, id: FormatId) -> Result<&'static dyn PixelFormat> {
        self.formats.get(&id).copied().ok_or_else(|| {
            log::error!("pixel format {id} is not registered");
            GfxError::UnknownFormat(id)
        })
    }

    #[inline]
    pub fn contains(&self, id: FormatId) -> bool {
        self.formats.contains_key(&id)
    }

    /// Specialised copy for the pair, or [`generic_blit`].
    pub fn lookup_blit(&self, src: FormatId, dst: FormatId) -> BlitFn {
        self.blits.get(&(src, dst)).copied().unwrap_or(generic_blit)
    }

    /// True if the pair has a specialised copy.
    #[inline]
    pub fn has_blit(&self, src: FormatId, dst: FormatId) -> bool {
        self.blits.contains_key(&(src, dst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Bitmap;
    use crate::coords::{Color, Point};

    #[derive(Debug)]
    struct Gray8;

    impl PixelFormat for Gray8 {
        fn id(&self) -> FormatId {
            FormatId(9)
        }

        fn data_size(&self, width: i32, height: i32) -> usize {
            (width.max(0) * height.max(0)) as usize
        }

        fn get_pixel(&self, bitmap: &Bitmap, _palette: &[Color], x: i32, y: i32) -> Color {
            let v = bitmap.data()[(y * bitmap.width() + x) as usize];
            Color::rgb(v, v, v)
        }

        fn put_pixel(&self, bitmap: &mut Bitmap, _palette: &[Color], x: i32, y: i32, color: Color) {
            let w = bitmap.width();
            bitmap.data_mut()[(y * w + x) as usize] = color.red();
        }
    }

    static GRAY8: Gray8 = Gray8;

    #[test]
    fn builtin_formats_resolve() {
        let reg = FormatRegistry::with_builtin();
        assert_eq!(reg.lookup(FormatId::MONO_IDEAL).unwrap().id(), FormatId::MONO_IDEAL);
        assert_eq!(reg.lookup(FormatId::MONO_VERTICAL).unwrap().id(), FormatId::MONO_VERTICAL);
    }

    #[test]
    fn unknown_format_is_an_error() {
        let reg = FormatRegistry::new();
        assert!(matches!(
            reg.lookup(FormatId::MONO_IDEAL),
            Err(GfxError::UnknownFormat(FormatId::MONO_IDEAL))
        ));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut reg = FormatRegistry::with_builtin();
        assert!(matches!(reg.register(&Mono1Ideal), Err(GfxError::DuplicateFormat(_))));
        reg.register(&GRAY8).unwrap();
        assert!(reg.contains(FormatId(9)));
        assert!(reg.register(&GRAY8).is_err());
    }

    #[test]
    fn unlisted_pairs_fall_back_to_generic() {
        let reg = FormatRegistry::with_builtin();
        assert!(reg.has_blit(FormatId::MONO_IDEAL, FormatId::MONO_VERTICAL));
        assert!(!reg.has_blit(FormatId::MONO_VERTICAL, FormatId::MONO_IDEAL));
        assert!(!reg.has_blit(FormatId(9), FormatId::MONO_IDEAL));
    }

    #[test]
    fn custom_format_draws_lines_through_default_method() {
        let mut reg = FormatRegistry::new();
        reg.register(&GRAY8).unwrap();
        let mut bmp = Bitmap::new(&reg, FormatId(9), 4, 4).unwrap();
        let f = bmp.format();
        f.draw_line(&mut bmp, &[], Point::new(0, 0), Point::new(3, 3), Color::rgb(7, 7, 7));
        assert_eq!(bmp.data().iter().filter(|&&b| b == 7).count(), 4);
        assert_eq!(bmp.data()[5], 7);
    }

    #[test]
    fn global_registry_is_shared() {
        let a = FormatRegistry::global();
        let b = FormatRegistry::global();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(a.contains(FormatId::MONO_VERTICAL));
    }
}
