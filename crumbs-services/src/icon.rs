// SPDX-License-Identifier: LGPL-3.0-only
//! Icon handles and the provider-owned icon cache.
//!
//! Icons are cheap shared handles: either a named identifier resolved by
//! the host's icon theme, or a small RGBA raster produced here (the stand-in
//! for a platform icon registry). The cache is keyed by identifier string
//! and unbounded by design; the icon set is small and finite.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use image::{imageops, Rgba, RgbaImage};

/// Edge length in pixels of generated semi-transparent icon variants.
pub const TRANSP_ICON_SIZE: u32 = 40;

/// Edge length of the built-in raster tiles.
const BUILTIN_ICON_SIZE: u32 = 16;

/// What an [Icon] handle refers to.
#[derive(Clone, Debug)]
pub enum IconKind {
    /// An identifier resolved by the host's icon theme.
    Named(String),
    /// An RGBA raster.
    Image {
        /// Raw RGBA pixel data, row-major.
        data: Arc<Vec<u8>>,
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },
}

/// A shared icon handle.
///
/// Clones share the same underlying allocation, so cache hits can be
/// verified with [Icon::same_handle].
#[derive(Clone, Debug)]
pub struct Icon(Arc<IconKind>);

impl Icon {
    /// Create a named icon handle.
    pub fn named(id: impl Into<String>) -> Self {
        Self(Arc::new(IconKind::Named(id.into())))
    }

    /// Create an icon handle from an RGBA raster.
    pub fn image(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self(Arc::new(IconKind::Image {
            data: Arc::new(image.into_raw()),
            width,
            height,
        }))
    }

    /// What the handle refers to.
    pub fn kind(&self) -> &IconKind {
        &self.0
    }

    /// Whether two handles share the same allocation.
    pub fn same_handle(a: &Icon, b: &Icon) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// The raster behind the handle, rendering named icons through the
    /// built-in tile set.
    pub fn to_image(&self) -> RgbaImage {
        match self.kind() {
            IconKind::Named(id) => builtin_pixmap(id),
            IconKind::Image {
                data,
                width,
                height,
            } => RgbaImage::from_raw(*width, *height, data.as_ref().clone())
                .unwrap_or_else(|| RgbaImage::new(1, 1)),
        }
    }

    /// A 50 %-opacity variant composited over a transparent canvas of
    /// [TRANSP_ICON_SIZE], used for hidden filesystem entries.
    pub fn translucent(&self) -> Icon {
        let mut faded = self.to_image();
        for Rgba(px) in faded.pixels_mut() {
            px[3] /= 2;
        }
        let mut canvas = RgbaImage::from_pixel(
            TRANSP_ICON_SIZE,
            TRANSP_ICON_SIZE,
            Rgba([0, 0, 0, 0]),
        );
        imageops::overlay(&mut canvas, &faded, 0, 0);
        Icon::image(canvas)
    }
}

/// Raster tile for a built-in icon identifier.
///
/// Stands in for the platform icon registry; real lookups live behind the
/// host boundary.
pub fn builtin_pixmap(id: &str) -> RgbaImage {
    let color = match id {
        "folder" => Rgba([222, 178, 94, 255]),
        "file" => Rgba([200, 200, 200, 255]),
        "drive" => Rgba([120, 144, 178, 255]),
        _ => Rgba([160, 160, 160, 255]),
    };
    RgbaImage::from_pixel(BUILTIN_ICON_SIZE, BUILTIN_ICON_SIZE, color)
}

/// In-memory icon cache keyed by identifier string.
#[derive(Debug)]
pub struct IconCache {
    cache: Mutex<HashMap<String, Icon>>,
}

impl IconCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Look up `id`, computing and storing the icon on a miss.
    pub fn get_or_insert_with(&self, id: &str, load: impl FnOnce() -> Icon) -> Icon {
        let mut cache = self.cache.lock().unwrap();
        cache.entry(id.to_string()).or_insert_with(load).clone()
    }

    /// Whether an identifier is cached.
    pub fn contains(&self, id: &str) -> bool {
        self.cache.lock().unwrap().contains_key(id)
    }

    /// Number of cached icons.
    pub fn len(&self) -> usize {
        self.cache.lock().unwrap().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.lock().unwrap().is_empty()
    }
}

impl Default for IconCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_identifiers_share_one_handle() {
        let cache = IconCache::new();
        let a = cache.get_or_insert_with("folder", || Icon::named("folder"));
        let b = cache.get_or_insert_with("folder", || Icon::named("folder"));
        assert!(Icon::same_handle(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_is_debug_printable() {
        let cache = IconCache::new();
        cache.get_or_insert_with("folder", || Icon::named("folder"));
        assert!(format!("{cache:?}").contains("folder"));
    }

    #[test]
    fn test_translucent_halves_alpha_on_fixed_canvas() {
        let icon = Icon::image(RgbaImage::from_pixel(16, 16, Rgba([10, 20, 30, 255])));
        let faded = icon.translucent();
        match faded.kind() {
            IconKind::Image {
                data,
                width,
                height,
            } => {
                assert_eq!((*width, *height), (TRANSP_ICON_SIZE, TRANSP_ICON_SIZE));
                let img =
                    RgbaImage::from_raw(*width, *height, data.as_ref().clone()).unwrap();
                assert_eq!(img.get_pixel(0, 0)[3], 127);
                // Outside the source tile the canvas stays transparent.
                assert_eq!(img.get_pixel(20, 20)[3], 0);
            }
            IconKind::Named(_) => panic!("expected raster icon"),
        }
    }
}
