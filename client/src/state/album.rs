//! Photo album list, paging and lightbox navigation.

#[cfg(test)]
#[path = "album_test.rs"]
mod album_test;

use std::time::Duration;

/// Maximum photos kept in the album; older ones are dropped first.
pub const PHOTO_CAP: usize = 30;

/// Photos per gallery page.
pub const PAGE_SIZE: usize = 4;

/// Inactivity before the gallery starts paging by itself.
pub const AUTOPLAY_IDLE: Duration = Duration::from_millis(3000);

/// Time between automatic page turns.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(2500);

/// Keep only the newest [`PHOTO_CAP`] photos.
#[must_use]
pub fn cap_photos(mut photos: Vec<String>) -> Vec<String> {
    if photos.len() > PHOTO_CAP {
        photos.drain(..photos.len() - PHOTO_CAP);
    }
    photos
}

/// Shape check for a decoded list: entries must be data URLs; over-long
/// lists are trimmed to the newest photos.
#[must_use]
pub fn checked_photos(photos: Vec<String>) -> Option<Vec<String>> {
    photos
        .iter()
        .all(|p| p.starts_with("data:"))
        .then(|| cap_photos(photos))
}

/// Append a batch in upload order, most recent last.
#[must_use]
pub fn append_photos(existing: &[String], incoming: Vec<String>) -> Vec<String> {
    let mut next = existing.to_vec();
    next.extend(incoming);
    cap_photos(next)
}

#[must_use]
pub fn page_count(photo_count: usize) -> usize {
    photo_count.div_ceil(PAGE_SIZE)
}

/// Photos on page `index` (empty when out of range).
#[must_use]
pub fn page(photos: &[String], index: usize) -> &[String] {
    let start = (index * PAGE_SIZE).min(photos.len());
    let end = (start + PAGE_SIZE).min(photos.len());
    &photos[start..end]
}

/// Step forward with wrap-around over `len` positions.
#[must_use]
pub fn wrap_next(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Step backward with wrap-around over `len` positions.
#[must_use]
pub fn wrap_prev(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + len - 1) % len }
}

/// Keep the current page valid after the list shrinks.
#[must_use]
pub fn clamp_page(current: usize, photo_count: usize) -> usize {
    current.min(page_count(photo_count).saturating_sub(1))
}

/// Gallery view position: current page and the optional open photo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlbumView {
    pub page: usize,
    pub lightbox: Option<usize>,
}

impl AlbumView {
    /// Left arrow: previous photo while the lightbox is open, else previous page.
    #[must_use]
    pub fn back(self, photo_count: usize) -> Self {
        match self.lightbox {
            Some(i) => Self { lightbox: Some(wrap_prev(i, photo_count)), ..self },
            None => Self { page: wrap_prev(self.page, page_count(photo_count).max(1)), ..self },
        }
    }

    /// Right arrow: next photo while the lightbox is open, else next page.
    #[must_use]
    pub fn forward(self, photo_count: usize) -> Self {
        match self.lightbox {
            Some(i) => Self { lightbox: Some(wrap_next(i, photo_count)), ..self },
            None => Self { page: wrap_next(self.page, page_count(photo_count).max(1)), ..self },
        }
    }

    #[must_use]
    pub fn open(self, index: usize) -> Self {
        Self { lightbox: Some(index), ..self }
    }

    #[must_use]
    pub fn close(self) -> Self {
        Self { lightbox: None, ..self }
    }

    /// Autoplay tick: advance one page once the visitor has been idle for
    /// [`AUTOPLAY_IDLE`], unless a photo is open or there is only one page.
    #[must_use]
    pub fn autoplay(self, photo_count: usize, idle: Duration) -> Self {
        let pages = page_count(photo_count);
        if idle < AUTOPLAY_IDLE || self.lightbox.is_some() || pages <= 1 {
            return self;
        }
        Self { page: wrap_next(self.page, pages), ..self }
    }

    /// Re-validate after the photo list changed.
    #[must_use]
    pub fn clamp(self, photo_count: usize) -> Self {
        Self {
            page: clamp_page(self.page, photo_count),
            lightbox: self.lightbox.filter(|i| *i < photo_count),
        }
    }
}
