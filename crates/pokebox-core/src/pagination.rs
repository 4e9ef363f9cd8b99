// ── Pagination controller ──
//
// Page windows over a catalog of known, bounded size. Pages are 1-based.
// A page whose offset falls past the end yields no window at all, which
// callers render as an empty page without touching the network.

use serde::Serialize;

/// Default number of records per page.
pub const PAGE_SIZE: u32 = 10;

/// Known size of the remote catalog.
pub const CATALOG_SIZE: u32 = 874;

/// `limit`/`offset` pair for one catalog fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FetchWindow {
    pub limit: u32,
    pub offset: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    page: u32,
    page_size: u32,
    catalog_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::with_bounds(PAGE_SIZE, CATALOG_SIZE)
    }
}

impl Pagination {
    /// Start on page 1 with custom bounds. A zero page size is treated as 1.
    pub fn with_bounds(page_size: u32, catalog_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            catalog_size,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn catalog_size(&self) -> u32 {
        self.catalog_size
    }

    /// Number of pages that hold at least one record.
    pub fn page_count(&self) -> u32 {
        self.catalog_size.div_ceil(self.page_size)
    }

    /// Window for the current page.
    pub fn fetch_window(&self) -> Option<FetchWindow> {
        self.window_for(self.page)
    }

    /// Window for an arbitrary page, or `None` once the offset reaches the end.
    pub fn window_for(&self, page: u32) -> Option<FetchWindow> {
        let offset = u64::from(page.checked_sub(1)?) * u64::from(self.page_size);
        let offset = u32::try_from(offset).ok()?;
        if offset >= self.catalog_size {
            return None;
        }
        Some(FetchWindow {
            limit: self.page_size.min(self.catalog_size - offset),
            offset,
        })
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) * u64::from(self.page_size) < u64::from(self.catalog_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Advance one page. Returns `false` (page unchanged) at the last page.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Go back one page. Returns `false` (page unchanged) on page 1.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn step(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Next => self.next(),
            Direction::Previous => self.previous(),
        }
    }

    /// Jump to `page`. Page 0 is rejected; pages past the end are accepted
    /// and simply have no fetch window.
    pub fn go_to(&mut self, page: u32) -> bool {
        if page == 0 {
            return false;
        }
        self.page = page;
        true
    }
}
