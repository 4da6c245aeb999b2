//! Shared fixtures for unit tests.
use crate::discogs::{
    Artist, BasicInformation, CollectionPage, CollectionSource, DiscogsError, Pagination,
    PaginationUrls, Release,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Mutex;

pub fn release(id: u64) -> Release {
    let artist = format!("Artist {id}");
    release_titled(id, &format!("Album {id}"), &[artist.as_str()])
}

pub fn release_titled(id: u64, title: &str, artists: &[&str]) -> Release {
    Release {
        id,
        instance_id: id + 1000,
        folder_id: 1,
        rating: 0,
        basic_information: BasicInformation {
            id,
            title: title.to_string(),
            year: 1998,
            resource_url: format!("https://api.discogs.com/releases/{id}"),
            thumb: String::new(),
            cover_image: String::new(),
            formats: Vec::new(),
            labels: Vec::new(),
            artists: artists
                .iter()
                .enumerate()
                .map(|(i, name)| Artist {
                    id: id * 10 + i as u64,
                    name: name.to_string(),
                    anv: String::new(),
                    join: String::new(),
                    role: String::new(),
                    tracks: String::new(),
                    resource_url: format!("https://api.discogs.com/artists/{}", id * 10 + i as u64),
                })
                .collect(),
            genres: vec!["Electronic".to_string()],
            styles: Vec::new(),
        },
        notes: None,
    }
}

pub fn releases(ids: std::ops::RangeInclusive<u64>) -> Vec<Release> {
    ids.map(release).collect()
}

/// In-memory catalog serving stable pages over a fixed release list.
pub struct FakeCatalog {
    releases: Vec<Release>,
    /// Overrides the reported `items` count (for a catalog that lies).
    declared_items: Option<u64>,
    /// Overrides the reported `pages` count on every page after the first.
    later_pages: Option<u32>,
    fail_on_page: Option<(u32, u32)>,
    requests: Mutex<Vec<(u64, u32, u32)>>,
}

impl FakeCatalog {
    pub fn new(releases: Vec<Release>) -> Self {
        Self {
            releases,
            declared_items: None,
            later_pages: None,
            fail_on_page: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn declaring_items(mut self, items: u64) -> Self {
        self.declared_items = Some(items);
        self
    }

    pub fn reporting_later_pages(mut self, pages: u32) -> Self {
        self.later_pages = Some(pages);
        self
    }

    /// Fail with a 500 when `page` is requested with `per_page`.
    pub fn failing_on(mut self, page: u32, per_page: u32) -> Self {
        self.fail_on_page = Some((page, per_page));
        self
    }

    /// (folder_id, page, per_page) of every request, in order
    pub fn requests(&self) -> Vec<(u64, u32, u32)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requested_pages(&self, per_page: u32) -> Vec<u32> {
        self.requests()
            .into_iter()
            .filter(|(_, _, pp)| *pp == per_page)
            .map(|(_, page, _)| page)
            .collect()
    }
}

#[async_trait]
impl CollectionSource for FakeCatalog {
    async fn fetch_page(
        &self,
        folder_id: u64,
        page: u32,
        per_page: u32,
    ) -> Result<CollectionPage, DiscogsError> {
        self.requests
            .lock()
            .unwrap()
            .push((folder_id, page, per_page));

        if self.fail_on_page == Some((page, per_page)) {
            return Err(DiscogsError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                url: format!("fake://folders/{folder_id}/releases?page={page}"),
            });
        }

        let per = per_page.max(1) as usize;
        let total_pages = self.releases.len().div_ceil(per) as u32;
        let start = (page.saturating_sub(1) as usize * per).min(self.releases.len());
        let end = (start + per).min(self.releases.len());

        let pages = match self.later_pages {
            Some(pages) if page > 1 => pages,
            _ => total_pages,
        };

        Ok(CollectionPage {
            pagination: Pagination {
                per_page,
                pages,
                page,
                items: self
                    .declared_items
                    .unwrap_or(self.releases.len() as u64),
                urls: PaginationUrls::default(),
            },
            releases: self.releases[start..end].to_vec(),
        })
    }
}
