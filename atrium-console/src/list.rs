//! Searchable, pageable list state
//!
//! Every admin list screen does the same three things: hold the rows the
//! last fetch returned, run a case-insensitive substring filter over
//! them, and page the filtered rows. `ListState` is that screen state,
//! headless.

use crate::paging::Pager;
use atrium_client::{
    Activity, Announcement, Article, FormDoc, Knowledge, Link, Message, PageVisit, PopupImage,
    Regulation, SecurityPost, Section, Training, User, UserSocket, Visit,
};

/// Row that the search box can match against
pub trait Searchable {
    /// Text the filter runs over, usually the row's title
    fn search_text(&self) -> &str;
}

pub struct ListState<T> {
    items: Vec<T>,
    query: String,
    pub pager: Pager,
}

impl<T: Searchable> ListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            query: String::new(),
            pager: Pager::new(page_size),
        }
    }

    /// Replace the backing rows, keeping the current filter
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.sync_pager();
    }

    /// All rows from the last fetch, unfiltered
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Change the filter; the view snaps back to page 1
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.pager.jump(1);
        self.sync_pager();
    }

    /// Rows matching the filter, in fetch order
    pub fn filtered(&self) -> Vec<&T> {
        if self.query.is_empty() {
            return self.items.iter().collect();
        }
        let needle = self.query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.search_text().to_lowercase().contains(&needle))
            .collect()
    }

    /// Rows visible on the current page
    pub fn visible(&self) -> Vec<&T> {
        let filtered = self.filtered();
        self.pager.window(&filtered).to_vec()
    }

    /// An active filter matched nothing
    pub fn no_results(&self) -> bool {
        !self.query.is_empty() && self.filtered().is_empty()
    }

    fn sync_pager(&mut self) {
        let count = self.filtered().len();
        self.pager.set_total_items(count);
    }
}

impl Searchable for Announcement {
    fn search_text(&self) -> &str {
        &self.title
    }
}

impl Searchable for Activity {
    fn search_text(&self) -> &str {
        &self.title
    }
}

impl Searchable for Article {
    fn search_text(&self) -> &str {
        &self.title
    }
}

impl Searchable for Knowledge {
    fn search_text(&self) -> &str {
        &self.title
    }
}

impl Searchable for SecurityPost {
    fn search_text(&self) -> &str {
        &self.title
    }
}

impl Searchable for Section {
    fn search_text(&self) -> &str {
        &self.title
    }
}

impl Searchable for Link {
    fn search_text(&self) -> &str {
        &self.label
    }
}

impl Searchable for FormDoc {
    fn search_text(&self) -> &str {
        &self.title
    }
}

impl Searchable for Regulation {
    fn search_text(&self) -> &str {
        &self.title
    }
}

impl Searchable for Training {
    fn search_text(&self) -> &str {
        &self.title
    }
}

impl Searchable for User {
    fn search_text(&self) -> &str {
        &self.username
    }
}

impl Searchable for Visit {
    fn search_text(&self) -> &str {
        &self.username
    }
}

impl Searchable for PageVisit {
    fn search_text(&self) -> &str {
        &self.page
    }
}

impl Searchable for UserSocket {
    fn search_text(&self) -> &str {
        &self.username
    }
}

impl Searchable for Message {
    fn search_text(&self) -> &str {
        &self.sender
    }
}

impl Searchable for PopupImage {
    fn search_text(&self) -> &str {
        &self.path
    }
}
