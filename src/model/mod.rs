// src/model/mod.rs
//! Domain model for start.me page documents and extracted records.

pub mod page;
pub mod record;
pub mod widget;

pub use page::{Column, Page, PageDocument};
pub use record::Record;
pub use widget::{
    FeedItem, Folder, LinkItem, NoteItem, NotesItems, RssListItems, UrlListItems, Widget,
    WidgetType,
};
