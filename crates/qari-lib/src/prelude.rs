pub use crate::chapters::{ChapterPagination, fetch_all_chapters};
pub use crate::date::{ARABIC_MONTHS, DateFormat};
pub use crate::error::{Error, Result};
pub use crate::extensions::Source;
pub use crate::http::{Headers, Request, Response, Transport, fetch_document, fetch_document_at};
pub use crate::models::*;
