//! Browser front end: one `GET /` page that scrapes on demand.

pub mod handlers;
pub mod render;
pub mod server;

pub use handlers::{AppState, ScrapeQuery};
pub use render::{render_page, PageData};
pub use server::{create_router, HttpServer};
