//! HTTP API handlers for reg-web

pub mod details;
pub mod health;
pub mod overviews;
pub mod ui;

pub use details::reg_details;
pub use health::health_routes;
pub use overviews::reg_overviews;
pub use ui::serve_index;
