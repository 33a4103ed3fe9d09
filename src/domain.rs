pub mod forecast;
pub mod precip;
pub mod sky;
pub mod timeline;
pub mod view;
