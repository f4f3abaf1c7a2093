// Presentation layer - View snapshots for rendering hosts
pub mod view;
