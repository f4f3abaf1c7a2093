// Application layer - Use cases and data-access seams
pub mod chart_service;
pub mod data_repository;
pub mod options;
