pub mod collaborators;
pub mod components;
pub mod controller;
pub mod layout;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::AdminPanelPage;
