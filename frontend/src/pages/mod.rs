pub mod admin_panel;

pub use admin_panel::AdminPanelPage;
