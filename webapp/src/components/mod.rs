pub mod navigation;
pub mod notifications;
pub mod sidebar;
