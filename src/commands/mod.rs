pub mod popup;
pub mod router;
pub mod task;
