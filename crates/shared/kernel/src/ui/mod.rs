pub mod scroll_lock;
