pub mod gallery_store;
