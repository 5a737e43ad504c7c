/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The loaded photo list, author search and selection (gallery.rs)

pub mod data;
pub mod gallery;
