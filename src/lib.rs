// Chartbrief - Medical Note Summarization Service
// Library exports

// Core modules
pub mod config;
pub mod feedback;
pub mod notes;
pub mod providers;
pub mod server;
pub mod summarize;
