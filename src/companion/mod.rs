//! Journal companion core: request classification, prompt templates, model
//! output post-processing and static fallbacks.

pub mod classify;
pub mod fallback;
pub mod hints;
pub mod prompts;
pub mod sanitize;
pub mod service;
pub mod verify;

pub use classify::{ Advisor, Branch, JournalEntry, Recipient };
pub use service::CompanionService;
