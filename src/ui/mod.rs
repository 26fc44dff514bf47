//! User interface screens and components for the Wakaf chat front-end.

mod chat_input;   // Chat message input component
mod message;      // Message bubble + suggestion chips
mod particles;    // Decorative animated particle field
pub mod chat;     // Chat screen (public for routing)
pub mod landing;  // Landing screen (public for routing)
pub mod settings; // Settings screen (public for routing)
