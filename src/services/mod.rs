// Marcador services
// Services provide core functionality: parsing, serialization, the bookmark store, file access, chapter resolution.

pub mod bookmark_store;
pub mod file_handler;
pub mod html_parser;
pub mod html_serializer;
pub mod olympus_client;
