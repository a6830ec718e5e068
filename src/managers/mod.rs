// Marcador state managers
// Managers sequence the stateful flows: load a bookmark file, search/extract, save back.

pub mod bookmark_manager;
