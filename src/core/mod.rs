pub mod converter;
pub mod decoder;
pub mod engine;
pub mod tables;
pub mod trie;
pub mod types;
