pub mod a001_inventory;
pub mod a002_chat;
