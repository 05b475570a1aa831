pub mod a002_chat;
