// src/gui/components/mod.rs
pub mod data_table;
pub mod export_bar;
pub mod instructions;
pub mod notices;
pub mod run_bar;
pub mod upload_panel;
