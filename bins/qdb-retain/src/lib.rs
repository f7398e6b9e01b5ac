//! Retention workflow for QuestDB tables: find expired partitions,
//! optionally snapshot them to .csv, optionally drop them.

pub mod cmd;
