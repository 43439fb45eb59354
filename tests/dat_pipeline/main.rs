//! Integration tests for the `Tibia.dat` → sprite binding pipeline

mod end_to_end;
mod export;
mod fixtures;
