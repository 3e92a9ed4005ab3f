#[path = "../common/mod.rs"]
mod common;

mod scenery_tests;
mod screen_tests;
