// Web UI: search form, recommendation cards, recipe pages

pub mod handlers;
