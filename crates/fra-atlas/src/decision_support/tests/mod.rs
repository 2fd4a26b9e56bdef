mod common;
mod engine;
mod presentation;
