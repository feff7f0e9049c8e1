mod common;
mod scoring;
mod stats;
