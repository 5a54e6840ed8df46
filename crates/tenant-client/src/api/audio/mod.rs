//! Audio recordings attached to traces

pub mod upload_audio;
