pub mod api_error;
pub mod normalization;
pub mod synthesize_request;
pub mod voice;
pub mod voice_settings;
