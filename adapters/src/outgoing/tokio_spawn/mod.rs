pub mod blocking_conversion_tokio;
