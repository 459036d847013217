pub mod archive_writer;
pub mod blocking_task;
pub mod icon_container;
pub mod image_codec;
