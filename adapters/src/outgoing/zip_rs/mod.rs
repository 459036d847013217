pub mod archive_writer_zip;
