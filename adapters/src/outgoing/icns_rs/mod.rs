pub mod icon_container_icns;
