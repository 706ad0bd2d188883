pub mod carousel;
pub mod export_buttons;
pub mod fullscreen_overlay;
pub mod header;
pub mod language_panel;
pub mod progress_bar;
pub mod upload_area;
