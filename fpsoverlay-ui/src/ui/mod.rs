pub mod overlay_view;
pub mod translucent;
