pub mod column_filter;
pub mod components;
pub mod data_grid;
pub mod icons;
