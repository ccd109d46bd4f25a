pub mod column_filter;
