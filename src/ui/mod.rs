pub mod controls;
pub mod icons;
pub mod styles;
pub mod task_filter;
