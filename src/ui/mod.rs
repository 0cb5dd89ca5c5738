pub mod gantt_chart;
pub mod task_form;
pub mod theme;
pub mod toolbar;
