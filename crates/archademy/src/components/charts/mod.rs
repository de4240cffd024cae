pub mod step_chart;
