pub mod bars;

pub use bars::render_bar_chart;
