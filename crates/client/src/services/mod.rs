pub mod chart_renderer;
pub mod normalizer;
