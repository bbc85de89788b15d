pub mod chart;
pub mod mohr;
pub mod palette;
