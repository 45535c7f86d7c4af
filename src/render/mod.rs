pub mod downsample;
pub mod gauge;
pub mod heat;
pub mod line;
pub mod pie;
pub mod stream;
pub mod symbol;

pub use downsample::{downsample, sample_indices};
pub use gauge::gauge_plot;
pub use heat::{HeatCell, heat_cells, heat_map, heat_range};
pub use line::line_plot;
pub use pie::{apportion, pie_chart};
pub use stream::SymbolStream;
pub use symbol::value_to_symbol;
