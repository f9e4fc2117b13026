pub mod correlation;
pub mod row_stats;


// 재수출
pub use correlation::{autocorrelation, Autocorrelator};
pub use row_stats::{row_energies, row_peak_magnitudes};
