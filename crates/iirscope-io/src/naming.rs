//! Output file names for the filter sweep.

use iirscope_core::{BandType, FilterFamily};

/// File name for one filtered export.
///
/// `<family>-<band>-LC_<low>-HC_<high>-Order_<order>.csv`, with whole-number
/// edges written without a decimal point.
///
/// ```rust
/// use iirscope_core::{BandType, FilterFamily};
/// use iirscope_io::export_file_name;
///
/// let name = export_file_name(FilterFamily::ChebyshevI, BandType::Bandpass, 200.0, 300.0, 4);
/// assert_eq!(name, "chebychev1-bandpass-LC_200-HC_300-Order_4.csv");
/// ```
pub fn export_file_name(
    family: FilterFamily,
    band: BandType,
    low_hz: f64,
    high_hz: f64,
    order: usize,
) -> String {
    format!(
        "{}-{}-LC_{}-HC_{}-Order_{}.csv",
        family.file_stem(),
        band.name(),
        low_hz,
        high_hz,
        order
    )
}
