//! Output group naming.

use fanal_core::{Result, SpatialDef};

/// `fwhm` with the decimal point dropped: `0.5 -> "05"`, `1.0 -> "10"`.
///
/// The number is rendered the way Python's `str(float)` does, so names match
/// the ones written by existing productions: plain notation with at least
/// one decimal for `1e-4 <= |fwhm| < 1e16`, otherwise scientific notation
/// with a signed two-digit exponent (`1e-05`).
fn fwhm_tag(fwhm: f64) -> String {
    let magnitude = fwhm.abs();
    let rendered = if magnitude != 0.0 && !(1.0e-4..1.0e16).contains(&magnitude) {
        let scientific = format!("{fwhm:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => scientific,
        }
    } else {
        let plain = format!("{fwhm}");
        if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        }
    };
    rendered.replace('.', "")
}

/// Name of the group holding the analysis results of a configuration.
///
/// ```
/// use fanal_ana::get_ana_group_name;
/// use fanal_core::SpatialDef;
///
/// assert_eq!(get_ana_group_name(0.5, SpatialDef::Low), "/FANALIC/ANA_05fmhm_lowDef");
/// ```
#[must_use]
pub fn get_ana_group_name(fwhm: f64, spatial_def: SpatialDef) -> String {
    format!("/FANALIC/ANA_{}fmhm_{}Def", fwhm_tag(fwhm), spatial_def)
}

/// Like [`get_ana_group_name`], with the spatial definition given by name.
///
/// # Errors
/// Returns [`fanal_core::Error::UnknownSpatialDef`] for names other than
/// `low` and `high`.
pub fn get_ana_group_name_str(fwhm: f64, spatial_def: &str) -> Result<String> {
    Ok(get_ana_group_name(fwhm, spatial_def.parse()?))
}

/// Name of the group holding the reconstructed voxels of a configuration.
#[must_use]
pub fn get_reco_group_name(fwhm: f64, spatial_def: SpatialDef) -> String {
    format!("/FANALIC/RECO_{}fmhm_{}Def", fwhm_tag(fwhm), spatial_def)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanal_core::Error;

    #[test]
    fn test_ana_group_name() {
        assert_eq!(
            get_ana_group_name(0.5, SpatialDef::Low),
            "/FANALIC/ANA_05fmhm_lowDef"
        );
        assert_eq!(
            get_ana_group_name(0.7, SpatialDef::High),
            "/FANALIC/ANA_07fmhm_highDef"
        );
        assert_eq!(
            get_ana_group_name(1.0, SpatialDef::High),
            "/FANALIC/ANA_10fmhm_highDef"
        );
    }

    #[test]
    fn test_fwhm_tag_follows_python_float_rendering() {
        assert_eq!(fwhm_tag(0.5), "05");
        assert_eq!(fwhm_tag(2.0), "20");
        assert_eq!(fwhm_tag(0.0), "00");
        assert_eq!(fwhm_tag(0.0001), "00001");
        assert_eq!(fwhm_tag(1.0e-5), "1e-05");
        assert_eq!(fwhm_tag(2.5e-7), "25e-07");
        assert_eq!(fwhm_tag(1.0e16), "1e+16");
        assert_eq!(fwhm_tag(1.0e15), "10000000000000000");
        assert_eq!(
            get_ana_group_name(1.0e-5, SpatialDef::Low),
            "/FANALIC/ANA_1e-05fmhm_lowDef"
        );
    }

    #[test]
    fn test_reco_group_name() {
        assert_eq!(
            get_reco_group_name(0.5, SpatialDef::High),
            "/FANALIC/RECO_05fmhm_highDef"
        );
    }

    #[test]
    fn test_unknown_spatial_def_name() {
        assert_eq!(
            get_ana_group_name_str(0.5, "low").unwrap(),
            "/FANALIC/ANA_05fmhm_lowDef"
        );
        assert_eq!(
            get_ana_group_name_str(0.5, "does_not_exist"),
            Err(Error::UnknownSpatialDef("does_not_exist".to_string()))
        );
    }
}
