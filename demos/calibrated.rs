use stimcolor::{AdvancedColor, CalibrationMatrix, Space, DEFAULT_DKL_MATRIX};

fn main() {
    tracing_subscriber::fmt().init();

    // Without a calibration the default matrix is used, with a warning.
    let generic = AdvancedColor::new((0.0, 90.0, 1.0), Space::Dkl, None);
    println!("generic rgb = {:?}", generic.rgb());

    let calibration = CalibrationMatrix::from_rows(DEFAULT_DKL_MATRIX);
    let mut color = AdvancedColor::new((0.0, 90.0, 1.0), Space::Dkl, calibration);
    println!("dkl = {:?}", color.dkl());
    println!("dkl cartesian = {:?}", color.dkl_cart());

    // Setting RGB drops the DKL value, which can not be derived again.
    color.set_rgb((0.1, 0.2, 0.3));
    println!("dkl after rgb = {:?}", color.dkl());
    println!("lms = {:?}", color.lms());
}
