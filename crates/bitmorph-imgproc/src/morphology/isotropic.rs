use bitmorph_image::BitImage;

use super::{erode_with_border, BorderMode, Connectivity, StructuringElement};

// An 8-connected step moves the front diagonally by sqrt(2), credited here
// as 2 against the step index.
const DIAGONAL_STEP: f64 = 2.0;

/// The sequence of erosions approximating a circular shrink of `steps` pixels.
///
/// A pure 4-connected sequence shrinks shapes into diamonds and a pure
/// 8-connected one into squares. The schedule greedily picks an 8-connected
/// step whenever that keeps the accumulated diagonal distance closer to the
/// step index than a 4-connected step would.
///
/// # Examples
///
/// ```
/// use bitmorph_imgproc::morphology::{isotropic_schedule, Connectivity::{Eight, Four}};
///
/// assert_eq!(
///     isotropic_schedule(7),
///     vec![Four, Four, Eight, Four, Eight, Four, Eight]
/// );
/// ```
pub fn isotropic_schedule(steps: usize) -> Vec<Connectivity> {
    let mut diagonal_dist = 0.0f64;

    (0..steps)
        .map(|i| {
            let i = i as f64;
            if (diagonal_dist + DIAGONAL_STEP - i).abs() < (diagonal_dist - i).abs() {
                diagonal_dist += DIAGONAL_STEP;
                Connectivity::Eight
            } else {
                Connectivity::Four
            }
        })
        .collect()
}

/// Erode a binary image `steps` times, alternating 4- and 8-connected
/// erosions to approximate uniform shrinkage.
///
/// The first and last rows are left unchanged. Zero steps leave the image
/// untouched.
pub fn erode_isotropic(image: &mut BitImage, steps: usize) {
    erode_isotropic_with_border(image, steps, BorderMode::default());
}

/// Isotropic erosion with a border mode, see [`erode_isotropic`].
pub fn erode_isotropic_with_border(image: &mut BitImage, steps: usize, border: BorderMode) {
    for (i, connectivity) in isotropic_schedule(steps).into_iter().enumerate() {
        log::debug!("isotropic erosion step {}/{}: {}", i + 1, steps, connectivity);
        erode_with_border(image, &StructuringElement::from(connectivity), border);
    }
}
