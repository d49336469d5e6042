use argh::FromArgs;
use std::path::PathBuf;
use std::time::Instant;

use bitmorph::imgproc::morphology;
use bitmorph::io::png as P;

#[derive(FromArgs)]
/// Shrink the foreground of a 1-bit PNG image with isotropic erosion
struct Args {
    /// path to an input 1-bit png image
    #[argh(positional)]
    image_path: PathBuf,

    /// number of erosion steps (default: 1)
    #[argh(option, short = 'n', default = "1")]
    steps: usize,

    /// path to the output image (default: out.png)
    #[argh(option, short = 'o', default = "PathBuf::from(\"out.png\")")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // read the image with foreground as set bits
    let mut image = P::read_image_png_mono1(&args.image_path)?;
    log::info!(
        "read {} with {} foreground pixels",
        image.size(),
        image.count_foreground()
    );

    let start = Instant::now();
    morphology::erode_isotropic(&mut image, args.steps);
    let elapsed = start.elapsed();

    println!(
        "Code executed in {:.3} milliseconds.",
        elapsed.as_secs_f64() * 1000.0
    );
    log::info!("{} foreground pixels left", image.count_foreground());

    P::write_image_png_mono1(&args.output, &image)?;

    Ok(())
}
