/// Basic example: Convert a synthetic test image to ASCII art
///
/// Draws a bright circle on a gray background and prints it with the
/// default and reversed palettes
use ascii_gen::{ConvertConfig, DownscaleFactor, process_image};
use image::{Rgb, RgbImage};

fn main() {
    println!("ASCII Generator - Basic Example");
    println!("===============================\n");

    let width = 160;
    let height = 160;
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 50.0;

    let img = RgbImage::from_fn(width, height, |x, y| {
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        let dist = (dx * dx + dy * dy).sqrt();

        if dist < radius {
            Rgb([255, 255, 255])
        } else if (dist - radius).abs() < 5.0 {
            Rgb([0, 0, 0])
        } else {
            Rgb([100, 100, 100])
        }
    });

    println!("Created test image: {}x{}\n", width, height);

    let config = ConvertConfig {
        downscale: DownscaleFactor::new(4).expect("4 is a valid factor"),
        ..Default::default()
    };

    for reverse_palette in [false, true] {
        let config = ConvertConfig {
            reverse_palette,
            ..config.clone()
        };
        let art = process_image(&img, &config);
        println!("Reversed palette: {}", reverse_palette);
        println!("{}", art);
    }
}
