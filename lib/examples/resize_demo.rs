use ascii_gen::DownscaleFactor;
use ascii_gen::resize::downscaled_dimensions;

fn main() {
    println!("ASCII Generator - Downscale Demo");
    println!("================================\n");

    let test_cases = vec![
        (100, 100, "100x100"),
        (127, 85, "127x85"),
        (1920, 1080, "1920x1080 (Full HD)"),
        (9, 9, "9x9 (tiny)"),
    ];

    for (width, height, description) in test_cases {
        println!("Testing: {}", description);
        for value in [1, 5, 10] {
            let factor = DownscaleFactor::new(value).expect("factor in range");
            let (w, h) = downscaled_dimensions(width, height, factor);
            println!("  factor {:>2}: {} columns x {} lines", value, w, h);
        }
        println!();
    }

    for input in ["3", "0", "eleven"] {
        println!(
            "Input {:?} -> factor {}",
            input,
            DownscaleFactor::parse_or_default(input)
        );
    }

    println!("\nHeight is divided by twice the factor because text glyphs are");
    println!("about twice as tall as they are wide.");
}
