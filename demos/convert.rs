use stimcolor::models::{Hsv, Rgb};
use stimcolor::{Color, Space};

pub fn main() {
    let rgb = Rgb::new(0.89, -0.35, -0.28);

    // 0.945, 0.325, 0.36
    let rgb1 = rgb.to_rgb1();

    // 357, 0.6561, 0.945
    let hsv: Hsv = rgb1.to_hsv();

    // 241, 83, 92
    let rgb255 = rgb1.to_rgb255();

    dbg!(hsv, rgb255);

    let color = Color::from_model(hsv, 0.5);
    println!("hex = {:?}", color.hexa());
    println!("rgb1 = {:?}", color.convert(Space::Rgba1));
    println!("readable against it = {}", color.readable(stimcolor::DEFAULT_READABLE_CONTRAST));
}
