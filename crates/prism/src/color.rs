use image::Rgb;

pub type Color = Rgb<f32>;

pub const WHITE: Color = Rgb([1.0, 1.0, 1.0]);
pub const BLACK: Color = Rgb([0.0, 0.0, 0.0]);

pub fn gray(c: f32) -> Color {
    Rgb([c, c, c])
}

pub fn is_finite(color: Color) -> bool {
    color.0.iter().all(|c| c.is_finite())
}
