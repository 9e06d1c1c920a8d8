// Drawing capability the particle field renders through. The browser implementation
// lives in `renderer`; tests substitute a recorder.

use crate::color::Color;

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);

    /// Filled circle with a glow of `blur` pixels in the same color.
    fn fill_glow_circle(&mut self, center: [f64; 2], radius: f64, color: Color, blur: f64);

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, alpha: f64, width: f64);
}
