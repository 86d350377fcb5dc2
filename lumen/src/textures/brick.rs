use lumen_core::models::color::Color;

use crate::geometry::vector3::Vector3;

use super::Texture;

/// Running-bond brick pattern with mortar joints, over the XY world
/// position of the hit point.
pub struct Brick {

    brick_color1: Color,
    brick_color2: Color,
    mortar_color: Color,
    brick_width: f64,
    brick_height: f64,
    mortar_thickness: f64,
}

impl Brick {

    pub fn default() -> Self {
        Brick {
            brick_color1: Color::new(0.6, 0.1, 0.1),
            brick_color2: Color::new(0.5, 0.05, 0.05),
            mortar_color: Color::new(0.85, 0.85, 0.85),
            brick_width: 1.0,
            brick_height: 0.5,
            mortar_thickness: 0.05,
        }
    }
}

impl Texture for Brick {

    fn color_at(&self, _uv: (f64, f64), point: &Vector3) -> Color {
        let u = point.x;
        let v = point.y;

        let row = (v / self.brick_height).floor() as i64;
        // odd rows are offset by half a brick
        let row_shift = if row.rem_euclid(2) == 1 {
            self.brick_width / 2.0
        } else {
            0.0
        };

        let column = ((u + row_shift) / self.brick_width).floor() as i64;

        let u_mod = (u + row_shift).rem_euclid(self.brick_width);
        let v_mod = v.rem_euclid(self.brick_height);

        if u_mod < self.mortar_thickness || v_mod < self.mortar_thickness {
            return self.mortar_color;
        }

        if (row + column).rem_euclid(2) == 0 {
            self.brick_color1
        } else {
            self.brick_color2
        }
    }
}
