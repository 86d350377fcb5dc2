use super::color::Color;

/// Row-major HDR film buffer. Renderers write unbounded radiance here;
/// the tone mapping stage turns it into a display `Image` afterwards.
///
/// `texels` is public so renderers can hand out disjoint scanline chunks
/// to worker threads.
#[derive(Clone, Debug)]
pub struct RadianceMap {
    pub width: usize,
    pub height: usize,
    pub texels: Vec<Color>,
}

impl RadianceMap {

    pub fn new(width: usize, height: usize) -> Self {
        RadianceMap {
            width,
            height,
            texels: vec![Color::black(); width * height],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Color {
        self.texels[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        self.texels[y * self.width + x] = color;
    }

    pub fn is_finite(&self) -> bool {
        self.texels.iter().all(|texel| texel.is_finite())
    }
}
