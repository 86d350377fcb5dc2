#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {

    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Pixel { red, green, blue }
    }

    pub const fn black() -> Self {
        Self::from_rgb(0, 0, 0)
    }
}
