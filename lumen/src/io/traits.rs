use custom_error::custom_error;

use crate::geometry::models::Polygon;

custom_error! {pub MeshIOError
    FailedToLoad {description: String} = "Failed to load model: {description}",
    ParseError {description: String} = "Failed to parse model: {description}",
}

pub trait ModelLoader {

    fn load(&self, path: &str) -> Result<Box<dyn Model>, MeshIOError>;
}

pub trait Model {

    fn polygons(&self) -> &Vec<Polygon>;
}
