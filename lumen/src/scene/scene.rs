use lumen_core::models::color::Color;

use crate::geometry::kdtree::KdTree;
use crate::geometry::ray::{Ray, RAY_BIAS};
use crate::geometry::vector3::Vector3;
use crate::objects::{Primitive, Shape};
use crate::render::intersection::Intersection;
use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::shading::{fresnel_schlick, reflect, refract};

pub const DEFAULT_MAX_DEPTH: u32 = 5;

const DEFAULT_BACKGROUND: Color = Color::new(0.5, 0.7, 1.0);

/// The world: primitives, lights, camera and the spatial partition over the
/// primitives. Adding geometry marks the partition dirty; `build` is the
/// explicit step that makes the scene traceable, and everything is read-only
/// from then on, which is what lets render workers share it freely.
pub struct Scene {
    camera: Option<Camera>,
    objects: Vec<Primitive>,
    lights: Vec<Box<dyn Light + Sync + Send>>,
    background: Color,
    max_depth: u32,
    partition: Option<KdTree>,
}

impl Scene {

    pub fn new() -> Self {
        Self {
            camera: None,
            objects: Vec::new(),
            lights: Vec::new(),
            background: DEFAULT_BACKGROUND,
            max_depth: DEFAULT_MAX_DEPTH,
            partition: None,
        }
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = Some(camera);
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    pub fn add_object(&mut self, object: Primitive) {
        self.objects.push(object);
        self.partition = None;
    }

    pub fn objects(&self) -> &Vec<Primitive> {
        &self.objects
    }

    pub fn add_light(&mut self, light: Box<dyn Light + Sync + Send>) {
        self.lights.push(light);
    }

    pub fn lights(&self) -> &Vec<Box<dyn Light + Sync + Send>> {
        &self.lights
    }

    pub fn set_background(&mut self, background: Color) {
        self.background = background;
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_max_depth(&mut self, max_depth: u32) {
        self.max_depth = max_depth;
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// (Re)builds the spatial partition. Must be called after the last
    /// `add_object` and before the first ray; renderers refuse dirty scenes.
    pub fn build(&mut self) {
        self.partition = Some(KdTree::build(&self.objects));
    }

    pub fn is_built(&self) -> bool {
        self.objects.is_empty() || self.partition.is_some()
    }

    /// Nearest hit through the partition. An unbuilt or empty scene has
    /// nothing to hit.
    pub fn intersect(&self, ray: &Ray) -> Option<(usize, Intersection)> {
        self.partition.as_ref()?.intersect(&self.objects, ray)
    }

    /// Recursive Whitted evaluation of one ray. Depth is explicit state:
    /// crossing `max_depth` is a defined terminal case, not an error.
    pub fn spawn_ray(&self, ray: &Ray, depth: u32) -> Color {
        if depth > self.max_depth {
            return Color::black();
        }

        let (index, hit) = match self.intersect(ray) {
            Some(found) => found,
            None => return self.background,
        };

        let surface = self.objects[index].surface();
        let material = &*surface.material;

        let view_dir = -*ray.direction();
        let base_color = surface.base_color(hit.uv(), hit.point());

        let local = surface.illumination.illuminate(
            base_color,
            material,
            &hit,
            &view_dir,
            &self.lights,
            &|point, light| self.shadow_transmittance(point, light),
        );

        let transparency = material.transparency;
        let mut color = if transparency > 0.0 {
            // a transparent surface keeps its highlight at full strength but
            // hands most of its diffuse term over to transmission
            local.ambient_diffuse * (1.0 - transparency) + local.specular
        } else {
            local.total()
        };

        if material.reflectivity > 0.0 {
            let reflected_dir = reflect(ray.direction(), hit.normal());
            let reflected = self.spawn_ray(&Ray::new(*hit.point(), reflected_dir), depth + 1);
            color += reflected * material.reflectivity;
        }

        if transparency > 0.0 {
            color += self.transmission(ray, &hit, material.refractive_index, depth) * transparency;
        }

        color
    }

    /// Fresnel-weighted mix of the reflected and refracted contributions at
    /// a transparent surface. Total internal reflection sends the whole
    /// contribution along the reflected ray.
    fn transmission(&self, ray: &Ray, hit: &Intersection, refractive_index: f64, depth: u32) -> Color {
        let (n1, n2) = if hit.front_face() {
            (1.0, refractive_index)
        } else {
            (refractive_index, 1.0)
        };

        let reflected_dir = reflect(ray.direction(), hit.normal());
        let reflected = self.spawn_ray(&Ray::new(*hit.point(), reflected_dir), depth + 1);

        match refract(ray.direction(), hit.normal(), n1, n2) {
            Some(refracted_dir) => {
                let cos_i = -hit.normal().dot_product(ray.direction());
                let fresnel = fresnel_schlick(cos_i, n1, n2);
                let refracted = self.spawn_ray(&Ray::new(*hit.point(), refracted_dir), depth + 1);
                reflected * fresnel + refracted * (1.0 - fresnel)
            },
            None => reflected,
        }
    }

    /// Transmittance from a surface point toward a light: the product of
    /// occluder transparencies strictly between the point and the light.
    /// 0 is fully blocked, 1 fully clear; this is what makes shadows of
    /// glass objects soft instead of binary.
    pub fn shadow_transmittance(&self, point: &Vector3, light: &dyn Light) -> f64 {
        let direction = light.direction_from(point);

        let mut origin = *point;
        let mut remaining = light.distance_from(point);
        let mut transmittance = 1.0;

        loop {
            let shadow_ray = Ray::with_interval(origin, direction, RAY_BIAS, remaining);
            let (index, hit) = match self.intersect(&shadow_ray) {
                Some(found) => found,
                None => break,
            };

            transmittance *= self.objects[index].surface().material.transparency;
            if transmittance <= 0.0 {
                return 0.0;
            }

            // march on from just past this surface
            origin = *hit.point();
            if remaining.is_finite() {
                remaining -= hit.ray_distance();
                if remaining <= RAY_BIAS {
                    break;
                }
            }
        }

        transmittance
    }
}
