//! Surface material for Phong shading with mirror reflection.

use glint_math::Color;

/// Surface response to light.
///
/// The ambient, diffuse and specular coefficients are conventionally in
/// `[0, 1]` but nothing enforces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base surface color
    pub color: Color,
    /// Scale applied to the scene's ambient light
    pub ambient: f64,
    /// Lambertian coefficient
    pub diffuse: f64,
    /// Phong highlight strength, 0 disables the highlight entirely
    pub specular: f64,
    /// Phong exponent, larger values give a tighter highlight
    pub shininess: f64,
    /// Mirror contribution in `[0, 1]` (0 = none, 1 = perfect mirror)
    pub reflectivity: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::splat(0.5),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.0,
            shininess: 1.0,
            reflectivity: 0.0,
        }
    }
}

impl Material {
    /// Purely diffuse material of the given color.
    pub fn matte(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Set the Phong highlight.
    pub fn with_specular(mut self, specular: f64, shininess: f64) -> Self {
        self.specular = specular;
        self.shininess = shininess;
        self
    }

    /// Set the mirror contribution.
    pub fn with_reflectivity(mut self, reflectivity: f64) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Set the ambient and diffuse coefficients.
    pub fn with_lighting(mut self, ambient: f64, diffuse: f64) -> Self {
        self.ambient = ambient;
        self.diffuse = diffuse;
        self
    }

    /// Near-white, almost fully reflective surface.
    pub fn mirror() -> Self {
        Self {
            color: Color::splat(0.9),
            ambient: 0.05,
            diffuse: 0.05,
            specular: 0.9,
            shininess: 128.0,
            reflectivity: 0.95,
        }
    }

    /// Slightly blue, strongly reflective surface.
    ///
    /// There is no refraction, so this only looks like glass.
    pub fn glass() -> Self {
        Self {
            color: Color::new(0.9, 0.9, 1.0),
            ambient: 0.05,
            diffuse: 0.1,
            specular: 0.8,
            shininess: 64.0,
            reflectivity: 0.8,
        }
    }
}
