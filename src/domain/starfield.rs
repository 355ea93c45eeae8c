use crate::domain::navigation::MOBILE_BREAKPOINT_PX;
use crate::domain::random::RandomSource;

pub const FIELD_OF_VIEW_DEG: f64 = 75.0;
pub const NEAR_PLANE: f64 = 0.1;
pub const FAR_PLANE: f64 = 1000.0;
pub const FALLBACK_DOT_COUNT: usize = 100;

/// Rendering tier chosen from viewport width and navigator capability hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceProfile {
    Desktop,
    Mobile,
    /// Static CSS dots instead of an animated field.
    LowPower,
}

/// What the browser told us about itself. Missing hints default to 4 GB / 4 cores.
#[derive(Debug, Clone, Default)]
pub struct DeviceHints {
    pub viewport_width: f64,
    pub user_agent: String,
    pub device_memory_gb: Option<f64>,
    pub hardware_concurrency: Option<f64>,
    pub canvas_supported: bool,
}

const MOBILE_AGENTS: [&str; 8] =
    ["android", "webos", "iphone", "ipad", "ipod", "blackberry", "iemobile", "opera mini"];

impl DeviceHints {
    pub fn is_mobile_agent(&self) -> bool {
        let agent = self.user_agent.to_ascii_lowercase();
        MOBILE_AGENTS.iter().any(|needle| agent.contains(needle))
    }

    pub fn is_low_performance(&self) -> bool {
        let memory = self.device_memory_gb.unwrap_or(4.0);
        let cores = self.hardware_concurrency.unwrap_or(4.0);
        self.is_mobile_agent() && (memory <= 2.0 || cores <= 2.0)
    }

    pub fn profile(&self) -> DeviceProfile {
        if !self.canvas_supported || self.is_low_performance() {
            DeviceProfile::LowPower
        } else if self.viewport_width <= MOBILE_BREAKPOINT_PX {
            DeviceProfile::Mobile
        } else {
            DeviceProfile::Desktop
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarfieldSettings {
    pub star_count: usize,
    /// Edge length of the cube the stars are scattered in.
    pub spread: f64,
    pub rotation_per_frame: f64,
    pub camera_z: f64,
    pub point_size: f64,
    pub opacity: f64,
}

impl StarfieldSettings {
    pub fn for_profile(profile: DeviceProfile) -> Option<Self> {
        match profile {
            DeviceProfile::Desktop => Some(Self {
                star_count: 10_000,
                spread: 2000.0,
                rotation_per_frame: 0.0005,
                camera_z: 100.0,
                point_size: 1.2,
                opacity: 0.8,
            }),
            DeviceProfile::Mobile => Some(Self {
                star_count: 2000,
                spread: 1000.0,
                rotation_per_frame: 0.0002,
                camera_z: 50.0,
                point_size: 1.0,
                opacity: 0.6,
            }),
            DeviceProfile::LowPower => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

pub fn generate_stars(settings: &StarfieldSettings, rng: &mut dyn RandomSource) -> Vec<Star> {
    (0..settings.star_count)
        .map(|_| Star {
            x: rng.centered(settings.spread),
            y: rng.centered(settings.spread),
            z: rng.centered(settings.spread),
        })
        .collect()
}

/// A star mapped onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedStar {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Perspective camera on the z axis looking towards -z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub z: f64,
    pub width: f64,
    pub height: f64,
    focal: f64,
}

impl Camera {
    pub fn new(z: f64, width: f64, height: f64) -> Self {
        let focal = 1.0 / (FIELD_OF_VIEW_DEG.to_radians() / 2.0).tan();
        Self { z, width, height, focal }
    }

    fn aspect(&self) -> f64 {
        if self.height > 0.0 { self.width / self.height } else { 1.0 }
    }

    /// Apply the field rotation (y first, then x) and project. `None` when clipped.
    pub fn project(&self, star: &Star, rotation: f64, point_size: f64) -> Option<ProjectedStar> {
        let (sin, cos) = rotation.sin_cos();

        let x1 = star.x * cos + star.z * sin;
        let z1 = -star.x * sin + star.z * cos;
        let y2 = star.y * cos - z1 * sin;
        let z2 = star.y * sin + z1 * cos;

        let depth = self.z - z2;
        if depth <= NEAR_PLANE || depth >= FAR_PLANE {
            return None;
        }

        let ndc_x = x1 * self.focal / self.aspect() / depth;
        let ndc_y = y2 * self.focal / depth;
        if ndc_x.abs() > 1.0 || ndc_y.abs() > 1.0 {
            return None;
        }

        Some(ProjectedStar {
            x: (ndc_x + 1.0) * 0.5 * self.width,
            y: (1.0 - ndc_y) * 0.5 * self.height,
            size: point_size * self.height * 0.5 / depth,
        })
    }
}

/// Owns the star positions and the accumulated rotation angle.
#[derive(Debug, Clone)]
pub struct Starfield {
    settings: StarfieldSettings,
    stars: Vec<Star>,
    rotation: f64,
}

impl Starfield {
    pub fn new(settings: StarfieldSettings, rng: &mut dyn RandomSource) -> Self {
        let stars = generate_stars(&settings, rng);
        Self { settings, stars, rotation: 0.0 }
    }

    pub fn settings(&self) -> &StarfieldSettings {
        &self.settings
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn advance(&mut self) {
        self.rotation += self.settings.rotation_per_frame;
    }

    /// Visible stars for the next frame.
    pub fn frame(&self, width: f64, height: f64) -> Vec<ProjectedStar> {
        let camera = Camera::new(self.settings.camera_z, width, height);
        self.stars
            .iter()
            .filter_map(|star| camera.project(star, self.rotation, self.settings.point_size))
            .collect()
    }
}

/// One static dot of the low-power fallback, in percent/px units for inline styles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackDot {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub opacity: f64,
}

impl FallbackDot {
    pub fn inline_style(&self) -> String {
        format!(
            "position:absolute;width:{size}px;height:{size}px;background:white;border-radius:50%;left:{}%;top:{}%;opacity:{}",
            self.left_pct,
            self.top_pct,
            self.opacity,
            size = self.size_px
        )
    }
}

pub fn fallback_dots(count: usize, rng: &mut dyn RandomSource) -> Vec<FallbackDot> {
    (0..count)
        .map(|_| FallbackDot {
            size_px: rng.next_f64() * 2.0,
            left_pct: rng.next_f64() * 100.0,
            top_pct: rng.next_f64() * 100.0,
            opacity: rng.next_f64() * 0.5 + 0.3,
        })
        .collect()
}
