//! Option merging and responsive breakpoint resolution.
//!
//! User settings are merged over defaults once at startup; the result is the
//! baseline and is never mutated afterwards. On every viewport-width check
//! the active config is recomputed as baseline plus at most one breakpoint's
//! overrides, so repeated checks with the same width are idempotent.

use crate::color::{hex_to_rgb, ColorSpec, Rgb};
use fnv::FnvHashMap;
use smallvec::SmallVec;

pub const DEFAULT_MAX_PARTICLES: usize = 100;
pub const DEFAULT_SIZE_VARIATIONS: f32 = 3.0;
pub const DEFAULT_SPEED: f32 = 0.5;
pub const DEFAULT_COLOR: Rgb = Rgb::new(0, 0, 0);
pub const DEFAULT_MIN_DISTANCE: f32 = 120.0;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("no selector specified in settings")]
    MissingSelector,
    #[error("malformed hex color {0:?}")]
    InvalidColor(String),
    #[error("color palette is empty")]
    EmptyPalette,
}

/// Color as it arrives from the host: hex string(s), not yet validated.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorSetting {
    Hex(String),
    HexList(Vec<String>),
}

/// Partial, user-facing settings. A present key always wins over the
/// default; an absent key keeps it. Breakpoint overrides reuse this type.
#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub selector: Option<String>,
    pub max_particles: Option<usize>,
    pub size_variations: Option<f32>,
    pub speed: Option<f32>,
    pub color: Option<ColorSetting>,
    pub min_distance: Option<f32>,
    pub connect_particles: Option<bool>,
    pub show_particles: Option<bool>,
    pub responsive: Vec<Breakpoint>,
}

/// One responsive entry: overrides applied while the viewport is at most
/// `width` wide (max-width semantics).
#[derive(Clone, Debug)]
pub struct Breakpoint {
    pub width: u32,
    pub settings: Settings,
}

/// Fully resolved option set consumed by the field and the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub selector: String,
    pub max_particles: usize,
    pub size_variations: f32,
    pub speed: f32,
    pub color: ColorSpec,
    pub min_distance: f32,
    pub connect_particles: bool,
    pub show_particles: bool,
}

impl Config {
    fn base(selector: String) -> Self {
        Self {
            selector,
            max_particles: DEFAULT_MAX_PARTICLES,
            size_variations: DEFAULT_SIZE_VARIATIONS,
            speed: DEFAULT_SPEED,
            color: ColorSpec::Single(DEFAULT_COLOR),
            min_distance: DEFAULT_MIN_DISTANCE,
            connect_particles: false,
            show_particles: true,
        }
    }

    fn apply(&mut self, ov: &Overrides) {
        if let Some(v) = ov.max_particles {
            self.max_particles = v;
        }
        if let Some(v) = ov.size_variations {
            self.size_variations = v;
        }
        if let Some(v) = ov.speed {
            self.speed = v;
        }
        if let Some(v) = &ov.color {
            self.color = v.clone();
        }
        if let Some(v) = ov.min_distance {
            self.min_distance = v;
        }
        if let Some(v) = ov.connect_particles {
            self.connect_particles = v;
        }
        if let Some(v) = ov.show_particles {
            self.show_particles = v;
        }
    }
}

/// Settings with colors already validated, ready to layer over a config.
/// `selector` and nested `responsive` entries carry no meaning inside an
/// override and are dropped here.
#[derive(Clone, Debug, Default)]
struct Overrides {
    max_particles: Option<usize>,
    size_variations: Option<f32>,
    speed: Option<f32>,
    color: Option<ColorSpec>,
    min_distance: Option<f32>,
    connect_particles: Option<bool>,
    show_particles: Option<bool>,
}

impl Overrides {
    fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let color = match &settings.color {
            Some(c) => Some(resolve_color(c)?),
            None => None,
        };
        Ok(Self {
            max_particles: settings.max_particles,
            size_variations: settings.size_variations,
            speed: settings.speed,
            color,
            min_distance: settings.min_distance,
            connect_particles: settings.connect_particles,
            show_particles: settings.show_particles,
        })
    }
}

fn resolve_color(setting: &ColorSetting) -> Result<ColorSpec, ConfigError> {
    match setting {
        ColorSetting::Hex(hex) => hex_to_rgb(hex)
            .map(ColorSpec::Single)
            .ok_or_else(|| ConfigError::InvalidColor(hex.clone())),
        ColorSetting::HexList(list) => {
            if list.is_empty() {
                return Err(ConfigError::EmptyPalette);
            }
            let mut colors = Vec::with_capacity(list.len());
            for hex in list {
                colors
                    .push(hex_to_rgb(hex).ok_or_else(|| ConfigError::InvalidColor(hex.clone()))?);
            }
            Ok(ColorSpec::Palette(colors))
        }
    }
}

/// Holds the baseline config, the breakpoint table and the currently active
/// config. Exactly one config is active at any time: the baseline, or the
/// baseline layered with one breakpoint's overrides.
#[derive(Debug)]
pub struct ConfigResolver {
    baseline: Config,
    active: Config,
    overrides: FnvHashMap<u32, Overrides>,
    /// Registered widths, kept sorted descending and consistent with the
    /// map keys.
    widths: SmallVec<[u32; 8]>,
    active_breakpoint: Option<u32>,
}

impl ConfigResolver {
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        let selector = settings
            .selector
            .clone()
            .ok_or(ConfigError::MissingSelector)?;
        let mut baseline = Config::base(selector);
        baseline.apply(&Overrides::from_settings(settings)?);
        let mut resolver = Self {
            active: baseline.clone(),
            baseline,
            overrides: FnvHashMap::default(),
            widths: SmallVec::new(),
            active_breakpoint: None,
        };
        resolver.register_breakpoints(&settings.responsive)?;
        Ok(resolver)
    }

    /// Register (or re-register) breakpoints. A later entry at the same
    /// width replaces the earlier one; the width list is re-sorted
    /// descending after every insertion.
    pub fn register_breakpoints(&mut self, list: &[Breakpoint]) -> Result<(), ConfigError> {
        for bp in list {
            let ov = Overrides::from_settings(&bp.settings)?;
            if self.overrides.insert(bp.width, ov).is_none() {
                self.widths.push(bp.width);
            }
            self.widths.sort_unstable_by(|a, b| b.cmp(a));
        }
        Ok(())
    }

    /// Pick the smallest registered width that is still >= the viewport
    /// width and make its overrides active; revert to baseline when none
    /// qualifies. Scanning the descending list with a running best match
    /// makes the smallest qualifying width win deterministically.
    pub fn check_responsive(&mut self, viewport_width: u32) -> &Config {
        let mut target = None;
        for &width in &self.widths {
            if viewport_width <= width {
                target = Some(width);
            }
        }

        match target {
            Some(width) => {
                let mut config = self.baseline.clone();
                if let Some(ov) = self.overrides.get(&width) {
                    config.apply(ov);
                }
                if self.active_breakpoint != Some(width) {
                    log::debug!("[config] breakpoint {width} active");
                }
                self.active = config;
                self.active_breakpoint = Some(width);
            }
            None => {
                if self.active_breakpoint.take().is_some() {
                    log::debug!("[config] reverting to baseline settings");
                    self.active = self.baseline.clone();
                }
            }
        }
        &self.active
    }

    pub fn active(&self) -> &Config {
        &self.active
    }

    pub fn baseline(&self) -> &Config {
        &self.baseline
    }

    pub fn active_breakpoint(&self) -> Option<u32> {
        self.active_breakpoint
    }

    /// Registered widths, sorted descending.
    pub fn registered_widths(&self) -> &[u32] {
        &self.widths
    }
}
