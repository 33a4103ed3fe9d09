//! Ambient sky classification from WMO weather codes.

/// Named WMO code ranges, so the classification ladders read as conditions
/// rather than magic numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeClass {
    ClearSky,
    CloudCover,
    Fog,
    Drizzle,
    Snow,
    Thunderstorm,
    Unknown,
}

#[must_use]
pub fn code_class(code: u8) -> CodeClass {
    match code {
        0 => CodeClass::ClearSky,
        1..=3 => CodeClass::CloudCover,
        45 | 48 => CodeClass::Fog,
        51..=67 | 80..=82 => CodeClass::Drizzle,
        71..=77 => CodeClass::Snow,
        95.. => CodeClass::Thunderstorm,
        _ => CodeClass::Unknown,
    }
}

/// The 4-state ambient mood driving background presentation. Coarser than
/// [`IconClass`] on purpose: backgrounds do not distinguish fog from cloud
/// or snow from overcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Night,
    Clear,
    Cloudy,
    Rain,
}

impl Mood {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Night => "night",
            Mood::Clear => "clear",
            Mood::Cloudy => "cloudy",
            Mood::Rain => "rain",
        }
    }
}

/// Local hours treated as night for ambient presentation.
#[must_use]
pub fn is_night_hour(hour: u32) -> bool {
    !(6..20).contains(&hour)
}

/// Map conditions to a mood. Total over its domain and order-sensitive:
/// darkness wins over everything, measured precipitation wins over coded
/// conditions, and only then does the weather code refine clear vs cloudy.
#[must_use]
pub fn classify(code: u8, daily_precipitation_mm: f32, local_hour: u32) -> Mood {
    if is_night_hour(local_hour) {
        return Mood::Night;
    }
    if daily_precipitation_mm > 0.0 {
        return Mood::Rain;
    }

    match code_class(code) {
        CodeClass::ClearSky | CodeClass::Unknown => Mood::Clear,
        CodeClass::CloudCover | CodeClass::Fog | CodeClass::Snow => Mood::Cloudy,
        CodeClass::Drizzle | CodeClass::Thunderstorm => Mood::Rain,
    }
}

/// Icon granularity for the hourly strip and day cards. Finer than [`Mood`]
/// (fog, snow and storm keep their own glyphs); the two ladders must stay
/// separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconClass {
    Clear,
    PartlyCloudy,
    Fog,
    Rain,
    Snow,
    Storm,
}

#[must_use]
pub fn icon_class(code: u8) -> IconClass {
    match code_class(code) {
        CodeClass::ClearSky | CodeClass::Unknown => IconClass::Clear,
        CodeClass::CloudCover => IconClass::PartlyCloudy,
        CodeClass::Fog => IconClass::Fog,
        CodeClass::Drizzle => IconClass::Rain,
        CodeClass::Snow => IconClass::Snow,
        CodeClass::Thunderstorm => IconClass::Storm,
    }
}

impl IconClass {
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            IconClass::Clear => "☀️",
            IconClass::PartlyCloudy => "⛅",
            IconClass::Fog => "🌫️",
            IconClass::Rain => "🌧️",
            IconClass::Snow => "❄️",
            IconClass::Storm => "⛈️",
        }
    }
}
