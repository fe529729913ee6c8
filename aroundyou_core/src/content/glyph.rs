use serde::Deserialize;
use strum::{Display, EnumIter};

/// Symbolic reference to an icon. The front end decides how each glyph is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Glyph {
    Eye,
    Wifi,
    MapPin,
    Phone,
    Navigation,
    WifiOff,
    Camera,
    Shield,
    Heart,
    Headphones,
    Play,
    Mail,
    Users,
    ArrowRight,
    Menu,
    Close,
}

/// Colour family used for icon badges and avatars
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Pink,
}
