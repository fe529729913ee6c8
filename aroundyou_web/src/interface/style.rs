use aroundyou_core::content::Accent;

pub const CONTAINER: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8";
pub const SECTION_TITLE: &str = "text-3xl sm:text-4xl font-bold text-slate-900 mb-6";
pub const TITLE_ACCENT: &str = "text-blue-600";
pub const DIVIDER: &str = "w-24 h-1 bg-gradient-to-r from-blue-600 to-blue-400 mx-auto rounded-full";
pub const NAV_LINK: &str = "text-slate-700 hover:text-slate-900 transition-colors";

// tailwind only picks up full class names, so no string building here
pub fn badge_class(accent: Accent) -> &'static str {
    match accent {
        Accent::Blue => "bg-blue-100 p-3 rounded-full flex-shrink-0",
        Accent::Green => "bg-green-100 p-3 rounded-full flex-shrink-0",
        Accent::Purple => "bg-purple-100 p-3 rounded-full flex-shrink-0",
        Accent::Pink => "bg-pink-100 p-3 rounded-full flex-shrink-0",
    }
}

pub fn icon_class(accent: Accent) -> &'static str {
    match accent {
        Accent::Blue => "text-blue-600",
        Accent::Green => "text-green-600",
        Accent::Purple => "text-purple-600",
        Accent::Pink => "text-pink-600",
    }
}

pub fn link_class(accent: Accent) -> &'static str {
    match accent {
        Accent::Blue => "text-blue-600 hover:text-blue-700 transition-colors",
        Accent::Green => "text-green-600 hover:text-green-700 transition-colors",
        Accent::Purple => "text-purple-600 hover:text-purple-700 transition-colors",
        Accent::Pink => "text-pink-600 hover:text-pink-700 transition-colors",
    }
}

pub fn avatar_class(accent: Accent) -> &'static str {
    match accent {
        Accent::Blue => "w-16 h-16 bg-gradient-to-br from-blue-500 to-blue-600 rounded-full flex items-center justify-center mb-4",
        Accent::Green => "w-16 h-16 bg-gradient-to-br from-green-500 to-green-600 rounded-full flex items-center justify-center mb-4",
        Accent::Purple => "w-16 h-16 bg-gradient-to-br from-purple-500 to-purple-600 rounded-full flex items-center justify-center mb-4",
        Accent::Pink => "w-16 h-16 bg-gradient-to-br from-pink-500 to-pink-600 rounded-full flex items-center justify-center mb-4",
    }
}
