//! Repairs for Lucide references produced by earlier, prefix-matching passes.

/// `LucideIcons.<wrong>` names and the Lucide icon they should be.
pub const LUCIDE_NAME_FIXES: &[(&str, &str)] = &[
    ("edit_outlined", "edit"),
    ("lock_outline", "lock"),
    ("bed_outlined", "bed"),
    ("bath_outlined", "bath"),
    ("calendar_outlined", "calendar"),
    ("calendarDays_available_outlined", "calendarDays"),
    ("calendarDays_busy_outlined", "calendarDays"),
    ("bookmark_added_outlined", "bookmark"),
    ("badgeCheck_outlined", "badgeCheck"),
    ("creditCards_outlined", "creditCard"),
    ("building_outlined", "building"),
    ("mapPin_outlined", "mapPin"),
    ("star_rounded", "star"),
];

/// Repeated namespace prefix, e.g. `LucideLucideIcons`.
pub const DUPLICATE_PREFIX: (&str, &str) = (r"\b(?:Lucide){2,}Icons\b", "LucideIcons");

/// Lucide icons are not const; these strip the `const` in front of them.
pub const CONST_REMOVALS: &[(&str, &str)] = &[
    (r"\bconst\s+Icon\s*\(\s*LucideIcons\.", "Icon(LucideIcons."),
    (
        r"\bconst\s+GradientIcon\s*\(\s*icon:\s*LucideIcons\.",
        "GradientIcon(icon: LucideIcons.",
    ),
];
