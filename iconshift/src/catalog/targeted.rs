//! Per-file replacements for icons only a handful of screens use.

/// A file and the replacements that apply to it.
pub struct TargetedFix {
    /// Path relative to the project root.
    pub file: &'static str,
    /// `(pattern, replacement)` pairs, unanchored.
    pub icons: &'static [(&'static str, &'static str)],
    /// Namespace typo fixes, applied after the icons.
    pub typos: &'static [(&'static str, &'static str)],
}

const MAP_PIN_TYPO: (&str, &str) = (r"\b(?:Lucide){2,}Icons\.mapPin\b", "LucideIcons.mapPin");

/// Targeted fixes, one entry per file.
pub const TARGETED_FIXES: &[TargetedFix] = &[
    TargetedFix {
        file: "lib/role/tenant/presentation/widget/detail_property/accessorise_widget.dart",
        icons: &[(r"Icons\.chair_alt", "LucideIcons.armchair")],
        typos: &[],
    },
    TargetedFix {
        file: "lib/role/tenant/presentation/widget/detail_property/amenities_widget.dart",
        icons: &[
            (r"Icons\.pool", "LucideIcons.waves"),
            (r"Icons\.ac_unit", "LucideIcons.wind"),
            (r"Icons\.park_outlined", "LucideIcons.trees"),
            (r"Icons\.kitchen", "LucideIcons.chefHat"),
        ],
        typos: &[],
    },
    TargetedFix {
        file: "lib/role/tenant/presentation/widget/property/search_and_sort_widget_in_property.dart",
        icons: &[(r"Icons\.tune", "LucideIcons.sliders")],
        typos: &[MAP_PIN_TYPO],
    },
    TargetedFix {
        file: "lib/role/tenant/presentation/pages/property/booking_property.dart",
        icons: &[(r"Icons\.arrow_drop_down", "LucideIcons.chevronDown")],
        typos: &[MAP_PIN_TYPO],
    },
];

/// Files the second cleanup pass was run against.
pub const CLEANUP_FILES: &[&str] = &[
    "lib/features/auth/presentation/pages/profile_pages.dart",
    "lib/features/auth/presentation/pages/trust_index_page.dart",
    "lib/features/chat/presentation/pages/chat_list_page.dart",
    "lib/features/chat/presentation/pages/chat_room_page_view.dart",
    "lib/role/lanlord/widget/my_property/property_components.dart",
    "lib/role/lanlord/widget/dashboard/property_being_proposed.dart",
    "lib/role/lanlord/widget/dashboard/rented_property.dart",
    "lib/role/lanlord/widget/dashboard/stats_widget.dart",
    "lib/role/lanlord/widget/dashboard/your_trust_index.dart",
    "lib/role/lanlord/presentation/pages/booking_detail.dart",
    "lib/role/tenant/presentation/pages/nav/rent.dart",
    "lib/role/tenant/presentation/pages/property/booking_property.dart",
    "lib/role/tenant/presentation/pages/rent/detail_active_rent.dart",
    "lib/role/tenant/presentation/pages/rent/midtrans_payment_page.dart",
    "lib/role/tenant/presentation/pages/rent/receipt_booking.dart",
    "lib/role/tenant/presentation/widget/detail_property/accessorise_widget.dart",
    "lib/role/tenant/presentation/widget/detail_property/amenities_widget.dart",
    "lib/role/tenant/presentation/widget/property/search_and_sort_widget_in_property.dart",
    "lib/role/tenant/presentation/widget/review/review_widget.dart",
    "lib/role/tenant/presentation/widget/midtrans/card_property.dart",
    "lib/role/tenant/presentation/widget/property/list_property.dart",
    "lib/role/tenant/presentation/widget/receipt_booking/nav_bar_receipt.dart",
];
